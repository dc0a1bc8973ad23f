//! Identifier and identifiable capabilities.

/// Marker for types that can serve as the identity of a domain object.
///
/// There are no required operations. Equality and hashing, when needed, come
/// from the implementing type itself.
pub trait Identifier {}

/// A domain object exposing its identifier.
pub trait Identifiable {
    /// Identifier type of this object.
    type Id: Identifier;

    /// Returns the identifier.
    fn id(&self) -> &Self::Id;
}

macro_rules! impl_identifier {
    ($($t:ty),* $(,)?) => {
        $(impl Identifier for $t {})*
    };
}

impl_identifier!(
    uuid::Uuid,
    String,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);

impl Identifier for &'static str {}

impl<I: Identifier + ?Sized> Identifier for Box<I> {}

impl<I: Identifier + ?Sized> Identifier for std::sync::Arc<I> {}
