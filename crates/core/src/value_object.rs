//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity. They are immutable and two instances with
/// the same attributes are interchangeable, so the trait requires `Clone` and
/// `PartialEq`. Contrast with [`Identifiable`](crate::Identifiable) types,
/// which stay the same object while their attributes change.
///
/// ```
/// use ddd_types_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: &'static str,
/// }
///
/// impl ValueObject for Money {}
///
/// let a = Money { amount: 100, currency: "USD" };
/// let b = Money { amount: 100, currency: "USD" };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
