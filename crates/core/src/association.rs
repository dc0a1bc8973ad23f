//! Associations: references to other aggregates held by identifier.

use core::fmt;
use core::marker::PhantomData;

use crate::aggregate::AggregateRoot;
use crate::error::{DomainError, DomainResult};
use crate::identifier::Identifiable;

/// An immutable reference to an aggregate of type `T`, held by its identifier.
///
/// Aggregates must not hold other aggregates directly. A field of type
/// `Association<Customer>` records *which* customer an order belongs to
/// without coupling the order to the customer's state; resolving the
/// customer is up to the caller.
///
/// The identifier is captured at construction and never changes afterwards.
/// There are no mutating methods.
///
/// `Association` deliberately implements neither `PartialEq` nor `Hash`.
/// Callers that need to know whether two associations point at the same
/// aggregate compare their [`id`](Self::id)s, using the identifier's own
/// equality.
///
/// `T` is only a type-level tag: the association is `Send`/`Sync` whenever
/// the identifier is, regardless of `T`.
pub struct Association<T: AggregateRoot> {
    id: T::Id,
    target: PhantomData<fn() -> T>,
}

impl<T: AggregateRoot> Association<T> {
    /// Creates an association pointing to the identifier of `aggregate`.
    ///
    /// The identifier is copied out once; later changes to the aggregate do
    /// not affect the association.
    pub fn for_aggregate(aggregate: &T) -> Self
    where
        T::Id: Clone,
    {
        tracing::trace!(
            aggregate = core::any::type_name::<T>(),
            "association created from aggregate"
        );
        Self::for_id(aggregate.id().clone())
    }

    /// Creates an association pointing to `id`.
    pub fn for_id(id: T::Id) -> Self {
        Self {
            id,
            target: PhantomData,
        }
    }

    /// Like [`for_aggregate`](Self::for_aggregate), for callers that may not
    /// have an aggregate at hand.
    ///
    /// Fails with [`DomainError::NullArgument`] when `aggregate` is `None`.
    pub fn try_for_aggregate(aggregate: Option<&T>) -> DomainResult<Self>
    where
        T::Id: Clone,
    {
        match aggregate {
            Some(aggregate) => Ok(Self::for_aggregate(aggregate)),
            None => Err(reject::<T>("aggregate")),
        }
    }

    /// Like [`for_id`](Self::for_id), for callers that may not have an
    /// identifier at hand.
    ///
    /// Fails with [`DomainError::NullArgument`] when `id` is `None`.
    pub fn try_for_id(id: Option<T::Id>) -> DomainResult<Self> {
        match id {
            Some(id) => Ok(Self::for_id(id)),
            None => Err(reject::<T>("identifier")),
        }
    }

    /// Returns the identifier of the referenced aggregate.
    pub fn id(&self) -> &T::Id {
        &self.id
    }

    /// Consumes the association, returning the identifier.
    pub fn into_id(self) -> T::Id {
        self.id
    }

    /// Whether `aggregate` currently carries the identifier this association
    /// points to.
    pub fn refers_to(&self, aggregate: &T) -> bool
    where
        T::Id: PartialEq,
    {
        self.id == *aggregate.id()
    }
}

fn reject<T>(argument: &'static str) -> DomainError {
    tracing::debug!(
        argument,
        aggregate = core::any::type_name::<T>(),
        "rejected association without target"
    );
    DomainError::null_argument(argument)
}

impl<T: AggregateRoot> Identifiable for Association<T> {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl<T: AggregateRoot> Clone for Association<T>
where
    T::Id: Clone,
{
    fn clone(&self) -> Self {
        Self::for_id(self.id.clone())
    }
}

impl<T: AggregateRoot> Copy for Association<T> where T::Id: Copy {}

impl<T: AggregateRoot> fmt::Debug for Association<T>
where
    T::Id: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Association")
            .field("aggregate", &core::any::type_name::<T>())
            .field("id", &self.id)
            .finish()
    }
}
