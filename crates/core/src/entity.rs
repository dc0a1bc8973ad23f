//! Entity trait: identity + continuity across state changes.

use crate::aggregate::AggregateRoot;
use crate::identifier::Identifiable;

/// Entity living inside the boundary of an aggregate.
pub trait Entity: Identifiable {
    /// The aggregate root owning this entity.
    type Aggregate: AggregateRoot;
}
