//! Aggregate root trait.

use crate::identifier::Identifiable;

/// Aggregate root marker.
///
/// An aggregate root is the entry point of a consistency boundary: everything
/// inside the boundary is reached through it, and everything outside refers to
/// it only by identifier (see [`Association`](crate::Association)).
///
/// The identifier comes from [`Identifiable`]; there are no further required
/// operations, so modules are free to model state transitions however they
/// like.
pub trait AggregateRoot: Identifiable {}
