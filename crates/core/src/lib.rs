//! `ddd-types-core` — building blocks for tagging domain code with DDD roles.
//!
//! The traits here (`Identifier`, `Identifiable`, `AggregateRoot`, `Entity`,
//! `ValueObject`) carry no behavior; they mark structure. [`Association`] is
//! the one concrete type: a reference to another aggregate held by
//! identifier, so that aggregates never hold each other directly.

pub mod aggregate;
pub mod association;
pub mod entity;
pub mod error;
pub mod id;
pub mod identifier;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use association::Association;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use identifier::{Identifiable, Identifier};
pub use value_object::ValueObject;
