//! `shoegrid-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod cents;
pub mod entity;
pub mod error;
pub mod slug;
pub mod value_object;

pub use cents::Cents;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use slug::Slug;
pub use value_object::ValueObject;
