//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. `Cents`
/// is one: two prices of 1999 cents are the same price, whichever product
/// carries them.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
