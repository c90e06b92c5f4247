//! Shoe catalog domain module.
//!
//! This crate holds the product records and the rule that decides how each one
//! is presented, implemented purely as deterministic domain logic (no IO, no
//! rendering).

pub mod catalog;
pub mod clock;
pub mod shoe;
pub mod variant;

pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use shoe::Shoe;
pub use variant::{NEW_RELEASE_WINDOW_DAYS, Variant, classify, is_new_shoe};
