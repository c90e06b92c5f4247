//! Money amounts in minor currency units.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount in the smallest currency unit (e.g. cents).
///
/// Integer cents keep prices exact; conversion to a major-unit string only
/// happens at display time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub fn get(self) -> u64 {
        self.0
    }

    /// Whole major units (dollars).
    pub fn major(self) -> u64 {
        self.0 / 100
    }

    /// Remaining minor units (0..=99).
    pub fn minor(self) -> u64 {
        self.0 % 100
    }
}

impl ValueObject for Cents {}

impl From<u64> for Cents {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Cents> for u64 {
    fn from(value: Cents) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_major_and_minor_units() {
        let c = Cents(12_345);
        assert_eq!(c.major(), 123);
        assert_eq!(c.minor(), 45);
        assert_eq!(Cents(0).major(), 0);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&Cents(1999)).unwrap();
        assert_eq!(json, "1999");
    }
}
