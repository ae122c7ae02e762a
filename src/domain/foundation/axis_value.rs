//! AxisValue value object (0-100 slider scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A style-axis reading between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct AxisValue(u8);

impl AxisValue {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Creates a value, clamping anything above 100.
    ///
    /// Usable in `const` context so the catalog can hold defaults directly.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Creates a value from untrusted input, clamping to `[0, 100]`.
    pub fn clamped(value: i64) -> Self {
        // Lossless after the clamp.
        Self(value.clamp(0, 100) as u8)
    }

    /// Creates a value, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("axis_value", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the raw reading.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for AxisValue {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<AxisValue> for u8 {
    fn from(value: AxisValue) -> Self {
        value.0
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(AxisValue::new(0).value(), 0);
        assert_eq!(AxisValue::new(50).value(), 50);
        assert_eq!(AxisValue::new(100).value(), 100);
    }

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(AxisValue::new(101).value(), 100);
        assert_eq!(AxisValue::new(255).value(), 100);
    }

    #[test]
    fn clamped_handles_negative_input() {
        assert_eq!(AxisValue::clamped(-20), AxisValue::MIN);
        assert_eq!(AxisValue::clamped(140), AxisValue::MAX);
        assert_eq!(AxisValue::clamped(42).value(), 42);
        assert_eq!(AxisValue::clamped(3_000_000_000), AxisValue::MAX);
        assert_eq!(AxisValue::clamped(i64::MIN), AxisValue::MIN);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        match AxisValue::try_new(101) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "axis_value");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(AxisValue::try_new(-1).is_err());
        assert!(AxisValue::try_new(100).is_ok());
    }

    #[test]
    fn displays_as_fraction_of_100() {
        assert_eq!(format!("{}", AxisValue::new(15)), "15/100");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&AxisValue::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<AxisValue>("70").unwrap().value(), 70);
        assert!(serde_json::from_str::<AxisValue>("101").is_err());
        assert!(serde_json::from_str::<AxisValue>("-5").is_err());
    }

    proptest! {
        #[test]
        fn clamped_always_lands_in_range(raw in any::<i64>()) {
            let v = AxisValue::clamped(raw).value();
            prop_assert!(v <= 100);
            if (0..=100).contains(&raw) {
                prop_assert_eq!(i64::from(v), raw);
            }
        }
    }
}
