//! Self-report scale value object (1-10).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A self-reported scalar between 1 and 10 inclusive.
///
/// Used for energy, motivation, confidence, stress and all progress
/// metrics gathered through rating widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleValue(u8);

impl ScaleValue {
    /// Lowest rating.
    pub const MIN: Self = Self(1);

    /// Highest rating.
    pub const MAX: Self = Self(10);

    /// Creates a new ScaleValue, clamping into the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 10))
    }

    /// Creates a ScaleValue, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::out_of_range("scale", 1, 10, value as i32));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64, for averaging.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for ScaleValue {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}
