use std::fmt;

use serde::{Deserialize, Serialize};

/// Whole percentage, always within 0..=100.
///
/// Out-of-range inputs are clamped rather than rejected, both when built in
/// code and when read from a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const MAX: Percent = Percent(100);

    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<i64> for Percent {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Percent::new(150).get(), 100);
        assert_eq!(Percent::new(-5).get(), 0);
        assert_eq!(Percent::new(42).get(), 42);
    }

    #[test]
    fn clamps_when_deserialized() {
        let parsed: Percent = serde_json::from_str("250").unwrap();
        assert_eq!(parsed, Percent::MAX);

        let parsed: Percent = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed.get(), 0);
    }
}
