use serde::{Deserialize, Serialize};

use crate::calculations::common::format_currency;

/// A low/high price estimate in whole dollars.
///
/// Only [`Estimator`](crate::calculations::Estimator) builds these, which
/// keeps `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    low: u64,
    high: u64,
}

impl PriceRange {
    /// Returns `None` when `low` exceeds `high`.
    pub fn new(
        low: u64,
        high: u64,
    ) -> Option<Self> {
        (low <= high).then_some(Self { low, high })
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    /// Low bound formatted for display, e.g. `$1,250`.
    pub fn low_display(&self) -> String {
        format_currency(self.low)
    }

    /// High bound formatted for display, e.g. `$1,875`.
    pub fn high_display(&self) -> String {
        format_currency(self.high)
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} and {}", self.low_display(), self.high_display())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_rejects_inverted_bounds() {
        assert_eq!(PriceRange::new(50, 33), None);
    }

    #[test]
    fn new_accepts_equal_bounds() {
        let range = PriceRange::new(0, 0).unwrap();

        assert_eq!(range.low(), 0);
        assert_eq!(range.high(), 0);
    }

    #[test]
    fn display_uses_currency_format() {
        let range = PriceRange::new(1250, 1875).unwrap();

        assert_eq!(range.to_string(), "$1,250 and $1,875");
    }
}
