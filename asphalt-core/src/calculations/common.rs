//! Common utility functions for price calculations.
//!
//! This module provides the rounding and formatting rules shared by every
//! estimate: prices are whole dollars, rounded to nearest with halves going
//! away from zero, and displayed with comma thousands separators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to a whole number using half-away-from-zero rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use asphalt_core::calculations::common::round_to_whole;
///
/// assert_eq!(round_to_whole(dec!(33.333)), dec!(33));
/// assert_eq!(round_to_whole(dec!(49.5)), dec!(50));
/// assert_eq!(round_to_whole(dec!(-49.5)), dec!(-50)); // Away from zero
/// ```
pub fn round_to_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Inserts a comma between every group of three digits.
///
/// # Examples
///
/// ```
/// use asphalt_core::calculations::common::group_thousands;
///
/// assert_eq!(group_thousands(999), "999");
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Formats whole dollars as a price label, e.g. `$12,500`.
pub fn format_currency(dollars: u64) -> String {
    format!("${}", group_thousands(dollars))
}
