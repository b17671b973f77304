use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest positive value a [`Decimal`] can hold (1e-28).
const SMALLEST_FEET: Decimal = Decimal::from_parts(1, 0, 0, false, 28);

/// Reasons a raw field value is not a usable dimension.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DimensionError {
    /// Nothing was entered.
    #[error("no value entered")]
    Empty,

    /// The text is not a finite number.
    #[error("'{0}' is not a number")]
    Unparseable(String),

    /// The value parsed but is zero or negative.
    #[error("dimension must be greater than zero, got {0}")]
    NotPositive(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
enum Feet {
    Exact(Decimal),
    /// Positive and finite, but above [`Decimal::MAX`].
    BeyondRange,
}

/// A validated length measurement in feet. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dimension(Feet);

impl Dimension {
    /// Wraps a value in feet, rejecting zero and negative values.
    pub fn new(feet: Decimal) -> Result<Self, DimensionError> {
        if feet <= Decimal::ZERO {
            return Err(DimensionError::NotPositive(feet.to_string()));
        }
        Ok(Self(Feet::Exact(feet)))
    }

    /// Parses a raw input value as typed by the user.
    ///
    /// Surrounding whitespace is ignored. Plain (`"12.5"`) and scientific
    /// (`"1.25e1"`) notation are accepted, since number inputs may report
    /// either. Any finite number above zero is valid:
    ///
    /// * values finer than 1e-28 are raised to 1e-28;
    /// * values above [`Decimal::MAX`] are kept as out of range, so the
    ///   estimate for them fails instead of the input.
    pub fn parse(raw: &str) -> Result<Self, DimensionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DimensionError::Empty);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| DimensionError::Unparseable(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(DimensionError::Unparseable(trimmed.to_string()));
        }
        if value <= 0.0 {
            return Err(DimensionError::NotPositive(trimmed.to_string()));
        }

        let exact = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
            .or_else(|| Decimal::from_f64(value))
            .filter(|feet| *feet > Decimal::ZERO);

        let feet = match exact {
            Some(feet) => Feet::Exact(feet),
            None if value < 1.0 => Feet::Exact(SMALLEST_FEET),
            None => Feet::BeyondRange,
        };
        Ok(Self(feet))
    }

    /// The value in feet, or `None` when it is too large for a [`Decimal`].
    pub fn feet(&self) -> Option<Decimal> {
        match self.0 {
            Feet::Exact(feet) => Some(feet),
            Feet::BeyondRange => None,
        }
    }
}

impl FromStr for Dimension {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self.0 {
            Feet::Exact(feet) => write!(f, "{feet} ft"),
            Feet::BeyondRange => write!(f, "over {} ft", Decimal::MAX),
        }
    }
}
