//! Price estimation from paving dimensions.
//!
//! # Formula
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Area in square feet: width × length |
//! | 2    | Area in square yards: step 1 ÷ 9 |
//! | 3    | Low price: step 2 × low rate ($1.00), rounded to whole dollars |
//! | 4    | High price: step 2 × high rate ($1.50), rounded to whole dollars |
//!
//! Rounding is to the nearest dollar with halves going away from zero.
//!
//! # Example
//!
//! ```
//! use asphalt_core::calculations::Estimator;
//! use asphalt_core::{Dimension, PricingConfig};
//!
//! let pricing = PricingConfig::default();
//! let estimator = Estimator::new(&pricing);
//!
//! let width: Dimension = "30".parse().unwrap();
//! let length: Dimension = "10".parse().unwrap();
//! let range = estimator.estimate(width, length).unwrap();
//!
//! assert_eq!(range.low(), 33);
//! assert_eq!(range.high(), 50);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use crate::calculations::common::round_to_whole;
use crate::{Dimension, PriceRange, PricingConfig};

/// Errors that can occur while computing an estimate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// The dimensions are valid but the price cannot be represented.
    #[error("estimate for {width} by {length} is out of range")]
    Overflow { width: Dimension, length: Dimension },

    /// The configured rates put the low price above the high price.
    #[error("low price {low} exceeds high price {high}")]
    InvertedRange { low: u64, high: u64 },
}

/// Calculator for paving price ranges.
#[derive(Debug, Clone)]
pub struct Estimator<'a> {
    pricing: &'a PricingConfig,
}

impl<'a> Estimator<'a> {
    /// Creates an estimator using the given billing parameters.
    ///
    /// The parameters are expected to have passed
    /// [`PricingConfig::validate`]; with a high rate below the low rate
    /// estimates fail with [`EstimateError::InvertedRange`].
    pub fn new(pricing: &'a PricingConfig) -> Self {
        Self { pricing }
    }

    /// Computes the low/high price range for a width and length in feet.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Overflow`] when an intermediate value or a
    /// rounded price does not fit the numeric range, and
    /// [`EstimateError::InvertedRange`] when the rates are misordered.
    pub fn estimate(
        &self,
        width: Dimension,
        length: Dimension,
    ) -> Result<PriceRange, EstimateError> {
        let overflow = || EstimateError::Overflow { width, length };

        let sq_ft = self.square_feet(width, length).ok_or_else(overflow)?;
        let low = self.price(sq_ft, self.pricing.low_rate).ok_or_else(overflow)?;
        let high = self.price(sq_ft, self.pricing.high_rate).ok_or_else(overflow)?;

        PriceRange::new(low, high).ok_or(EstimateError::InvertedRange { low, high })
    }

    /// Area in square yards, or `None` when it does not fit a [`Decimal`].
    pub fn square_yards(
        &self,
        width: Dimension,
        length: Dimension,
    ) -> Option<Decimal> {
        self.square_feet(width, length)?
            .checked_div(self.pricing.sq_ft_per_sq_yd)
    }

    fn square_feet(
        &self,
        width: Dimension,
        length: Dimension,
    ) -> Option<Decimal> {
        width.feet()?.checked_mul(length.feet()?)
    }

    /// Whole-dollar price of `sq_ft` at `rate` dollars per square yard.
    ///
    /// The rate is applied before dividing so the only inexact step is the
    /// final division; a true half-dollar stays exact and rounds up.
    fn price(
        &self,
        sq_ft: Decimal,
        rate: Decimal,
    ) -> Option<u64> {
        let dollars = sq_ft
            .checked_mul(rate)?
            .checked_div(self.pricing.sq_ft_per_sq_yd)?;
        round_to_whole(dollars).to_u64()
    }
}
