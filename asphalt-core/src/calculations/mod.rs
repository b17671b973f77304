//! Price calculation modules for paving estimates.
//!
//! This module provides the arithmetic behind the estimate widget: shared
//! rounding and currency formatting, and the square-yard price range.

pub mod common;
pub mod estimate;

pub use estimate::{EstimateError, Estimator};
