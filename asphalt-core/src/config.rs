//! Runtime configuration for the estimator and navigation menu.
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it overrides:
//!
//! ```
//! use rust_decimal_macros::dec;
//! use asphalt_core::EstimatorConfig;
//!
//! let config = EstimatorConfig::from_toml_str(
//!     r#"
//!     [pricing]
//!     high_rate = "1.75"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.pricing.low_rate, dec!(1.00));
//! assert_eq!(config.pricing.high_rate, dec!(1.75));
//! assert_eq!(config.widget.debounce_ms, 500);
//! ```

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Field;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A price per square yard must not be negative.
    #[error("{name} must not be negative, got {value}")]
    NegativeRate { name: &'static str, value: Decimal },

    /// The high rate must be at least the low rate.
    #[error("high_rate {high} is below low_rate {low}")]
    RateOrder { low: Decimal, high: Decimal },

    #[error("sq_ft_per_sq_yd must be positive, got {0}")]
    InvalidDivisor(Decimal),

    #[error("debounce_ms must be greater than zero")]
    InvalidDebounce,
}

/// Billing parameters: dollars per square yard at each end of the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price per square yard used for the low end of the estimate.
    pub low_rate: Decimal,

    /// Price per square yard used for the high end of the estimate.
    pub high_rate: Decimal,

    /// Square feet in one square yard. Inputs are in feet; billing is per yard.
    pub sq_ft_per_sq_yd: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            low_rate: Decimal::new(100, 2),
            high_rate: Decimal::new(150, 2),
            sq_ft_per_sq_yd: Decimal::from(9),
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("low_rate", self.low_rate), ("high_rate", self.high_rate)] {
            if value < Decimal::ZERO {
                return Err(ConfigError::NegativeRate { name, value });
            }
        }
        if self.high_rate < self.low_rate {
            return Err(ConfigError::RateOrder {
                low: self.low_rate,
                high: self.high_rate,
            });
        }
        if self.sq_ft_per_sq_yd <= Decimal::ZERO {
            return Err(ConfigError::InvalidDivisor(self.sq_ft_per_sq_yd));
        }
        Ok(())
    }
}

/// Placement and behavior of the estimate form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Id of the page section that hosts the form.
    pub container_id: String,

    /// Selector, relative to the section, of the element whose content is
    /// replaced by the form.
    pub content_selector: String,

    /// Quiet period after the last keystroke before recalculating.
    pub debounce_ms: u32,

    /// Hide a previously shown estimate when a later attempt fails.
    /// Off by default: a failed attempt leaves the result panel as it was.
    pub hide_result_on_error: bool,

    pub width_error: String,
    pub length_error: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            container_id: "estimate".to_string(),
            content_selector: ".ct-shortcode".to_string(),
            debounce_ms: 500,
            hide_result_on_error: false,
            width_error: "Please enter a valid width".to_string(),
            length_error: "Please enter a valid length".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }

    /// Inline message shown beside a rejected field.
    pub fn error_message(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Width => &self.width_error,
            Field::Length => &self.length_error,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::InvalidDebounce);
        }
        Ok(())
    }
}

/// Selectors and class names used by the mobile navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_selector: String,
    pub close_selector: String,
    pub menu_selector: String,
    /// Class added to the menu while it is open.
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".nav-toggle".to_string(),
            close_selector: ".nav-close".to_string(),
            menu_selector: ".nav-menu".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub pricing: PricingConfig,
    pub widget: WidgetConfig,
    pub nav: NavConfig,

    /// Log filter directive, e.g. `"info"` or `"asphalt_web=debug"`.
    pub log_level: String,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            widget: WidgetConfig::default(),
            nav: NavConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl EstimatorConfig {
    /// Parses and validates a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pricing.validate()?;
        self.widget.validate()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = EstimatorConfig::from_toml_str("").unwrap();

        assert_eq!(config, EstimatorConfig::default());
    }

    #[test]
    fn defaults_match_published_pricing() {
        let pricing = PricingConfig::default();

        assert_eq!(pricing.low_rate, dec!(1.00));
        assert_eq!(pricing.high_rate, dec!(1.50));
        assert_eq!(pricing.sq_ft_per_sq_yd, dec!(9));
    }

    #[test]
    fn overrides_are_applied_per_section() {
        let config = EstimatorConfig::from_toml_str(
            r#"
            log_level = "debug"

            [widget]
            debounce_ms = 250
            hide_result_on_error = true

            [nav]
            active_class = "is-open"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.widget.debounce(), Duration::from_millis(250));
        assert!(config.widget.hide_result_on_error);
        assert_eq!(config.widget.container_id, "estimate");
        assert_eq!(config.nav.active_class, "is-open");
        assert_eq!(config.nav.menu_selector, ".nav-menu");
    }

    #[test]
    fn rejects_high_rate_below_low_rate() {
        let result = EstimatorConfig::from_toml_str(
            r#"
            [pricing]
            low_rate = "2.00"
            high_rate = "1.50"
            "#,
        );

        assert!(matches!(result, Err(ConfigError::RateOrder { .. })));
    }

    #[test]
    fn rejects_negative_rate() {
        let pricing = PricingConfig {
            low_rate: dec!(-1),
            ..PricingConfig::default()
        };

        assert!(matches!(
            pricing.validate(),
            Err(ConfigError::NegativeRate { name: "low_rate", .. })
        ));
    }

    #[test]
    fn rejects_zero_divisor() {
        let pricing = PricingConfig {
            sq_ft_per_sq_yd: dec!(0),
            ..PricingConfig::default()
        };

        assert!(matches!(
            pricing.validate(),
            Err(ConfigError::InvalidDivisor(_))
        ));
    }

    #[test]
    fn rejects_zero_debounce() {
        let result = EstimatorConfig::from_toml_str("[widget]\ndebounce_ms = 0\n");

        assert!(matches!(result, Err(ConfigError::InvalidDebounce)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = EstimatorConfig::from_toml_str("[pricing\nlow_rate = 1");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn error_message_is_scoped_to_field() {
        let widget = WidgetConfig::default();

        assert_eq!(widget.error_message(Field::Width), "Please enter a valid width");
        assert_eq!(widget.error_message(Field::Length), "Please enter a valid length");
    }
}
