//! Configuration shipped with the wasm module.

use asphalt_core::{ConfigError, EstimatorConfig};

/// Contents of `estimator.toml`, embedded at build time.
pub const EMBEDDED_CONFIG: &str = include_str!("../estimator.toml");

/// Parses and validates the embedded configuration.
pub fn embedded_config() -> Result<EstimatorConfig, ConfigError> {
    EstimatorConfig::from_toml_str(EMBEDDED_CONFIG)
}
