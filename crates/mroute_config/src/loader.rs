//! Configuration parsing and validation.

use crate::error::ConfigError;
use crate::types::RoutingConfig;

/// Parses and validates an `mroute.toml` configuration from a string.
///
/// Reading the file is left to the caller.
pub fn load_config_from_str(content: &str) -> Result<RoutingConfig, ConfigError> {
    let config: RoutingConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks value ranges that the type system cannot express.
fn validate_config(config: &RoutingConfig) -> Result<(), ConfigError> {
    let routing = &config.routing;
    positive("layout.dbu", config.layout.dbu)?;
    positive("routing.bend90_radius", routing.bend90_radius)?;
    if let Some(r) = routing.bend180_radius {
        positive("routing.bend180_radius", r)?;
    }
    non_negative("routing.start_straight", routing.start_straight)?;
    non_negative("routing.end_straight", routing.end_straight)?;
    non_negative("bundle.spacing", config.bundle.spacing)?;
    if routing.max_tries == 0 {
        return Err(ConfigError::invalid("routing.max_tries", "must be at least 1"));
    }
    Ok(())
}

fn positive(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, format!("must be positive, got {value}")))
    }
}

fn non_negative(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, format!("must not be negative, got {value}")))
    }
}
