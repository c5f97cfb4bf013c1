//! Errors raised while reading `mroute.toml`.

/// Why a configuration was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not valid TOML or does not match the expected tables.
    #[error("cannot parse routing configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid `{key}`: {reason}")]
    ValidationError {
        /// Dotted path of the offending key, e.g. `routing.bend90_radius`.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            key,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_key() {
        let err = ConfigError::invalid("layout.dbu", "must be positive, got 0");
        assert_eq!(err.to_string(), "invalid `layout.dbu`: must be positive, got 0");
    }

    #[test]
    fn parse_error_wraps_toml() {
        let toml_err = toml::from_str::<toml::Table>("a = ").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().starts_with("cannot parse routing configuration: "));
    }
}
