//! Resolution of physical lengths to integer grid units.

use crate::error::ConfigError;
use crate::types::RoutingConfig;

/// Routing parameters in grid units, ready to be handed to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingParams {
    /// Footprint of a 90° bend.
    pub bend90_radius: i64,
    /// Port distance of a 180° bend, if configured.
    pub bend180_radius: Option<i64>,
    /// Minimum straight after the start endpoint.
    pub start_straight: i64,
    /// Minimum straight before the end endpoint.
    pub end_straight: i64,
    /// Retry ceiling of the decision loop.
    pub max_tries: usize,
    /// Anchor the routing frame at the end endpoint.
    pub invert: bool,
    /// Gap between neighbouring bundle lanes.
    pub spacing: i64,
}

/// Converts a physical length in µm to grid units, rounding to the nearest unit.
pub fn um_to_dbu(length: f64, dbu: f64) -> i64 {
    (length / dbu).round() as i64
}

/// Converts every length of a validated configuration to grid units.
///
/// Fails if a bend radius rounds down to zero grid units.
pub fn resolve_routing(config: &RoutingConfig) -> Result<RoutingParams, ConfigError> {
    let dbu = config.layout.dbu;
    let routing = &config.routing;

    let bend90_radius = um_to_dbu(routing.bend90_radius, dbu);
    if bend90_radius <= 0 {
        return Err(ConfigError::invalid(
            "routing.bend90_radius",
            format!("{} is smaller than one grid unit ({dbu})", routing.bend90_radius),
        ));
    }
    let bend180_radius = match routing.bend180_radius {
        Some(r) => {
            let resolved = um_to_dbu(r, dbu);
            if resolved <= 0 {
                return Err(ConfigError::invalid(
                    "routing.bend180_radius",
                    format!("{r} is smaller than one grid unit ({dbu})"),
                ));
            }
            Some(resolved)
        }
        None => None,
    };

    Ok(RoutingParams {
        bend90_radius,
        bend180_radius,
        start_straight: um_to_dbu(routing.start_straight, dbu),
        end_straight: um_to_dbu(routing.end_straight, dbu),
        max_tries: routing.max_tries,
        invert: routing.invert,
        spacing: um_to_dbu(config.bundle.spacing, dbu),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn um_to_dbu_rounds_to_nearest() {
        assert_eq!(um_to_dbu(10.0, 0.001), 10_000);
        assert_eq!(um_to_dbu(0.0014, 0.001), 1);
        assert_eq!(um_to_dbu(0.0016, 0.001), 2);
        assert_eq!(um_to_dbu(0.0, 0.001), 0);
    }

    #[test]
    fn resolve_full_config() {
        let config = load_config_from_str(
            r#"
[layout]
dbu = 0.001

[routing]
bend90_radius = 10.0
bend180_radius = 5.0
start_straight = 1.5
end_straight = 0.25
max_tries = 25

[bundle]
spacing = 0.8
"#,
        )
        .unwrap();
        let params = resolve_routing(&config).unwrap();
        assert_eq!(
            params,
            RoutingParams {
                bend90_radius: 10_000,
                bend180_radius: Some(5_000),
                start_straight: 1_500,
                end_straight: 250,
                max_tries: 25,
                invert: false,
                spacing: 800,
            }
        );
    }

    #[test]
    fn sub_grid_bend_radius_errors() {
        let config = load_config_from_str(
            r#"
[layout]
dbu = 1.0

[routing]
bend90_radius = 0.2
"#,
        )
        .unwrap();
        let err = resolve_routing(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { key: "routing.bend90_radius", .. }
        ));
    }
}
