//! Configuration types deserialized from `mroute.toml`.

use serde::Deserialize;

/// Default retry ceiling of the 90° router's decision loop.
pub const DEFAULT_MAX_TRIES: usize = 20;

/// The top-level routing configuration parsed from `mroute.toml`.
#[derive(Debug, Deserialize)]
pub struct RoutingConfig {
    /// Grid definition.
    pub layout: LayoutConfig,
    /// Single-path routing settings.
    pub routing: RoutingSection,
    /// Bundle settings.
    #[serde(default)]
    pub bundle: BundleSection,
}

/// Grid definition of the target layout.
#[derive(Debug, Deserialize)]
pub struct LayoutConfig {
    /// Size of one grid unit in µm (e.g. `0.001`).
    pub dbu: f64,
}

/// Settings for single-path routing. All lengths in µm.
#[derive(Debug, Deserialize)]
pub struct RoutingSection {
    /// Radius (symmetric footprint) of a 90° bend.
    pub bend90_radius: f64,
    /// Distance between the two ports of a 180° bend, if one is available.
    #[serde(default)]
    pub bend180_radius: Option<f64>,
    /// Minimum straight after the start endpoint.
    #[serde(default)]
    pub start_straight: f64,
    /// Minimum straight before the end endpoint.
    #[serde(default)]
    pub end_straight: f64,
    /// Maximum number of bend insertions before giving up.
    #[serde(default = "default_max_tries")]
    pub max_tries: usize,
    /// Anchor the routing frame at the end endpoint instead of the start.
    #[serde(default)]
    pub invert: bool,
}

fn default_max_tries() -> usize {
    DEFAULT_MAX_TRIES
}

/// Settings for bundle routing. All lengths in µm.
#[derive(Debug, Default, Deserialize)]
pub struct BundleSection {
    /// Gap between neighbouring lanes.
    #[serde(default)]
    pub spacing: f64,
}
