//! Parsing and validation of `mroute.toml` routing configuration.
//!
//! Lengths in the configuration are physical (µm). [`resolve_routing`] turns a
//! validated [`RoutingConfig`] into [`RoutingParams`] in integer grid units,
//! which is the only form the router accepts.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::load_config_from_str;
pub use resolve::{resolve_routing, um_to_dbu, RoutingParams};
pub use types::*;
