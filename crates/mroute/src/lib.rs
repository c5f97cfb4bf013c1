//! Manhattan interconnect routing for integrated-photonics and IC layouts.
//!
//! Given oriented endpoints on an integer grid, this crate computes
//! axis-aligned polylines between them that respect a bend footprint and
//! minimum straight lengths. Paths are returned as corner points; turning
//! them into geometry is left to the caller.
//!
//! # Operations
//!
//! - [`route_manhattan`] / [`ManhattanRoute`]: one path with 90° bends
//! - [`route_manhattan_180`]: one path that can use a dedicated 180° element
//! - [`route_ports_to_bundle`]: many endpoints onto a common trunk
//! - [`route_ports_side`]: nested side stubs for a group of endpoints
//! - [`backbone2bundle`]: one backbone polyline into parallel lanes
//!
//! # Usage
//!
//! ```ignore
//! use mroute::{route_manhattan, Trans};
//! use mroute_diagnostics::DiagnosticSink;
//!
//! let sink = DiagnosticSink::new();
//! let path = route_manhattan(
//!     Trans::new(0, false, 0, 0),
//!     Trans::new(2, false, 1000, 0),
//!     10,
//!     0,
//!     0,
//!     &sink,
//! )?;
//! assert_eq!(path.len(), 2);
//! ```
//!
//! Routing never prints. Warnings (for example a route squeezed tighter than
//! its bends allow) go to the [`DiagnosticSink`](mroute_diagnostics::DiagnosticSink)
//! passed in by the caller.

#![warn(missing_docs)]

pub mod bundle;
pub mod error;
pub mod manhattan;
pub mod manhattan_180;
pub mod points;
pub mod port;
pub mod router;

pub use bundle::{
    backbone2bundle, route_ports_side, route_ports_to_bundle, route_ports_to_bundle_with,
    BundleParams, SideDir,
};
pub use error::{RouteError, RouteResult};
pub use manhattan::{route_manhattan, ManhattanPathFn, ManhattanRoute};
pub use manhattan_180::{route_manhattan_180, Manhattan180PathFn};
pub use mroute_common::{BBox, Point, PortId, Trans, Vector};
pub use points::{clean_points, Direction};
pub use port::BundlePort;
pub use router::ManhattanRouter;

use mroute_config::RoutingParams;
use mroute_diagnostics::DiagnosticSink;

/// Routes one path with every setting taken from resolved configuration.
///
/// Uses the 180° router when `bend180_radius` is configured, the 90° router
/// otherwise.
pub fn route_with_params(
    start: Trans,
    end: Trans,
    params: &RoutingParams,
    sink: &DiagnosticSink,
) -> RouteResult<Vec<Point>> {
    match params.bend180_radius {
        Some(bend180_radius) => route_manhattan_180(
            start,
            end,
            params.bend90_radius,
            bend180_radius,
            params.start_straight,
            params.end_straight,
            sink,
        ),
        None => ManhattanRoute::from_params(params).route(start, end, sink),
    }
}
