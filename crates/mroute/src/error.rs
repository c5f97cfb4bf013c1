//! Error types returned by the routing operations.

use mroute_common::{Point, Trans, Vector};

/// Errors that can occur while computing a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A parameter is outside its valid range (non-positive radius, negative
    /// straight, empty input, mismatched list lengths, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Both endpoints share position and orientation; no path is defined.
    #[error("identical endpoints at {0}")]
    IdenticalEndpoints(Point),

    /// The geometry is valid but cannot be routed with the available elements.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// The router was asked to finish while the frames were not facing each
    /// other on a common axis.
    #[error("route not aligned: t1 = {t1}, t2 = {t2}, relative rotation {ta}, offset {offset}")]
    RouteNotAligned {
        /// Advancing source frame at the time of the check.
        t1: Trans,
        /// Target frame.
        t2: Trans,
        /// Relative orientation `(t2.rot - t1.rot) mod 4`.
        ta: i64,
        /// Target offset in the source frame.
        offset: Vector,
    },

    /// The decision loop ran out of tries before reaching the target.
    #[error(
        "route unreachable after {tries} tries: t1 = {t1}, t2 = {t2}, bend radius {bend_radius}, {} points so far",
        points.len()
    )]
    RouteUnreachable {
        /// Number of decision iterations spent.
        tries: usize,
        /// Advancing source frame when the budget ran out.
        t1: Trans,
        /// Target frame.
        t2: Trans,
        /// Bend radius in use.
        bend_radius: i64,
        /// Waypoints accumulated so far.
        points: Vec<Point>,
    },
}

/// Convenience alias for routing results.
pub type RouteResult<T> = Result<T, RouteError>;

pub(crate) fn invalid(message: impl Into<String>) -> RouteError {
    RouteError::InvalidArgument(message.into())
}
