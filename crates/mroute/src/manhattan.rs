//! Single-path routing with 90° bends.

use crate::error::{RouteError, RouteResult};
use crate::router::ManhattanRouter;
use mroute_common::{Point, Trans};
use mroute_config::{RoutingParams, DEFAULT_MAX_TRIES};
use mroute_diagnostics::DiagnosticSink;

/// Builder for a 90° route with the full parameter set.
///
/// ```ignore
/// let path = ManhattanRoute::new(10_000)
///     .start_straight(2_000)
///     .invert(true)
///     .route(port_a, port_b, &sink)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManhattanRoute {
    bend_radius: i64,
    start_straight: i64,
    end_straight: i64,
    max_tries: usize,
    invert: bool,
}

impl ManhattanRoute {
    /// Creates a route description with no straights, the default retry
    /// budget, and the frame anchored at the start endpoint.
    pub fn new(bend_radius: i64) -> Self {
        Self {
            bend_radius,
            start_straight: 0,
            end_straight: 0,
            max_tries: DEFAULT_MAX_TRIES,
            invert: false,
        }
    }

    /// Takes every setting from resolved configuration.
    pub fn from_params(params: &RoutingParams) -> Self {
        Self {
            bend_radius: params.bend90_radius,
            start_straight: params.start_straight,
            end_straight: params.end_straight,
            max_tries: params.max_tries,
            invert: params.invert,
        }
    }

    /// Minimum straight after the start endpoint.
    pub fn start_straight(mut self, length: i64) -> Self {
        self.start_straight = length;
        self
    }

    /// Minimum straight before the end endpoint.
    pub fn end_straight(mut self, length: i64) -> Self {
        self.end_straight = length;
        self
    }

    /// Retry ceiling of the decision loop.
    pub fn max_tries(mut self, tries: usize) -> Self {
        self.max_tries = tries;
        self
    }

    /// Route from the end endpoint instead and reverse the result.
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Computes the path from `start` to `end`.
    ///
    /// The result starts at `start`'s origin and ends at `end`'s origin.
    pub fn route(&self, start: Trans, end: Trans, sink: &DiagnosticSink) -> RouteResult<Vec<Point>> {
        if self.max_tries == 0 {
            return Err(RouteError::InvalidArgument(
                "max_tries must be at least 1".to_string(),
            ));
        }
        if start.disp() == end.disp() && start.rot() == end.rot() {
            return Err(RouteError::IdenticalEndpoints(start.origin()));
        }
        if self.invert {
            let mut points =
                ManhattanRouter::new(self.bend_radius, end, start, self.end_straight, self.start_straight)?
                    .auto_route(self.max_tries, sink)?;
            points.reverse();
            Ok(points)
        } else {
            ManhattanRouter::new(self.bend_radius, start, end, self.start_straight, self.end_straight)?
                .auto_route(self.max_tries, sink)
        }
    }
}

/// Routes a Manhattan path between two endpoint frames with 90° bends of
/// `bend_radius`, honoring minimum straights at both ends.
pub fn route_manhattan(
    start: Trans,
    end: Trans,
    bend_radius: i64,
    start_straight: i64,
    end_straight: i64,
    sink: &DiagnosticSink,
) -> RouteResult<Vec<Point>> {
    ManhattanRoute::new(bend_radius)
        .start_straight(start_straight)
        .end_straight(end_straight)
        .route(start, end, sink)
}

/// A single-path router usable by the bundle router.
///
/// Any function or closure with the signature of [`route_manhattan`]
/// implements it.
pub trait ManhattanPathFn {
    /// Routes from `start` to `end`.
    fn route_path(
        &self,
        start: Trans,
        end: Trans,
        bend_radius: i64,
        start_straight: i64,
        end_straight: i64,
        sink: &DiagnosticSink,
    ) -> RouteResult<Vec<Point>>;
}

impl<F> ManhattanPathFn for F
where
    F: Fn(Trans, Trans, i64, i64, i64, &DiagnosticSink) -> RouteResult<Vec<Point>>,
{
    fn route_path(
        &self,
        start: Trans,
        end: Trans,
        bend_radius: i64,
        start_straight: i64,
        end_straight: i64,
        sink: &DiagnosticSink,
    ) -> RouteResult<Vec<Point>> {
        self(start, end, bend_radius, start_straight, end_straight, sink)
    }
}
