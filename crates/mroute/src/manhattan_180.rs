//! Single-path routing that can use a dedicated 180° element.
//!
//! When the two frames point the same way and their lateral distance (after
//! applying the straights) equals the 180° element's port distance, the path
//! is a U-turn through that element. Every other geometry falls back to the
//! 90° router.

use crate::error::{RouteError, RouteResult};
use crate::manhattan::route_manhattan;
use crate::router::{check_radius, check_straights};
use mroute_common::{Point, Trans};
use mroute_diagnostics::DiagnosticSink;

/// Routes between two endpoint frames, preferring a single 180° bend with port
/// distance `bend180_radius` over a chain of 90° bends.
///
/// Facing endpoints on a common axis short-circuit to a single segment, or to
/// an empty path when they coincide.
pub fn route_manhattan_180(
    start: Trans,
    end: Trans,
    bend90_radius: i64,
    bend180_radius: i64,
    start_straight: i64,
    end_straight: i64,
    sink: &DiagnosticSink,
) -> RouteResult<Vec<Point>> {
    check_radius(bend90_radius)?;
    check_radius(bend180_radius)?;
    check_straights(start_straight, end_straight)?;
    if start.disp() == end.disp() && start.rot() == end.rot() {
        return Err(RouteError::IdenticalEndpoints(start.origin()));
    }

    let t1 = start.with_mirror(false);
    let t2 = end.with_mirror(false);

    let offset = t1.local_offset(&t2);
    if t1.relative_rot(&t2) == 2 && offset.y == 0 {
        if offset.x > 0 {
            return Ok(vec![t1.origin(), t2.origin()]);
        }
        if offset.x == 0 {
            return Ok(Vec::new());
        }
    }

    let a1 = t1.advanced(start_straight);
    let a2 = t2.advanced(end_straight);
    let offset = a1.local_offset(&a2);
    let ta = a1.relative_rot(&a2);

    if offset.y.abs() == bend180_radius {
        if ta == 2 {
            return Err(RouteError::UnsupportedConfiguration(format!(
                "facing endpoints {start} and {end} are one 180° bend apart"
            )));
        }
        if ta == 0 {
            let reach = offset.x.max(0);
            let raw = [
                t1.origin(),
                a1.origin(),
                a1 * Point::new(reach, 0),
                a1 * Point::new(reach, offset.y),
                a2.origin(),
                t2.origin(),
            ];
            let mut points: Vec<Point> = Vec::with_capacity(raw.len());
            for p in raw {
                if points.last() != Some(&p) {
                    points.push(p);
                }
            }
            return Ok(points);
        }
    }

    route_manhattan(start, end, bend90_radius, start_straight, end_straight, sink)
}

/// A single-path router that also takes a 180° element radius.
///
/// Any function or closure with the signature of [`route_manhattan_180`]
/// implements it.
pub trait Manhattan180PathFn {
    /// Routes from `start` to `end`.
    #[allow(clippy::too_many_arguments)]
    fn route_path_180(
        &self,
        start: Trans,
        end: Trans,
        bend90_radius: i64,
        bend180_radius: i64,
        start_straight: i64,
        end_straight: i64,
        sink: &DiagnosticSink,
    ) -> RouteResult<Vec<Point>>;
}

impl<F> Manhattan180PathFn for F
where
    F: Fn(Trans, Trans, i64, i64, i64, i64, &DiagnosticSink) -> RouteResult<Vec<Point>>,
{
    fn route_path_180(
        &self,
        start: Trans,
        end: Trans,
        bend90_radius: i64,
        bend180_radius: i64,
        start_straight: i64,
        end_straight: i64,
        sink: &DiagnosticSink,
    ) -> RouteResult<Vec<Point>> {
        self(
            start,
            end,
            bend90_radius,
            bend180_radius,
            start_straight,
            end_straight,
            sink,
        )
    }
}
