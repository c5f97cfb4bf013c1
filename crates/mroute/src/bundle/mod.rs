//! Bundle routing: many endpoints gathered onto a common trunk.
//!
//! All endpoints are expected to face the same way. Routing happens in the
//! frame of the first endpoint, where they all point along +x and the trunk
//! lies ahead of them, one lane per endpoint stacked along y.
//!
//! 1. **Sort** endpoints by descending lateral position. Lanes on the trunk
//!    keep that order.
//! 2. **Plan** an intermediate level per lane. Every route runs at its port
//!    level, jogs at most once to its intermediate level, then jogs at most
//!    once more onto its lane. Levels keep the lane order, and each jog is
//!    either zero or at least two bend radii. A lane closer than that to its
//!    port therefore detours past both.
//! 3. **Stagger** the jogs of each stage. Consecutive lanes moving the same
//!    way form a run, and the lane leading the move jogs first, so routes
//!    on the same side nest instead of crossing.
//! 4. **Place** the trunk far enough ahead for every plan, and beyond the
//!    keep-out box if one is given.
//! 5. **Route** every endpoint with the single-path router, in parallel.

mod backbone;
mod side;

pub use backbone::backbone2bundle;
pub use side::{route_ports_side, SideDir};

use crate::error::{invalid, RouteResult};
use crate::manhattan::{route_manhattan, ManhattanPathFn};
use crate::points::clean_points;
use crate::port::BundlePort;
use crate::router::{check_radius, check_straights};
use mroute_common::{BBox, Point, PortId, Trans};
use mroute_config::RoutingParams;
use mroute_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};

/// Geometry settings of a bundle, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleParams {
    /// Bend radius of every route.
    pub bend_radius: i64,
    /// Gap between neighbouring lanes.
    pub spacing: i64,
    /// Minimum straight after each endpoint.
    pub start_straight: i64,
    /// Minimum straight before the trunk.
    pub end_straight: i64,
}

impl BundleParams {
    /// Creates bundle settings with no spacing and no straights.
    pub fn new(bend_radius: i64) -> Self {
        Self {
            bend_radius,
            spacing: 0,
            start_straight: 0,
            end_straight: 0,
        }
    }

    /// Sets the lane spacing.
    pub fn spacing(mut self, spacing: i64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the minimum straight after each endpoint.
    pub fn start_straight(mut self, length: i64) -> Self {
        self.start_straight = length;
        self
    }

    /// Sets the minimum straight before the trunk.
    pub fn end_straight(mut self, length: i64) -> Self {
        self.end_straight = length;
        self
    }

    fn validate(&self) -> RouteResult<()> {
        check_radius(self.bend_radius)?;
        check_straights(self.start_straight, self.end_straight)?;
        if self.spacing < 0 {
            return Err(invalid(format!(
                "spacing must not be negative, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}

impl From<&RoutingParams> for BundleParams {
    fn from(params: &RoutingParams) -> Self {
        Self {
            bend_radius: params.bend90_radius,
            spacing: params.spacing,
            start_straight: params.start_straight,
            end_straight: params.end_straight,
        }
    }
}

/// Routes `ports` onto a trunk placed at or beyond `base`, using the 90°
/// router for every lane.
///
/// Returns one path per endpoint, from the endpoint to its lane on the trunk,
/// and the final trunk position. With `keep_out` set to `None` only the
/// endpoints and `base` decide where the trunk goes. See
/// [`route_ports_to_bundle_with`].
pub fn route_ports_to_bundle(
    ports: &[BundlePort],
    params: &BundleParams,
    keep_out: Option<&BBox>,
    base: Point,
    sink: &DiagnosticSink,
) -> RouteResult<(BTreeMap<PortId, Vec<Point>>, Point)> {
    route_ports_to_bundle_with(&route_manhattan, ports, params, keep_out, base, sink)
}

/// Routes `ports` onto a trunk with a caller-supplied single-path router.
///
/// The trunk is moved ahead of `base` (in the endpoints' direction) until
/// every lane has room for its jogs and straights, and past the far side of
/// `keep_out` when one is given. A move is reported as a note.
///
/// A lane with at most one jog is routed with a single call, from the trunk
/// toward the endpoint, and the result is reversed. A lane that detours is
/// routed as two calls meeting on its intermediate level. Paths from
/// [`route_manhattan`] never cross: a path whose endpoint lies further
/// along the lateral axis stays on that side of every other path. Endpoints
/// sharing a lateral coordinate are kept in input order but may touch.
pub fn route_ports_to_bundle_with<F>(
    router: &F,
    ports: &[BundlePort],
    params: &BundleParams,
    keep_out: Option<&BBox>,
    base: Point,
    sink: &DiagnosticSink,
) -> RouteResult<(BTreeMap<PortId, Vec<Point>>, Point)>
where
    F: ManhattanPathFn + Sync,
{
    params.validate()?;
    let first = ports
        .first()
        .ok_or_else(|| invalid("bundle needs at least one port"))?;
    let mut seen = HashSet::with_capacity(ports.len());
    for port in ports {
        if !seen.insert(port.id) {
            return Err(invalid(format!("duplicate port id {}", port.id)));
        }
        if port.width <= 0 {
            return Err(invalid(format!(
                "port {} width must be positive, got {}",
                port.id, port.width
            )));
        }
    }

    let dir_trans = Trans::rotation(first.trans.rot());
    let inv_dir = dir_trans.inverted();

    let mut lanes: Vec<Lane> = ports
        .iter()
        .map(|port| Lane::new(port.id, inv_dir * port.trans, port.width))
        .collect();
    lanes.sort_by_key(|lane| std::cmp::Reverse(lane.port_y()));

    let base_n = inv_dir * base;
    let bundle_width = lanes.iter().map(|l| l.width).sum::<i64>()
        + (lanes.len() as i64 - 1) * params.spacing;
    place_lanes(&mut lanes, base_n.y + bundle_width / 2, params.spacing);
    plan_jogs(&mut lanes, params);

    let r = params.bend_radius;
    let (ss, es) = (params.start_straight, params.end_straight);
    let first_column = lanes.iter().map(|l| l.port_x()).max().unwrap_or(base_n.x) + ss + r;
    let port_stage_end = lanes
        .iter()
        .filter_map(|l| l.port_jog)
        .max()
        .map(|span| first_column + span);
    let reach = lanes
        .iter()
        .map(|l| match (l.port_jog, l.trunk_jog) {
            (_, Some(offset)) => {
                let earliest = l.port_x() + ss + r;
                let column = port_stage_end.map_or(earliest, |end| earliest.max(end + 2 * r));
                column + offset + r + es
            }
            (Some(offset), None) => first_column + offset + r + es,
            (None, None) => l.port_x() + ss + es,
        })
        .max()
        .unwrap_or(base_n.x);
    let mut trunk_x = base_n.x.max(reach);
    if let Some(bbox) = keep_out {
        trunk_x = trunk_x.max(bbox.transformed(&inv_dir).right);
    }
    let trunk_n = Point::new(trunk_x, base_n.y);
    let trunk = dir_trans * trunk_n;

    if trunk_n != base_n {
        sink.emit(
            Diagnostic::new(
                DiagnosticCode::TRUNK_MOVED,
                format!("bundle trunk moved from {base} to {trunk}"),
            )
            .at(trunk)
            .with_note(format!("{} lanes, bundle width {bundle_width}", lanes.len())),
        );
    }

    let routed: Vec<(PortId, Vec<Point>)> = lanes
        .par_iter()
        .map(|lane| {
            let lane_end = Trans::new(2, false, trunk_x, lane.y);
            let port_column = lane.port_jog.map(|offset| first_column + offset);
            let trunk_column = lane.trunk_jog.map(|offset| trunk_x - es - r - offset);
            let mut points = match (port_column, trunk_column) {
                (Some(x1), Some(x2)) => {
                    let meet = x1 + r;
                    let mut points = router.route_path(
                        lane.trans,
                        Trans::new(2, false, meet, lane.level),
                        r,
                        x1 - r - lane.port_x(),
                        0,
                        sink,
                    )?;
                    let mut back = router.route_path(
                        lane_end,
                        Trans::new(0, false, meet, lane.level),
                        r,
                        trunk_x - x2 - r,
                        0,
                        sink,
                    )?;
                    back.reverse();
                    points.append(&mut back);
                    clean_points(&points)
                }
                (x1, x2) => {
                    let straight = x1.or(x2).map_or(es, |column| trunk_x - column - r);
                    let mut points = router.route_path(lane_end, lane.trans, r, straight, ss, sink)?;
                    points.reverse();
                    points
                }
            };
            for p in points.iter_mut() {
                *p = dir_trans * *p;
            }
            Ok((lane.id, points))
        })
        .collect::<RouteResult<_>>()?;

    Ok((routed.into_iter().collect(), trunk))
}

/// One endpoint in the routing frame together with its lane plan.
#[derive(Debug, Clone)]
struct Lane {
    id: PortId,
    trans: Trans,
    width: i64,
    /// Lateral position of the lane on the trunk.
    y: i64,
    /// Level the route runs at between its two jogs.
    level: i64,
    /// Offset of the jog off the port level, counted forward from the
    /// first jog column.
    port_jog: Option<i64>,
    /// Straight between the jog onto the lane and the trunk.
    trunk_jog: Option<i64>,
}

impl Lane {
    fn new(id: PortId, trans: Trans, width: i64) -> Self {
        Self {
            id,
            trans,
            width,
            y: 0,
            level: 0,
            port_jog: None,
            trunk_jog: None,
        }
    }

    fn port_x(&self) -> i64 {
        self.trans.disp().x
    }

    fn port_y(&self) -> i64 {
        self.trans.disp().y
    }

    /// Whether a route can sit at `level` between its port and its lane.
    fn accepts(&self, level: i64, bend_radius: i64) -> bool {
        let jog_ok = |a: i64, b: i64| a == b || (a - b).abs() >= 2 * bend_radius;
        jog_ok(self.port_y(), level) && jog_ok(level, self.y)
    }
}

/// Centre-line distance between two neighbouring lanes.
fn pitch(upper: &Lane, lower: &Lane, spacing: i64) -> i64 {
    upper.width - upper.width / 2 + spacing + lower.width / 2
}

/// Packs lanes sorted by descending port y downward from `top`.
fn place_lanes(lanes: &mut [Lane], top: i64, spacing: i64) {
    let mut lane_y = top;
    for lane in lanes.iter_mut() {
        lane_y -= lane.width / 2;
        lane.y = lane_y;
        lane_y -= lane.width - lane.width / 2 + spacing;
    }
}

/// Direction in which intermediate levels are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    /// From the top lane down; each level is capped by the one above.
    Down,
    /// From the bottom lane up; each level is floored by the one below.
    Up,
}

/// Picks the level for `lane` given the previous lane's level in sweep
/// order.
///
/// Staying at the port level or moving straight to the lane costs one jog
/// at most and is preferred. Otherwise the lane detours to the level
/// nearest the bound that clears both its port and its lane.
fn pick_level(
    lane: &Lane,
    previous: Option<(&Lane, i64)>,
    sweep: Sweep,
    params: &BundleParams,
) -> i64 {
    let r = params.bend_radius;
    let bound = previous.map(|(prev, level)| match sweep {
        Sweep::Down => level - pitch(prev, lane, params.spacing),
        Sweep::Up => level + pitch(lane, prev, params.spacing),
    });
    let within = |m: i64| match (bound, sweep) {
        (None, _) => true,
        (Some(b), Sweep::Down) => m <= b,
        (Some(b), Sweep::Up) => m >= b,
    };
    // Two routes still at their port levels are as far apart as the ports.
    let beside_port = previous.is_some_and(|(prev, level)| level == prev.port_y());

    let py = lane.port_y();
    if (within(py) || beside_port) && lane.accepts(py, r) {
        return py;
    }
    if within(lane.y) && lane.accepts(lane.y, r) {
        return lane.y;
    }
    let (lo, hi) = (py.min(lane.y), py.max(lane.y));
    match sweep {
        Sweep::Down => {
            let floor = bound.map_or(lo - 2 * r, |b| b.min(lo - 2 * r));
            [hi - 2 * r]
                .into_iter()
                .chain(bound)
                .filter(|&m| within(m) && lane.accepts(m, r))
                .fold(floor, i64::max)
        }
        Sweep::Up => {
            let ceiling = bound.map_or(hi + 2 * r, |b| b.max(hi + 2 * r));
            [lo + 2 * r]
                .into_iter()
                .chain(bound)
                .filter(|&m| within(m) && lane.accepts(m, r))
                .fold(ceiling, i64::min)
        }
    }
}

/// Assigns every lane a level in one sweep.
fn plan_levels(lanes: &[Lane], sweep: Sweep, params: &BundleParams) -> Vec<i64> {
    let mut levels = vec![0; lanes.len()];
    let order: Vec<usize> = match sweep {
        Sweep::Down => (0..lanes.len()).collect(),
        Sweep::Up => (0..lanes.len()).rev().collect(),
    };
    let mut previous: Option<usize> = None;
    for i in order {
        let prev = previous.map(|p| (&lanes[p], levels[p]));
        levels[i] = pick_level(&lanes[i], prev, sweep, params);
        previous = Some(i);
    }
    levels
}

/// Which end of the route a stage of jogs is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Ports,
    Trunk,
}

/// Offsets for the jogs of one stage, `None` for lanes that do not jog.
///
/// Consecutive lanes jogging the same way form a run whose offsets grow by
/// `width + spacing` from the top. The lane leading the move must jog
/// first, so runs moving down are reversed when counted from the ports and
/// runs moving up are reversed when counted back from the trunk.
fn stagger(
    from: &[i64],
    to: &[i64],
    lanes: &[Lane],
    spacing: i64,
    anchor: Anchor,
) -> Vec<Option<i64>> {
    let moves: Vec<i64> = from.iter().zip(to).map(|(f, t)| (t - f).signum()).collect();
    let mut offsets = vec![None; lanes.len()];
    let mut start = 0;
    while start < lanes.len() {
        let sense = moves[start];
        let end = start + moves[start..].iter().take_while(|&&m| m == sense).count();
        if sense != 0 {
            let mut acc = 0;
            let mut run: Vec<i64> = lanes[start..end]
                .iter()
                .map(|lane| {
                    let offset = acc;
                    acc += lane.width + spacing;
                    offset
                })
                .collect();
            let moving_down = sense < 0;
            if moving_down == (anchor == Anchor::Ports) {
                run.reverse();
            }
            for (slot, offset) in offsets[start..end].iter_mut().zip(run) {
                *slot = Some(offset);
            }
        }
        start = end;
    }
    offsets
}

/// Chooses levels and jog offsets for lanes already placed on the trunk.
///
/// Both sweep directions are tried and the one needing fewer jogs wins.
fn plan_jogs(lanes: &mut [Lane], params: &BundleParams) {
    let jogs = |levels: &[i64]| {
        lanes
            .iter()
            .zip(levels)
            .map(|(l, &m)| usize::from(m != l.port_y()) + usize::from(m != l.y))
            .sum::<usize>()
    };
    let down = plan_levels(lanes, Sweep::Down, params);
    let up = plan_levels(lanes, Sweep::Up, params);
    let levels = if jogs(&up) < jogs(&down) { up } else { down };

    let ports: Vec<i64> = lanes.iter().map(Lane::port_y).collect();
    let targets: Vec<i64> = lanes.iter().map(|l| l.y).collect();
    let port_jogs = stagger(&ports, &levels, lanes, params.spacing, Anchor::Ports);
    let trunk_jogs = stagger(&levels, &targets, lanes, params.spacing, Anchor::Trunk);
    for (((lane, level), port_jog), trunk_jog) in lanes
        .iter_mut()
        .zip(levels)
        .zip(port_jogs)
        .zip(trunk_jogs)
    {
        lane.level = level;
        lane.port_jog = port_jog;
        lane.trunk_jog = trunk_jog;
    }
}
