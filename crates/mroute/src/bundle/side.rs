//! Short side stubs that turn a group of endpoints by 90°.

use crate::error::{invalid, RouteResult};
use crate::port::BundlePort;
use crate::router::{check_radius, check_straights};
use mroute_common::{BBox, Point, PortId, Trans};
use std::collections::{BTreeMap, HashSet};

/// Which way the stubs turn, seen along the endpoints' direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideDir {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

impl SideDir {
    fn sign(self) -> i64 {
        match self {
            SideDir::Left => 1,
            SideDir::Right => -1,
        }
    }
}

/// Builds a three-point stub per endpoint: out by the bend radius plus an
/// accumulated straight, then one bend toward `dir`.
///
/// Endpoints are processed from the one furthest toward `dir` inward, so the
/// outer stub has the shortest straight. The straight starts at
/// `start_straight` and grows by `width + spacing` per endpoint, which keeps
/// the stubs nested.
///
/// The endpoints already routed to that side and the keep-out box do not
/// change the stubs.
pub fn route_ports_side(
    dir: SideDir,
    ports: &[BundlePort],
    _existing_side_ports: &[BundlePort],
    bend_radius: i64,
    _keep_out: Option<&BBox>,
    spacing: i64,
    start_straight: i64,
) -> RouteResult<BTreeMap<PortId, Vec<Point>>> {
    check_radius(bend_radius)?;
    check_straights(start_straight, 0)?;
    if spacing < 0 {
        return Err(invalid(format!("spacing must not be negative, got {spacing}")));
    }
    let first = ports
        .first()
        .ok_or_else(|| invalid("side routing needs at least one port"))?;
    let mut seen = HashSet::with_capacity(ports.len());
    if let Some(dup) = ports.iter().find(|p| !seen.insert(p.id)) {
        return Err(invalid(format!("duplicate port id {}", dup.id)));
    }

    let sign = dir.sign();
    let ports_rot = first.trans.rot();
    let inv_rot = Trans::rotation(ports_rot).inverted();

    let mut order: Vec<&BundlePort> = ports.iter().collect();
    order.sort_by_key(|p| -sign * (inv_rot * p.trans).disp().y);

    let mut straight = start_straight;
    let mut stubs = BTreeMap::new();
    for port in order {
        let frame = Trans::rotation(ports_rot).with_disp(port.trans.disp());
        let reach = bend_radius + straight;
        let stub = [
            Point::ORIGIN,
            Point::new(reach, 0),
            Point::new(reach, sign * bend_radius),
        ]
        .map(|p| frame * p)
        .to_vec();
        stubs.insert(port.id, stub);
        straight += port.width + spacing;
    }
    Ok(stubs)
}
