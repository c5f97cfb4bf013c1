//! Geometric properties every routed path must satisfy, checked over grids of
//! endpoint configurations.

use mroute::{
    backbone2bundle, route_manhattan, route_manhattan_180, route_ports_to_bundle,
    BundleParams, BundlePort, ManhattanRoute, Point, PortId, RouteError, Trans, Vector,
};
use mroute_diagnostics::DiagnosticSink;
use std::collections::BTreeMap;

fn unit(rot: i64) -> Vector {
    Trans::rotation(rot).apply_vector(Vector::new(1, 0))
}

fn cross(a: Vector, b: Vector) -> i64 {
    a.x * b.y - a.y * b.x
}

fn dot(a: Vector, b: Vector) -> i64 {
    a.x * b.x + a.y * b.y
}

fn assert_manhattan(points: &[Point]) {
    for pair in points.windows(2) {
        let d = pair[1] - pair[0];
        assert!(
            (d.x == 0) != (d.y == 0),
            "segment {:?} -> {:?} is not axis-aligned in {points:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Checks endpoints, axis alignment, the direction of the first and last
/// segment, and the minimum straights.
fn assert_valid_route(start: Trans, end: Trans, ss: i64, es: i64, points: &[Point]) {
    assert_eq!(points.first(), Some(&start.origin()));
    assert_eq!(points.last(), Some(&end.origin()));
    assert_manhattan(points);
    if points.len() < 2 {
        return;
    }

    let first = points[1] - points[0];
    assert_eq!(cross(first, unit(start.rot())), 0, "{points:?}");
    assert!(dot(first, unit(start.rot())) > 0, "{points:?}");
    assert!(first.manhattan_length() >= ss, "{points:?}");

    let last = points[points.len() - 1] - points[points.len() - 2];
    assert_eq!(cross(last, unit(end.rot())), 0, "{points:?}");
    assert!(dot(last, unit(end.rot())) < 0, "{points:?}");
    assert!(last.manhattan_length() >= es, "{points:?}");
}

#[test]
fn facing_aligned_endpoints() {
    let sink = DiagnosticSink::new();
    let path = route_manhattan(
        Trans::new(0, false, 0, 0),
        Trans::new(2, false, 1000, 0),
        10,
        0,
        0,
        &sink,
    )
    .unwrap();
    assert_eq!(path, vec![Point::new(0, 0), Point::new(1000, 0)]);
}

#[test]
fn too_close_sideways_detours() {
    let sink = DiagnosticSink::new();
    let path = route_manhattan(
        Trans::new(0, false, 0, 0),
        Trans::new(0, false, 0, 5),
        10,
        0,
        0,
        &sink,
    )
    .unwrap();
    assert_eq!(
        path,
        vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, -20),
            Point::new(30, -20),
            Point::new(30, 5),
            Point::new(0, 5),
        ]
    );
}

#[test]
fn every_configuration_is_routed_and_symmetric() {
    let sink = DiagnosticSink::new();
    let mut routed = 0;
    for r1 in 0..4 {
        for r2 in 0..4 {
            for x in (-60..=60).step_by(15) {
                for y in (-60..=60).step_by(15) {
                    for radius in [5, 10] {
                        for (ss, es) in [(0, 0), (10, 25)] {
                            let start = Trans::new(r1, false, 0, 0);
                            let end = Trans::new(r2, false, x, y);
                            let points = match route_manhattan(start, end, radius, ss, es, &sink) {
                                Ok(points) => points,
                                Err(RouteError::IdenticalEndpoints(_)) => continue,
                                Err(err) => panic!("{start} -> {end}, R = {radius}: {err}"),
                            };
                            assert_valid_route(start, end, ss, es, &points);

                            let mut inverted = ManhattanRoute::new(radius)
                                .start_straight(es)
                                .end_straight(ss)
                                .invert(true)
                                .route(end, start, &sink)
                                .unwrap();
                            inverted.reverse();
                            assert_eq!(points, inverted);
                            routed += 1;
                        }
                    }
                }
            }
        }
    }
    assert_eq!(routed, 5168);
}

#[test]
fn every_180_configuration_is_manhattan() {
    let sink = DiagnosticSink::new();
    let mut unsupported = 0;
    for r1 in 0..4 {
        for r2 in 0..4 {
            for x in (-60..=60).step_by(10) {
                for y in (-60..=60).step_by(10) {
                    for (ss, es) in [(0, 0), (5, 5)] {
                        let start = Trans::new(r1, false, 0, 0);
                        let end = Trans::new(r2, false, x, y);
                        let points =
                            match route_manhattan_180(start, end, 10, 10, ss, es, &sink) {
                                Ok(points) => points,
                                Err(RouteError::IdenticalEndpoints(_)) => continue,
                                Err(RouteError::UnsupportedConfiguration(_)) => {
                                    unsupported += 1;
                                    continue;
                                }
                                Err(err) => panic!("{start} -> {end}: {err}"),
                            };
                        if points.is_empty() {
                            continue;
                        }
                        assert_eq!(points.first(), Some(&start.origin()));
                        assert_eq!(points.last(), Some(&end.origin()));
                        assert_manhattan(&points);
                    }
                }
            }
        }
    }
    assert_eq!(unsupported, 208);
}

fn segments(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points.windows(2).map(|w| (w[0], w[1]))
}

/// Axis-aligned segments share a point iff their extents overlap on both axes.
fn touches(a: (Point, Point), b: (Point, Point)) -> bool {
    let overlap = |a1: i64, a2: i64, b1: i64, b2: i64| {
        a1.min(a2).max(b1.min(b2)) <= a1.max(a2).min(b1.max(b2))
    };
    overlap(a.0.x, a.1.x, b.0.x, b.1.x) && overlap(a.0.y, a.1.y, b.0.y, b.1.y)
}

#[test]
fn bundle_routes_never_cross() {
    let sink = DiagnosticSink::new();
    let params = BundleParams::new(10).spacing(3);
    for rot in 0..4 {
        let frame = Trans::rotation(rot);
        for count in 1..=5u32 {
            for width in [2, 5] {
                for (bx, by) in [(0, -400), (30, 600), (0, 1000)] {
                    let ports: Vec<BundlePort> = (0..count)
                        .map(|i| {
                            let at = frame * Point::new(0, 50 * i64::from(i));
                            BundlePort::new(
                                PortId::from_raw(i),
                                Trans::new(rot, false, at.x, at.y),
                                width,
                            )
                        })
                        .collect();
                    let base = frame * Point::new(bx, by);
                    let (paths, _) =
                        route_ports_to_bundle(&ports, &params, None, base, &sink).unwrap();
                    assert_bundle_disjoint(&ports, &paths);
                    for port in &ports {
                        let path = &paths[&port.id];
                        assert_eq!(path[0], port.trans.origin());
                        assert_manhattan(path);
                    }
                }
            }
        }
    }
}

/// No two paths of one bundle may share a point.
fn assert_bundle_disjoint(ports: &[BundlePort], paths: &BTreeMap<PortId, Vec<Point>>) {
    assert_eq!(paths.len(), ports.len());
    for (i, a) in ports.iter().enumerate() {
        for b in &ports[i + 1..] {
            let (pa, pb) = (&paths[&a.id], &paths[&b.id]);
            let crossing = segments(pa).any(|s| segments(pb).any(|t| touches(s, t)));
            assert!(!crossing, "{pa:?} crosses {pb:?}");
        }
    }
}

#[test]
fn near_bundles_never_cross() {
    // Trunks within a few bend radii of the ports, with port pitches below,
    // at and above two radii, in columns and in staggered rows.
    let sink = DiagnosticSink::new();
    let mut routed = 0;
    for rot in 0..4 {
        let frame = Trans::rotation(rot);
        for count in 2..=4u32 {
            for pitch in [8, 15, 19, 20, 21, 25, 40] {
                for stagger in [0, 7] {
                    for by in (-120..=200).step_by(4) {
                        for (ss, es) in [(0, 0), (5, 7)] {
                            let params = BundleParams::new(10)
                                .spacing(3)
                                .start_straight(ss)
                                .end_straight(es);
                            let ports: Vec<BundlePort> = (0..count)
                                .map(|i| {
                                    let i = i64::from(i);
                                    let at = frame * Point::new(-stagger * i, pitch * i);
                                    BundlePort::new(
                                        PortId::from_raw(i as u32),
                                        Trans::new(rot, false, at.x, at.y),
                                        2,
                                    )
                                })
                                .collect();
                            let base = frame * Point::new(0, by);
                            let (paths, trunk) =
                                route_ports_to_bundle(&ports, &params, None, base, &sink)
                                    .unwrap();
                            assert_bundle_disjoint(&ports, &paths);
                            for port in &ports {
                                let path = &paths[&port.id];
                                let last = path[path.len() - 1];
                                let lane_end = Trans::new((rot + 2) % 4, false, last.x, last.y);
                                assert_valid_route(port.trans, lane_end, ss, es, path);
                                let on_trunk = frame.inverted() * (last - trunk);
                                assert_eq!(on_trunk.x, 0, "{path:?} misses trunk {trunk:?}");
                            }
                            routed += 1;
                        }
                    }
                }
            }
        }
    }
    assert_eq!(routed, 27216);
}

#[test]
fn bundle_lanes_end_on_trunk() {
    let sink = DiagnosticSink::new();
    let params = BundleParams::new(10).spacing(3);
    let ports: Vec<BundlePort> = (0..4u32)
        .map(|i| {
            BundlePort::new(
                PortId::from_raw(i),
                Trans::new(0, false, 0, 40 * i64::from(i)),
                2,
            )
        })
        .collect();
    let (paths, trunk) =
        route_ports_to_bundle(&ports, &params, None, Point::new(0, 500), &sink).unwrap();
    let mut ends: Vec<i64> = paths
        .values()
        .map(|p| {
            let last = p[p.len() - 1];
            assert_eq!(last.x, trunk.x);
            last.y
        })
        .collect();
    ends.sort_unstable();
    // Lanes are `width + spacing` apart and centered on the trunk.
    assert_eq!(ends, vec![492, 497, 502, 507]);
}

#[test]
fn backbone_lanes_keep_shape() {
    let backbones = [
        vec![Point::new(0, 0), Point::new(300, 0), Point::new(300, 300)],
        vec![
            Point::new(0, 0),
            Point::new(0, -250),
            Point::new(400, -250),
            Point::new(400, 200),
        ],
        vec![Point::new(100, 100), Point::new(-200, 100)],
    ];
    let layouts: [(&[i64], &[i64]); 3] = [
        (&[2, 2, 2], &[2, 2, 2]),
        (&[1, 3, 5, 7], &[0, 1, 2, 3]),
        (&[10], &[4]),
    ];
    for backbone in &backbones {
        for (widths, spacings) in layouts {
            let lanes = backbone2bundle(backbone, widths, spacings).unwrap();
            assert_eq!(lanes.len(), widths.len());
            for lane in &lanes {
                assert_eq!(lane.len(), backbone.len());
                for (l, b) in lane.windows(2).zip(backbone.windows(2)) {
                    let (dl, db) = (l[1] - l[0], b[1] - b[0]);
                    assert_eq!((dl.x.signum(), dl.y.signum()), (db.x.signum(), db.y.signum()));
                }
            }
        }
    }
}
