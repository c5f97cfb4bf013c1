//! Expansion of a single backbone polyline into parallel lanes.

use crate::error::{invalid, RouteResult};
use mroute_common::{Edge, Point};

/// Offsets a Manhattan backbone into one polyline per lane.
///
/// Lanes are laid out side by side, centered on the backbone, in the order of
/// `widths`; `spacings[i]` is the gap attributed to lane `i`. Each lane keeps
/// the backbone's shape: same number of points, every edge parallel to its
/// backbone counterpart. Lane 0 lies furthest to the left of the backbone's
/// direction.
pub fn backbone2bundle(
    backbone: &[Point],
    widths: &[i64],
    spacings: &[i64],
) -> RouteResult<Vec<Vec<Point>>> {
    if widths.is_empty() {
        return Err(invalid("backbone needs at least one lane"));
    }
    if widths.len() != spacings.len() {
        return Err(invalid(format!(
            "got {} widths but {} spacings",
            widths.len(),
            spacings.len()
        )));
    }
    if backbone.len() < 2 {
        return Err(invalid(format!(
            "backbone needs at least two points, got {}",
            backbone.len()
        )));
    }

    let edges: Vec<Edge> = backbone
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1]))
        .collect();

    let total: i64 = widths.iter().sum::<i64>() + spacings.iter().sum::<i64>();
    let mut offset = (-total).div_euclid(2);
    let mut lanes = Vec::with_capacity(widths.len());

    for (&width, &spacing) in widths.iter().zip(spacings) {
        offset += width / 2 + spacing / 2;
        let mut lane = backbone.to_vec();
        for (i, edge) in edges.iter().enumerate() {
            let moved = edge.shifted(-offset).ok_or_else(|| {
                invalid(format!(
                    "backbone edge {:?} -> {:?} is not axis-aligned",
                    edge.p1, edge.p2
                ))
            })?;
            if edge.d().x == 0 {
                lane[i].x = moved.p1.x;
                lane[i + 1].x = moved.p2.x;
            } else {
                lane[i].y = moved.p1.y;
                lane[i + 1].y = moved.p2.y;
            }
        }
        lanes.push(lane);
        offset += spacing - spacing / 2 + width - width / 2;
    }

    Ok(lanes)
}
