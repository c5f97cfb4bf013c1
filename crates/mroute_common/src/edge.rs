//! Directed segments between two grid points.

use crate::point::{Point, Vector};
use serde::{Deserialize, Serialize};

/// A directed edge from `p1` to `p2`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Edge {
    /// Start point.
    pub p1: Point,
    /// End point.
    pub p2: Point,
}

impl Edge {
    /// Creates an edge between two points.
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Returns the vector from `p1` to `p2`.
    pub fn d(&self) -> Vector {
        self.p2 - self.p1
    }

    /// Returns `true` if the edge is horizontal or vertical and non-degenerate.
    pub fn is_manhattan(&self) -> bool {
        let d = self.d();
        (d.x == 0) != (d.y == 0)
    }

    /// Returns the edge shifted perpendicular to its direction by `distance`.
    ///
    /// Positive distances shift to the left as seen along the edge direction.
    /// Only axis-aligned, non-degenerate edges can be shifted exactly; others
    /// yield `None`.
    pub fn shifted(&self, distance: i64) -> Option<Edge> {
        if !self.is_manhattan() {
            return None;
        }
        let d = self.d();
        // Unit left normal of an axis-aligned direction.
        let normal = Vector::new(-d.y.signum(), d.x.signum());
        let offset = normal * distance;
        Some(Edge::new(self.p1 + offset, self.p2 + offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_left_of_each_direction() {
        let east = Edge::new(Point::new(0, 0), Point::new(10, 0));
        assert_eq!(east.shifted(3).unwrap().p1, Point::new(0, 3));

        let north = Edge::new(Point::new(0, 0), Point::new(0, 10));
        assert_eq!(north.shifted(3).unwrap().p2, Point::new(-3, 10));

        let west = Edge::new(Point::new(10, 0), Point::new(0, 0));
        assert_eq!(west.shifted(3).unwrap().p1, Point::new(10, -3));

        let south = Edge::new(Point::new(0, 10), Point::new(0, 0));
        assert_eq!(south.shifted(-3).unwrap().p1, Point::new(-3, 10));
    }

    #[test]
    fn non_manhattan_edges_cannot_be_shifted() {
        assert!(Edge::new(Point::new(0, 0), Point::new(3, 4)).shifted(1).is_none());
        assert!(Edge::new(Point::new(2, 2), Point::new(2, 2)).shifted(1).is_none());
    }
}
