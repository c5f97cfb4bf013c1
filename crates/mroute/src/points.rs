//! Helpers for Manhattan point lists.

use mroute_common::{Point, Vector};
use serde::{Deserialize, Serialize};

/// One of the four axis directions, numbered like rotation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +x
    East,
    /// +y
    North,
    /// −x
    West,
    /// −y
    South,
}

impl Direction {
    /// Classifies an axis-aligned vector. Zero and diagonal vectors yield `None`.
    pub fn of(v: Vector) -> Option<Direction> {
        match (v.x.signum(), v.y.signum()) {
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::North),
            (-1, 0) => Some(Direction::West),
            (0, -1) => Some(Direction::South),
            _ => None,
        }
    }

    /// Returns the rotation code (`0..4`) of this direction.
    pub fn rot(self) -> i64 {
        match self {
            Direction::East => 0,
            Direction::North => 1,
            Direction::West => 2,
            Direction::South => 3,
        }
    }

    /// Returns the unit vector pointing this way.
    pub fn unit(self) -> Vector {
        match self {
            Direction::East => Vector::new(1, 0),
            Direction::North => Vector::new(0, 1),
            Direction::West => Vector::new(-1, 0),
            Direction::South => Vector::new(0, -1),
        }
    }
}

/// Removes consecutive duplicates and interior points that continue straight
/// on in the same direction.
///
/// Reversals are kept: a point where the path doubles back still carries
/// geometry. The first and last points always survive.
pub fn clean_points(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() == Some(&p) {
            continue;
        }
        if let [.., a, b] = out.as_slice() {
            let before = Direction::of(*b - *a);
            if before.is_some() && before == Direction::of(p - *b) {
                out.pop();
            }
        }
        out.push(p);
    }
    out
}
