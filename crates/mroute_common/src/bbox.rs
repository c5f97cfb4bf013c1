//! Axis-aligned boxes on the grid.

use crate::point::Point;
use crate::trans::Trans;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle given by its inclusive corner coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BBox {
    /// Smallest x coordinate.
    pub left: i64,
    /// Smallest y coordinate.
    pub bottom: i64,
    /// Largest x coordinate.
    pub right: i64,
    /// Largest y coordinate.
    pub top: i64,
}

impl BBox {
    /// Creates the box spanned by two opposite corners, in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            bottom: a.y.min(b.y),
            right: a.x.max(b.x),
            top: a.y.max(b.y),
        }
    }

    /// Creates the smallest box containing all `points`, or `None` if empty.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(BBox::new(first, first), |b, p| b.including(p)))
    }

    /// Returns the smallest box containing this box and `p`.
    pub fn including(&self, p: Point) -> Self {
        Self {
            left: self.left.min(p.x),
            bottom: self.bottom.min(p.y),
            right: self.right.max(p.x),
            top: self.top.max(p.y),
        }
    }

    /// Returns the lower-left corner.
    pub fn p1(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    /// Returns the upper-right corner.
    pub fn p2(&self) -> Point {
        Point::new(self.right, self.top)
    }

    /// Returns the horizontal extent.
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    /// Returns the vertical extent.
    pub fn height(&self) -> i64 {
        self.top - self.bottom
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        (self.left..=self.right).contains(&p.x) && (self.bottom..=self.top).contains(&p.y)
    }

    /// Returns the box transformed by `t`; rotations keep boxes axis-aligned.
    pub fn transformed(&self, t: &Trans) -> Self {
        BBox::new(*t * self.p1(), *t * self.p2())
    }
}

impl fmt::Debug for BBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox({};{})", self.p1(), self.p2())
    }
}
