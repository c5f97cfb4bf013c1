//! Fixpoint transformations: displacement plus a multiple of 90° and a mirror.
//!
//! A [`Trans`] maps a vector by first mirroring it at the x axis (if the mirror
//! flag is set), then rotating it counter-clockwise by `rot * 90°`. Points are
//! additionally displaced. This is the frame of an oriented endpoint: its local
//! +x axis, after rotation, is the direction a connection leaves it.

use crate::point::{Point, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, MulAssign};

/// An exact, invertible grid transformation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Trans {
    rot: u8,
    mirror: bool,
    disp: Vector,
}

impl Trans {
    /// The identity transformation.
    pub const IDENTITY: Trans = Trans {
        rot: 0,
        mirror: false,
        disp: Vector::ZERO,
    };

    /// Creates a transformation from a rotation code (taken mod 4), a mirror
    /// flag, and a displacement.
    pub fn new(rot: i64, mirror: bool, x: i64, y: i64) -> Self {
        Self {
            rot: rot.rem_euclid(4) as u8,
            mirror,
            disp: Vector::new(x, y),
        }
    }

    /// Creates a pure displacement.
    pub fn shift(x: i64, y: i64) -> Self {
        Self::new(0, false, x, y)
    }

    /// Creates a pure rotation by `rot * 90°` about the origin.
    pub fn rotation(rot: i64) -> Self {
        Self::new(rot, false, 0, 0)
    }

    /// Returns the rotation code in `0..4`.
    pub fn rot(&self) -> i64 {
        i64::from(self.rot)
    }

    /// Returns `true` if the transformation mirrors at the x axis before rotating.
    pub fn is_mirror(&self) -> bool {
        self.mirror
    }

    /// Returns the displacement.
    pub fn disp(&self) -> Vector {
        self.disp
    }

    /// Returns the image of the origin, i.e. the endpoint position.
    pub fn origin(&self) -> Point {
        self.disp.to_point()
    }

    /// Returns a copy with the mirror flag replaced.
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Returns a copy with the displacement replaced.
    pub fn with_disp(mut self, disp: Vector) -> Self {
        self.disp = disp;
        self
    }

    /// Applies the rotation and mirror (not the displacement) to a vector.
    pub fn apply_vector(&self, v: Vector) -> Vector {
        let y = if self.mirror { -v.y } else { v.y };
        match self.rot {
            0 => Vector::new(v.x, y),
            1 => Vector::new(-y, v.x),
            2 => Vector::new(-v.x, -y),
            _ => Vector::new(y, -v.x),
        }
    }

    /// Applies the full transformation to a point.
    pub fn apply_point(&self, p: Point) -> Point {
        self.disp.to_point() + self.apply_vector(p.to_vector())
    }

    /// Returns the exact inverse transformation.
    pub fn inverted(&self) -> Trans {
        // A mirrored fixpoint transformation is its own linear inverse.
        let rot = if self.mirror {
            self.rot
        } else {
            (4 - self.rot) % 4
        };
        let linear = Trans {
            rot,
            mirror: self.mirror,
            disp: Vector::ZERO,
        };
        Trans {
            disp: -linear.apply_vector(self.disp),
            ..linear
        }
    }

    /// Returns this frame moved by `d` along its local forward (+x) axis.
    pub fn advanced(&self, d: i64) -> Trans {
        *self * Trans::shift(d, 0)
    }

    /// Returns `(other.rot - self.rot) mod 4`, the orientation of `other` as
    /// seen from this frame.
    pub fn relative_rot(&self, other: &Trans) -> i64 {
        (other.rot() - self.rot()).rem_euclid(4)
    }

    /// Returns the displacement from this frame to `other`, expressed in this
    /// frame's local axes (x forward, y to the left).
    pub fn local_offset(&self, other: &Trans) -> Vector {
        self.inverted().apply_vector(other.disp - self.disp)
    }
}

impl Mul for Trans {
    type Output = Trans;

    /// Composes two transformations: `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: Trans) -> Trans {
        let rot = if self.mirror {
            self.rot() - rhs.rot()
        } else {
            self.rot() + rhs.rot()
        };
        Trans {
            rot: rot.rem_euclid(4) as u8,
            mirror: self.mirror ^ rhs.mirror,
            disp: self.disp + self.apply_vector(rhs.disp),
        }
    }
}

impl MulAssign for Trans {
    fn mul_assign(&mut self, rhs: Trans) {
        *self = *self * rhs;
    }
}

impl Mul<Point> for Trans {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.apply_point(rhs)
    }
}

impl Mul<Vector> for Trans {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        self.apply_vector(rhs)
    }
}

impl fmt::Display for Trans {
    /// Formats like `r90 10,-5` or, when mirrored, `m45 10,-5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mirror {
            write!(f, "m{} {}", u32::from(self.rot) * 45, self.disp)
        } else {
            write!(f, "r{} {}", u32::from(self.rot) * 90, self.disp)
        }
    }
}

impl fmt::Debug for Trans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trans({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_of_unit_vector() {
        let e = Vector::new(1, 0);
        assert_eq!(Trans::rotation(0) * e, Vector::new(1, 0));
        assert_eq!(Trans::rotation(1) * e, Vector::new(0, 1));
        assert_eq!(Trans::rotation(2) * e, Vector::new(-1, 0));
        assert_eq!(Trans::rotation(3) * e, Vector::new(0, -1));
    }

    #[test]
    fn rotation_code_is_taken_mod_four() {
        assert_eq!(Trans::rotation(-1).rot(), 3);
        assert_eq!(Trans::rotation(6).rot(), 2);
    }

    #[test]
    fn mirror_applies_before_rotation() {
        let t = Trans::new(1, true, 0, 0);
        // (2, 3) -> mirror (2, -3) -> rot90 (3, 2)
        assert_eq!(t * Vector::new(2, 3), Vector::new(3, 2));
    }

    #[test]
    fn point_gets_displacement_vector_does_not() {
        let t = Trans::new(1, false, 10, 20);
        assert_eq!(t * Point::new(5, 0), Point::new(10, 25));
        assert_eq!(t * Vector::new(5, 0), Vector::new(0, 5));
        assert_eq!(t.origin(), Point::new(10, 20));
    }

    #[test]
    fn composition_applies_right_operand_first() {
        let a = Trans::new(1, false, 10, 0);
        let b = Trans::shift(5, 0);
        let ab = a * b;
        let p = Point::new(1, 2);
        assert_eq!(ab * p, a * (b * p));
        assert_eq!(ab.origin(), Point::new(10, 5));
        assert_eq!(ab.rot(), 1);
    }

    #[test]
    fn composition_with_mirror_matches_sequential_application() {
        let p = Point::new(7, -3);
        for rot_a in 0..4 {
            for rot_b in 0..4 {
                for (ma, mb) in [(false, false), (false, true), (true, false), (true, true)] {
                    let a = Trans::new(rot_a, ma, 3, -11);
                    let b = Trans::new(rot_b, mb, -8, 2);
                    assert_eq!((a * b) * p, a * (b * p), "a={a} b={b}");
                }
            }
        }
    }

    #[test]
    fn inverse_undoes_transformation() {
        let p = Point::new(13, -4);
        for rot in 0..4 {
            for mirror in [false, true] {
                let t = Trans::new(rot, mirror, 100, -50);
                assert_eq!(t.inverted() * (t * p), p, "t={t}");
                assert_eq!(t * t.inverted(), Trans::IDENTITY, "t={t}");
            }
        }
    }

    #[test]
    fn advanced_moves_along_local_forward_axis() {
        let t = Trans::new(1, false, 0, 0).advanced(10);
        assert_eq!(t.origin(), Point::new(0, 10));
        let t = Trans::new(2, true, 5, 5).advanced(5);
        assert_eq!(t.origin(), Point::new(0, 5));
    }

    #[test]
    fn local_offset_and_relative_rot() {
        let t1 = Trans::new(1, false, 0, 0);
        let t2 = Trans::new(0, false, -5, 20);
        // Seen from t1 (facing +y): 20 forward, 5 to the left.
        assert_eq!(t1.local_offset(&t2), Vector::new(20, 5));
        assert_eq!(t1.relative_rot(&t2), 3);
        assert_eq!(t2.relative_rot(&t1), 1);
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", Trans::new(1, false, 10, -5)), "r90 10,-5");
        assert_eq!(format!("{}", Trans::new(3, true, 0, 0)), "m135 0,0");
        assert_eq!(format!("{:?}", Trans::IDENTITY), "Trans(r0 0,0)");
    }

    #[test]
    fn serde_roundtrip() {
        let t = Trans::new(3, true, -40, 12);
        let json = serde_json::to_string(&t).unwrap();
        let back: Trans = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
