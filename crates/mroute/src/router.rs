//! The 90° Manhattan router: a moving source frame that is steered toward a
//! fixed target frame by straights and quarter-turn bends.
//!
//! Each iteration of [`ManhattanRouter::auto_route`] classifies the relative
//! geometry of the two frames into a `Relation`, derives a short list of
//! moves from it, and applies them. Iteration ends when a decision finishes the
//! route or the retry budget runs out.

use crate::error::{RouteError, RouteResult};
use mroute_common::{Point, Trans, Vector};
use mroute_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};

/// Stateful builder of one Manhattan path.
///
/// `t1` starts at the source endpoint and advances with every primitive; `t2`
/// is the target endpoint pushed back by the end straight. Bends are recorded
/// as their corner points, so the bend radius only enters as the footprint of
/// a 90° turn: `R` forward and `R` sideways.
#[derive(Debug, Clone)]
pub struct ManhattanRouter {
    bend_radius: i64,
    t1: Trans,
    t2: Trans,
    end: Point,
    points: Vec<Point>,
}

impl ManhattanRouter {
    /// Sets up a router between two endpoint frames.
    ///
    /// The source origin becomes the first waypoint. The target frame is
    /// advanced by `end_straight` along its own forward axis and the source
    /// frame by `start_straight`; mirror flags are cleared on both.
    pub fn new(
        bend_radius: i64,
        start: Trans,
        end: Trans,
        start_straight: i64,
        end_straight: i64,
    ) -> RouteResult<Self> {
        check_radius(bend_radius)?;
        check_straights(start_straight, end_straight)?;
        Ok(Self {
            bend_radius,
            t1: start.with_mirror(false).advanced(start_straight),
            t2: end.with_mirror(false).advanced(end_straight),
            end: end.origin(),
            points: vec![start.origin()],
        })
    }

    /// Returns the bend radius.
    pub fn bend_radius(&self) -> i64 {
        self.bend_radius
    }

    /// Returns the advancing source frame.
    pub fn t1(&self) -> Trans {
        self.t1
    }

    /// Returns the (pushed back) target frame.
    pub fn t2(&self) -> Trans {
        self.t2
    }

    /// Returns the waypoints recorded so far.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Target displacement in the source frame: x forward, y to the left.
    pub fn tv(&self) -> Vector {
        self.t1.local_offset(&self.t2)
    }

    /// Relative orientation `(t2.rot - t1.rot) mod 4`.
    pub fn ta(&self) -> i64 {
        self.t1.relative_rot(&self.t2)
    }

    /// Moves the source frame forward by `d`. Records no waypoint.
    pub fn straight(&mut self, d: i64) {
        self.t1 = self.t1.advanced(d);
    }

    /// Records a left turn: the corner lies `R` ahead, the frame ends up
    /// `R` ahead and `R` to the left, rotated by +90°.
    pub fn left(&mut self) {
        let r = self.bend_radius;
        self.points.push(self.t1 * Point::new(r, 0));
        self.t1 *= Trans::new(1, false, r, r);
    }

    /// Mirror image of [`left`](Self::left).
    pub fn right(&mut self) {
        let r = self.bend_radius;
        self.points.push(self.t1 * Point::new(r, 0));
        self.t1 *= Trans::new(3, false, r, -r);
    }

    /// Closes the path at the target endpoint.
    ///
    /// Fails unless the frames face each other on a common axis. The end
    /// point is appended only if it is not already the last waypoint.
    pub fn finish(mut self) -> RouteResult<Vec<Point>> {
        let ta = self.ta();
        let offset = self.tv();
        if ta != 2 || offset.y != 0 {
            return Err(RouteError::RouteNotAligned {
                t1: self.t1,
                t2: self.t2,
                ta,
                offset,
            });
        }
        if self.points.last() != Some(&self.end) {
            self.points.push(self.end);
        }
        Ok(self.points)
    }

    /// Runs the decision loop until the route finishes or `max_tries`
    /// iterations have been spent.
    pub fn auto_route(mut self, max_tries: usize, sink: &DiagnosticSink) -> RouteResult<Vec<Point>> {
        for _ in 0..max_tries {
            let decision = Relation::of(self.ta()).decide(self.tv(), self.bend_radius);
            if decision.tight {
                self.warn_tight(sink);
            }
            for step in &decision.moves {
                match *step {
                    Move::Straight(d) => self.straight(d),
                    Move::Left => self.left(),
                    Move::Right => self.right(),
                }
            }
            if decision.next == Next::Finish {
                return self.finish();
            }
        }
        Err(RouteError::RouteUnreachable {
            tries: max_tries,
            t1: self.t1,
            t2: self.t2,
            bend_radius: self.bend_radius,
            points: self.points,
        })
    }

    fn warn_tight(&self, sink: &DiagnosticSink) {
        let points: Vec<String> = self.points.iter().map(|p| p.to_string()).collect();
        sink.emit(
            Diagnostic::new(
                DiagnosticCode::TIGHT_ROUTE,
                "route is too small, potential collisions",
            )
            .at(self.t1.origin())
            .with_note(format!("t1 = {}", self.t1))
            .with_note(format!("t2 = {}", self.t2))
            .with_note(format!("points = [{}]", points.join(", "))),
        );
    }
}

pub(crate) fn check_radius(bend_radius: i64) -> RouteResult<()> {
    if bend_radius <= 0 {
        return Err(RouteError::InvalidArgument(format!(
            "bend radius must be positive, got {bend_radius}"
        )));
    }
    Ok(())
}

pub(crate) fn check_straights(start_straight: i64, end_straight: i64) -> RouteResult<()> {
    if start_straight < 0 || end_straight < 0 {
        return Err(RouteError::InvalidArgument(format!(
            "straights must not be negative, got start {start_straight} and end {end_straight}"
        )));
    }
    Ok(())
}

/// Orientation class of the target as seen from the source frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    /// Both frames point the same way (`ta = 0`).
    Parallel,
    /// The frames point toward each other (`ta = 2`).
    Facing,
    /// The target points sideways. `flipped` is set for `ta = 1`, which is
    /// handled as the mirror image of `ta = 3`.
    Perpendicular { flipped: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Straight(i64),
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Continue,
    Finish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Decision {
    moves: Vec<Move>,
    next: Next,
    tight: bool,
}

impl Decision {
    fn carry_on(moves: Vec<Move>) -> Self {
        Self {
            moves,
            next: Next::Continue,
            tight: false,
        }
    }

    fn finish(moves: Vec<Move>) -> Self {
        Self {
            moves,
            next: Next::Finish,
            tight: false,
        }
    }
}

/// `Left` if `cond` holds, `Right` otherwise.
fn turn(cond: bool) -> Move {
    if cond {
        Move::Left
    } else {
        Move::Right
    }
}

impl Relation {
    fn of(ta: i64) -> Self {
        match ta {
            0 => Relation::Parallel,
            2 => Relation::Facing,
            1 => Relation::Perpendicular { flipped: true },
            _ => Relation::Perpendicular { flipped: false },
        }
    }

    fn decide(self, tv: Vector, r: i64) -> Decision {
        let Vector { x, y } = tv;
        match self {
            Relation::Parallel => {
                let mut moves = Vec::with_capacity(2);
                if y.abs() >= 2 * r {
                    if x > 0 {
                        moves.push(Move::Straight(x));
                    }
                    moves.push(turn(y > 0));
                } else {
                    if x < 0 {
                        moves.push(Move::Straight((2 * r + x).max(0)));
                    }
                    // Too close sideways: swing out away from the target.
                    moves.push(turn(y <= 0));
                }
                Decision::carry_on(moves)
            }
            Relation::Facing => {
                if y == 0 && x >= 0 {
                    Decision::finish(Vec::new())
                } else if y.abs() < 2 * r {
                    Decision::carry_on(vec![turn(y <= 0)])
                } else if x < 2 * r {
                    Decision::carry_on(vec![turn(y > 0)])
                } else {
                    let jog = Move::Straight(y.abs() - 2 * r);
                    Decision::finish(vec![turn(y > 0), jog, turn(y <= 0)])
                }
            }
            Relation::Perpendicular { flipped } => {
                let y = if flipped { -y } else { y };
                let toward = turn(!flipped);
                let away = turn(flipped);
                if x >= r && y >= r {
                    Decision::finish(vec![Move::Straight(x - r), toward])
                } else if x >= 3 * r {
                    Decision::carry_on(vec![away])
                } else if y >= 3 * r {
                    Decision::carry_on(vec![toward])
                } else if y <= 0 || x <= 0 {
                    Decision::carry_on(vec![Move::Straight((x + r).max(0)), away])
                } else {
                    Decision {
                        moves: vec![away, Move::Straight((r - y).max(0)), toward],
                        next: Next::Continue,
                        tight: true,
                    }
                }
            }
        }
    }
}
