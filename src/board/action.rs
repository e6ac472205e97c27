//! Actions a player can take on their turn.
//!
//! Moves carry their full path so the front end can highlight it and the
//! validator never has to re-derive it.

use std::fmt;

use super::point::Point;

/// An ordered, non-empty sequence of points starting at the moving piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<Point>);

impl Path {
    /// Builds a path from its points. Returns None for an empty list.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Path(points))
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// The point the piece starts on.
    pub fn start(&self) -> Point {
        self.0[0]
    }

    pub fn end(&self) -> Point {
        self.0[self.0.len() - 1]
    }

    /// Number of steps, one fewer than the number of points.
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.0 {
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}

/// One primary action. A turn is exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move a piece along a path, using its full step budget.
    Move(Path),
    /// Place a new tower on an empty point surrounded by one's own pieces.
    Build(Point),
    /// Turn one's own pawn next to one's own tower into a knight.
    Promote(Point),
}

impl Action {
    /// The point identifying the action: a move's start, or the target point.
    pub fn origin(&self) -> Point {
        match self {
            Action::Move(path) => path.start(),
            Action::Build(point) | Action::Promote(point) => *point,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(path) => write!(f, "{}", path),
            Action::Build(point) | Action::Promote(point) => write!(f, "{}", point),
        }
    }
}
