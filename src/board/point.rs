//! Grid points and orthogonal directions.
//!
//! A point is a 0-based (file, rank) pair. Files are shown as letters
//! starting at `a`, ranks as numbers starting at `1` on the bottom edge,
//! so `Point::new(0, 0)` is `a1`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (file, rank) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub file: u8,
    pub rank: u8,
}

impl Point {
    pub const fn new(file: u8, rank: u8) -> Self {
        Point { file, rank }
    }

    /// Returns the point one step in `dir`, or None if it would leave the
    /// non-negative quadrant. Upper bounds are checked by the board.
    pub fn step(self, dir: Direction) -> Option<Point> {
        let (df, dr) = dir.delta();
        let file = self.file.checked_add_signed(df)?;
        let rank = self.rank.checked_add_signed(dr)?;
        Some(Point { file, rank })
    }

    /// Returns the file letter, `a` for file 0, or None past `z`.
    pub fn file_char(self) -> Option<char> {
        (self.file < 26).then(|| char::from(b'a' + self.file))
    }

    /// Returns true if the two points are orthogonally adjacent.
    pub fn is_adjacent(self, other: Point) -> bool {
        let df = self.file.abs_diff(other.file);
        let dr = self.rank.abs_diff(other.rank);
        df + dr == 1
    }

    /// Returns the direction from `self` to an orthogonally adjacent point.
    pub fn direction_to(self, other: Point) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.step(dir) == Some(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = self.rank as u16 + 1;
        match self.file_char() {
            Some(letter) => write!(f, "{}{}", letter, rank),
            // Only reachable for points built off any legal board.
            None => write!(f, "#{}-{}", self.file, rank),
        }
    }
}

/// One of the four orthogonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// (file delta, rank delta). North is towards higher ranks.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
