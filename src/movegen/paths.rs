//! Simple-path enumeration.
//!
//! A move visits exactly `steps + 1` distinct points. `PathSearch` describes
//! one such search from a start point; every call to `iter` runs it again
//! from the beginning, lazily, with a depth-first walk over an explicit
//! stack. Occupancy is read from the board as it stands before the move.

use crate::board::{neighbor, Board, Direction, Path, PlayerId, Point};

/// Parameters of a path search. Cheap to copy; restart with `iter`.
#[derive(Debug, Clone, Copy)]
pub struct PathSearch<'a> {
    board: &'a Board,
    start: Point,
    steps: usize,
    capture_for: Option<PlayerId>,
}

impl<'a> PathSearch<'a> {
    /// Paths of exactly `steps` steps from `start` through empty points.
    pub fn new(board: &'a Board, start: Point, steps: usize) -> Self {
        PathSearch {
            board,
            start,
            steps,
            capture_for: None,
        }
    }

    /// Also allows the final point to hold a piece `player` may capture by
    /// landing: any opponent piece that is not a dragon.
    pub fn capturing_for(mut self, player: PlayerId) -> Self {
        self.capture_for = Some(player);
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn iter(&self) -> Paths<'a> {
        Paths {
            search: *self,
            path: vec![self.start],
            next_dir: vec![0],
        }
    }

    /// Whether `point` may be entered as the step with index `step` (1-based).
    fn enterable(&self, point: Point, step: usize) -> bool {
        match self.board.piece_at(point) {
            None => true,
            Some(piece) => {
                step == self.steps
                    && piece.kind.is_capturable()
                    && matches!(self.capture_for, Some(player) if piece.is_opponent_of(player))
            }
        }
    }
}

impl<'a> IntoIterator for &PathSearch<'a> {
    type Item = Path;
    type IntoIter = Paths<'a>;

    fn into_iter(self) -> Paths<'a> {
        self.iter()
    }
}

/// Iterator over the paths of a `PathSearch`.
#[derive(Debug, Clone)]
pub struct Paths<'a> {
    search: PathSearch<'a>,
    path: Vec<Point>,
    /// Index into `Direction::ALL` of the next direction to try at each depth.
    next_dir: Vec<usize>,
}

impl Iterator for Paths<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        if self.search.steps == 0 {
            return None;
        }
        loop {
            let dir_idx = self.next_dir.last_mut()?;
            if *dir_idx >= Direction::ALL.len() {
                self.next_dir.pop();
                self.path.pop();
                continue;
            }
            let dir = Direction::ALL[*dir_idx];
            *dir_idx += 1;

            let current = *self.path.last()?;
            let Some(next) = neighbor(self.search.board, current, dir) else {
                continue;
            };
            if self.path.contains(&next) {
                continue;
            }
            let step = self.path.len();
            if !self.search.enterable(next, step) {
                continue;
            }

            self.path.push(next);
            if step == self.search.steps {
                let found = Path::from_points(self.path.clone());
                self.path.pop();
                return found;
            }
            self.next_dir.push(0);
        }
    }
}
