//! Orthogonal adjacency and step budgets.
//!
//! A mobile piece gets one step of its own plus one boost for every
//! occupied neighbor, whoever owns it. Towers get nothing.

use super::piece::{Piece, PlayerId};
use super::point::{Direction, Point};
use super::state::Board;

/// On-grid orthogonal neighbors of `point`, in `Direction::ALL` order.
pub fn neighbors(board: &Board, point: Point) -> impl Iterator<Item = Point> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| point.step(dir))
        .filter(move |p| board.contains(*p))
}

/// The neighbor of `point` in `dir`, if it is on the grid.
pub fn neighbor(board: &Board, point: Point, dir: Direction) -> Option<Point> {
    point.step(dir).filter(|p| board.contains(*p))
}

/// Number of occupied neighbors of `point`.
pub fn boosts(board: &Board, point: Point) -> usize {
    neighbors(board, point).filter(|p| board.is_occupied(*p)).count()
}

/// Exact number of steps `piece` must take from `point` this turn.
pub fn step_budget(board: &Board, piece: Piece, point: Point) -> usize {
    if !piece.kind.is_mobile() {
        return 0;
    }
    piece.kind.base_steps() + boosts(board, point)
}

/// Step budget for whatever stands at `point`, or None if it is empty.
pub fn step_budget_at(board: &Board, point: Point) -> Option<usize> {
    board
        .piece_at(point)
        .map(|piece| step_budget(board, piece, point))
}

/// True if any piece of `player` stands next to `point`.
pub fn has_adjacent_piece_of(board: &Board, point: Point, player: PlayerId) -> bool {
    neighbors(board, point)
        .any(|p| matches!(board.piece_at(p), Some(piece) if piece.is_owned_by(player)))
}
