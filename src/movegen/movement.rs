//! Move validation and enumeration.
//!
//! A move must use the piece's whole step budget along a simple path of
//! orthogonal steps through empty points. Only a knight may end its path on
//! an occupied point, and only on an opponent's non-dragon piece.

use std::collections::HashSet;

use super::paths::PathSearch;
use crate::board::adjacency::has_adjacent_piece_of;
use crate::board::{step_budget, Action, Board, Path, Piece, PieceKind, PlayerId, Point};
use crate::error::{BoostError, IllegalMoveReason};

/// Checks that `player` may move the piece at `point` at all.
pub fn check_mover(board: &Board, player: PlayerId, point: Point) -> Result<Piece, BoostError> {
    if !board.contains(point) {
        return Err(BoostError::illegal(IllegalMoveReason::OffGrid, point));
    }
    let piece = board
        .piece_at(point)
        .ok_or_else(|| BoostError::illegal(IllegalMoveReason::EmptyStart, point))?;

    if piece.kind == PieceKind::Dragon {
        if !has_adjacent_piece_of(board, point, player) {
            return Err(BoostError::illegal(IllegalMoveReason::WrongMover, point));
        }
    } else if !piece.is_owned_by(player) {
        return Err(BoostError::illegal(IllegalMoveReason::WrongMover, point));
    } else if !piece.kind.is_mobile() {
        return Err(BoostError::illegal(IllegalMoveReason::CannotMove, point));
    }
    Ok(piece)
}

/// Validates a move path for `player` against the current board.
///
/// Repetition is not checked here; it depends on game history.
pub fn validate_move(board: &Board, player: PlayerId, path: &Path) -> Result<(), BoostError> {
    let start = path.start();
    let piece = check_mover(board, player, start)?;

    let budget = step_budget(board, piece, start);
    if path.steps() != budget {
        return Err(BoostError::illegal(
            IllegalMoveReason::WrongStepCount {
                expected: budget,
                actual: path.steps(),
            },
            start,
        ));
    }

    let mut visited = HashSet::with_capacity(path.points().len());
    visited.insert(start);
    for pair in path.points().windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if !board.contains(to) {
            return Err(BoostError::illegal(IllegalMoveReason::OffGrid, to));
        }
        if !from.is_adjacent(to) {
            return Err(BoostError::illegal(IllegalMoveReason::NotAdjacent, to));
        }
        if !visited.insert(to) {
            return Err(BoostError::illegal(IllegalMoveReason::SelfIntersecting, to));
        }
    }

    let end = path.end();
    for &point in &path.points()[1..path.points().len() - 1] {
        if board.is_occupied(point) {
            return Err(BoostError::illegal(IllegalMoveReason::Blocked, point));
        }
    }
    if let Some(target) = board.piece_at(end) {
        check_landing(piece, target, player, end)?;
    }
    Ok(())
}

/// Checks landing on an occupied point, which only a knight capture allows.
fn check_landing(
    mover: Piece,
    target: Piece,
    player: PlayerId,
    at: Point,
) -> Result<(), BoostError> {
    let reason = if !mover.kind.can_capture_by_landing() {
        IllegalMoveReason::NoDirectCapture
    } else if target.is_owned_by(player) {
        IllegalMoveReason::CannotCaptureOwn
    } else if !target.kind.is_capturable() {
        IllegalMoveReason::DragonNotCapturable
    } else {
        return Ok(());
    };
    Err(BoostError::illegal(reason, at))
}

/// The path search for the piece at `point`, if `player` may move it.
pub fn moves_from(board: &Board, player: PlayerId, point: Point) -> Option<PathSearch<'_>> {
    let piece = check_mover(board, player, point).ok()?;
    let search = PathSearch::new(board, point, step_budget(board, piece, point));
    if piece.kind.can_capture_by_landing() {
        Some(search.capturing_for(player))
    } else {
        Some(search)
    }
}

/// Finds the first legal path for the piece at `start` that ends on `end`.
pub fn find_path(board: &Board, player: PlayerId, start: Point, end: Point) -> Option<Path> {
    moves_from(board, player, start)?
        .iter()
        .find(|path| path.end() == end)
}

/// Every point that may be moved by `player`: own mobile pieces and
/// dragons next to one of their pieces.
pub fn movable_points(board: &Board, player: PlayerId) -> Vec<Point> {
    board
        .pieces()
        .filter(|(point, _)| check_mover(board, player, *point).is_ok())
        .map(|(point, _)| point)
        .collect()
}

/// One move per distinct (start, end) pair for `player`.
///
/// All paths between the same two points leave the same position, so the
/// first path found stands for the rest.
pub fn legal_moves(board: &Board, player: PlayerId) -> Vec<Action> {
    let mut moves = Vec::new();
    for start in movable_points(board, player) {
        let Some(search) = moves_from(board, player, start) else {
            continue;
        };
        let mut ends = HashSet::new();
        for path in search.iter() {
            if ends.insert(path.end()) {
                moves.push(Action::Move(path));
            }
        }
    }
    moves
}

/// True if `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: PlayerId) -> bool {
    movable_points(board, player)
        .into_iter()
        .filter_map(|start| moves_from(board, player, start))
        .any(|search| search.iter().next().is_some())
}
