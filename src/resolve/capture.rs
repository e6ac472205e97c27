//! Capture resolution.
//!
//! Flanking: after a pawn or dragon lands, each orthogonal neighbor holding
//! an opponent's piece is removed if the point beyond it holds one of the
//! mover's pieces or a dragon. Direct capture: a knight that lands on an
//! opponent's piece removes it.

use crate::board::{neighbor, Board, Direction, PlayerId, Point};

/// Removes every piece flanked from `at` on behalf of `mover`, returning
/// the points cleared. Each point is removed at most once.
pub fn resolve_flanks(board: &mut Board, mover: PlayerId, at: Point) -> Vec<Point> {
    let mut captured = Vec::new();
    for dir in Direction::ALL {
        let Some(victim) = flanked(board, mover, at, dir) else {
            continue;
        };
        if board.remove(victim).is_some() {
            captured.push(victim);
        }
    }
    captured
}

/// The neighbor of `at` in `dir` if it is flanked for `mover`.
fn flanked(board: &Board, mover: PlayerId, at: Point, dir: Direction) -> Option<Point> {
    let near = neighbor(board, at, dir)?;
    let victim = board.piece_at(near)?;
    if !victim.is_opponent_of(mover) || !victim.kind.is_capturable() {
        return None;
    }
    let far = neighbor(board, near, dir)?;
    let anvil = board.piece_at(far)?;
    (anvil.is_owned_by(mover) || anvil.is_dragon()).then_some(near)
}

/// Clears the landing point of a knight capture. Returns the point if a
/// piece was removed.
pub fn resolve_landing(board: &mut Board, mover: PlayerId, at: Point) -> Option<Point> {
    let target = board.piece_at(at)?;
    if !target.is_opponent_of(mover) || !target.kind.is_capturable() {
        return None;
    }
    board.remove(at).map(|_| at)
}
