//! Action resolution.
//!
//! Commits one validated action to a board and applies its effects:
//! captures after a move, a new tower after a build, a knight after a
//! promotion.

pub mod capture;
pub mod victory;

pub use capture::{resolve_flanks, resolve_landing};
pub use victory::{capture_winner, is_defeated, tower_winner, Victory, VictoryKind};

use crate::board::{Action, Board, Piece, PieceKind, PlayerId, Point, Position};
use crate::error::{BoostError, IllegalMoveReason};

/// Applies `action` for `player` and returns the captured points.
///
/// The action must already be legal. On error the board may be partially
/// modified; callers that need atomicity commit to a copy.
pub fn commit(
    board: &mut Board,
    player: PlayerId,
    action: &Action,
) -> Result<Vec<Point>, BoostError> {
    match action {
        Action::Move(path) => {
            let (start, end) = (path.start(), path.end());
            let piece = board
                .piece_at(start)
                .ok_or_else(|| BoostError::illegal(IllegalMoveReason::EmptyStart, start))?;

            let mut captured = Vec::new();
            if piece.kind.can_capture_by_landing() && start != end {
                captured.extend(resolve_landing(board, player, end));
            }
            board.move_piece(start, end)?;
            if piece.kind.can_flank() {
                captured.extend(resolve_flanks(board, player, end));
            }
            Ok(captured)
        }
        Action::Build(point) => {
            board.place(Piece::tower(player), *point)?;
            Ok(Vec::new())
        }
        Action::Promote(point) => {
            match board.piece_at(*point) {
                Some(p) if p.is_owned_by(player) && p.kind == PieceKind::Pawn => {}
                _ => {
                    return Err(BoostError::illegal(
                        IllegalMoveReason::CannotBuildOrPromote,
                        *point,
                    ))
                }
            }
            board.replace(*point, Piece::knight(player))?;
            Ok(Vec::new())
        }
    }
}

/// The position `action` would leave behind, without touching `board`.
pub fn outcome(board: &Board, player: PlayerId, action: &Action) -> Result<Position, BoostError> {
    let mut next = board.clone();
    commit(&mut next, player, action)?;
    Ok(next.position())
}
