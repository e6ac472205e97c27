//! Tower building and knight promotion.
//!
//! Both replace a move for the turn. A tower goes on an empty point whose
//! four neighbors all exist and all hold the builder's pieces; a pawn next
//! to one of its owner's towers may become a knight while the owner has
//! fewer knights than the towers allow.

use crate::board::{neighbors, Action, Board, PieceKind, PlayerId, Point};
use crate::error::{BoostError, IllegalMoveReason};
use crate::ruleset::Rules;

/// Whether `player` may build a tower on `point`.
pub fn can_build(board: &Board, rules: &Rules, player: PlayerId, point: Point) -> bool {
    if !board.contains(point) || board.is_occupied(point) {
        return false;
    }
    if board.tower_count(player) >= rules.max_towers {
        return false;
    }
    let mut surrounding = 0;
    for neighbor in neighbors(board, point) {
        match board.piece_at(neighbor) {
            Some(piece) if piece.is_owned_by(player) => surrounding += 1,
            _ => return false,
        }
    }
    surrounding == 4
}

/// Whether `player` may promote the pawn on `point` to a knight.
pub fn can_promote(board: &Board, rules: &Rules, player: PlayerId, point: Point) -> bool {
    match board.piece_at(point) {
        Some(piece) if piece.is_owned_by(player) && piece.kind == PieceKind::Pawn => {}
        _ => return false,
    }
    let allowed = board.tower_count(player) * rules.knights_per_tower;
    if board.knight_count(player) >= allowed {
        return false;
    }
    neighbors(board, point).any(|n| {
        matches!(board.piece_at(n), Some(p) if p.is_owned_by(player) && p.kind == PieceKind::Tower)
    })
}

/// Validates a build or promotion.
pub fn validate_placement(
    board: &Board,
    rules: &Rules,
    player: PlayerId,
    action: &Action,
) -> Result<(), BoostError> {
    let (ok, point) = match *action {
        Action::Build(point) => (can_build(board, rules, player, point), point),
        Action::Promote(point) => (can_promote(board, rules, player, point), point),
        Action::Move(ref path) => return super::movement::validate_move(board, player, path),
    };
    if !board.contains(point) {
        return Err(BoostError::illegal(IllegalMoveReason::OffGrid, point));
    }
    if ok {
        Ok(())
    } else {
        Err(BoostError::illegal(IllegalMoveReason::CannotBuildOrPromote, point))
    }
}

/// All points where `player` may build a tower.
pub fn legal_builds(board: &Board, rules: &Rules, player: PlayerId) -> Vec<Action> {
    if board.tower_count(player) >= rules.max_towers {
        return Vec::new();
    }
    board
        .points()
        .filter(|p| can_build(board, rules, player, *p))
        .map(Action::Build)
        .collect()
}

/// All pawns `player` may promote.
pub fn legal_promotions(board: &Board, rules: &Rules, player: PlayerId) -> Vec<Action> {
    board
        .pieces_of(player)
        .filter(|(point, _)| can_promote(board, rules, player, *point))
        .map(|(point, _)| Action::Promote(point))
        .collect()
}
