//! Legal action generation.
//!
//! `base_actions` lists everything the board allows a player to do. The
//! repetition rule then removes actions that would recreate an earlier
//! position, unless every action would.

pub mod build;
pub mod movement;
pub mod paths;

use std::collections::HashSet;

use log::trace;
use rayon::prelude::*;

use crate::board::{Action, Board, PlayerId, Position};
use crate::error::{BoostError, IllegalMoveReason};
use crate::resolve;
use crate::ruleset::Rules;

/// Checks an action against the board alone, ignoring history.
pub fn validate(
    board: &Board,
    rules: &Rules,
    player: PlayerId,
    action: &Action,
) -> Result<(), BoostError> {
    match action {
        Action::Move(path) => movement::validate_move(board, player, path),
        Action::Build(_) | Action::Promote(_) => {
            build::validate_placement(board, rules, player, action)
        }
    }
}

/// Every action the board allows `player`: builds, then promotions, then moves.
pub fn base_actions(board: &Board, rules: &Rules, player: PlayerId) -> Vec<Action> {
    let mut actions = build::legal_builds(board, rules, player);
    actions.extend(build::legal_promotions(board, rules, player));
    actions.extend(movement::legal_moves(board, player));
    actions
}

/// True if `player` can do anything at all on this board.
pub fn has_any_action(board: &Board, rules: &Rules, player: PlayerId) -> bool {
    movement::has_legal_move(board, player)
        || !build::legal_promotions(board, rules, player).is_empty()
        || !build::legal_builds(board, rules, player).is_empty()
}

/// The actions `player` may take given the positions seen so far.
///
/// Actions whose resulting position was already seen are dropped, unless
/// all of them repeat; then every base action stays legal.
pub fn legal_actions(
    board: &Board,
    rules: &Rules,
    player: PlayerId,
    seen: &HashSet<Position>,
) -> Vec<Action> {
    let candidates = base_actions(board, rules, player);
    if candidates.is_empty() {
        return candidates;
    }

    let fresh: Vec<bool> = candidates
        .par_iter()
        .map(|action| match resolve::outcome(board, player, action) {
            Ok(position) => !seen.contains(&position),
            Err(_) => false,
        })
        .collect();

    if !fresh.iter().any(|&f| f) {
        trace!(
            "{}: all {} actions repeat a position, none filtered",
            player,
            candidates.len()
        );
        return candidates;
    }

    let total = candidates.len();
    let actions: Vec<Action> = candidates
        .into_iter()
        .zip(fresh)
        .filter_map(|(action, f)| f.then_some(action))
        .collect();
    trace!(
        "{}: {} of {} actions dropped for repetition",
        player,
        total - actions.len(),
        total
    );
    actions
}

/// Rejects `action` if it leads to a seen position while some other action
/// would not. `action` must already pass `validate`.
pub fn check_repetition(
    board: &Board,
    rules: &Rules,
    player: PlayerId,
    action: &Action,
    seen: &HashSet<Position>,
) -> Result<(), BoostError> {
    let position = resolve::outcome(board, player, action)?;
    if !seen.contains(&position) {
        return Ok(());
    }
    if has_non_repeating_alternative(board, rules, player, seen) {
        trace!("{}: rejecting {} as a repetition", player, action);
        return Err(BoostError::illegal(IllegalMoveReason::Repetition, action.origin()));
    }
    Ok(())
}

/// True if some base action of `player` leads to an unseen position.
pub fn has_non_repeating_alternative(
    board: &Board,
    rules: &Rules,
    player: PlayerId,
    seen: &HashSet<Position>,
) -> bool {
    base_actions(board, rules, player)
        .par_iter()
        .any(|action| {
            matches!(resolve::outcome(board, player, action), Ok(p) if !seen.contains(&p))
        })
}
