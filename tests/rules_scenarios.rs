//! Rules scenarios.
//!
//! Each test sets up a position from a board layout, plays actions through
//! the public API in player notation, and checks captures, turn order and
//! victories. The debug boards come first.

use boost::board::{Action, PlayerId, Point};
use boost::error::{BoostError, IllegalMoveReason};
use boost::game::{ActionResult, GameState, GameStatus};
use boost::protocol::notation::{parse_action, parse_point};
use boost::resolve::{Victory, VictoryKind};
use boost::ruleset::{new_game, Rules};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const P1: PlayerId = PlayerId(0);
const P2: PlayerId = PlayerId(1);
const P3: PlayerId = PlayerId(2);

fn game(layout: &str, players: u8) -> GameState {
    GameState::from_layout(layout, players, Rules::default()).unwrap()
}

fn play(
    game: &mut GameState,
    player: PlayerId,
    notation: &str,
) -> Result<ActionResult, BoostError> {
    let action = parse_action(game.board(), player, notation)?;
    game.apply_action(player, action)
}

fn pt(name: &str) -> Point {
    parse_point(name).unwrap()
}

fn won(player: PlayerId, kind: VictoryKind) -> Option<Victory> {
    Some(Victory { player, kind })
}

// ===========================================================================
// DEBUG BOARDS
// ===========================================================================

/// A dragon moved next to a tower completes the ring of four.
#[test]
fn debug_tower_victory() {
    let mut game = game(
        "
        .  D0 .  .
        D0 T1 .  P1
        .  D0 .  D0
        ",
        1,
    );
    let result = play(&mut game, P1, "d1c2").unwrap();
    assert_eq!(result.action.to_string(), "d1c1c2");
    assert_eq!(result.winner, won(P1, VictoryKind::Tower));
    assert!(game.is_over());
    assert!(matches!(play(&mut game, P1, "a1"), Err(BoostError::GameOver)));
}

#[test]
fn debug_tower_victory_can_be_disabled() {
    let rules = Rules {
        tower_victory: false,
        ..Rules::default()
    };
    let mut game = GameState::from_layout(
        "
        .  D0 .  .
        D0 T1 .  P1
        .  D0 .  D0
        ",
        1,
        rules,
    )
    .unwrap();
    let result = play(&mut game, P1, "d1c2").unwrap();
    assert_eq!(result.winner, None);
    assert_eq!(game.active_player(), Some(P1));
}

/// Flanking a tower against a dragon leaves P2 with a lone pawn.
#[test]
fn debug_capture_tower() {
    let mut game = game(
        "
        P1 T1
        .  .
        P2 T2
        .  D0
        ",
        2,
    );
    let result = play(&mut game, P1, "a4b3").unwrap();
    assert_eq!(result.captures, vec![pt("b2")]);
    assert_eq!(result.winner, won(P1, VictoryKind::Capture));
    assert!(game.is_defeated(P2));
}

/// Taking one pawn drops P2 below the piece minimum.
#[test]
fn debug_capture_pawn() {
    let mut game = game(
        "
        P1 .  .  .
        P2 P2 P2 P2
        P1 P1 P1 P1
        ",
        2,
    );
    let result = play(&mut game, P1, "a3c3").unwrap();
    assert_eq!(result.captures, vec![pt("c2")]);
    assert_eq!(game.board().piece_count(P2), 3);
    assert_eq!(result.winner, won(P1, VictoryKind::Capture));
}

/// The dragon lands where it would complete three tower rings, but its
/// captures remove those towers first.
#[test]
fn debug_triple_defeat_resolves_captures_first() {
    let mut game = game(
        "
        P1 D0 .  T1 P3
        P2 D0 .  D0 P4
        D0 T2 .  T3 D0
        .  D0 T4 D0 .
        .  .  D0 .  .
        ",
        4,
    );
    let result = play(&mut game, P1, "b5c3").unwrap();
    let mut captures = result.captures.clone();
    captures.sort();
    assert_eq!(captures, vec![pt("b3"), pt("c2"), pt("d3")]);
    assert_eq!(result.winner, won(P1, VictoryKind::Capture));
}

/// P2 is knocked out; the turn goes past them to P3.
#[test]
fn debug_defeated_player_is_skipped() {
    let mut game = game(
        "
        P1 T1 P3
        .  .  .
        P2 T2 .
        .  D0 T3
        ",
        3,
    );
    let result = play(&mut game, P1, "a4b3").unwrap();
    assert_eq!(result.captures, vec![pt("b2")]);
    assert_eq!(result.winner, None);
    assert_eq!(result.passes, vec![P2]);
    assert_eq!(game.active_player(), Some(P3));
    assert!(game.is_defeated(P2));
    assert!(game.legal_actions(P2).is_empty());
}

// ===========================================================================
// CAPTURES
// ===========================================================================

#[test]
fn pawn_flanks_on_two_axes() {
    let mut game = game(
        "
        .  .  P1 .  .  P2
        .  .  P2 .  .  P2
        P1 P2 .  .  .  P2
        .  .  .  .  .  P2
        .  .  P1 P1 .  .
        ",
        2,
    );
    let result = play(&mut game, P1, "c1c3").unwrap();
    assert_eq!(result.action.to_string(), "c1c2c3");
    assert_eq!(result.captures, vec![pt("c4"), pt("b3")]);
    assert_eq!(game.board().piece_count(P2), 4);
    assert_eq!(game.active_player(), Some(P2));
}

#[test]
fn knight_captures_a_tower_by_landing() {
    let mut game = game(
        "
        P1 P1 P1 .  .
        K1 .  T2 P2 .
        .  .  .  .  .
        ",
        2,
    );
    let result = play(&mut game, P1, "a2c2").unwrap();
    assert_eq!(result.captures, vec![pt("c2")]);
    assert_eq!(
        game.board().piece_at(pt("c2")).map(|p| p.code()),
        Some("K1".to_string())
    );
    assert_eq!(result.winner, won(P1, VictoryKind::Capture));
}

#[test]
fn pawns_cannot_land_on_pieces() {
    let mut game = game(
        "
        P2 P2 P2 P2 P1
        .  .  .  .  .
        P1 P1 .  P2 .
        P1 .  .  .  .
        ",
        2,
    );
    let err = play(&mut game, P1, "b2c2d2").unwrap_err();
    assert_eq!(err.reason(), Some(IllegalMoveReason::NoDirectCapture));
}

/// Two-player end to end: a boosted pawn from a1 flanks an opponent pawn,
/// which stays gone for the rest of the game.
#[test]
fn captured_pieces_never_return() {
    let mut game = game(
        "
        .  .  P2 P2 P2 P2
        .  P2 P1 .  .  .
        .  .  .  .  .  .
        P1 P1 .  .  .  P1
        ",
        2,
    );
    let before = game.board().position().occupied();
    let result = play(&mut game, P1, "a1a3").unwrap();
    assert_eq!(result.captures, vec![pt("b3")]);
    assert!(game.board().piece_at(pt("b3")).is_none());

    play(&mut game, P2, "f4f3f2").unwrap();
    let actions = game.legal_actions(P1);
    game.apply_action(P1, actions[0].clone()).unwrap();

    for position in &game.history()[1..] {
        assert_eq!(position.occupied(), before - 1);
    }
    assert_eq!(game.board().piece_count(P2), 4);
}

// ===========================================================================
// BUILDING AND PROMOTION
// ===========================================================================

#[test]
fn third_tower_is_refused() {
    let layout = "
        T1 T1 .  P2 P2 P2
        .  P1 .  .  .  P2
        P1 .  P1 .  .  .
        .  P1 .  .  .  .
        .  .  .  .  .  .
        ";
    let mut game = game(layout, 2);
    let err = play(&mut game, P1, "b3").unwrap_err();
    assert_eq!(err.reason(), Some(IllegalMoveReason::CannotBuildOrPromote));
    assert!(!game.legal_actions(P1).contains(&Action::Build(pt("b3"))));

    let mut relaxed = GameState::from_layout(
        layout,
        2,
        Rules {
            max_towers: 3,
            ..Rules::default()
        },
    )
    .unwrap();
    play(&mut relaxed, P1, "b3").unwrap();
    assert_eq!(relaxed.board().tower_count(P1), 3);
}

#[test]
fn promotion_is_capped_by_towers() {
    let mut game = game(
        "
        K1 T1 P1 .  .
        .  .  .  .  .
        P2 P2 P2 P2 .
        ",
        2,
    );
    let err = play(&mut game, P1, "c3").unwrap_err();
    assert_eq!(err.reason(), Some(IllegalMoveReason::CannotBuildOrPromote));

    let mut fresh = self::game(
        "
        P1 T1 P1 .  .
        .  .  .  .  .
        P2 P2 P2 P2 .
        ",
        2,
    );
    play(&mut fresh, P1, "a3").unwrap();
    assert_eq!(fresh.board().knight_count(P1), 1);
    assert!(fresh
        .legal_actions(P1)
        .iter()
        .all(|a| !matches!(a, Action::Promote(_))));
}

// ===========================================================================
// REPETITION
// ===========================================================================

fn spread_out() -> GameState {
    game(
        "
        P2 .  .  P2 .  .  P2 .  .  P2
        .  .  .  .  .  .  .  .  .  .
        P1 .  .  P1 .  .  P1 .  .  P1
        ",
        2,
    )
}

#[test]
fn repeating_a_position_is_refused_when_avoidable() {
    let mut game = spread_out();
    play(&mut game, P1, "a1b1").unwrap();
    play(&mut game, P2, "a3b3").unwrap();
    play(&mut game, P1, "b1a1").unwrap();

    // b3a3 would recreate the starting position.
    let err = play(&mut game, P2, "b3a3").unwrap_err();
    assert_eq!(err.reason(), Some(IllegalMoveReason::Repetition));
    let back = parse_action(game.board(), P2, "b3a3").unwrap();
    assert!(!game.legal_actions(P2).contains(&back));

    play(&mut game, P2, "b3c3").unwrap();
    assert_eq!(game.active_player(), Some(P1));
}

#[test]
fn repeating_is_allowed_without_alternatives() {
    let rules = Rules {
        knights_per_tower: 0,
        ..Rules::default()
    };
    let mut game = GameState::from_layout(
        "
        T1 .
        P1 .
        ",
        1,
        rules,
    )
    .unwrap();
    play(&mut game, P1, "a1b2").unwrap();
    // The only way back out recreates the starting position.
    assert_eq!(game.legal_actions(P1).len(), 1);
    let result = play(&mut game, P1, "b2a1").unwrap();
    assert_eq!(result.action.to_string(), "b2b1a1");
    assert_eq!(game.history().first(), game.history().last());
}

// ===========================================================================
// TURNS, FORFEIT AND VICTORY
// ===========================================================================

#[test]
fn forfeit_leaves_the_last_player_standing() {
    let mut game = game(
        "
        P1 P1 P1 P1 .  .
        .  .  .  .  .  .
        P2 P2 P2 P2 .  .
        .  .  .  .  .  .
        P3 P3 P3 P3 .  .
        ",
        3,
    );
    game.forfeit(P2).unwrap();
    assert_eq!(game.active_player(), Some(P1));
    play(&mut game, P1, "d5e5f5").unwrap();
    assert_eq!(game.active_player(), Some(P3));

    game.forfeit(P3).unwrap();
    assert_eq!(
        game.status(),
        GameStatus::Won(Victory {
            player: P1,
            kind: VictoryKind::Capture
        })
    );
    assert!(matches!(game.forfeit(P1), Err(BoostError::GameOver)));
}

#[test]
fn three_dragons_leave_only_capture_victory() {
    let mut game = game(
        "
        P1 .  .  .  .  .
        P2 P2 P2 P2 .  D0
        P1 P1 P1 P1 D0 T1
        .  .  .  .  .  D0
        ",
        2,
    );
    assert!(game.board().dragon_count() <= 3);
    let result = play(&mut game, P1, "a4c4").unwrap();
    assert_eq!(result.winner, won(P1, VictoryKind::Capture));
}

#[test]
fn out_of_turn_and_unseated_players() {
    let mut game = spread_out();
    assert!(matches!(
        play(&mut game, P2, "a3b3"),
        Err(BoostError::NotYourTurn { player: P2, active: P1 })
    ));
    assert!(matches!(
        game.apply_action(P3, Action::Build(pt("b2"))),
        Err(BoostError::UnknownPlayer(P3))
    ));
}

#[test]
fn far_off_grid_points_still_format() {
    let mut game = game(
        "
        .  .  .  .  .
        .  P1 P1 P1 .
        .  .  P1 .  .
        ",
        1,
    );
    let err = game
        .apply_action(P1, Action::Build(Point::new(200, 0)))
        .unwrap_err();
    assert_eq!(err.reason(), Some(IllegalMoveReason::OffGrid));
    assert_eq!(err.to_string(), "illegal action at #200-1: the path leaves the board");
    assert_eq!(game.history().len(), 1);
}

/// Playing the first legal action every turn never breaks the rules'
/// bookkeeping.
#[test]
fn first_action_playout_keeps_invariants() {
    let mut game = new_game(2, 9, Some(7), 42).unwrap();
    assert_eq!(game.board().dragon_count(), 7);
    for _ in 0..60 {
        let Some(player) = game.active_player() else {
            break;
        };
        let actions = game.legal_actions(player);
        assert!(!actions.is_empty());
        game.apply_action(player, actions[0].clone()).unwrap();
        for seat in game.players() {
            assert!(game.board().tower_count(seat.id) <= game.rules().max_towers);
        }
    }
}

#[test]
fn seeds_are_reproducible() {
    let a = new_game(2, 7, Some(7), 9).unwrap();
    let b = new_game(2, 7, Some(7), 9).unwrap();
    assert_eq!(a.board(), b.board());
    assert!(matches!(new_game(5, 9, None, 0), Err(BoostError::Config(_))));
}
