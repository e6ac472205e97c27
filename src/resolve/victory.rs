//! Defeat and victory detection.

use std::fmt;

use serde::Serialize;

use crate::board::{neighbors, Board, PieceKind, PlayerId};
use crate::game::Player;
use crate::ruleset::Rules;

/// How a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VictoryKind {
    /// A tower of the winner is surrounded by four dragons.
    Tower,
    /// Every other player is defeated or has forfeited.
    Capture,
}

/// The winner of a game and how they won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Victory {
    pub player: PlayerId,
    pub kind: VictoryKind,
}

impl fmt::Display for Victory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let how = match self.kind {
            VictoryKind::Tower => "tower",
            VictoryKind::Capture => "capture",
        };
        write!(f, "{} wins by {} victory", self.player, how)
    }
}

/// Whether `player` is defeated by material alone.
///
/// A player with towers is defeated once towers are all they have left. A
/// player without towers is defeated below `rules.min_pieces` pieces, too
/// few to surround a point for a new tower.
pub fn is_defeated(board: &Board, rules: &Rules, player: PlayerId) -> bool {
    let pieces = board.piece_count(player);
    let towers = board.tower_count(player);
    if towers > 0 {
        towers == pieces
    } else {
        pieces < rules.min_pieces
    }
}

/// Whether `player` is out of the game, by defeat or forfeit.
pub fn is_out(board: &Board, rules: &Rules, player: &Player) -> bool {
    player.forfeited || is_defeated(board, rules, player.id)
}

/// The sole remaining player, if everyone else is out.
///
/// Needs at least two seats; a solo game is only won by tower victory.
pub fn capture_winner(board: &Board, rules: &Rules, players: &[Player]) -> Option<PlayerId> {
    if players.len() < 2 {
        return None;
    }
    let mut standing = players.iter().filter(|p| !is_out(board, rules, p));
    let winner = standing.next()?;
    match standing.next() {
        None => Some(winner.id),
        Some(_) => None,
    }
}

/// The owner of a tower whose four neighbors are all dragons.
pub fn tower_winner(board: &Board) -> Option<PlayerId> {
    board
        .pieces()
        .filter(|(_, piece)| piece.kind == PieceKind::Tower)
        .find(|(point, _)| {
            let mut count = 0;
            let surrounded = neighbors(board, *point).all(|n| {
                count += 1;
                matches!(board.piece_at(n), Some(p) if p.is_dragon())
            });
            surrounded && count == 4
        })
        .and_then(|(_, tower)| tower.owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::layout::parse_layout;

    const P1: PlayerId = PlayerId(0);
    const P2: PlayerId = PlayerId(1);
    const P3: PlayerId = PlayerId(2);

    fn seats(n: u8) -> Vec<Player> {
        (0..n).map(|i| Player::new(PlayerId(i))).collect()
    }

    #[test]
    fn defeat_thresholds() {
        let rules = Rules::default();
        let board = parse_layout("P1 P1 P1 P1 P2 P2 P2 T3 T3").unwrap();
        assert!(!is_defeated(&board, &rules, P1));
        assert!(is_defeated(&board, &rules, P2));
        assert!(is_defeated(&board, &rules, P3));

        let with_tower = parse_layout("T1 P1").unwrap();
        assert!(!is_defeated(&with_tower, &rules, P1));
    }

    #[test]
    fn capture_victory_needs_a_single_survivor() {
        let rules = Rules::default();
        let board = parse_layout("P1 P1 P1 P1 P2 P2 P2 P2 P3").unwrap();
        let mut players = seats(3);
        assert_eq!(capture_winner(&board, &rules, &players), None);

        players[1].forfeited = true;
        assert_eq!(capture_winner(&board, &rules, &players), Some(P1));
    }

    #[test]
    fn solo_games_have_no_capture_victory() {
        let rules = Rules::default();
        let board = parse_layout("P1 P1 P1 P1").unwrap();
        assert_eq!(capture_winner(&board, &rules, &seats(1)), None);
    }

    #[test]
    fn tower_surrounded_by_dragons() {
        let board = parse_layout(
            "
            .  D0 .
            D0 T2 D0
            .  D0 P1
            ",
        )
        .unwrap();
        assert_eq!(tower_winner(&board), Some(P2));

        let open = parse_layout(
            "
            .  D0 .
            D0 T2 D0
            .  P1 .
            ",
        )
        .unwrap();
        assert_eq!(tower_winner(&open), None);
    }

    #[test]
    fn tower_on_the_edge_cannot_be_surrounded() {
        let board = parse_layout(
            "
            D0 T1 D0
            .  D0 .
            ",
        )
        .unwrap();
        assert_eq!(tower_winner(&board), None);
    }

    #[test]
    fn victory_display() {
        let victory = Victory {
            player: P2,
            kind: VictoryKind::Tower,
        };
        assert_eq!(victory.to_string(), "player 2 wins by tower victory");
    }
}
