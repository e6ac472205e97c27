//! Game setup: rule knobs, rulesets, presets, and dragon placement.
//!
//! A ruleset pairs a starting layout with a seat count and the number of
//! dragons to scatter. Rulesets are plain serde data so hosts can load
//! custom ones from JSON.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Piece, Point};
use crate::error::BoostError;
use crate::game::GameState;
use crate::protocol::layout::parse_layout;

/// Numeric limits of the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Towers a player may own at once.
    pub max_towers: usize,
    /// Knights allowed per tower owned, checked when promoting.
    pub knights_per_tower: usize,
    /// A player without towers is defeated below this many pieces.
    pub min_pieces: usize,
    /// Whether a tower surrounded by four dragons wins the game.
    pub tower_victory: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            max_towers: 2,
            knights_per_tower: 1,
            min_pieces: 4,
            tower_victory: true,
        }
    }
}

/// A complete game setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    pub name: String,
    /// Starting layout in board layout notation, top rank first.
    pub layout: String,
    pub players: u8,
    /// Dragons placed at random (mirrored) when the game starts.
    #[serde(default)]
    pub dragons: u8,
    #[serde(default)]
    pub rules: Rules,
}

impl Ruleset {
    /// Parses a ruleset from JSON.
    pub fn from_json(s: &str) -> Result<Self, BoostError> {
        serde_json::from_str(s).map_err(|e| BoostError::Config(format!("bad ruleset JSON: {}", e)))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Builds the starting board, placing dragons with a generator seeded
    /// from `seed`. The same seed always yields the same board.
    pub fn create_board(&self, seed: u64) -> Result<Board, BoostError> {
        let mut board = parse_layout(&self.layout)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        place_dragons(&mut board, self.dragons as usize, &mut rng)?;
        Ok(board)
    }

    pub fn create_game(&self, seed: u64) -> Result<GameState, BoostError> {
        let board = self.create_board(seed)?;
        GameState::new(board, self.players, self.rules)
    }
}

const SOLO_BOARD: &str = "
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
P1 P1 P1 P1 .  P1 P1 P1 P1
";

const TWO_PLAYER_BOARD: &str = "
P2 P2 P2 P2 .  P2 P2 P2 P2
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
P1 P1 P1 P1 .  P1 P1 P1 P1
";

const TWO_PLAYER_MINI_BOARD: &str = "
.  .  .  P2 P2 P2 P2
.  .  .  .  .  .  .
.  .  .  .  .  .  .
.  .  .  .  .  .  .
.  .  .  .  .  .  .
.  .  .  .  .  .  .
P1 P1 P1 P1 .  .  .
";

const TWO_PLAYER_QUICKSTART_BOARD: &str = "
.  .  P2 .  .  .  P2 .  .
.  P2 T2 P2 .  P2 T2 P2 .
.  .  P2 .  .  .  P2 .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  P1 .  .  .  P1 .  .
.  P1 T1 P1 .  P1 T1 P1 .
.  .  P1 .  .  .  P1 .  .
";

const THREE_PLAYER_BOARD: &str = "
P2 P2 P2 P2 .  P3 P3 P3 P3
.  .  .  .  .  .  .  .  .
P2 .  .  .  .  .  .  .  P3
P2 .  .  .  .  .  .  .  P3
P2 .  .  .  .  .  .  .  P3
P2 .  .  .  .  .  .  .  P3
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
P1 P1 P1 P1 .  P1 P1 P1 P1
";

const FOUR_PLAYER_BOARD: &str = "
P2 P2 P2 P2 .  P4 P4 P4 P4
.  .  .  .  .  .  .  .  .
P2 .  .  .  .  .  .  .  P4
P2 .  .  .  .  .  .  .  P4
.  .  .  .  .  .  .  .  .
P1 .  .  .  .  .  .  .  P3
P1 .  .  .  .  .  .  .  P3
.  .  .  .  .  .  .  .  .
P1 P1 P1 P1 .  P3 P3 P3 P3
";

const FOUR_PLAYER_MINIMAL_BOARD: &str = "
P2 .  .  .  .  P3 P3 P3 P3
P2 .  .  .  .  .  .  .  .
P2 .  .  .  .  .  .  .  .
P2 .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  .
.  .  .  .  .  .  .  .  P4
.  .  .  .  .  .  .  .  P4
.  .  .  .  .  .  .  .  P4
P1 P1 P1 P1 .  .  .  .  P4
";

/// Number of dragons in the standard rulesets.
pub const STANDARD_DRAGONS: u8 = 7;

/// The built-in rulesets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Solo,
    TwoPlayer,
    TwoPlayerDragonless,
    TwoPlayerMini,
    TwoPlayerMiniDragonless,
    TwoPlayerQuickstart,
    ThreePlayer,
    FourPlayer,
    FourPlayerMinimal,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Solo,
        Preset::TwoPlayer,
        Preset::TwoPlayerDragonless,
        Preset::TwoPlayerMini,
        Preset::TwoPlayerMiniDragonless,
        Preset::TwoPlayerQuickstart,
        Preset::ThreePlayer,
        Preset::FourPlayer,
        Preset::FourPlayerMinimal,
    ];

    pub fn ruleset(self) -> Ruleset {
        let (name, layout, players, dragons) = match self {
            Preset::Solo => ("solo", SOLO_BOARD, 1, STANDARD_DRAGONS),
            Preset::TwoPlayer => ("p2", TWO_PLAYER_BOARD, 2, STANDARD_DRAGONS),
            Preset::TwoPlayerDragonless => ("p2-dragonless", TWO_PLAYER_BOARD, 2, 0),
            Preset::TwoPlayerMini => ("p2-mini", TWO_PLAYER_MINI_BOARD, 2, STANDARD_DRAGONS),
            Preset::TwoPlayerMiniDragonless => ("p2-mini-dragonless", TWO_PLAYER_MINI_BOARD, 2, 0),
            Preset::TwoPlayerQuickstart => {
                ("p2-quickstart", TWO_PLAYER_QUICKSTART_BOARD, 2, STANDARD_DRAGONS)
            }
            Preset::ThreePlayer => ("p3", THREE_PLAYER_BOARD, 3, STANDARD_DRAGONS),
            Preset::FourPlayer => ("p4", FOUR_PLAYER_BOARD, 4, STANDARD_DRAGONS),
            Preset::FourPlayerMinimal => {
                ("p4-minimal", FOUR_PLAYER_MINIMAL_BOARD, 4, STANDARD_DRAGONS)
            }
        };
        Ruleset {
            name: name.to_string(),
            layout: layout.to_string(),
            players,
            dragons,
            rules: Rules::default(),
        }
    }

    /// Looks a preset up by its ruleset name, e.g. `p2-mini`.
    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL
            .into_iter()
            .find(|p| p.ruleset().name.eq_ignore_ascii_case(name))
    }
}

/// Starts a standard game.
///
/// `board_size` is the side length of the square board (9, or 7 for the
/// two-player mini board). `dragons` of None means no dragons.
pub fn new_game(
    player_count: u8,
    board_size: u8,
    dragons: Option<u8>,
    seed: u64,
) -> Result<GameState, BoostError> {
    let preset = match (player_count, board_size) {
        (1, 9) => Preset::Solo,
        (2, 9) => Preset::TwoPlayer,
        (2, 7) => Preset::TwoPlayerMini,
        (3, 9) => Preset::ThreePlayer,
        (4, 9) => Preset::FourPlayer,
        _ => {
            return Err(BoostError::Config(format!(
                "no standard layout for {} player(s) on a {}x{} board",
                player_count, board_size, board_size
            )))
        }
    };
    let mut ruleset = preset.ruleset();
    ruleset.dragons = dragons.unwrap_or(0);
    ruleset.create_game(seed)
}

/// Scatters `count` dragons point-symmetrically about the board center.
///
/// An odd count puts one dragon on the center, which must then be empty
/// and exist (both dimensions odd). The rest go in mirrored pairs: a random
/// empty point in the upper half and its mirror image.
pub fn place_dragons(
    board: &mut Board,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), BoostError> {
    if count == 0 {
        return Ok(());
    }
    let files = board.files();
    let ranks = board.ranks();

    let mut remaining = count;
    if count % 2 != 0 {
        if files % 2 == 0 || ranks % 2 == 0 {
            return Err(BoostError::Config(
                "an odd number of dragons needs a board with a center point".to_string(),
            ));
        }
        let center = Point::new(files / 2, ranks / 2);
        if board.is_occupied(center) {
            return Err(BoostError::Config(
                "cannot place an odd number of dragons on this board (center must be empty)"
                    .to_string(),
            ));
        }
        board.place(Piece::DRAGON, center)?;
        remaining -= 1;
    }

    let upper_start = ranks - ranks / 2;
    let mut available: Vec<Point> = (upper_start..ranks)
        .flat_map(|rank| (0..files).map(move |file| Point::new(file, rank)))
        .filter(|p| !board.is_occupied(*p))
        .collect();

    while remaining > 0 {
        if available.is_empty() {
            return Err(BoostError::Config(format!(
                "not enough room to place {} dragons",
                count
            )));
        }
        let point = available.swap_remove(rng.gen_range(0..available.len()));
        let mirror = Point::new(files - 1 - point.file, ranks - 1 - point.rank);
        if board.is_occupied(mirror) {
            continue;
        }
        board.place(Piece::DRAGON, point)?;
        board.place(Piece::DRAGON, mirror)?;
        remaining -= 2;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PlayerId;

    #[test]
    fn default_rules_match_the_standard_game() {
        let rules = Rules::default();
        assert_eq!(rules.max_towers, 2);
        assert_eq!(rules.knights_per_tower, 1);
        assert_eq!(rules.min_pieces, 4);
        assert!(rules.tower_victory);
    }

    #[test]
    fn presets_parse() {
        for preset in Preset::ALL {
            let ruleset = preset.ruleset();
            let board = parse_layout(&ruleset.layout).unwrap();
            for player in 0..ruleset.players {
                assert!(board.piece_count(PlayerId(player)) >= 4, "{}", ruleset.name);
            }
            assert_eq!(Preset::from_name(&ruleset.name), Some(preset));
        }
    }

    #[test]
    fn dragons_are_symmetric_and_counted() {
        let ruleset = Preset::TwoPlayer.ruleset();
        let board = ruleset.create_board(7).unwrap();
        assert_eq!(board.dragon_count(), 7);
        assert_eq!(board.piece_at(Point::new(4, 4)), Some(Piece::DRAGON));
        for (point, piece) in board.pieces() {
            if piece.is_dragon() {
                let mirror = Point::new(8 - point.file, 8 - point.rank);
                assert_eq!(board.piece_at(mirror), Some(Piece::DRAGON));
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let ruleset = Preset::ThreePlayer.ruleset();
        assert_eq!(ruleset.create_board(99).unwrap(), ruleset.create_board(99).unwrap());
    }

    #[test]
    fn even_dragon_count_leaves_center_empty() {
        let mut ruleset = Preset::TwoPlayerMini.ruleset();
        ruleset.dragons = 4;
        let board = ruleset.create_board(1).unwrap();
        assert_eq!(board.dragon_count(), 4);
        assert!(board.piece_at(Point::new(3, 3)).is_none());
    }

    #[test]
    fn too_many_dragons_is_a_config_error() {
        let mut board = Board::empty(3, 3).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(matches!(
            place_dragons(&mut board, 9, &mut rng),
            Err(BoostError::Config(_))
        ));
    }

    #[test]
    fn new_game_rejects_unknown_combinations() {
        assert!(new_game(2, 9, Some(7), 1).is_ok());
        assert!(new_game(2, 7, None, 1).is_ok());
        assert!(matches!(new_game(3, 7, None, 1), Err(BoostError::Config(_))));
        assert!(matches!(new_game(5, 9, None, 1), Err(BoostError::Config(_))));
    }

    #[test]
    fn dragonless_game_has_no_dragons() {
        let game = new_game(2, 9, None, 3).unwrap();
        assert_eq!(game.board().dragon_count(), 0);
    }

    #[test]
    fn ruleset_json_roundtrip_with_defaults() {
        let json = r#"{"name": "tiny", "layout": "P1 . P2", "players": 2}"#;
        let ruleset = Ruleset::from_json(json).unwrap();
        assert_eq!(ruleset.dragons, 0);
        assert_eq!(ruleset.rules, Rules::default());

        let back = Ruleset::from_json(&ruleset.to_json().unwrap()).unwrap();
        assert_eq!(back, ruleset);
        assert!(Ruleset::from_json("{").is_err());
    }

    #[test]
    fn partial_rules_fill_in_defaults() {
        let json = r#"{"name": "x", "layout": "P1", "players": 1,
            "rules": {"tower_victory": false}}"#;
        let ruleset = Ruleset::from_json(json).unwrap();
        assert!(!ruleset.rules.tower_victory);
        assert_eq!(ruleset.rules.max_towers, 2);
    }
}
