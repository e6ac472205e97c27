//! Game state and the turn machine.
//!
//! A `GameState` owns the board, the seats, and every position seen so far.
//! All mutation goes through `apply_action` and `forfeit`; each either
//! succeeds completely or returns an error with the state untouched.

use std::collections::HashSet;
use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::board::{Action, Board, PlayerId, Point, Position};
use crate::error::{describe, BoostError};
use crate::movegen;
use crate::protocol::layout::parse_layout;
use crate::resolve::{self, victory, Victory, VictoryKind};
use crate::ruleset::Rules;

/// A seat at the table. Material is read from the board, never cached here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub forfeited: bool,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Player {
            id,
            forfeited: false,
        }
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Waiting for this player's action.
    Active(PlayerId),
    /// Finished with a winner.
    Won(Victory),
    /// Finished because nobody left in the game can act.
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Active(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active(player) => write!(f, "{} to play", player),
            GameStatus::Won(victory) => write!(f, "{}", victory),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// What an applied action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub action: Action,
    /// Points whose pieces were captured, in resolution order.
    pub captures: Vec<Point>,
    /// Players who had to pass before the next active player, in turn order.
    pub passes: Vec<PlayerId>,
    pub winner: Option<Victory>,
}

/// A game in progress or finished.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rules: Rules,
    players: Vec<Player>,
    status: GameStatus,
    history: Vec<Position>,
    seen: HashSet<Position>,
}

impl GameState {
    /// Starts a game on `board` with `players` seats.
    ///
    /// Fails if there are no seats or a piece belongs to a player who is not
    /// seated. The first player able to act is active; anyone before them
    /// passes.
    pub fn new(board: Board, players: u8, rules: Rules) -> Result<Self, BoostError> {
        if players == 0 {
            return Err(BoostError::Config("a game needs at least one player".to_string()));
        }
        if let Some((point, piece)) = board
            .pieces()
            .find(|(_, piece)| matches!(piece.owner, Some(owner) if owner.0 >= players))
        {
            return Err(BoostError::Config(format!(
                "{} on {} belongs to no seated player ({} seats)",
                describe(piece),
                point,
                players
            )));
        }

        let initial = board.position();
        let mut game = GameState {
            board,
            rules,
            players: (0..players).map(|i| Player::new(PlayerId(i))).collect(),
            status: GameStatus::Stalemate,
            history: Vec::new(),
            seen: HashSet::new(),
        };
        game.record(initial);
        match game.check_victory() {
            Some(victory) => game.status = GameStatus::Won(victory),
            None => {
                game.advance_from(0);
            }
        }
        Ok(game)
    }

    /// Starts a game from a board layout.
    pub fn from_layout(text: &str, players: u8, rules: Rules) -> Result<Self, BoostError> {
        let board = parse_layout(text)?;
        GameState::new(board, players, rules)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_player(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Active(player) => Some(player),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Victory> {
        match self.status {
            GameStatus::Won(victory) => Some(victory),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Every position so far, oldest first: the initial one, then one per
    /// action or pass.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Whether `player` is out of the game, by defeat or forfeit.
    pub fn is_defeated(&self, player: PlayerId) -> bool {
        match self.players.get(player.index()) {
            Some(seat) => victory::is_out(&self.board, &self.rules, seat),
            None => false,
        }
    }

    /// The actions `player` could take on the current board.
    ///
    /// Empty once the game is over, for players who are out, and for players
    /// with nothing to do. Turn order is not considered.
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.is_over() || self.seat(player).is_err() || self.is_defeated(player) {
            return Vec::new();
        }
        movegen::legal_actions(&self.board, &self.rules, player, &self.seen)
    }

    /// Checks whether `player` may take `action` now, without applying it.
    pub fn validate(&self, player: PlayerId, action: &Action) -> Result<(), BoostError> {
        self.check_turn(player)?;
        movegen::validate(&self.board, &self.rules, player, action)?;
        movegen::check_repetition(&self.board, &self.rules, player, action, &self.seen)
    }

    /// Applies one action for the active player, resolves its effects, checks
    /// for victory, and passes the turn on.
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<ActionResult, BoostError> {
        self.validate(player, &action)?;
        let seat = self.seat(player)?;

        let mut next = self.board.clone();
        let captures = resolve::commit(&mut next, player, &action)?;
        if let Some(piece) = self.board.piece_at(action.origin()) {
            debug!("{} plays {} with {}", player, action, describe(piece));
        } else {
            debug!("{} builds on {}", player, action);
        }
        for point in &captures {
            if let Some(piece) = self.board.piece_at(*point) {
                debug!("{} captured on {}", describe(piece), point);
            }
        }

        self.board = next;
        let position = self.board.position();
        self.record(position);

        let winner = self.check_victory();
        let passes = match winner {
            Some(victory) => {
                info!("{}", victory);
                self.status = GameStatus::Won(victory);
                Vec::new()
            }
            None => self.advance_from(seat + 1),
        };

        Ok(ActionResult {
            action,
            captures,
            passes,
            winner,
        })
    }

    /// Withdraws `player` from the game for good.
    ///
    /// Forfeiting twice is a no-op. If the forfeiting player was active the
    /// turn moves on.
    pub fn forfeit(&mut self, player: PlayerId) -> Result<(), BoostError> {
        if self.is_over() {
            return Err(BoostError::GameOver);
        }
        let seat = self.seat(player)?;
        if self.players[seat].forfeited {
            return Ok(());
        }
        self.players[seat].forfeited = true;
        info!("{} forfeits", player);

        if let Some(winner) = victory::capture_winner(&self.board, &self.rules, &self.players) {
            let victory = Victory {
                player: winner,
                kind: VictoryKind::Capture,
            };
            info!("{}", victory);
            self.status = GameStatus::Won(victory);
        } else if self.active_player() == Some(player) {
            self.advance_from(seat + 1);
        }
        Ok(())
    }

    fn seat(&self, player: PlayerId) -> Result<usize, BoostError> {
        let seat = player.index();
        if seat < self.players.len() {
            Ok(seat)
        } else {
            Err(BoostError::UnknownPlayer(player))
        }
    }

    fn check_turn(&self, player: PlayerId) -> Result<(), BoostError> {
        let active = match self.status {
            GameStatus::Active(active) => active,
            _ => return Err(BoostError::GameOver),
        };
        self.seat(player)?;
        if player != active {
            return Err(BoostError::NotYourTurn { player, active });
        }
        Ok(())
    }

    fn record(&mut self, position: Position) {
        self.seen.insert(position.clone());
        self.history.push(position);
    }

    /// Capture victory first, then tower victory.
    fn check_victory(&self) -> Option<Victory> {
        if let Some(player) = victory::capture_winner(&self.board, &self.rules, &self.players) {
            return Some(Victory {
                player,
                kind: VictoryKind::Capture,
            });
        }
        if !self.rules.tower_victory {
            return None;
        }
        resolve::tower_winner(&self.board).map(|player| Victory {
            player,
            kind: VictoryKind::Tower,
        })
    }

    fn can_act(&self, seat: usize) -> bool {
        let player = &self.players[seat];
        !victory::is_out(&self.board, &self.rules, player)
            && movegen::has_any_action(&self.board, &self.rules, player.id)
    }

    /// Makes the first player from `seat` onward who can act the active one.
    /// Everyone skipped passes, and each pass is recorded. If a full round
    /// finds nobody, the game is a stalemate.
    fn advance_from(&mut self, seat: usize) -> Vec<PlayerId> {
        let count = self.players.len();
        let mut passes = Vec::new();
        for offset in 0..count {
            let idx = (seat + offset) % count;
            if self.can_act(idx) {
                self.status = GameStatus::Active(self.players[idx].id);
                return passes;
            }
            let id = self.players[idx].id;
            debug!("{} passes", id);
            passes.push(id);
            let position = self.board.position();
            self.record(position);
        }
        info!("no player can act, stalemate");
        self.status = GameStatus::Stalemate;
        passes
    }
}
