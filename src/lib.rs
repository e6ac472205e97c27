//! Boost rules engine library.
//!
//! Exposes the board representation, move generation, action resolution,
//! the game state machine, setup presets, and text protocol modules for use
//! by front ends and integration tests.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod protocol;
pub mod registry;
pub mod resolve;
pub mod ruleset;

pub use board::{Action, Board, Path, Piece, PieceKind, PlayerId, Point, Position};
pub use error::{BoostError, IllegalMoveReason};
pub use game::{ActionResult, GameState, GameStatus, Player};
pub use protocol::{render_view, BoardView};
pub use registry::GameTable;
pub use resolve::{Victory, VictoryKind};
pub use ruleset::{new_game, Preset, Rules, Ruleset};
