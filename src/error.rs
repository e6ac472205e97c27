//! Error types for rule violations and bad setup.
//!
//! Every failure leaves the game untouched: callers can show the message
//! and ask for another action.

use crate::board::{Piece, PlayerId, Point};
use crate::protocol::layout::LayoutError;
use crate::protocol::notation::NotationError;

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveReason {
    #[error("there is no piece to move")]
    EmptyStart,

    #[error("this piece must move exactly {expected} step(s), not {actual}")]
    WrongStepCount { expected: usize, actual: usize },

    #[error("each step must go to an orthogonally adjacent point")]
    NotAdjacent,

    #[error("the path leaves the board")]
    OffGrid,

    #[error("the path is blocked by another piece")]
    Blocked,

    #[error("a path may not cross itself")]
    SelfIntersecting,

    #[error("this would repeat an earlier position")]
    Repetition,

    #[error("you may not move this piece")]
    WrongMover,

    #[error("towers cannot move")]
    CannotMove,

    #[error("you can neither build a tower nor promote a pawn here")]
    CannotBuildOrPromote,

    #[error("you cannot capture your own piece")]
    CannotCaptureOwn,

    #[error("dragons cannot be captured")]
    DragonNotCapturable,

    #[error("only knights capture by landing on a piece")]
    NoDirectCapture,
}

/// Errors returned by board, game, and setup operations.
#[derive(Debug, thiserror::Error)]
pub enum BoostError {
    #[error("{0} is off the board")]
    PointOutOfRange(Point),

    #[error("{0} is already occupied")]
    Occupied(Point),

    #[error("illegal action at {point}: {reason}")]
    IllegalMove {
        reason: IllegalMoveReason,
        point: Point,
    },

    #[error("it is not {player}'s turn ({active} is to play)")]
    NotYourTurn { player: PlayerId, active: PlayerId },

    #[error("the game is over")]
    GameOver,

    #[error("{0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    #[error("invalid game setup: {0}")]
    Config(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Notation(#[from] NotationError),
}

impl BoostError {
    pub(crate) fn illegal(reason: IllegalMoveReason, point: Point) -> Self {
        BoostError::IllegalMove { reason, point }
    }

    /// The rejection reason, if this is an illegal-move error.
    pub fn reason(&self) -> Option<IllegalMoveReason> {
        match self {
            BoostError::IllegalMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Describes a piece for messages, e.g. `knight of player 2`.
pub(crate) fn describe(piece: Piece) -> String {
    match piece.owner {
        Some(owner) => format!("{} of {}", piece.kind.name(), owner),
        None => piece.kind.name().to_string(),
    }
}
