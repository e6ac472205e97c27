//! Point and action notation.
//!
//! Points are written as a file letter and a rank number (`b3`). A move is
//! its path written as consecutive points (`a4a3b3`); the start and end
//! alone (`a4b3`) are also accepted and resolve to the first legal path
//! between them. A single point builds a tower there if it is empty and
//! promotes the pawn on it otherwise.

use thiserror::Error;

use crate::board::{Action, Board, Path, PlayerId, Point};
use crate::error::BoostError;
use crate::movegen::movement::find_path;

/// Errors that can occur when parsing notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid point '{0}'")]
    InvalidPoint(String),

    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

/// Parses a single point such as `b3` or `B3`.
pub fn parse_point(s: &str) -> Result<Point, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    let points = parse_points(s)?;
    match points.as_slice() {
        [point] => Ok(*point),
        _ => Err(NotationError::InvalidPoint(s.to_string())),
    }
}

pub fn format_point(point: Point) -> String {
    point.to_string()
}

/// Parses a run of points, e.g. `a4a3b3`. Spaces, commas and dashes
/// between points are ignored.
pub fn parse_points(s: &str) -> Result<Vec<Point>, NotationError> {
    let mut points = Vec::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() || c == ',' || c == '-' {
            continue;
        }
        if !c.is_ascii_alphabetic() {
            return Err(NotationError::UnexpectedChar(c));
        }
        let file = c.to_ascii_lowercase() as u8 - b'a';

        let mut digits = String::new();
        while let Some(&d) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        let rank: u16 = digits
            .parse()
            .map_err(|_| NotationError::InvalidPoint(format!("{}{}", c, digits)))?;
        if rank == 0 || rank > u8::MAX as u16 + 1 {
            return Err(NotationError::InvalidPoint(format!("{}{}", c, digits)));
        }
        points.push(Point::new(file, (rank - 1) as u8));
    }
    Ok(points)
}

/// Parses an action for `player` against the current board.
///
/// The result is not validated; pass it to the game to find out whether it
/// is legal.
pub fn parse_action(board: &Board, player: PlayerId, s: &str) -> Result<Action, BoostError> {
    let points = parse_points(s)?;
    let action = match points.as_slice() {
        [] => return Err(NotationError::EmptyInput.into()),
        [point] if board.is_occupied(*point) => Action::Promote(*point),
        [point] => Action::Build(*point),
        [start, end] => match find_path(board, player, *start, *end) {
            Some(path) => Action::Move(path),
            None => Action::Move(written_path(&points)?),
        },
        _ => Action::Move(written_path(&points)?),
    };
    Ok(action)
}

fn written_path(points: &[Point]) -> Result<Path, NotationError> {
    Path::from_points(points.to_vec()).ok_or(NotationError::EmptyInput)
}

pub fn format_action(action: &Action) -> String {
    action.to_string()
}
