//! Board layout notation.
//!
//! A layout is a whitespace-separated grid of tokens, one line per rank with
//! the highest rank first, so the text reads the way the board looks:
//!
//! ```text
//! P2 P2 .  P2
//! .  D0 .  .
//! P1 .  T1 K1
//! ```
//!
//! `.` is an empty point, `P`/`K`/`T` followed by a 1-based player number
//! are pawns, knights and towers, and `D0` is a dragon. Blank lines and
//! surrounding indentation are ignored.

use crate::board::{Board, Piece, PieceKind, PlayerId, Point};

/// Largest number of files a layout may have (`a` through `z`).
pub const MAX_FILES: usize = 26;

/// Errors that can occur while parsing a layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,

    #[error("rank {rank} has {found} points, expected {expected}")]
    RaggedRow {
        rank: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown layout token: '{0}'")]
    UnknownToken(String),

    #[error("dragons are unowned and must be written D0, got '{0}'")]
    OwnedDragon(String),

    #[error("'{0}' needs a player number of 1 or more")]
    MissingOwner(String),

    #[error("layout of {files}x{ranks} is too large")]
    TooLarge { files: usize, ranks: usize },
}

/// Parses a single layout token. `.` yields None.
pub fn parse_token(token: &str) -> Result<Option<Piece>, LayoutError> {
    if token == "." {
        return Ok(None);
    }
    let mut chars = token.chars();
    let kind = chars
        .next()
        .and_then(PieceKind::from_symbol)
        .ok_or_else(|| LayoutError::UnknownToken(token.to_string()))?;
    let number: u8 = chars
        .as_str()
        .parse()
        .map_err(|_| LayoutError::UnknownToken(token.to_string()))?;

    match (kind, number) {
        (PieceKind::Dragon, 0) => Ok(Some(Piece::DRAGON)),
        (PieceKind::Dragon, _) => Err(LayoutError::OwnedDragon(token.to_string())),
        (_, 0) => Err(LayoutError::MissingOwner(token.to_string())),
        (kind, n) => Ok(Some(Piece::owned(kind, PlayerId(n - 1)))),
    }
}

/// Parses a layout into a board.
pub fn parse_layout(text: &str) -> Result<Board, LayoutError> {
    let rows: Vec<Vec<&str>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect();

    let ranks = rows.len();
    let files = rows.first().map(Vec::len).ok_or(LayoutError::Empty)?;
    if files > MAX_FILES || ranks > u8::MAX as usize {
        return Err(LayoutError::TooLarge { files, ranks });
    }

    let mut board =
        Board::empty(files as u8, ranks as u8).map_err(|_| LayoutError::TooLarge { files, ranks })?;
    for (i, row) in rows.iter().enumerate() {
        let rank = ranks - 1 - i;
        if row.len() != files {
            return Err(LayoutError::RaggedRow {
                rank: rank + 1,
                expected: files,
                found: row.len(),
            });
        }
        for (file, token) in row.iter().enumerate() {
            if let Some(piece) = parse_token(token)? {
                let point = Point::new(file as u8, rank as u8);
                board
                    .place(piece, point)
                    .map_err(|_| LayoutError::TooLarge { files, ranks })?;
            }
        }
    }
    Ok(board)
}

/// Encodes a board as a layout, highest rank first, columns aligned.
pub fn encode_layout(board: &Board) -> String {
    let mut out = String::new();
    for rank in (0..board.ranks()).rev() {
        let tokens: Vec<String> = (0..board.files())
            .map(|file| {
                let token = board
                    .piece_at(Point::new(file, rank))
                    .map_or_else(|| ".".to_string(), |piece| piece.code());
                format!("{:<2}", token)
            })
            .collect();
        out.push_str(tokens.join(" ").trim_end());
        out.push('\n');
    }
    out
}
