//! Board views for front ends.
//!
//! A `BoardView` is a plain snapshot of what is on each point plus whose
//! turn it is. Front ends either serialize it or print its text grid and do
//! their own styling on top.

use serde::Serialize;

use crate::board::{Board, Point};
use crate::game::{GameState, GameStatus};

/// A snapshot of a game for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub files: u8,
    pub ranks: u8,
    /// Piece codes (`P1`, `D0`) or `.`, highest rank first.
    pub cells: Vec<Vec<String>>,
    /// 1-based number of the player to move, if the game is running.
    pub active: Option<u8>,
    pub status: GameStatus,
}

impl BoardView {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The grid with rank numbers down the left, file letters underneath,
    /// and the status on the last line.
    pub fn to_text(&self) -> String {
        let label_width = self.ranks.to_string().len();
        let mut out = String::new();
        for (i, row) in self.cells.iter().enumerate() {
            let rank = self.ranks as usize - i;
            let cells: Vec<String> = row.iter().map(|c| format!("{:<2}", c)).collect();
            out.push_str(&format!("{:>w$}  {}", rank, cells.join(" "), w = label_width));
            truncate_trailing(&mut out);
            out.push('\n');
        }
        let letters: Vec<String> = (0..self.files)
            .map(|f| format!("{:<2}", Point::new(f, 0).file_char().unwrap_or('?')))
            .collect();
        out.push_str(&format!("{:>w$}  {}", "", letters.join(" "), w = label_width));
        truncate_trailing(&mut out);
        out.push('\n');
        out.push_str(&self.status.to_string());
        out.push('\n');
        out
    }
}

fn truncate_trailing(s: &mut String) {
    let len = s.trim_end_matches(' ').len();
    s.truncate(len);
}

fn cells(board: &Board) -> Vec<Vec<String>> {
    (0..board.ranks())
        .rev()
        .map(|rank| {
            (0..board.files())
                .map(|file| {
                    board
                        .piece_at(Point::new(file, rank))
                        .map_or_else(|| ".".to_string(), |piece| piece.code())
                })
                .collect()
        })
        .collect()
}

/// Renders the current state of `game`.
pub fn render_view(game: &GameState) -> BoardView {
    let board = game.board();
    BoardView {
        files: board.files(),
        ranks: board.ranks(),
        cells: cells(board),
        active: game.active_player().map(|p| p.number()),
        status: game.status(),
    }
}
