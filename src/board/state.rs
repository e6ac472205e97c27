//! Board occupancy.
//!
//! The board is a fixed `files x ranks` grid stored row-major by rank, with
//! at most one piece per point. Piece counts are always computed from the
//! grid, never cached alongside it.

use super::piece::{Piece, PieceKind, PlayerId};
use super::point::Point;
use crate::error::BoostError;

/// Piece placement on a fixed-size grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    files: u8,
    ranks: u8,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board. Dimensions are limited to 26 files so every
    /// file has a letter.
    pub fn empty(files: u8, ranks: u8) -> Result<Self, BoostError> {
        if files == 0 || ranks == 0 || files > 26 {
            return Err(BoostError::Config(format!(
                "unsupported board size {}x{}",
                files, ranks
            )));
        }
        Ok(Board {
            files,
            ranks,
            cells: vec![None; files as usize * ranks as usize],
        })
    }

    pub fn files(&self) -> u8 {
        self.files
    }

    pub fn ranks(&self) -> u8 {
        self.ranks
    }

    pub fn contains(&self, point: Point) -> bool {
        point.file < self.files && point.rank < self.ranks
    }

    fn index(&self, point: Point) -> Result<usize, BoostError> {
        if !self.contains(point) {
            return Err(BoostError::PointOutOfRange(point));
        }
        Ok(point.rank as usize * self.files as usize + point.file as usize)
    }

    /// Returns the piece at `point`. Off-grid points are empty.
    pub fn piece_at(&self, point: Point) -> Option<Piece> {
        self.index(point).ok().and_then(|i| self.cells[i])
    }

    pub fn is_occupied(&self, point: Point) -> bool {
        self.piece_at(point).is_some()
    }

    /// Places a piece on an empty point.
    pub fn place(&mut self, piece: Piece, point: Point) -> Result<(), BoostError> {
        let idx = self.index(point)?;
        if self.cells[idx].is_some() {
            return Err(BoostError::Occupied(point));
        }
        self.cells[idx] = Some(piece);
        Ok(())
    }

    /// Removes and returns the piece at `point`, if any.
    pub fn remove(&mut self, point: Point) -> Option<Piece> {
        let idx = self.index(point).ok()?;
        self.cells[idx].take()
    }

    /// Swaps the piece at `point` for another in place (promotion).
    pub(crate) fn replace(
        &mut self,
        point: Point,
        piece: Piece,
    ) -> Result<Option<Piece>, BoostError> {
        let idx = self.index(point)?;
        Ok(self.cells[idx].replace(piece))
    }

    /// Relocates the piece at `from` to the empty point `to`.
    ///
    /// Fails without changing anything if either point is off the grid or
    /// `to` is occupied. Moving from an empty point is a no-op returning None.
    pub fn move_piece(&mut self, from: Point, to: Point) -> Result<Option<Piece>, BoostError> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;
        if from_idx == to_idx {
            return Ok(self.cells[from_idx]);
        }
        if self.cells[to_idx].is_some() {
            return Err(BoostError::Occupied(to));
        }
        let piece = self.cells[from_idx].take();
        self.cells[to_idx] = piece;
        Ok(piece)
    }

    /// All points, rank by rank from `a1`.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let files = self.files;
        (0..self.ranks).flat_map(move |rank| (0..files).map(move |file| Point::new(file, rank)))
    }

    /// All occupied points with their pieces, rank by rank from `a1`.
    pub fn pieces(&self) -> impl Iterator<Item = (Point, Piece)> + '_ {
        self.points()
            .zip(self.cells.iter())
            .filter_map(|(point, cell)| cell.map(|piece| (point, piece)))
    }

    /// Points holding pieces of `player`.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = (Point, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.is_owned_by(player))
    }

    pub fn count(&self, player: PlayerId, kind: PieceKind) -> usize {
        self.pieces_of(player).filter(|(_, p)| p.kind == kind).count()
    }

    pub fn piece_count(&self, player: PlayerId) -> usize {
        self.pieces_of(player).count()
    }

    pub fn tower_count(&self, player: PlayerId) -> usize {
        self.count(player, PieceKind::Tower)
    }

    pub fn knight_count(&self, player: PlayerId) -> usize {
        self.count(player, PieceKind::Knight)
    }

    pub fn dragon_count(&self) -> usize {
        self.pieces().filter(|(_, p)| p.is_dragon()).count()
    }

    /// Canonical occupancy snapshot for repetition checks.
    pub fn position(&self) -> Position {
        Position {
            cells: self.cells.clone().into_boxed_slice(),
        }
    }
}

/// An occupancy snapshot. Two positions are equal iff every point holds the
/// same (kind, owner) or is empty in both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    cells: Box<[Option<Piece>]>,
}

impl Position {
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
