//! Piece kinds and ownership.
//!
//! Per-kind behavior lives in one table of `const fn`s on `PieceKind`
//! rather than being spread across the rules code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A seated player, 0-based. Shown and serialized 1-based (`P1` is
/// `PlayerId(0)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based number shown to players.
    pub const fn number(self) -> u8 {
        self.0 + 1
    }
}

impl From<PlayerId> for u16 {
    fn from(player: PlayerId) -> u16 {
        player.0 as u16 + 1
    }
}

impl TryFrom<u16> for PlayerId {
    type Error = String;

    fn try_from(number: u16) -> Result<Self, Self::Error> {
        number
            .checked_sub(1)
            .and_then(|id| u8::try_from(id).ok())
            .map(PlayerId)
            .ok_or_else(|| format!("no player number {}", number))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// The kind of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Tower,
    Dragon,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Tower,
        PieceKind::Dragon,
    ];

    /// Steps granted before boosts. Towers never move.
    pub const fn base_steps(self) -> usize {
        match self {
            PieceKind::Tower => 0,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::Dragon => 1,
        }
    }

    pub const fn is_mobile(self) -> bool {
        self.base_steps() > 0
    }

    /// Whether a move may end on an opponent piece, removing it.
    pub const fn can_capture_by_landing(self) -> bool {
        matches!(self, PieceKind::Knight)
    }

    /// Whether ending a move next to an opponent triggers flanking.
    pub const fn can_flank(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Dragon)
    }

    /// Whether this kind can ever be removed from the board.
    pub const fn is_capturable(self) -> bool {
        !matches!(self, PieceKind::Dragon)
    }

    /// The canonical single-letter symbol.
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'K',
            PieceKind::Tower => 'T',
            PieceKind::Dragon => 'D',
        }
    }

    pub fn from_symbol(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'K' => Some(PieceKind::Knight),
            'T' => Some(PieceKind::Tower),
            'D' => Some(PieceKind::Dragon),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Tower => "tower",
            PieceKind::Dragon => "dragon",
        }
    }
}

/// A piece on the board. Dragons are the only unowned pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Option<PlayerId>,
}

impl Piece {
    pub const DRAGON: Piece = Piece {
        kind: PieceKind::Dragon,
        owner: None,
    };

    /// Creates an owned piece. Use `Piece::DRAGON` for dragons.
    pub const fn owned(kind: PieceKind, owner: PlayerId) -> Self {
        Piece {
            kind,
            owner: Some(owner),
        }
    }

    pub const fn pawn(owner: PlayerId) -> Self {
        Piece::owned(PieceKind::Pawn, owner)
    }

    pub const fn knight(owner: PlayerId) -> Self {
        Piece::owned(PieceKind::Knight, owner)
    }

    pub const fn tower(owner: PlayerId) -> Self {
        Piece::owned(PieceKind::Tower, owner)
    }

    pub fn is_dragon(self) -> bool {
        self.kind == PieceKind::Dragon
    }

    pub fn is_owned_by(self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// True for pieces of another player. Dragons are nobody's opponent.
    pub fn is_opponent_of(self, player: PlayerId) -> bool {
        matches!(self.owner, Some(owner) if owner != player)
    }

    /// Kind symbol followed by the owner number, `D0` for dragons.
    pub fn code(self) -> String {
        let owner = self.owner.map_or(0, |p| p.number());
        format!("{}{}", self.kind.symbol(), owner)
    }
}
