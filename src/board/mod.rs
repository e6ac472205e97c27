//! Board representation.
//!
//! Contains points, pieces, the occupancy grid, adjacency and step budgets,
//! and the action types submitted by players.

pub mod action;
pub mod adjacency;
pub mod piece;
pub mod point;
pub mod state;

pub use action::{Action, Path};
pub use adjacency::{boosts, neighbor, neighbors, step_budget, step_budget_at};
pub use piece::{Piece, PieceKind, PlayerId};
pub use point::{Direction, Point};
pub use state::{Board, Position};
