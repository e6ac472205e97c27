//! Text formats at the engine's edge.
//!
//! Board layouts for setups and fixtures, point and action notation for
//! player input, and rendered views for front ends.

pub mod layout;
pub mod notation;
pub mod view;

pub use layout::{encode_layout, parse_layout, LayoutError};
pub use notation::{format_action, format_point, parse_action, parse_point, NotationError};
pub use view::{render_view, BoardView};
