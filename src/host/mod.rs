//! Host composition: the page-level view that owns both state machines.

pub mod board;
pub mod composition;

pub use board::{board_cells, BoardCell, CardView};
pub use composition::{Host, HostView, FOOTER_LINES};
