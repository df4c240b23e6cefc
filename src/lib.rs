//! A toroidal Game of Life board.
//!
//! The [`Board`] owns a bit-packed grid and advances it one generation per
//! [`tick`](Board::tick). An external renderer reads the packed buffer via
//! [`cells`](Board::cells), and seeds or edits the grid through
//! [`randomise`](Board::randomise), [`toggle_cell`](Board::toggle_cell) and
//! [`nuke`](Board::nuke). Frame scheduling, drawing and input handling all
//! live outside this crate.

mod bits;
mod board;
mod cells;
mod error;
mod save;

pub use board::Board;
pub use cells::{Coord, State};
pub use error::Error;
#[cfg(feature = "serde")]
pub use save::BoardSer;
