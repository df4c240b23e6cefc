#![cfg(feature = "serde")]
//! Saves the board.

use crate::{bits::BitBuffer, board::Board, error::Error};
use serde::{Deserialize, Serialize};

/// A representation of [`Board`] which can be easily serialized.
///
/// The cell states are the same packed bytes that
/// [`Board::cells`] exposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSer {
    /// Number of columns.
    width: u32,
    /// Number of rows.
    height: u32,
    /// The packed cell states, one bit per cell.
    cells: Vec<u8>,
    /// Number of generations advanced so far.
    generation: u64,
}

impl BoardSer {
    /// Restores the board from the `BoardSer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveError`] if a saved dimension is zero,
    /// or [`Error::BufferLengthError`] if the saved buffer does not hold
    /// exactly one bit per cell.
    pub fn board(&self) -> Result<Board, Error> {
        let mut board = Board::new(self.width, self.height)?;
        let size = self.width as usize * self.height as usize;
        if self.cells.len() != (size + 7) / 8 {
            return Err(Error::BufferLengthError);
        }
        let cells = BitBuffer::from_bytes(self.cells.clone(), size);
        board.restore(cells, self.generation);
        Ok(board)
    }
}

impl Board {
    /// Saves the board as a [`BoardSer`].
    pub fn ser(&self) -> BoardSer {
        BoardSer {
            width: self.width(),
            height: self.height(),
            cells: self.cells().to_vec(),
            generation: self.generation(),
        }
    }
}
