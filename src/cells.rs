//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
pub type Coord = (u32, u32);

/// The state of a cell.
///
/// In the packed buffer a cell is a single bit,
/// `1` for [`Alive`](State::Alive) and `0` for [`Dead`](State::Dead).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The Dead state.
    Dead = 0,
    /// The Alive state.
    Alive = 1,
}

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, State::Alive)
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            State::Alive
        } else {
            State::Dead
        }
    }
}

impl From<State> for bool {
    #[inline]
    fn from(state: State) -> Self {
        state.is_alive()
    }
}
