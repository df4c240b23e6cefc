//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Width / height should be positive.
    NonPositiveError,
    /// Cell at {0:?} is outside the board.
    OutOfRangeError(Coord),
    /// Probability {0:?} should be within the interval [0, 1].
    ProbabilityError(f64),
    /// The saved cell buffer does not match the board dimensions.
    BufferLengthError,
}
