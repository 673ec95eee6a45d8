use std::fmt;

use warren_core::GridError;

/// Errors raised by maze generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenError {
    /// Row/column spacing below 1.
    Spacing { rows: i32, cols: i32 },
    /// Skip chance outside `[0, 1]`.
    SkipChance(f64),
    /// The underlying grid could not be built.
    Grid(GridError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spacing { rows, cols } => {
                write!(f, "spacing {rows}x{cols} is invalid: both must be at least 1")
            }
            Self::SkipChance(c) => {
                write!(f, "skip chance {c} is outside [0, 1]")
            }
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GenError {}

impl From<GridError> for GenError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
