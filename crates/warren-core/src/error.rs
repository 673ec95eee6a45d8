use std::fmt;

use crate::geom::{Point, Range};

/// Errors raised by grid construction and checked mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Dimensions leave no interior (both must be at least 3).
    Dimensions { width: i32, height: i32 },
    /// A checked write targeted a position outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions { width, height } => {
                write!(f, "grid dimensions {width}x{height} leave no interior (minimum 3x3)")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} is outside the grid bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offender() {
        let e = GridError::Dimensions {
            width: 2,
            height: 9,
        };
        assert!(e.to_string().contains("2x9"));

        let e = GridError::OutOfBounds {
            pos: Point::new(12, -1),
            bounds: Range::new(0, 0, 8, 8),
        };
        assert!(e.to_string().contains("(12, -1)"));
    }
}
