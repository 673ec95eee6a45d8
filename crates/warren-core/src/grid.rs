//! The binary occupancy grid shared by the generator and the pathfinder.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// A single grid cell: corridor or wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// A walkable corridor cell.
    #[default]
    Open,
    /// A solid wall cell.
    Wall,
}

impl Tile {
    /// Whether the tile can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }
}

/// A dense `width`×`height` grid of [`Tile`]s, row-major, 0-indexed.
///
/// The outermost ring of cells is `Wall` from construction on and stays
/// that way: both [`set`](Self::set) and [`try_set`](Self::try_set) refuse
/// border writes. Everything else mutates freely, either one cell at a
/// time (editor) or by replacing the whole grid (regeneration).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create a grid with an `Open` interior and a `Wall` border.
    ///
    /// Dimensions below 3×3 admit no interior and are rejected with
    /// [`GridError::Dimensions`]; they are never clamped.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 3 || height < 3 {
            return Err(GridError::Dimensions { width, height });
        }
        let mut grid = Self {
            width,
            height,
            cells: vec![Tile::Open; (width as usize) * (height as usize)],
        };
        for p in grid.bounds() {
            if grid.is_border(p) {
                let idx = grid.index(p);
                grid.cells[idx] = Tile::Wall;
            }
        }
        Ok(grid)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// The interior range: everything except the one-cell wall border.
    #[inline]
    pub fn interior(&self) -> Range {
        self.bounds().shift(1, 1, -1, -1)
    }

    /// Whether `p` lies within the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether `p` lies on the outermost ring of cells.
    #[inline]
    pub fn is_border(&self, p: Point) -> bool {
        self.contains(p)
            && (p.x == 0 || p.y == 0 || p.x == self.width - 1 || p.y == self.height - 1)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        matches!(self.at(p), Some(Tile::Open))
    }

    /// Lenient write, for algorithmic callers that stay inside the
    /// interior anyway. Out-of-bounds and border positions are no-ops.
    ///
    /// Returns whether the tile was stored.
    pub fn set(&mut self, p: Point, tile: Tile) -> bool {
        if !self.contains(p) || self.is_border(p) {
            return false;
        }
        let idx = self.index(p);
        self.cells[idx] = tile;
        true
    }

    /// Checked write, for user-supplied coordinates (the editor path).
    ///
    /// Out of bounds is a hard [`GridError::OutOfBounds`]. Border cells
    /// are a successful no-op (`Ok(false)`), keeping the border `Wall`.
    /// Returns `Ok(true)` when the tile was stored; callers that cache
    /// geometry derived from the grid must rebuild it in that case.
    pub fn try_set(&mut self, p: Point, tile: Tile) -> Result<bool, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds {
                pos: p,
                bounds: self.bounds(),
            });
        }
        Ok(self.set(p, tile))
    }

    /// Count how many cells hold the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().map(|p| (p, self.cells[self.index(p)]))
    }
}
