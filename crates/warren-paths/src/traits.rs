use warren_core::{Grid, Point};

/// Read-only view of which cells the search may step on.
///
/// Out-of-bounds positions must report `false`: the search treats them
/// as plain non-traversable cells, not as errors.
pub trait Walkable {
    /// Whether `p` can be stepped on.
    fn is_open(&self, p: Point) -> bool;
}

impl Walkable for Grid {
    fn is_open(&self, p: Point) -> bool {
        Grid::is_open(self, p)
    }
}
