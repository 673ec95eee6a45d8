use warren_core::{Grid, Point, Range};

// ---------------------------------------------------------------------------
// Internal node arena
// ---------------------------------------------------------------------------

/// Per-cell search state, indexed by flat cell position.
///
/// `parent` is a flat index into the same arena (`usize::MAX` for the
/// start node) — a relation for path reconstruction, not an owning link.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered for the frontier heap.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the smallest f first.
        // Ties pop the smaller flat index, i.e. row-major cell order.
        other.f.cmp(&self.f).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable A* search state over a grid rectangle.
///
/// Owns the node arena and a generation counter; bumping the counter
/// invalidates every node in O(1), so back-to-back queries never reset
/// the arena cell by cell. All nodes of a search are dropped together
/// with the arena, never individually.
pub struct PathFinder {
    pub(crate) bounds: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
}

impl PathFinder {
    /// Create a finder for the given grid rectangle.
    pub fn new(bounds: Range) -> Self {
        Self {
            bounds,
            width: bounds.width().max(0) as usize,
            nodes: vec![Node::default(); bounds.len()],
            generation: 0,
        }
    }

    /// Create a finder sized to the given grid.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Replace the search rectangle, e.g. after a maze regeneration
    /// with different dimensions.
    ///
    /// If the new size fits within the existing arena, the allocation is
    /// kept and the generation counter is bumped so stale entries are
    /// ignored. Otherwise the arena is reallocated.
    pub fn set_bounds(&mut self, bounds: Range) {
        let new_len = bounds.len();
        let capacity = self.nodes.len();
        self.bounds = bounds;
        self.width = bounds.width().max(0) as usize;

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// Convert a `Point` to a flat arena index. `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat arena index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.bounds.min.x;
        let y = (idx / self.width) as i32 + self.bounds.min.y;
        Point::new(x, y)
    }
}
