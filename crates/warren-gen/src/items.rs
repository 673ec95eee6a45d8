//! Collectible placement over a carved grid.

use rand::Rng;
use rand::RngExt;

use warren_core::{Color, Grid, Point};

/// Number of collectibles a standard game round places.
pub const DEFAULT_ITEM_COUNT: usize = 16;

/// Tier colours, indexed by `value - 1`: orange, off-white, purple.
const TIER_COLORS: [Color; 3] = [
    Color::from_rgb(255, 161, 0),
    Color::from_rgb(245, 245, 245),
    Color::from_rgb(200, 122, 255),
];

/// A collectible item placed on a walkable cell.
///
/// Gameplay flips `collected`; a batch is replaced wholesale when the
/// round resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collectible {
    pub pos: Point,
    pub collected: bool,
    /// Score value, 1..=3.
    pub value: i32,
}

impl Collectible {
    /// Tier colour derived from the value.
    pub fn color(&self) -> Color {
        TIER_COLORS[(self.value - 1) as usize]
    }
}

/// Place `count` collectibles on random open interior cells.
///
/// Each item rejection-samples the interior until it lands on a cell that
/// is open and not in `reserved`. Positions may repeat between items.
/// The sampling loop is unbounded: on a grid whose interior is almost
/// entirely walls or reserved cells it may never terminate, so callers
/// own that precondition.
pub fn place_items(
    grid: &Grid,
    count: usize,
    reserved: &[Point],
    rng: &mut impl Rng,
) -> Vec<Collectible> {
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = loop {
            let p = Point::new(
                rng.random_range(1..grid.width() - 1),
                rng.random_range(1..grid.height() - 1),
            );
            if grid.is_open(p) && !reserved.contains(&p) {
                break p;
            }
        };
        items.push(Collectible {
            pos,
            collected: false,
            value: rng.random_range(1..=3),
        });
    }
    log::debug!("placed {} collectibles", items.len());
    items
}

/// The 2×2 spawn and goal zones in opposite corners of the interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnZones {
    /// Start cells, anchored at (1, 1).
    pub start: [Point; 4],
    /// End cells, anchored at (width - 3, height - 3).
    pub end: [Point; 4],
}

impl SpawnZones {
    /// Corner zones for the given grid.
    pub fn corners(grid: &Grid) -> Self {
        let (w, h) = (grid.width(), grid.height());
        Self {
            start: [
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(2, 2),
            ],
            end: [
                Point::new(w - 3, h - 3),
                Point::new(w - 3, h - 2),
                Point::new(w - 2, h - 3),
                Point::new(w - 2, h - 2),
            ],
        }
    }

    /// All eight zone cells, for use as the placer's reserved set.
    pub fn reserved(&self) -> [Point; 8] {
        [
            self.start[0],
            self.start[1],
            self.start[2],
            self.start[3],
            self.end[0],
            self.end[1],
            self.end[2],
            self.end[3],
        ]
    }
}
