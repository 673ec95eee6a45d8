//! Maze carving: seeded wall spokes on an open grid.
//!
//! The carver marks wall seed points on a spacing-aligned lattice over
//! the interior, then grows a straight wall "spoke" from each seed in a
//! random cardinal direction until it meets an existing wall. The border
//! wall bounds every spoke, so the walk always terminates.
//!
//! The result is a randomized wall-growth pattern, not a perfect maze:
//! disconnected pockets can occur, and reachability between two cells is
//! a question for the pathfinder, not an invariant of the carver.

use rand::Rng;
use rand::RngExt;
use rand::seq::SliceRandom;

use warren_core::{Grid, Point, Tile};

use crate::error::GenError;

/// Carving parameters.
///
/// Together with the grid dimensions and the RNG stream these fully
/// determine the output grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenParams {
    /// Horizontal lattice step: interior cells with `x % row_spacing == 0`
    /// qualify as seed candidates. Must be at least 1.
    pub row_spacing: i32,
    /// Vertical lattice step: `y % col_spacing == 0` qualifies.
    pub col_spacing: i32,
    /// Probability in `[0, 1]` that a qualifying cell is skipped.
    /// 0 seeds the whole lattice; 1 seeds nothing, leaving the interior
    /// fully open.
    pub skip_chance: f64,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            row_spacing: 4,
            col_spacing: 4,
            skip_chance: 0.3,
        }
    }
}

impl GenParams {
    /// Fail-fast validation. Out-of-range values are rejected, never
    /// clamped.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.row_spacing < 1 || self.col_spacing < 1 {
            return Err(GenError::Spacing {
                rows: self.row_spacing,
                cols: self.col_spacing,
            });
        }
        if !(0.0..=1.0).contains(&self.skip_chance) {
            return Err(GenError::SkipChance(self.skip_chance));
        }
        Ok(())
    }
}

/// Strategy for choosing the direction a wall spoke grows from a seed.
pub trait SpokeDirection {
    /// Return a unit step drawn from `rng`.
    fn direction(&self, rng: &mut impl Rng) -> Point;
}

/// Uniform choice among the four cardinal directions.
pub struct CardinalSpokes;

impl SpokeDirection for CardinalSpokes {
    fn direction(&self, rng: &mut impl Rng) -> Point {
        match rng.random_range(0..4u32) {
            0 => Point::new(0, -1),
            1 => Point::new(0, 1),
            2 => Point::new(-1, 0),
            _ => Point::new(1, 0),
        }
    }
}

/// Maze generator owning its RNG stream.
///
/// A full generation pass draws from a single sequential stream — seed
/// scan, seed permutation, spoke directions — so a given seed reproduces
/// the same grid cell for cell. For the same reason the pass must not be
/// split across independently seeded generators.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator over the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a maze with the default cardinal spoke directions.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        params: &GenParams,
    ) -> Result<Grid, GenError> {
        self.generate_with(&CardinalSpokes, width, height, params)
    }

    /// Carve a maze, choosing spoke directions with `spokes`.
    pub fn generate_with(
        &mut self,
        spokes: &impl SpokeDirection,
        width: i32,
        height: i32,
        params: &GenParams,
    ) -> Result<Grid, GenError> {
        params.validate()?;
        let mut grid = Grid::new(width, height)?;

        // Seed the spacing lattice. Exactly one draw per qualifying cell,
        // in row-major order, keeps the stream in step with the sweep.
        let mut seeds: Vec<Point> = Vec::new();
        for p in grid.interior() {
            if p.x % params.row_spacing != 0 || p.y % params.col_spacing != 0 {
                continue;
            }
            let roll: f64 = self.rng.random();
            if roll >= params.skip_chance {
                grid.set(p, Tile::Wall);
                seeds.push(p);
            }
        }

        // Process seeds in a random order drawn from the same stream.
        seeds.shuffle(&mut self.rng);

        for &seed in &seeds {
            let dir = spokes.direction(&mut self.rng);
            let mut p = seed + dir;
            while grid.is_open(p) {
                grid.set(p, Tile::Wall);
                p = p + dir;
            }
        }

        log::debug!(
            "carved {}x{} maze: {} seeds, {} wall cells",
            width,
            height,
            seeds.len(),
            grid.count(Tile::Wall)
        );

        Ok(grid)
    }
}
