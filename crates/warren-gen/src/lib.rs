//! **warren-gen** — procedural maze carving and collectible placement.
//!
//! [`MazeGen`] carves a wall/corridor pattern into a [`warren_core::Grid`]
//! by growing wall spokes from spacing-lattice seed points.
//! [`place_items`] scatters collectibles over the walkable cells, and
//! [`SpawnZones`] provides the corner start/goal cells a game round
//! reserves.
//!
//! All randomness flows through caller-provided `rand` generators; seed
//! the generator to reproduce a maze exactly.

mod error;
mod items;
mod mazegen;

pub use error::GenError;
pub use items::{Collectible, DEFAULT_ITEM_COUNT, SpawnZones, place_items};
pub use mazegen::{CardinalSpokes, GenParams, MazeGen, SpokeDirection};
