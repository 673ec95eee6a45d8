//! **warren-paths** — pathfinding for maze grids.
//!
//! A* shortest-path search over a binary occupancy grid: unit step cost,
//! four-way movement, Manhattan heuristic. [`PathFinder`] owns reusable
//! search state (node arena, generation counter) so repeated queries —
//! e.g. once per rendered frame while a path overlay is active — incur
//! no per-call allocation beyond the frontier heap and the result path.
//! [`find_path`] is the one-shot form for callers that do not retain a
//! finder. Results are not cached across calls; callers that query at
//! high frequency against an unchanged grid should memoize.

mod astar;
mod distance;
mod pathfinder;
mod traits;

pub use astar::{FrontierPolicy, find_path};
pub use distance::manhattan;
pub use pathfinder::PathFinder;
pub use traits::Walkable;
