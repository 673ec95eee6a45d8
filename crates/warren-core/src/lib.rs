//! **warren-core** — core types for the warren maze toolkit.
//!
//! This crate provides the types shared by the maze generator and the
//! pathfinder: geometry primitives ([`Point`], [`Range`]), the binary
//! occupancy grid ([`Grid`], [`Tile`]), a packed RGB [`Color`], and the
//! common error type ([`GridError`]).
//!
//! The grid is a plain in-memory structure. Rendering, input, and any
//! cached geometry derived from it (textures, meshes) live with the
//! caller; see [`Grid::try_set`] for the rebuild contract after edits.

pub mod color;
pub mod error;
pub mod geom;
pub mod grid;

pub use color::Color;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Grid, Tile};
