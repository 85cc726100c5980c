//! Conway's Game of Life on an unbounded plane stored as fixed-size chunks.
//!
//! A [`World`] owns a list of [`Cluster`]s, each covering one cell of the
//! chunk grid. Chunks are created when a live cell lands in uncovered space
//! and pruned by the periodic stabilization pass once they empty out.

pub mod cluster;
pub mod config;
pub mod grid;
pub mod index;
pub mod patterns;
pub mod world;

pub use cluster::Cluster;
pub use config::{DEFAULT_CHUNK_SIZE, DEFAULT_STABILIZE_EVERY, LifeConfig, LifeError};
pub use grid::{Cell, ChunkGrid};
pub use index::{ClusterIndex, LinearIndex};
pub use patterns::{PATTERNS, Pattern, scatter};
pub use world::{StabilizeReport, World};
