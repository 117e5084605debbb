pub mod a_star;
pub mod depth_first_search;
pub mod generator;

use thiserror::Error;

use crate::dims::Dims;

pub use a_star::{find_path, AStarResult};
pub use depth_first_search::{explore, DfsResult};
pub use generator::{Generator, Maze};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("maze dimensions must be positive, got {0:?}")]
    InvalidDimensions(Dims),
    /// Defensive check only: the coin-flip pruning always clears at least
    /// one wall per cell, so a generated grid cannot end up with zero
    /// accessible cells.
    #[error("generated maze has no accessible cells")]
    EmptyMaze,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("start cell {0:?} has no node in the graph")]
    MissingStart(Dims),
    #[error("goal cell {0:?} has no node in the graph")]
    MissingGoal(Dims),
}
