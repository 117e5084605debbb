//! Boundary contracts towards the renderer and stats-logger collaborators.
//!
//! The core hands out finished data through these types and traits; how a
//! collaborator draws or persists them is its own concern, and nothing here
//! lets one mutate the graph.

use chrono::{DateTime, Utc};

use std::fmt;
use std::io;

use crate::algorithms::Maze;
use crate::board::WallGrid;
use crate::dims::Dims;

/// Read-only snapshot of a generated maze for drawing: final wall state,
/// accessible cells in scan order, and the chosen start and treasure cells.
pub struct MazeView<'a> {
    pub walls: &'a WallGrid,
    pub accessible: Vec<Dims>,
    pub start: Dims,
    pub end: Dims,
}

impl Maze {
    pub fn view(&self) -> MazeView<'_> {
        MazeView {
            walls: &self.walls,
            accessible: self.graph.coords().collect(),
            start: self.start,
            end: self.end,
        }
    }
}

/// Draws a maze plus one route over it: the full DFS trace or the final A*
/// path, whichever the run produced.
pub trait Renderer {
    fn render(&mut self, view: &MazeView, route: &[Dims]) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dfs,
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

/// One explorer run, as handed to the stats logger.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    pub algorithm: Algorithm,
    pub expansions: usize,
    /// Nodes on the final path, 0 when no path was found.
    pub path_length: usize,
}

impl RunRecord {
    pub fn now(algorithm: Algorithm, expansions: usize, path_length: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            algorithm,
            expansions,
            path_length,
        }
    }
}

/// Append-only sink for run records, one record per explorer run.
pub trait StatsSink {
    fn record(&mut self, record: &RunRecord) -> io::Result<()>;
}
