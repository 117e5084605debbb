pub mod graph;
pub mod walls;

pub use graph::{Node, NodeGraph};
pub use walls::{WallGrid, Way};
