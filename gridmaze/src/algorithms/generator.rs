use hashbrown::HashSet;
use log::debug;
use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::algorithms::{GenerationError, Random};
use crate::board::{NodeGraph, WallGrid, Way};
use crate::dims::Dims;

/// A fully generated maze: final wall state, the node graph over its
/// accessible cells, and the chosen start and treasure cells.
///
/// Once built, the graph is read-only; DFS and A* may run over the same
/// `Maze` any number of times without regenerating.
#[derive(Debug, Clone)]
pub struct Maze {
    pub walls: WallGrid,
    pub graph: NodeGraph,
    pub start: Dims,
    pub end: Dims,
}

/// Maze generator: random wall pruning followed by connectivity repair.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    size: Dims,
    seed: Option<u64>,
}

impl Generator {
    pub fn new(size: Dims) -> Self {
        Self { size, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn generate(&self) -> Result<Maze, GenerationError> {
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        debug!("generating {:?} maze with seed {}", self.size, seed);

        let mut rng = Random::seed_from_u64(seed);
        self.generate_with_rng(&mut rng)
    }

    /// Generation with a caller-provided random source.
    pub fn generate_with_rng(&self, rng: &mut Random) -> Result<Maze, GenerationError> {
        if !self.size.all_positive() {
            return Err(GenerationError::InvalidDimensions(self.size));
        }

        let mut walls = WallGrid::new(self.size);

        // One fair coin per cell: clear either the cell's left vertical wall
        // or its bottom horizontal wall. At x = 0 / z = 0 that clears a
        // perimeter wall, which makes the cell accessible without giving it
        // a neighbor; the repair pass below picks those cells up.
        for cell in Dims::iter_fill(Dims::ZERO, self.size) {
            if rng.gen::<bool>() {
                walls.clear_vertical(cell);
            } else {
                walls.clear_horizontal(cell);
            }
        }

        let mut graph = build_graph(&walls);
        if graph.is_empty() {
            return Err(GenerationError::EmptyMaze);
        }
        debug!("{} accessible cells before repair", graph.len());

        repair_connectivity(&mut walls, &mut graph);

        let start = if graph.contains(Dims::ZERO) {
            Dims::ZERO
        } else {
            // graph is non-empty, checked above
            graph.coords().next().ok_or(GenerationError::EmptyMaze)?
        };

        let end = loop {
            let cell = Dims(rng.gen_range(0..self.size.0), rng.gen_range(0..self.size.1));
            if graph.contains(cell) {
                break cell;
            }
        };

        debug!("start {:?}, treasure {:?}", start, end);

        Ok(Maze {
            walls,
            graph,
            start,
            end,
        })
    }
}

/// Instantiates a node for every accessible cell and builds the adjacency
/// relation from the current wall state.
pub fn build_graph(walls: &WallGrid) -> NodeGraph {
    let mut graph = NodeGraph::new(walls.size());

    for cell in Dims::iter_fill(Dims::ZERO, walls.size()) {
        if walls.is_cell_accessible(cell) {
            graph.insert(cell);
        }
    }
    graph.rebuild_adjacency(walls);

    graph
}

/// Merges connected components until exactly one remains.
///
/// Each pass partitions the nodes, then for every component other than the
/// first clears the first still-present wall (scanning the component in its
/// BFS order, directions in fixed order) that separates one of its nodes
/// from a node of the first component. Adjacency is rebuilt from scratch
/// after every pass. A pass may fail to merge a component whose border
/// touches no first-component node yet; the first component only grows, so
/// the component count strictly decreases and the loop terminates.
pub fn repair_connectivity(walls: &mut WallGrid, graph: &mut NodeGraph) {
    loop {
        let components = graph.components();
        if components.len() <= 1 {
            return;
        }
        debug!("repairing connectivity, {} components", components.len());

        let main: HashSet<Dims> = components[0].iter().copied().collect();

        let mut merged = 0;
        for component in &components[1..] {
            'merge: for &cell in component {
                for way in Way::get_in_order() {
                    let other = cell + way.offset();
                    if main.contains(&other) && walls.wall_between(cell, way) {
                        walls.clear_between(cell, way);
                        merged += 1;
                        break 'merge;
                    }
                }
            }
        }

        // Cannot happen for generated grids (pruning leaves every cell
        // accessible, so some component always borders the first one), but a
        // hand-built grid with inaccessible gaps could starve the loop.
        if merged == 0 {
            log::warn!(
                "connectivity repair stalled with {} components",
                components.len()
            );
            return;
        }

        graph.rebuild_adjacency(walls);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        for size in [Dims(0, 5), Dims(5, 0), Dims(-1, 3), Dims(0, 0)] {
            assert_eq!(
                Generator::new(size).with_seed(1).generate().unwrap_err(),
                GenerationError::InvalidDimensions(size),
            );
        }
    }

    #[test]
    fn single_cell_maze() {
        let maze = Generator::new(Dims(1, 1)).with_seed(3).generate().unwrap();

        assert_eq!(maze.graph.len(), 1);
        assert_eq!(maze.start, Dims(0, 0));
        assert_eq!(maze.end, Dims(0, 0));
    }

    #[test]
    fn graph_matches_accessibility() {
        let maze = Generator::new(Dims(6, 4)).with_seed(42).generate().unwrap();

        for cell in Dims::iter_fill(Dims::ZERO, Dims(6, 4)) {
            assert_eq!(
                maze.graph.contains(cell),
                maze.walls.is_cell_accessible(cell),
                "mismatch at {:?}",
                cell,
            );
        }
    }

    #[test]
    fn repair_joins_isolated_cells() {
        let size = Dims(3, 1);
        let mut walls = WallGrid::new(size);
        // every cell accessible, no two cells connected
        walls.clear_vertical(Dims(0, 0));
        walls.clear_horizontal(Dims(1, 0));
        walls.clear_horizontal(Dims(2, 0));

        let mut graph = build_graph(&walls);
        assert_eq!(graph.components().len(), 3);

        repair_connectivity(&mut walls, &mut graph);
        assert_eq!(graph.components().len(), 1);
    }

    #[test]
    fn start_prefers_origin() {
        let maze = Generator::new(Dims(5, 5)).with_seed(9).generate().unwrap();

        if maze.graph.contains(Dims::ZERO) {
            assert_eq!(maze.start, Dims::ZERO);
        } else {
            let first = maze.graph.coords().next().unwrap();
            assert_eq!(maze.start, first);
        }
    }

    #[test]
    fn end_is_accessible() {
        for seed in 0..20 {
            let maze = Generator::new(Dims(4, 7)).with_seed(seed).generate().unwrap();
            assert!(maze.graph.contains(maze.end));
        }
    }
}
