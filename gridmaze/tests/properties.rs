use std::collections::{HashMap, HashSet, VecDeque};

use gridmaze::algorithms::{self, generator, Generator};
use gridmaze::board::{NodeGraph, WallGrid};
use gridmaze::dims::Dims;

const SIZES: [Dims; 6] = [
    Dims(1, 1),
    Dims(1, 8),
    Dims(3, 3),
    Dims(5, 2),
    Dims(8, 8),
    Dims(13, 7),
];

/// BFS distance in edges, the oracle for A* optimality.
fn bfs_distance(graph: &NodeGraph, from: Dims, to: Dims) -> Option<usize> {
    let mut dist: HashMap<Dims, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(from, 0);
    queue.push_back(from);

    while let Some(coord) = queue.pop_front() {
        if coord == to {
            return Some(dist[&coord]);
        }
        let next_dist = dist[&coord] + 1;
        for &next in graph.neighbors(coord) {
            if !dist.contains_key(&next) {
                dist.insert(next, next_dist);
                queue.push_back(next);
            }
        }
    }

    None
}

#[test]
fn generated_mazes_are_connected() {
    for size in SIZES {
        for seed in 0..40 {
            let maze = Generator::new(size).with_seed(seed).generate().unwrap();
            assert_eq!(
                maze.graph.components().len(),
                1,
                "size {:?} seed {} split into components",
                size,
                seed,
            );
        }
    }
}

#[test]
fn node_exists_iff_cell_accessible() {
    for size in SIZES {
        for seed in 0..40 {
            let maze = Generator::new(size).with_seed(seed).generate().unwrap();
            for cell in Dims::iter_fill(Dims::ZERO, size) {
                assert_eq!(
                    maze.graph.contains(cell),
                    maze.walls.is_cell_accessible(cell),
                );
            }
        }
    }
}

#[test]
fn dfs_always_finds_the_treasure() {
    for size in SIZES {
        for seed in 0..40 {
            let maze = Generator::new(size).with_seed(seed).generate().unwrap();
            let result = algorithms::explore(&maze.graph, maze.start, maze.end).unwrap();

            assert!(result.found, "size {:?} seed {}", size, seed);
            assert_eq!(result.path.first(), Some(&maze.start));
            assert_eq!(result.path.last(), Some(&maze.end));
            assert!(result.expansions <= maze.graph.len());

            // each first visit counts once
            let unique: HashSet<_> = result.trace.iter().copied().collect();
            assert_eq!(result.expansions, unique.len());
        }
    }
}

#[test]
fn a_star_paths_are_optimal_and_sound() {
    for size in SIZES {
        for seed in 0..40 {
            let maze = Generator::new(size).with_seed(seed).generate().unwrap();
            let result = algorithms::find_path(&maze.graph, maze.start, maze.end).unwrap();

            let path = result.path.expect("connected maze must have a path");
            let oracle = bfs_distance(&maze.graph, maze.start, maze.end).unwrap();
            assert_eq!(path.len(), oracle + 1, "size {:?} seed {}", size, seed);

            assert_eq!(path.first(), Some(&maze.start));
            assert_eq!(path.last(), Some(&maze.end));
            for pair in path.windows(2) {
                assert!(graph_has_edge(&maze.graph, pair[0], pair[1]));
            }
        }
    }
}

fn graph_has_edge(graph: &NodeGraph, a: Dims, b: Dims) -> bool {
    graph.neighbors(a).contains(&b) && graph.neighbors(b).contains(&a)
}

#[test]
fn fixed_seed_reproduces_everything() {
    for size in [Dims(3, 3), Dims(8, 8)] {
        for seed in [0, 1, 7, 123456789] {
            let first = Generator::new(size).with_seed(seed).generate().unwrap();
            let second = Generator::new(size).with_seed(seed).generate().unwrap();

            assert_eq!(first.walls, second.walls);
            assert_eq!(first.start, second.start);
            assert_eq!(first.end, second.end);

            let dfs_a = algorithms::explore(&first.graph, first.start, first.end).unwrap();
            let dfs_b = algorithms::explore(&second.graph, second.start, second.end).unwrap();
            assert_eq!(dfs_a, dfs_b);

            let astar_a = algorithms::find_path(&first.graph, first.start, first.end).unwrap();
            let astar_b = algorithms::find_path(&second.graph, second.start, second.end).unwrap();
            assert_eq!(astar_a, astar_b);
        }
    }
}

#[test]
fn all_vertical_walls_cleared_still_repairs_to_one_component() {
    // the degenerate pruning outcome where every cell clears its vertical
    // wall: each row becomes a corridor, rows stay disconnected
    let size = Dims(3, 3);
    let mut walls = WallGrid::new(size);
    for cell in Dims::iter_fill(Dims::ZERO, size) {
        walls.clear_vertical(cell);
    }

    for cell in Dims::iter_fill(Dims::ZERO, size) {
        assert!(walls.is_cell_accessible(cell));
    }

    let mut graph = generator::build_graph(&walls);
    assert_eq!(graph.len(), 9);

    generator::repair_connectivity(&mut walls, &mut graph);
    assert_eq!(graph.components().len(), 1);

    for cell in Dims::iter_fill(Dims::ZERO, size) {
        assert!(walls.is_cell_accessible(cell));
    }
}

#[test]
fn fully_open_grid_has_five_node_diagonal_path() {
    let size = Dims(3, 3);
    let mut walls = WallGrid::new(size);
    for cell in Dims::iter_fill(Dims::ZERO, size) {
        if cell.0 > 0 {
            walls.clear_vertical(cell);
        }
        if cell.1 > 0 {
            walls.clear_horizontal(cell);
        }
    }
    let graph = generator::build_graph(&walls);

    let result = algorithms::find_path(&graph, Dims(0, 0), Dims(2, 2)).unwrap();
    let path = result.path.unwrap();
    assert_eq!(path.len(), 5);
}

#[test]
fn dfs_and_a_star_share_one_graph() {
    // repeated runs over the same maze must not contaminate each other
    let maze = Generator::new(Dims(8, 8)).with_seed(99).generate().unwrap();

    let dfs_first = algorithms::explore(&maze.graph, maze.start, maze.end).unwrap();
    let astar = algorithms::find_path(&maze.graph, maze.start, maze.end).unwrap();
    let dfs_second = algorithms::explore(&maze.graph, maze.start, maze.end).unwrap();

    assert_eq!(dfs_first, dfs_second);
    assert!(astar.found());
}
