use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use std::collections::VecDeque;

use crate::board::walls::{WallGrid, Way};
use crate::dims::Dims;

/// A graph node sitting on an accessible cell.
///
/// Neighbors are stored as coordinate keys back into the owning
/// [`NodeGraph`], not as references, so the mutual "reachable from" relation
/// never turns into ownership cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    coord: Dims,
    neighbors: SmallVec<[Dims; 4]>,
}

impl Node {
    pub fn new(coord: Dims) -> Self {
        Self {
            coord,
            neighbors: SmallVec::new(),
        }
    }

    pub fn coord(&self) -> Dims {
        self.coord
    }

    /// Neighbor coordinates in insertion order (Up, Down, Right, Left).
    pub fn neighbors(&self) -> &[Dims] {
        &self.neighbors
    }
}

/// Arena of nodes keyed by cell coordinate; absent key = inaccessible cell.
///
/// Iteration never relies on hash order: everything that walks the whole
/// graph goes through [`Dims::iter_fill`] scan order, which keeps repair,
/// traces and paths reproducible for a fixed seed.
#[derive(Debug, Clone)]
pub struct NodeGraph {
    size: Dims,
    nodes: HashMap<Dims, Node>,
}

impl NodeGraph {
    pub fn new(size: Dims) -> Self {
        Self {
            size,
            nodes: HashMap::new(),
        }
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert(&mut self, coord: Dims) {
        self.nodes.insert(coord, Node::new(coord));
    }

    pub fn get(&self, coord: Dims) -> Option<&Node> {
        self.nodes.get(&coord)
    }

    pub fn contains(&self, coord: Dims) -> bool {
        self.nodes.contains_key(&coord)
    }

    /// Neighbor list of `coord`, empty for absent nodes.
    pub fn neighbors(&self, coord: Dims) -> &[Dims] {
        self.nodes.get(&coord).map(Node::neighbors).unwrap_or(&[])
    }

    /// Node coordinates in scan order.
    pub fn coords(&self) -> impl Iterator<Item = Dims> + '_ {
        Dims::iter_fill(Dims::ZERO, self.size).filter(|pos| self.nodes.contains_key(pos))
    }

    /// Nodes in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        Dims::iter_fill(Dims::ZERO, self.size).filter_map(|pos| self.nodes.get(&pos))
    }

    /// Clears every neighbor set and rebuilds it from the current wall
    /// state. Two nodes become neighbors iff they are grid-adjacent, the
    /// wall between them is cleared and both cells have a node.
    pub fn rebuild_adjacency(&mut self, walls: &WallGrid) {
        let rebuilt: Vec<(Dims, SmallVec<[Dims; 4]>)> = self
            .coords()
            .map(|coord| {
                let neighbors = Way::get_in_order()
                    .into_iter()
                    .map(|way| coord + way.offset())
                    .filter(|&other| {
                        self.nodes.contains_key(&other) && walls.is_open_between(coord, other)
                    })
                    .collect();
                (coord, neighbors)
            })
            .collect();

        for (coord, neighbors) in rebuilt {
            if let Some(node) = self.nodes.get_mut(&coord) {
                node.neighbors = neighbors;
            }
        }
    }

    /// Partitions the nodes into connected components via breadth-first
    /// traversal. Components are ordered by their scan-order seed node and
    /// each component lists its nodes in BFS discovery order.
    pub fn components(&self) -> Vec<Vec<Dims>> {
        let mut seen: HashSet<Dims> = HashSet::with_capacity(self.nodes.len());
        let mut components = Vec::new();

        for root in self.coords() {
            if seen.contains(&root) {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::new();
            seen.insert(root);
            queue.push_back(root);

            while let Some(coord) = queue.pop_front() {
                component.push(coord);
                for &next in self.neighbors(coord) {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }

            components.push(component);
        }

        components
    }
}
