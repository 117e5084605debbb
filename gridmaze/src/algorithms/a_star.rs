use hashbrown::HashMap;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::algorithms::SearchError;
use crate::board::NodeGraph;
use crate::dims::Dims;

/// Outcome of an A* run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AStarResult {
    /// Start-to-goal path, `None` when the goal is unreachable. An absent
    /// path is a successful negative answer, not an error.
    pub path: Option<Vec<Dims>>,
    /// Nodes popped from the open set.
    pub expansions: usize,
}

impl AStarResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Path length in nodes, 0 when no path exists.
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// Open-set entry; min-ordered by `f`, ties broken by insertion sequence so
/// earlier-queued nodes pop first.
struct OpenEntry {
    f: i32,
    seq: u64,
    coord: Dims,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    // inverted, BinaryHeap is a max-heap
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

/// Shortest path from `start` to `goal` under unit edge cost, guided by the
/// Manhattan-distance heuristic (admissible and consistent on a grid with
/// unit non-diagonal steps).
pub fn find_path(graph: &NodeGraph, start: Dims, goal: Dims) -> Result<AStarResult, SearchError> {
    if !graph.contains(start) {
        return Err(SearchError::MissingStart(start));
    }
    if !graph.contains(goal) {
        return Err(SearchError::MissingGoal(goal));
    }

    // g defaults to infinity for nodes never relaxed
    let mut g: HashMap<Dims, i32> = HashMap::new();
    let mut parents: HashMap<Dims, Dims> = HashMap::new();
    // latest queued sequence number per node; older heap entries are stale
    let mut queued: HashMap<Dims, u64> = HashMap::new();
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expansions = 0;

    g.insert(start, 0);
    queued.insert(start, seq);
    open.push(OpenEntry {
        f: start.manhattan_dist(goal),
        seq,
        coord: start,
    });

    while let Some(entry) = open.pop() {
        let current = entry.coord;
        if queued.get(&current) != Some(&entry.seq) {
            continue;
        }
        queued.remove(&current);

        if current == goal {
            return Ok(AStarResult {
                path: Some(rebuild_path(&parents, start, goal)),
                expansions,
            });
        }
        expansions += 1;

        let tentative = g[&current] + 1;
        for &next in graph.neighbors(current) {
            if g.get(&next).map_or(true, |&known| tentative < known) {
                parents.insert(next, current);
                g.insert(next, tentative);

                seq += 1;
                queued.insert(next, seq);
                open.push(OpenEntry {
                    f: tentative + next.manhattan_dist(goal),
                    seq,
                    coord: next,
                });
            }
        }
    }

    Ok(AStarResult {
        path: None,
        expansions,
    })
}

fn rebuild_path(parents: &HashMap<Dims, Dims>, start: Dims, goal: Dims) -> Vec<Dims> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        current = parents[&current];
        path.push(current);
    }

    path.reverse();
    path
}
