use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::algorithms::SearchError;
use crate::board::NodeGraph;
use crate::dims::Dims;

/// Outcome of an exhaustive depth-first exploration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsResult {
    /// Every node arrival in order, including the re-arrivals that a
    /// walking agent makes when it backtracks out of a dead branch. Nodes
    /// may therefore appear several times.
    pub trace: Vec<Dims>,
    /// Start-to-goal path rebuilt from the discovery tree; empty when the
    /// goal was not reached.
    pub path: Vec<Dims>,
    /// First-time node discoveries.
    pub expansions: usize,
    pub found: bool,
}

/// Per-run search state, threaded through the recursion so the explorer is
/// reentrant and runs over a shared graph never contaminate each other.
struct SearchContext<'a> {
    graph: &'a NodeGraph,
    goal: Dims,
    visited: HashSet<Dims>,
    trace: Vec<Dims>,
    parents: HashMap<Dims, Dims>,
    expansions: usize,
}

/// Walks the whole graph depth-first from `start` until `goal` is reached,
/// recording the full physical path of the walk.
///
/// Neighbors are taken in their stored insertion order (Up, Down, Right,
/// Left), so the trace is deterministic for a fixed maze.
pub fn explore(graph: &NodeGraph, start: Dims, goal: Dims) -> Result<DfsResult, SearchError> {
    if !graph.contains(start) {
        return Err(SearchError::MissingStart(start));
    }
    if !graph.contains(goal) {
        return Err(SearchError::MissingGoal(goal));
    }

    let mut ctx = SearchContext {
        graph,
        goal,
        visited: HashSet::new(),
        trace: Vec::new(),
        parents: HashMap::new(),
        expansions: 0,
    };

    let found = visit(&mut ctx, start);

    let path = if found {
        rebuild_path(&ctx.parents, start, goal)
    } else {
        Vec::new()
    };

    Ok(DfsResult {
        trace: ctx.trace,
        path,
        expansions: ctx.expansions,
        found,
    })
}

fn visit(ctx: &mut SearchContext, node: Dims) -> bool {
    ctx.trace.push(node);
    if ctx.visited.insert(node) {
        ctx.expansions += 1;
    }

    if node == ctx.goal {
        return true;
    }

    let neighbors: SmallVec<[Dims; 4]> = ctx.graph.neighbors(node).iter().copied().collect();
    for next in neighbors {
        if ctx.visited.contains(&next) {
            continue;
        }

        ctx.parents.insert(next, node);
        if visit(ctx, next) {
            return true;
        }
    }

    // branch exhausted, the agent steps back through this node
    ctx.trace.push(node);
    false
}

fn rebuild_path(parents: &HashMap<Dims, Dims>, start: Dims, goal: Dims) -> Vec<Dims> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::generator::build_graph;
    use crate::board::WallGrid;

    /// 3x1 corridor: (0,0) - (1,0) - (2,0).
    fn corridor() -> NodeGraph {
        let mut walls = WallGrid::new(Dims(3, 1));
        walls.clear_vertical(Dims(1, 0));
        walls.clear_vertical(Dims(2, 0));
        build_graph(&walls)
    }

    /// T shape: a 3x1 corridor with a dead-end cell above the middle.
    ///
    /// ```text
    ///     (1,1)
    /// (0,0)(1,0)(2,0)
    /// ```
    fn tee() -> NodeGraph {
        let mut walls = WallGrid::new(Dims(3, 2));
        walls.clear_vertical(Dims(1, 0));
        walls.clear_vertical(Dims(2, 0));
        walls.clear_horizontal(Dims(1, 1));
        build_graph(&walls)
    }

    #[test]
    fn straight_run_has_no_backtracks() {
        let graph = corridor();
        let result = explore(&graph, Dims(0, 0), Dims(2, 0)).unwrap();

        assert!(result.found);
        assert_eq!(result.trace, [Dims(0, 0), Dims(1, 0), Dims(2, 0)]);
        assert_eq!(result.path, [Dims(0, 0), Dims(1, 0), Dims(2, 0)]);
        assert_eq!(result.expansions, 3);
    }

    #[test]
    fn dead_end_shows_up_twice_in_trace() {
        let graph = tee();
        let result = explore(&graph, Dims(0, 0), Dims(2, 0)).unwrap();

        assert!(result.found);
        // Up before Right: the walk detours into (1,1) and backs out of it
        assert_eq!(
            result.trace,
            [
                Dims(0, 0),
                Dims(1, 0),
                Dims(1, 1),
                Dims(1, 1),
                Dims(2, 0),
            ]
        );
        // the final path skips the dead end
        assert_eq!(result.path, [Dims(0, 0), Dims(1, 0), Dims(2, 0)]);
        assert_eq!(result.expansions, 4);
    }

    #[test]
    fn expansions_count_nodes_once() {
        let graph = tee();
        let result = explore(&graph, Dims(0, 0), Dims(2, 0)).unwrap();

        let unique: HashSet<_> = result.trace.iter().copied().collect();
        assert_eq!(result.expansions, unique.len());
        assert!(result.expansions <= graph.len());
    }

    #[test]
    fn start_equals_goal() {
        let graph = corridor();
        let result = explore(&graph, Dims(1, 0), Dims(1, 0)).unwrap();

        assert!(result.found);
        assert_eq!(result.trace, [Dims(1, 0)]);
        assert_eq!(result.path, [Dims(1, 0)]);
        assert_eq!(result.expansions, 1);
    }

    #[test]
    fn missing_endpoints_are_rejected() {
        let graph = corridor();

        assert_eq!(
            explore(&graph, Dims(7, 7), Dims(2, 0)),
            Err(SearchError::MissingStart(Dims(7, 7))),
        );
        assert_eq!(
            explore(&graph, Dims(0, 0), Dims(7, 7)),
            Err(SearchError::MissingGoal(Dims(7, 7))),
        );
    }

    #[test]
    fn unreachable_goal_reports_not_found() {
        // two islands, no repair
        let mut walls = WallGrid::new(Dims(3, 1));
        walls.clear_vertical(Dims(0, 0));
        walls.clear_vertical(Dims(3, 0));
        let graph = build_graph(&walls);
        assert!(graph.contains(Dims(0, 0)) && graph.contains(Dims(2, 0)));

        let result = explore(&graph, Dims(0, 0), Dims(2, 0)).unwrap();
        assert!(!result.found);
        assert!(result.path.is_empty());
        // the walk enters the start and dies there
        assert_eq!(result.trace, [Dims(0, 0), Dims(0, 0)]);
    }
}
