//! Generic A* in the shape of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! with two deliberate differences: successors are pushed unconditionally (there is no
//! decrease-key, stale frontier entries are dropped once their node has been explored) and
//! frontier ties are broken by insertion order so that results are reproducible.
use fxhash::FxHashSet;
use log::trace;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// A node of the search tree. The predecessor is an index into the arena owning all nodes of
/// one search, so predecessor chains always lead back to the start node at index 0.
#[derive(Clone, Debug)]
pub struct SearchNode<N, C> {
    pub node: N,
    pub parent: Option<usize>,
    /// Accumulated cost from the start.
    pub g: C,
    /// Heuristic estimate to the goal.
    pub h: C,
    pub f: C,
}

struct FrontierEntry<K> {
    estimated_cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest estimate first, then first inserted
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

fn reverse_path<N: Clone, C>(nodes: &[SearchNode<N, C>], start: usize) -> Vec<N> {
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| nodes[i].parent)
        .map(|i| nodes[i].node.clone())
        .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds, returning the path including both ends and its
/// cost. Returns [None] once the frontier is exhausted.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let h = heuristic(start);
    let mut nodes = vec![SearchNode {
        node: start.clone(),
        parent: None,
        g: Zero::zero(),
        h,
        f: h,
    }];
    let mut to_see = BinaryHeap::new();
    to_see.push(FrontierEntry {
        estimated_cost: h,
        sequence: 0,
        index: 0,
    });
    let mut sequence = 0;
    let mut explored: FxHashSet<N> = FxHashSet::default();
    while let Some(FrontierEntry { index, .. }) = to_see.pop() {
        let (cost, successors) = {
            let current = &nodes[index];
            if success(&current.node) {
                let path = reverse_path(&nodes, index);
                trace!(
                    "Reached goal after creating {} nodes, {} explored",
                    nodes.len(),
                    explored.len()
                );
                return Some((path, current.g));
            }
            // A node may sit in the frontier several times, only the first one popped counts
            if !explored.insert(current.node.clone()) {
                continue;
            }
            (current.g, successors(&current.node))
        };
        for (successor, move_cost) in successors {
            if explored.contains(&successor) {
                continue;
            }
            let g = cost + move_cost;
            let h = heuristic(&successor);
            let f = g + h;
            nodes.push(SearchNode {
                node: successor,
                parent: Some(index),
                g,
                h,
                f,
            });
            sequence += 1;
            to_see.push(FrontierEntry {
                estimated_cost: f,
                sequence,
                index: nodes.len() - 1,
            });
        }
    }
    trace!("Frontier exhausted after creating {} nodes", nodes.len());
    None
}
