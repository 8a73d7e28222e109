//! Generic graph searches in the style of
//! [pathfinding's directed searches](https://docs.rs/pathfinding/latest/pathfinding/directed/index.html).
//! Parent links live in an [IndexMap] so that frontier entries only carry an index and paths are
//! rebuilt by hopping from index to index.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::{IndexMap, IndexSet};
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Pending-exploration collection of an uninformed search. The discipline of
/// [pop](Frontier::pop) decides whether the search is depth-first or breadth-first.
pub trait Frontier<T>: Default {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
}

/// Last in, first out.
impl<T> Frontier<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

/// First in, first out.
impl<T> Frontier<T> for VecDeque<T> {
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    counter: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.counter == other.counter
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then the entry that was queued first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.counter.cmp(&self.counter),
            s => s,
        }
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Uninformed search from `start` until `success` holds for a popped node. Nodes are marked as
/// visited when they are pushed, so every node enters the frontier at most once.
///
/// Returns the path (if any) together with every visited node in discovery order.
pub fn traverse<N, F, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
) -> (Option<Vec<N>>, FxIndexSet<N>)
where
    N: Eq + Hash + Clone,
    F: Frontier<usize>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = F::default();
    to_see.push(0);
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    let mut found = None;
    while let Some(index) = to_see.pop() {
        let successors = {
            let Some((node, _)) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                found = Some(reverse_path(&parents, |&p| p, index));
                break;
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                let n = e.index();
                e.insert(index);
                to_see.push(n);
            }
        }
    }
    // Keys of the parent map are exactly the nodes marked so far
    (found, parents.into_keys().collect())
}

/// A* from `start` until `success` holds for a popped node. Ties in estimated cost are broken in
/// favour of the entry queued first. Nodes are finalized when popped; stale duplicates left in
/// the heap by cost improvements are skipped.
///
/// Returns the path and its cost (if any) together with the finalized nodes in pop order.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> (Option<(Vec<N>, C)>, FxIndexSet<N>)
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut counter = 0;
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        counter,
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut closed: FxIndexSet<N> = FxIndexSet::default();
    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        let (successors, cost) = {
            let Some((node, &(_, cost))) = parents.get_index(index) else {
                continue;
            };
            if !closed.insert(node.clone()) {
                continue;
            }
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return (Some((path, cost)), closed);
            }
            (successors(node), cost)
        };
        for (successor, move_cost) in successors {
            if closed.contains(&successor) {
                continue;
            }
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            counter += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                counter,
                index: n,
            });
        }
    }
    (None, closed)
}
