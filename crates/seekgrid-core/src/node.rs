//! [`SearchNode`]: one discovered state, linked to its predecessor.
//!
//! Nodes form a parent-linked tree during a search. They carry two separate
//! comparison contracts:
//!
//! - identity (`PartialEq`, `Hash`) is the grid position alone, so set
//!   membership is keyed purely on `state`;
//! - priority is the cumulative `cost`, available only through the
//!   [`ByCost`] wrapper.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::geom::Point;

/// A search-tree node. Never mutated after creation.
#[derive(Clone)]
pub struct SearchNode {
    state: Point,
    parent: Option<Arc<SearchNode>>,
    cost: u64,
    depth: u32,
}

impl SearchNode {
    /// The root of a search tree: no parent, zero cost, zero depth.
    pub fn root(state: Point) -> Self {
        Self {
            state,
            parent: None,
            cost: 0,
            depth: 0,
        }
    }

    pub fn new(state: Point, parent: Option<Arc<SearchNode>>, cost: u64, depth: u32) -> Self {
        Self {
            state,
            parent,
            cost,
            depth,
        }
    }

    /// Grid position, and the node's identity.
    #[inline]
    pub fn state(&self) -> Point {
        self.state
    }

    #[inline]
    pub fn parent(&self) -> Option<&Arc<SearchNode>> {
        self.parent.as_ref()
    }

    /// Cumulative path cost from the start.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Steps from the start. Only meaningful when the search tracks depth.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// A fresh node with the same state, parent and cost but a new depth.
    pub fn with_depth(&self, depth: u32) -> Self {
        Self {
            state: self.state,
            parent: self.parent.clone(),
            cost: self.cost,
            depth,
        }
    }

    /// Walk parent links back to the root and return the states in
    /// start-to-this-node order.
    pub fn path(&self) -> Vec<Point> {
        let mut path = vec![self.state];
        let mut cur = self.parent.as_deref();
        while let Some(node) = cur {
            path.push(node.state);
            cur = node.parent.as_deref();
        }
        path.reverse();
        path
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl fmt::Debug for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("state", &self.state)
            .field("parent", &self.parent.as_ref().map(|p| p.state))
            .field("cost", &self.cost)
            .field("depth", &self.depth)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ByCost
// ---------------------------------------------------------------------------

/// Priority view of a node, ordered by `cost` only.
///
/// Reversed so that `BinaryHeap` (a max-heap) pops the cheapest node first.
/// Equal costs compare equal; which one pops first is up to the heap.
#[derive(Clone, Debug)]
pub struct ByCost(pub Arc<SearchNode>);

impl PartialEq for ByCost {
    fn eq(&self, other: &Self) -> bool {
        self.0.cost == other.0.cost
    }
}

impl Eq for ByCost {}

impl Ord for ByCost {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cost.cmp(&self.0.cost)
    }
}

impl PartialOrd for ByCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BinaryHeap, HashSet};

    fn chain(points: &[(i32, i32)]) -> Arc<SearchNode> {
        let mut iter = points.iter();
        let &(x, y) = iter.next().expect("non-empty chain");
        let mut node = Arc::new(SearchNode::root(Point::new(x, y)));
        for &(x, y) in iter {
            let cost = node.cost() + 1;
            let depth = node.depth() + 1;
            node = Arc::new(SearchNode::new(
                Point::new(x, y),
                Some(node.clone()),
                cost,
                depth,
            ));
        }
        node
    }

    #[test]
    fn identity_is_state_only() {
        let a = SearchNode::new(Point::new(1, 1), None, 3, 2);
        let b = SearchNode::new(Point::new(1, 1), None, 9, 7);
        let c = SearchNode::new(Point::new(1, 2), None, 3, 2);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn priority_is_cost_only_and_cheapest_first() {
        let mut heap = BinaryHeap::new();
        for (x, cost) in [(0, 5), (1, 1), (2, 3)] {
            heap.push(ByCost(Arc::new(SearchNode::new(
                Point::new(x, 0),
                None,
                cost,
                0,
            ))));
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|n| n.0.cost())).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }

    #[test]
    fn path_walks_parents_in_forward_order() {
        let goal = chain(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
        assert_eq!(
            goal.path(),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
            ]
        );
        // Walking again yields the same branch.
        assert_eq!(goal.path(), goal.path());
    }

    #[test]
    fn root_path_is_itself() {
        let root = SearchNode::root(Point::new(3, 3));
        assert_eq!(root.path(), vec![Point::new(3, 3)]);
        assert_eq!(root.cost(), 0);
        assert!(root.parent().is_none());
    }

    #[test]
    fn with_depth_builds_a_fresh_node() {
        let node = chain(&[(0, 0), (0, 1)]);
        let deeper = node.with_depth(7);
        assert_eq!(deeper.depth(), 7);
        assert_eq!(deeper.cost(), node.cost());
        assert_eq!(deeper.state(), node.state());
        assert_eq!(node.depth(), 1);
        assert_eq!(deeper.path(), node.path());
    }
}
