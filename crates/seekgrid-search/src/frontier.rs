//! Frontier disciplines: LIFO stack, FIFO queue, min-cost heap.
//!
//! The engine talks to the frontier only through the [`Frontier`] trait.
//! Which implementation it gets is decided once, from the strategy, by
//! [`frontier_for`].

use std::collections::{BinaryHeap, VecDeque};
use std::sync::Arc;

use seekgrid_core::{ByCost, SearchNode};

use crate::strategy::UninformedStrategy;

/// Queue discipline over pending search nodes.
pub trait Frontier: Send {
    fn push(&mut self, node: Arc<SearchNode>);
    fn pop(&mut self) -> Option<Arc<SearchNode>>;
    fn len(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Default)]
pub struct StackFrontier {
    nodes: Vec<Arc<SearchNode>>,
}

impl Frontier for StackFrontier {
    fn push(&mut self, node: Arc<SearchNode>) {
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Option<Arc<SearchNode>> {
        self.nodes.pop()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

/// First in, first out.
#[derive(Default)]
pub struct QueueFrontier {
    nodes: VecDeque<Arc<SearchNode>>,
}

impl Frontier for QueueFrontier {
    fn push(&mut self, node: Arc<SearchNode>) {
        self.nodes.push_back(node);
    }

    fn pop(&mut self) -> Option<Arc<SearchNode>> {
        self.nodes.pop_front()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

/// Lowest cumulative cost first. Ties pop in whatever order the heap
/// yields them.
#[derive(Default)]
pub struct CostFrontier {
    heap: BinaryHeap<ByCost>,
}

impl Frontier for CostFrontier {
    fn push(&mut self, node: Arc<SearchNode>) {
        self.heap.push(ByCost(node));
    }

    fn pop(&mut self) -> Option<Arc<SearchNode>> {
        self.heap.pop().map(|entry| entry.0)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// The frontier discipline for a strategy. Iterative deepening reuses the
/// depth-limited stack.
pub fn frontier_for(strategy: UninformedStrategy) -> Box<dyn Frontier> {
    match strategy {
        UninformedStrategy::DepthFirst
        | UninformedStrategy::DepthLimited
        | UninformedStrategy::IterativeDeepening => Box::new(StackFrontier::default()),
        UninformedStrategy::BreadthFirst => Box::new(QueueFrontier::default()),
        UninformedStrategy::UniformCost => Box::new(CostFrontier::default()),
    }
}
