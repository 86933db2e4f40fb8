//! The search engine: one frontier protocol driving every uninformed
//! strategy.
//!
//! A run moves through [`SearchStatus::Ready`] → [`SearchStatus::Running`]
//! and ends in one of `GoalFound`, `Exhausted` or `DepthLimitHit`. Each call
//! to [`SearchEngine::step`] performs exactly one pop-expand-push iteration,
//! which is where visualization sinks get to pause the run.

use std::collections::HashSet;
use std::sync::Arc;

use seekgrid_core::{Grid, Point, SearchError, SearchNode};

use crate::frontier::{Frontier, frontier_for};
use crate::strategy::{SearchStrategy, UninformedStrategy, VisualizationMethod};
use crate::visualizer::Visualizer;

/// Upper bound for any depth limit, and the default limit for depth-limited
/// and iterative-deepening runs.
pub const MAX_DEPTH_LIMIT: u32 = 100;

/// Where a run currently stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    Ready,
    Running,
    GoalFound,
    Exhausted,
    DepthLimitHit,
}

impl SearchStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::GoalFound | Self::Exhausted | Self::DepthLimitHit
        )
    }
}

/// Outcome of [`SearchEngine::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: UninformedStrategy,
    pub status: SearchStatus,
    /// Start-to-goal states; empty when the goal was not reached.
    pub path: Vec<Point>,
    pub final_cost: u64,
    pub depth_limit_hit: bool,
    /// The limit in force when the run ended (for iterative deepening, the
    /// depth of the successful or last attempt).
    pub depth_limit: Option<u32>,
    /// Nodes expanded over the whole run, all attempts included.
    pub expanded: usize,
    /// Depth of the deepest expanded node, when the run tracks depth and
    /// expanded anything.
    pub deepest_expanded: Option<u32>,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Drives one strategy over one grid.
pub struct SearchEngine {
    grid: Grid,
    strategy: UninformedStrategy,
    frontier: Box<dyn Frontier>,
    // States currently in `frontier`; kept in lockstep with it.
    frontier_members: HashSet<Point>,
    explored: HashSet<Point>,
    path: Vec<Point>,
    final_cost: u64,
    configured_limit: Option<u32>,
    depth_limit: Option<u32>,
    // Fixed per run: whether children get `parent.depth + 1`.
    track_depth: bool,
    depth_limit_hit: bool,
    status: SearchStatus,
    expanded: usize,
    deepest_expanded: Option<u32>,
    method: VisualizationMethod,
    visualizer: Option<Box<dyn Visualizer>>,
}

impl SearchEngine {
    /// Bind a strategy to a grid.
    ///
    /// Fails with [`SearchError::InvalidArgument`] for informed strategies
    /// and for grids without any cells.
    pub fn new(grid: Grid, strategy: impl Into<SearchStrategy>) -> Result<Self, SearchError> {
        let strategy = match strategy.into() {
            SearchStrategy::Uninformed(s) => s,
            SearchStrategy::Informed(s) => {
                return Err(SearchError::invalid(format!(
                    "{} is not an uninformed strategy",
                    s.name()
                )));
            }
        };
        if grid.width() <= 0 || grid.height() <= 0 {
            return Err(SearchError::invalid(format!(
                "grid must have cells, got {}x{}",
                grid.width(),
                grid.height()
            )));
        }
        let configured_limit = match strategy {
            UninformedStrategy::DepthLimited => Some(MAX_DEPTH_LIMIT),
            _ => None,
        };
        Ok(Self {
            grid,
            strategy,
            frontier: frontier_for(strategy),
            frontier_members: HashSet::new(),
            explored: HashSet::new(),
            path: Vec::new(),
            final_cost: 0,
            configured_limit,
            depth_limit: configured_limit,
            track_depth: strategy.tracks_depth(),
            depth_limit_hit: false,
            status: SearchStatus::Ready,
            expanded: 0,
            deepest_expanded: None,
            method: VisualizationMethod::Nothing,
            visualizer: None,
        })
    }

    /// Set the depth limit, clamped to [`MAX_DEPTH_LIMIT`].
    ///
    /// For iterative deepening this is the deepest attempt. `None` restores
    /// the strategy's default.
    pub fn with_depth_limit(mut self, limit: Option<u32>) -> Self {
        self.configured_limit = match (limit, self.strategy) {
            (Some(l), _) => Some(l.min(MAX_DEPTH_LIMIT)),
            (None, UninformedStrategy::DepthLimited) => Some(MAX_DEPTH_LIMIT),
            (None, _) => None,
        };
        self.depth_limit = self.configured_limit;
        self.track_depth = self.strategy.tracks_depth() || self.configured_limit.is_some();
        self
    }

    /// Attach a display sink and choose when it is driven.
    pub fn with_visualizer(
        mut self,
        method: VisualizationMethod,
        visualizer: Box<dyn Visualizer>,
    ) -> Self {
        self.method = method;
        self.visualizer = Some(visualizer);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn strategy(&self) -> UninformedStrategy {
        self.strategy
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn final_cost(&self) -> u64 {
        self.final_cost
    }

    pub fn depth_limit(&self) -> Option<u32> {
        self.depth_limit
    }

    pub fn depth_limit_hit(&self) -> bool {
        self.depth_limit_hit
    }

    pub fn explored(&self) -> &HashSet<Point> {
        &self.explored
    }

    /// Whether `p` is waiting in the frontier.
    pub fn is_pending(&self, p: Point) -> bool {
        self.frontier_members.contains(&p)
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Run to completion with the configured strategy.
    pub fn run(&mut self) -> Result<SearchReport, SearchError> {
        log::info!("Running {}...", self.strategy);
        self.expanded = 0;
        self.deepest_expanded = None;

        if self.strategy == UninformedStrategy::IterativeDeepening {
            self.iterative_deepening_search()?;
        } else {
            self.search()?;
        }

        log::info!("{} completed.", self.strategy);
        let report = self.report();
        if let Some(v) = self.visualizer.as_mut() {
            v.finished(&self.grid, &report);
        }
        Ok(report)
    }

    /// One full search under the current depth limit.
    pub fn search(&mut self) -> Result<SearchStatus, SearchError> {
        self.begin()?;
        loop {
            let status = self.step()?;
            if status.is_terminal() {
                return Ok(status);
            }
        }
    }

    /// Depth-limited searches with limits 0, 1, 2, … until one finds a path
    /// or the configured limit (default [`MAX_DEPTH_LIMIT`]) is exceeded.
    pub fn iterative_deepening_search(&mut self) -> Result<SearchStatus, SearchError> {
        let max_depth = self.configured_limit.unwrap_or(MAX_DEPTH_LIMIT);
        let mut status = SearchStatus::Exhausted;

        for depth in 0..=max_depth {
            self.depth_limit = Some(depth);
            status = self.search()?;
            log::debug!("{}: attempt at depth {depth} ended {status:?}", self.strategy);
            if !self.path.is_empty() {
                log::debug!("{}: Path found", self.strategy);
                log::debug!("Final depth: {depth}");
                break;
            }
        }
        Ok(status)
    }

    /// Clear per-attempt state and seed the frontier with the start node.
    pub fn begin(&mut self) -> Result<(), SearchError> {
        self.frontier.clear();
        self.frontier_members.clear();
        self.explored.clear();
        self.path.clear();
        self.final_cost = 0;
        self.depth_limit_hit = false;

        self.update_frontier(SearchNode::root(self.grid.start()))?;
        self.status = SearchStatus::Running;
        Ok(())
    }

    /// Perform one iteration: pop, goal test, depth test, expand.
    ///
    /// Returns the status after the iteration. Calling it on a `Ready`
    /// engine begins the run; calling it after a terminal status is a no-op.
    pub fn step(&mut self) -> Result<SearchStatus, SearchError> {
        if self.status == SearchStatus::Ready {
            self.begin()?;
        }
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let Some(current) = self.frontier.pop() else {
            log::debug!("{}: frontier exhausted", self.strategy);
            self.status = SearchStatus::Exhausted;
            return Ok(self.status);
        };
        let state = current.state();

        if self.method == VisualizationMethod::Gui {
            if let Some(v) = self.visualizer.as_mut() {
                v.render(&self.grid, &self.path, Some(state));
                v.wait_for_advance();
            }
        }

        self.frontier_members.remove(&state);
        debug_assert_eq!(self.frontier.len(), self.frontier_members.len());

        if self.grid.is_goal(&current) {
            log::debug!("{}: Goal state found -> {}", self.strategy, self.grid.goal());
            self.path = current.path();
            self.final_cost = current.cost();
            self.status = SearchStatus::GoalFound;
            return Ok(self.status);
        }

        if let Some(limit) = self.depth_limit {
            if current.depth() >= limit {
                log::debug!("{}: Depth limit hit!", self.strategy);
                self.depth_limit_hit = true;
                self.final_cost = current.cost();
                self.render_cutoff(state);
                self.status = SearchStatus::DepthLimitHit;
                return Ok(self.status);
            }
        }

        self.explored.insert(state);
        self.expanded += 1;
        if self.track_depth {
            self.deepest_expanded = self.deepest_expanded.max(Some(current.depth()));
        }

        for neighbor in self.grid.neighbors(&current)? {
            let neighbor = if self.track_depth {
                neighbor.with_depth(current.depth() + 1)
            } else {
                neighbor
            };
            let s = neighbor.state();
            if !self.explored.contains(&s) && !self.frontier_members.contains(&s) {
                self.update_frontier(neighbor)?;
            }
        }

        log::info!(
            "{}: Exploring node {} at depth {}",
            self.strategy,
            state,
            current.depth()
        );

        if self.method == VisualizationMethod::Cli {
            if let Some(v) = self.visualizer.as_mut() {
                v.render(&self.grid, &[], Some(state));
                v.wait_for_advance();
            }
        }

        Ok(self.status)
    }

    /// Queue `node` unless its state is already pending.
    ///
    /// Rejects nodes outside the grid and nodes cheaper than their parent
    /// with [`SearchError::TypeMismatch`].
    pub fn update_frontier(&mut self, node: SearchNode) -> Result<(), SearchError> {
        let state = node.state();
        if !self.grid.contains(state) {
            return Err(SearchError::mismatch(format!(
                "node {state} lies outside the grid"
            )));
        }
        if let Some(parent) = node.parent() {
            if node.cost() < parent.cost() {
                return Err(SearchError::mismatch(format!(
                    "node {state} costs {} but its parent costs {}",
                    node.cost(),
                    parent.cost()
                )));
            }
        }
        if self.frontier_members.insert(state) {
            self.frontier.push(Arc::new(node));
        }
        Ok(())
    }

    /// Snapshot of the run so far.
    pub fn report(&self) -> SearchReport {
        SearchReport {
            strategy: self.strategy,
            status: self.status,
            path: self.path.clone(),
            final_cost: self.final_cost,
            depth_limit_hit: self.depth_limit_hit,
            depth_limit: self.depth_limit,
            expanded: self.expanded,
            deepest_expanded: self.deepest_expanded,
        }
    }

    fn render_cutoff(&mut self, state: Point) {
        match self.visualizer.as_mut() {
            Some(v) => v.render(&self.grid, &[], Some(state)),
            None => log::debug!("\n{}", self.grid.snapshot(Some(state), &[])),
        }
    }
}
