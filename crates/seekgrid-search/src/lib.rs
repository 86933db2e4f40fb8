//! Uninformed search strategies over a [`Grid`](seekgrid_core::Grid).
//!
//! | Strategy | Frontier |
//! |---|---|
//! | Depth-first | [`StackFrontier`] |
//! | Depth-limited | [`StackFrontier`], cut off at the depth limit |
//! | Breadth-first | [`QueueFrontier`] |
//! | Uniform-cost | [`CostFrontier`] |
//! | Iterative deepening | depth-limited attempts with limits 0, 1, 2, … |
//!
//! All five run through the same [`SearchEngine`]; only the frontier and the
//! depth policy differ. A [`Visualizer`] attached to the engine sees every
//! step and may pause the run, and [`BackgroundRun`] moves a run onto a
//! worker thread for front ends that own the main thread.

pub mod engine;
pub mod frontier;
pub mod strategy;
pub mod visualizer;
pub mod worker;

pub use engine::{MAX_DEPTH_LIMIT, SearchEngine, SearchReport, SearchStatus};
pub use frontier::{CostFrontier, Frontier, QueueFrontier, StackFrontier, frontier_for};
pub use strategy::{InformedStrategy, SearchStrategy, UninformedStrategy, VisualizationMethod};
pub use visualizer::{Recorder, VisualEvent, Visualizer};
pub use worker::BackgroundRun;
