//! The display sink the engine reports to.

use std::sync::{Arc, Mutex};

use seekgrid_core::{Grid, Point};

use crate::engine::SearchReport;

/// Anything that can show the search as it runs.
///
/// The engine calls [`render`](Visualizer::render) with the path found so
/// far and the node being processed, then
/// [`wait_for_advance`](Visualizer::wait_for_advance) when the visualization
/// method is interactive. How the wait is satisfied (key, click, timer, or
/// not at all) is the sink's business; the engine only needs it to return.
pub trait Visualizer: Send {
    fn render(&mut self, grid: &Grid, path: &[Point], current: Option<Point>);

    /// Block until the user asks for the next step.
    fn wait_for_advance(&mut self) {}

    /// Called once when [`SearchEngine::run`](crate::SearchEngine::run)
    /// completes.
    fn finished(&mut self, _grid: &Grid, _report: &SearchReport) {}
}

/// One call received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualEvent {
    Render {
        path: Vec<Point>,
        current: Option<Point>,
    },
    Wait,
    Finished {
        path: Vec<Point>,
        cost: u64,
    },
}

/// In-memory sink that records every call. Clones share the same log, so a
/// test can keep one handle and give the other to the engine.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<VisualEvent>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<VisualEvent> {
        self.lock().clone()
    }

    /// The `current` positions of every render, in call order.
    pub fn rendered_positions(&self) -> Vec<Point> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                VisualEvent::Render { current, .. } => *current,
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: VisualEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<VisualEvent>> {
        // A poisoned log is still readable; recording never panics midway.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Visualizer for Recorder {
    fn render(&mut self, _grid: &Grid, path: &[Point], current: Option<Point>) {
        self.push(VisualEvent::Render {
            path: path.to_vec(),
            current,
        });
    }

    fn wait_for_advance(&mut self) {
        self.push(VisualEvent::Wait);
    }

    fn finished(&mut self, _grid: &Grid, report: &SearchReport) {
        self.push(VisualEvent::Finished {
            path: report.path.clone(),
            cost: report.final_cost,
        });
    }
}
