//! Running an engine on its own thread.
//!
//! Windowed front ends own the main thread for their event loop, so the
//! search has to run elsewhere and block there while it waits for clicks.

use std::io;
use std::thread::{self, JoinHandle};

use seekgrid_core::{Grid, SearchError};

use crate::engine::{SearchEngine, SearchReport};

type RunResult = Result<SearchReport, SearchError>;

/// A search that runs at most once, off the calling thread.
pub struct BackgroundRun {
    grid: Grid,
    engine: Option<SearchEngine>,
    handle: Option<JoinHandle<RunResult>>,
}

impl BackgroundRun {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            grid: engine.grid().clone(),
            engine: Some(engine),
            handle: None,
        }
    }

    /// The grid being searched.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start the worker. Returns `Ok(false)` without doing anything if it
    /// was already started.
    pub fn launch(&mut self) -> io::Result<bool> {
        let Some(mut engine) = self.engine.take() else {
            log::debug!("search worker already launched");
            return Ok(false);
        };
        let handle = thread::Builder::new()
            .name("seekgrid-search".into())
            .spawn(move || engine.run())?;
        self.handle = Some(handle);
        Ok(true)
    }

    pub fn is_launched(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether the worker has returned. `false` before launch.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_finished())
    }

    /// Wait for the worker. `None` if it was never launched.
    ///
    /// A panic on the worker is resumed on the caller.
    pub fn join(self) -> Option<RunResult> {
        let handle = self.handle?;
        match handle.join() {
            Ok(result) => Some(result),
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}
