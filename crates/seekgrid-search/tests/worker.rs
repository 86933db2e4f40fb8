use std::sync::mpsc;
use std::time::Duration;

use seekgrid_core::{Grid, Point};
use seekgrid_search::{
    BackgroundRun, SearchEngine, SearchStatus, UninformedStrategy, VisualizationMethod, Visualizer,
};

/// Blocks on every wait until the test thread sends a token.
struct Gate {
    steps: mpsc::Receiver<()>,
    seen: mpsc::Sender<Point>,
}

impl Visualizer for Gate {
    fn render(&mut self, _grid: &Grid, _path: &[Point], current: Option<Point>) {
        if let Some(p) = current {
            let _ = self.seen.send(p);
        }
    }

    fn wait_for_advance(&mut self) {
        let _ = self.steps.recv();
    }
}

#[test]
fn worker_advances_one_step_per_token() {
    let (step_tx, step_rx) = mpsc::channel();
    let (seen_tx, seen_rx) = mpsc::channel();
    let grid = Grid::new(3, 1, Point::new(0, 0), Point::new(2, 0));
    let engine = SearchEngine::new(grid, UninformedStrategy::BreadthFirst)
        .unwrap()
        .with_visualizer(
            VisualizationMethod::Gui,
            Box::new(Gate {
                steps: step_rx,
                seen: seen_tx,
            }),
        );

    let mut run = BackgroundRun::new(engine);
    assert!(run.launch().unwrap());

    let timeout = Duration::from_secs(5);
    assert_eq!(seen_rx.recv_timeout(timeout), Ok(Point::new(0, 0)));
    assert!(!run.is_finished());
    step_tx.send(()).unwrap();
    assert_eq!(seen_rx.recv_timeout(timeout), Ok(Point::new(1, 0)));
    step_tx.send(()).unwrap();
    assert_eq!(seen_rx.recv_timeout(timeout), Ok(Point::new(2, 0)));
    step_tx.send(()).unwrap();

    let report = run.join().unwrap().unwrap();
    assert_eq!(report.status, SearchStatus::GoalFound);
    assert_eq!(report.final_cost, 2);
}

#[test]
fn dropping_the_controller_lets_the_worker_finish() {
    let (step_tx, step_rx) = mpsc::channel::<()>();
    let (seen_tx, _seen_rx) = mpsc::channel();
    let grid = Grid::new(4, 4, Point::new(0, 0), Point::new(3, 3));
    let engine = SearchEngine::new(grid, UninformedStrategy::DepthFirst)
        .unwrap()
        .with_visualizer(
            VisualizationMethod::Gui,
            Box::new(Gate {
                steps: step_rx,
                seen: seen_tx,
            }),
        );

    let mut run = BackgroundRun::new(engine);
    run.launch().unwrap();
    drop(step_tx);
    let report = run.join().unwrap().unwrap();
    assert!(report.found());
}
