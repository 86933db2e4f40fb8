//! Built-in grids, one per strategy.

use seekgrid_core::{Grid, Point};
use seekgrid_search::UninformedStrategy;

/// 5x5, start top-left, goal bottom-right, one barrier in the middle.
/// Uniform-cost search also gets two expensive cells to route around.
pub fn default_grid(strategy: UninformedStrategy) -> Grid {
    let grid = Grid::new(5, 5, Point::new(0, 0), Point::new(4, 4)).with_barriers([Point::new(2, 2)]);
    match strategy {
        UninformedStrategy::UniformCost => {
            grid.with_weighted_cells([(Point::new(3, 3), 5), (Point::new(2, 1), 9)])
        }
        _ => grid,
    }
}
