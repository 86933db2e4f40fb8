//! The search [`Grid`]: dimensions, start/goal, barriers and weighted cells.
//!
//! A grid is built once before a search and only read afterwards. The
//! engine queries it through [`Grid::is_goal`] and [`Grid::neighbors`];
//! display sinks query it through [`Grid::snapshot`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::canvas::{Canvas, Cell};
use crate::error::SearchError;
use crate::geom::{Point, Range};
use crate::node::SearchNode;
use crate::style::{AttrMask, Color, Style};

/// Step cost of a cell with no explicit weight.
pub const DEFAULT_STEP_COST: u32 = 1;

/// Largest accepted width or height.
pub const MAX_GRID_SIDE: i32 = 64;

pub const START_CHAR: char = 'S';
pub const GOAL_CHAR: char = 'G';
pub const BARRIER_CHAR: char = '#';
pub const WEIGHTED_CHAR: char = '$';
pub const PATH_CHAR: char = '.';
pub const CURRENT_CHAR: char = 'X';
pub const EMPTY_CHAR: char = '-';

const START_STYLE: Style = Style::new()
    .with_fg(Color::WHITE)
    .with_bg(Color::GREEN)
    .with_attrs(AttrMask::BOLD);
const GOAL_STYLE: Style = Style::new()
    .with_fg(Color::WHITE)
    .with_bg(Color::RED)
    .with_attrs(AttrMask::BOLD);
const BARRIER_STYLE: Style = Style::new().with_fg(Color::WHITE).with_bg(Color::BLACK);
const WEIGHTED_STYLE: Style = Style::new().with_fg(Color::BLACK).with_bg(Color::AMBER);
const PATH_STYLE: Style = Style::new().with_fg(Color::WHITE).with_bg(Color::BLUE);
const CURRENT_STYLE: Style = Style::new()
    .with_fg(Color::WHITE)
    .with_bg(Color::ORANGE)
    .with_attrs(AttrMask::BOLD);
const EMPTY_STYLE: Style = Style::new().with_fg(Color::GRAY);

/// Static map data for one search run.
///
/// Coordinates are expected to lie inside `[0, width) x [0, height)`; the
/// constructors do not check this. Call [`Grid::validate`] on grids that
/// come from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "GridSpec", into = "GridSpec")
)]
pub struct Grid {
    width: i32,
    height: i32,
    start: Point,
    goal: Point,
    barriers: HashSet<Point>,
    weighted_cells: HashMap<Point, u32>,
}

impl Grid {
    /// A grid with no barriers and uniform step cost.
    pub fn new(width: i32, height: i32, start: Point, goal: Point) -> Self {
        Self {
            width,
            height,
            start,
            goal,
            barriers: HashSet::new(),
            weighted_cells: HashMap::new(),
        }
    }

    /// Add impassable cells (builder).
    pub fn with_barriers(mut self, barriers: impl IntoIterator<Item = Point>) -> Self {
        self.barriers.extend(barriers);
        self
    }

    /// Add cells with a non-default step cost (builder). Later entries for
    /// the same cell replace earlier ones.
    pub fn with_weighted_cells(mut self, cells: impl IntoIterator<Item = (Point, u32)>) -> Self {
        self.weighted_cells.extend(cells);
        self
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    pub fn barriers(&self) -> &HashSet<Point> {
        &self.barriers
    }

    pub fn weighted_cells(&self) -> &HashMap<Point, u32> {
        &self.weighted_cells
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    pub fn is_barrier(&self, p: Point) -> bool {
        self.barriers.contains(&p)
    }

    /// Cost of stepping onto `p`.
    #[inline]
    pub fn step_cost(&self, p: Point) -> u32 {
        self.weighted_cells
            .get(&p)
            .copied()
            .unwrap_or(DEFAULT_STEP_COST)
    }

    /// Check the coordinate invariants: size in `1..=MAX_GRID_SIDE` on both
    /// axes, every referenced point in bounds, every weight positive.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SearchError::invalid(format!(
                "grid size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_GRID_SIDE || self.height > MAX_GRID_SIDE {
            return Err(SearchError::invalid(format!(
                "grid size {}x{} exceeds {MAX_GRID_SIDE}x{MAX_GRID_SIDE}",
                self.width, self.height
            )));
        }
        let check = |what: &str, p: Point| {
            if self.contains(p) {
                Ok(())
            } else {
                Err(SearchError::invalid(format!(
                    "{what} {p} is outside the {}x{} grid",
                    self.width, self.height
                )))
            }
        };
        check("start", self.start)?;
        check("goal", self.goal)?;
        for &b in &self.barriers {
            check("barrier", b)?;
        }
        for (&p, &cost) in &self.weighted_cells {
            check("weighted cell", p)?;
            if cost == 0 {
                return Err(SearchError::invalid(format!(
                    "weighted cell {p} must have a positive cost"
                )));
            }
        }
        Ok(())
    }

    /// Whether `node` sits on the goal.
    #[inline]
    pub fn is_goal(&self, node: &SearchNode) -> bool {
        node.state() == self.goal
    }

    /// Passable neighbours of `node` in the fixed order up, right, down,
    /// left. Each carries `node` as parent, the cumulative cost including the
    /// step onto it, and depth 0.
    ///
    /// Fails with `InvalidArgument` if a cumulative cost overflows `u64`.
    pub fn neighbors(&self, node: &Arc<SearchNode>) -> Result<Vec<SearchNode>, SearchError> {
        node.state()
            .neighbors_4()
            .into_iter()
            .filter(|&p| self.contains(p) && !self.is_barrier(p))
            .map(|p| {
                let cost = node
                    .cost()
                    .checked_add(u64::from(self.step_cost(p)))
                    .ok_or_else(|| SearchError::invalid(format!("path cost overflows at {p}")))?;
                Ok(SearchNode::new(p, Some(Arc::clone(node)), cost, 0))
            })
            .collect()
    }

    /// Read-only projection of the grid for display.
    ///
    /// Marker precedence: start, goal, barrier, weighted, path, current,
    /// empty.
    pub fn snapshot(&self, current: Option<Point>, path: &[Point]) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height);
        for p in self.bounds() {
            let cell = if p == self.start {
                Cell::new(START_CHAR, START_STYLE)
            } else if p == self.goal {
                Cell::new(GOAL_CHAR, GOAL_STYLE)
            } else if self.is_barrier(p) {
                Cell::new(BARRIER_CHAR, BARRIER_STYLE)
            } else if self.weighted_cells.contains_key(&p) {
                Cell::new(WEIGHTED_CHAR, WEIGHTED_STYLE)
            } else if path.contains(&p) {
                Cell::new(PATH_CHAR, PATH_STYLE)
            } else if current == Some(p) {
                Cell::new(CURRENT_CHAR, CURRENT_STYLE)
            } else {
                Cell::new(EMPTY_CHAR, EMPTY_STYLE)
            };
            canvas.set(p, cell);
        }
        canvas
    }

    fn sorted_barriers(&self) -> Vec<Point> {
        let mut v: Vec<Point> = self.barriers.iter().copied().collect();
        v.sort();
        v
    }

    fn sorted_weighted(&self) -> Vec<(Point, u32)> {
        let mut v: Vec<(Point, u32)> = self.weighted_cells.iter().map(|(&p, &c)| (p, c)).collect();
        v.sort();
        v
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {}x{}", self.width, self.height)?;
        writeln!(f, "start: {}", self.start)?;
        writeln!(f, "goal: {}", self.goal)?;
        let barriers: Vec<String> = self.sorted_barriers().iter().map(|p| p.to_string()).collect();
        writeln!(f, "barriers: [{}]", barriers.join(", "))?;
        let weighted: Vec<String> = self
            .sorted_weighted()
            .iter()
            .map(|(p, c)| format!("{p}: {c}"))
            .collect();
        write!(f, "weighted cells: {{{}}}", weighted.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// Flat, file-friendly form of a [`Grid`]: coordinates as `[x, y]` pairs and
/// weighted cells as `[x, y, cost]` triples.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub width: i32,
    pub height: i32,
    pub start: (i32, i32),
    pub goal: (i32, i32),
    #[cfg_attr(feature = "serde", serde(default))]
    pub barriers: Vec<(i32, i32)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weighted_cells: Vec<(i32, i32, u32)>,
}

impl From<GridSpec> for Grid {
    fn from(spec: GridSpec) -> Self {
        Grid::new(spec.width, spec.height, spec.start.into(), spec.goal.into())
            .with_barriers(spec.barriers.into_iter().map(Point::from))
            .with_weighted_cells(
                spec.weighted_cells
                    .into_iter()
                    .map(|(x, y, c)| (Point::new(x, y), c)),
            )
    }
}

impl From<Grid> for GridSpec {
    fn from(grid: Grid) -> Self {
        GridSpec {
            width: grid.width,
            height: grid.height,
            start: (grid.start.x, grid.start.y),
            goal: (grid.goal.x, grid.goal.y),
            barriers: grid.sorted_barriers().iter().map(|p| (p.x, p.y)).collect(),
            weighted_cells: grid
                .sorted_weighted()
                .iter()
                .map(|(p, c)| (p.x, p.y, *c))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::new(5, 5, Point::new(0, 0), Point::new(4, 4))
            .with_barriers([Point::new(2, 2)])
            .with_weighted_cells([(Point::new(3, 3), 5), (Point::new(2, 1), 9)])
    }

    fn states(nodes: &[SearchNode]) -> Vec<Point> {
        nodes.iter().map(SearchNode::state).collect()
    }

    #[test]
    fn mid_grid_neighbors_in_fixed_order() {
        let g = Grid::new(5, 5, Point::new(0, 0), Point::new(4, 4));
        let node = Arc::new(SearchNode::root(Point::new(2, 2)));
        let n = g.neighbors(&node).unwrap();
        assert_eq!(
            states(&n),
            vec![
                Point::new(2, 1),
                Point::new(3, 2),
                Point::new(2, 3),
                Point::new(1, 2),
            ]
        );
        for nb in &n {
            assert_eq!(nb.parent().map(|p| p.state()), Some(Point::new(2, 2)));
            assert_eq!(nb.cost(), 1);
            assert_eq!(nb.depth(), 0);
        }
    }

    #[test]
    fn neighbors_skip_bounds_and_barriers() {
        let g = sample();
        let corner = Arc::new(SearchNode::root(Point::new(0, 0)));
        assert_eq!(
            states(&g.neighbors(&corner).unwrap()),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );

        let beside_barrier = Arc::new(SearchNode::root(Point::new(2, 3)));
        let n = states(&g.neighbors(&beside_barrier).unwrap());
        assert!(!n.contains(&Point::new(2, 2)));
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn neighbor_cost_adds_cell_weight() {
        let g = sample();
        let node = Arc::new(SearchNode::new(Point::new(3, 2), None, 4, 0));
        let n = g.neighbors(&node).unwrap();
        let down = n.iter().find(|nb| nb.state() == Point::new(3, 3)).unwrap();
        assert_eq!(down.cost(), 9);
        let up = n.iter().find(|nb| nb.state() == Point::new(3, 1)).unwrap();
        assert_eq!(up.cost(), 5);
    }

    #[test]
    fn neighbor_cost_does_not_wrap_on_heavy_cells() {
        let g = Grid::new(3, 1, Point::new(0, 0), Point::new(2, 0))
            .with_weighted_cells([(Point::new(1, 0), u32::MAX), (Point::new(2, 0), u32::MAX)]);
        assert!(g.validate().is_ok());
        let root = Arc::new(SearchNode::root(Point::new(0, 0)));
        let mid = Arc::new(g.neighbors(&root).unwrap().remove(0));
        assert_eq!(mid.cost(), u64::from(u32::MAX));
        let end = g.neighbors(&mid).unwrap();
        let goal = end.iter().find(|nb| nb.state() == Point::new(2, 0)).unwrap();
        assert_eq!(goal.cost(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn neighbor_cost_overflow_is_an_error() {
        let g = Grid::new(2, 1, Point::new(0, 0), Point::new(1, 0));
        let node = Arc::new(SearchNode::new(Point::new(0, 0), None, u64::MAX, 0));
        assert!(matches!(
            g.neighbors(&node),
            Err(SearchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn goal_test_compares_state() {
        let g = sample();
        assert!(g.is_goal(&SearchNode::new(Point::new(4, 4), None, 8, 8)));
        assert!(!g.is_goal(&SearchNode::root(Point::new(0, 0))));
    }

    #[test]
    fn snapshot_marker_precedence() {
        let g = sample();
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 1)];
        let canvas = g.snapshot(Some(Point::new(1, 1)), &path);
        assert_eq!(canvas.row_chars(0), "S.---");
        // weighted beats path at (2, 1), current shows at (1, 1)
        assert_eq!(canvas.row_chars(1), "-X$--");
        assert_eq!(canvas.row_chars(2), "--#--");
        assert_eq!(canvas.row_chars(3), "---$-");
        assert_eq!(canvas.row_chars(4), "----G");
        assert_eq!(canvas.at(Point::new(0, 0)).style.bg, Color::GREEN);
        assert_eq!(canvas.at(Point::new(1, 0)).style.bg, Color::BLUE);
    }

    #[test]
    fn snapshot_text_form() {
        let g = Grid::new(2, 2, Point::new(0, 0), Point::new(1, 1));
        assert_eq!(
            g.snapshot(None, &[]).to_string(),
            "+----+\n|S - |\n|- G |\n+----+"
        );
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        assert!(sample().validate().is_ok());

        let bad_goal = Grid::new(3, 3, Point::new(0, 0), Point::new(3, 0));
        assert!(matches!(
            bad_goal.validate(),
            Err(SearchError::InvalidArgument(_))
        ));

        let bad_barrier =
            Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2)).with_barriers([Point::new(-1, 0)]);
        assert!(bad_barrier.validate().is_err());

        let zero_cost = Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2))
            .with_weighted_cells([(Point::new(1, 1), 0)]);
        assert!(zero_cost.validate().is_err());

        let empty = Grid::new(0, 3, Point::new(0, 0), Point::new(0, 0));
        assert!(empty.validate().is_err());

        let huge = Grid::new(MAX_GRID_SIDE + 1, 2, Point::new(0, 0), Point::new(1, 1));
        assert!(huge.validate().is_err());
        let widest = Grid::new(MAX_GRID_SIDE, 1, Point::new(0, 0), Point::new(1, 0));
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn display_lists_configuration() {
        let text = sample().to_string();
        assert!(text.contains("size: 5x5"));
        assert!(text.contains("barriers: [(2, 2)]"));
        assert!(text.contains("weighted cells: {(2, 1): 9, (3, 3): 5}"));
    }

    #[test]
    fn spec_conversion_round_trips() {
        let g = sample();
        let spec = GridSpec::from(g.clone());
        assert_eq!(spec.barriers, vec![(2, 2)]);
        assert_eq!(spec.weighted_cells, vec![(2, 1, 9), (3, 3, 5)]);
        assert_eq!(Grid::from(spec), g);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_from_json() {
        let json = r#"{
            "width": 4, "height": 3,
            "start": [0, 0], "goal": [3, 2],
            "barriers": [[1, 1]],
            "weighted_cells": [[2, 2, 7]]
        }"#;
        let g: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.goal(), Point::new(3, 2));
        assert!(g.is_barrier(Point::new(1, 1)));
        assert_eq!(g.step_cost(Point::new(2, 2)), 7);
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let json = r#"{"width": 2, "height": 2, "start": [0, 0], "goal": [1, 1]}"#;
        let g: Grid = serde_json::from_str(json).unwrap();
        assert!(g.barriers().is_empty());
        assert!(g.weighted_cells().is_empty());
    }
}
