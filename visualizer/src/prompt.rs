//! Line-oriented prompts for everything the command line left out.
//!
//! Every prompt re-asks on bad input. The exit character (or end of input)
//! at any prompt aborts with [`PromptError::Quit`].

use std::io::{self, BufRead, Write};

use seekgrid_core::{Grid, MAX_GRID_SIDE, Point, Range};
use seekgrid_search::{UninformedStrategy, VisualizationMethod};

use crate::presets;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("quit requested")]
    Quit,
    #[error("cannot read input: {0}")]
    Io(#[from] io::Error),
}

type Result<T> = std::result::Result<T, PromptError>;

const INVALID_INPUT: &str = "Invalid input. Please try again.";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const OUTSIDE_GRID: &str = "Position is outside the grid. Please try again.";

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// `"5x5"` → `(5, 5)`. Both sides must be positive.
pub fn parse_size(s: &str) -> Option<(i32, i32)> {
    let (w, h) = s.trim().split_once(['x', 'X'])?;
    let w: i32 = w.trim().parse().ok()?;
    let h: i32 = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

/// `"2,3"` → `(2, 3)`.
pub fn parse_point(s: &str) -> Option<Point> {
    let (x, y) = s.trim().split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// `"3,3,5"` → `((3, 3), 5)`. The cost must be positive.
pub fn parse_weighted(s: &str) -> Option<(Point, u32)> {
    let (pos, cost) = s.trim().rsplit_once(',')?;
    let cost: u32 = cost.trim().parse().ok()?;
    (cost > 0).then_some((parse_point(pos)?, cost))
}

// ---------------------------------------------------------------------------
// Prompter
// ---------------------------------------------------------------------------

pub struct Prompter<R, W> {
    input: R,
    output: W,
    exit_char: char,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, exit_char: char) -> Self {
        Self {
            input,
            output,
            exit_char,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Quit);
        }
        let line = line.trim().to_string();

        let mut chars = line.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.eq_ignore_ascii_case(&self.exit_char) {
                return Err(PromptError::Quit);
            }
        }
        Ok(line)
    }

    fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    pub fn strategy(&mut self) -> Result<UninformedStrategy> {
        self.say("Uninformed Search Algorithms:")?;
        for (i, s) in UninformedStrategy::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {s}", i + 1)?;
        }
        writeln!(self.output)?;

        let prompt = format!("Enter a strategy number (\"{}\" to quit): ", self.exit_char);
        loop {
            let choice = self.ask(&prompt)?;
            match choice.parse() {
                Ok(s) => return Ok(s),
                Err(_) => self.say(INVALID_CHOICE)?,
            }
        }
    }

    pub fn visualization(&mut self) -> Result<VisualizationMethod> {
        self.say("0. Just run the search algorithm (no visualization)")?;
        self.say("1. Command-line interface (CLI)")?;
        self.say("2. Graphical user interface (GUI)\n")?;

        let prompt = format!("Choose a number (\"{}\" to quit): ", self.exit_char);
        loop {
            let choice = self.ask(&prompt)?;
            match choice.as_str() {
                "0" => return Ok(VisualizationMethod::Nothing),
                "1" => return Ok(VisualizationMethod::Cli),
                "2" => return Ok(VisualizationMethod::Gui),
                _ => self.say(INVALID_CHOICE)?,
            }
        }
    }

    /// Ask whether to use the default grid for `strategy` or enter one.
    pub fn grid(&mut self, strategy: UninformedStrategy) -> Result<Grid> {
        self.say("Would you like to manually enter grid details or use a default grid?")?;
        let prompt = format!(
            "Enter \"m\" for manual, \"d\" for default (\"{}\" to quit): ",
            self.exit_char
        );
        loop {
            let choice = self.ask(&prompt)?;
            if choice.eq_ignore_ascii_case("d") {
                return Ok(presets::default_grid(strategy));
            }
            if choice.eq_ignore_ascii_case("m") {
                return self.manual_grid();
            }
            self.say(INVALID_CHOICE)?;
        }
    }

    pub fn manual_grid(&mut self) -> Result<Grid> {
        writeln!(self.output, "Enter \"{}\" to quit at any time.\n", self.exit_char)?;

        let (width, height) = self.size()?;
        let bounds = Range::new(0, 0, width, height);
        let start = self.position("Enter the start position (e.g., 0,0): ", bounds)?;
        let goal = self.position("Enter the goal position (e.g., 4,4): ", bounds)?;
        let barriers = self.barriers(bounds)?;
        let weighted = self.weighted_cells(bounds)?;

        Ok(Grid::new(width, height, start, goal)
            .with_barriers(barriers)
            .with_weighted_cells(weighted))
    }

    fn size(&mut self) -> Result<(i32, i32)> {
        loop {
            let s = self.ask("Enter the size of the grid (e.g., 5x5): ")?;
            match parse_size(&s) {
                Some((w, h)) if w > MAX_GRID_SIDE || h > MAX_GRID_SIDE => self.say(&format!(
                    "The grid can be at most {MAX_GRID_SIDE}x{MAX_GRID_SIDE}. Please try again."
                ))?,
                Some(size) => return Ok(size),
                None => self.say(INVALID_INPUT)?,
            }
        }
    }

    fn position(&mut self, prompt: &str, bounds: Range) -> Result<Point> {
        loop {
            let s = self.ask(prompt)?;
            match parse_point(&s) {
                Some(p) if bounds.contains(p) => return Ok(p),
                Some(_) => self.say(OUTSIDE_GRID)?,
                None => self.say(INVALID_INPUT)?,
            }
        }
    }

    fn barriers(&mut self, bounds: Range) -> Result<Vec<Point>> {
        let mut barriers = Vec::new();
        let mut more = self.ask("Would you like to add barriers? (y/n): ")?;

        while more.eq_ignore_ascii_case("y") {
            let s = self.ask("Enter a barrier position (e.g., 2,2), or \"done\" to finish: ")?;
            if s.eq_ignore_ascii_case("done") {
                break;
            }
            match parse_point(&s) {
                Some(p) if !bounds.contains(p) => self.say(OUTSIDE_GRID)?,
                Some(p) if barriers.contains(&p) => self.say(
                    "Barrier already exists at this position. Please enter a different position.",
                )?,
                Some(p) => {
                    barriers.push(p);
                    more = self.ask("Add another barrier? (y/n): ")?;
                }
                None => self.say(INVALID_INPUT)?,
            }
        }
        Ok(barriers)
    }

    fn weighted_cells(&mut self, bounds: Range) -> Result<Vec<(Point, u32)>> {
        let mut cells: Vec<(Point, u32)> = Vec::new();
        let mut more = self.ask("Would you like to add cells with increased cost? (y/n): ")?;

        while more.eq_ignore_ascii_case("y") {
            let s = self.ask(
                "Enter a cell position and its cost (e.g., 3,3,5), or \"done\" to finish: ",
            )?;
            if s.eq_ignore_ascii_case("done") {
                break;
            }
            match parse_weighted(&s) {
                Some((p, _)) if !bounds.contains(p) => self.say(OUTSIDE_GRID)?,
                Some((p, _)) if cells.iter().any(|(q, _)| *q == p) => self.say(
                    "This cell already has a defined cost. Please enter a different position or finish adding.",
                )?,
                Some(cell) => {
                    cells.push(cell);
                    more = self.ask("Add another cell with increased cost? (y/n): ")?;
                }
                None => self.say(INVALID_INPUT)?,
            }
        }
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 'q')
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn parsers() {
        assert_eq!(parse_size("5x7"), Some((5, 7)));
        assert_eq!(parse_size(" 3 X 2 "), Some((3, 2)));
        assert_eq!(parse_size("0x5"), None);
        assert_eq!(parse_size("5"), None);
        assert_eq!(parse_point("2, 3"), Some(Point::new(2, 3)));
        assert_eq!(parse_point("2;3"), None);
        assert_eq!(parse_weighted("3,3,5"), Some((Point::new(3, 3), 5)));
        assert_eq!(parse_weighted("3,3,0"), None);
        assert_eq!(parse_weighted("3,3"), None);
    }

    #[test]
    fn strategy_reprompts_until_valid() {
        let mut p = prompter("9\nabc\n3\n");
        assert_eq!(p.strategy().unwrap(), UninformedStrategy::BreadthFirst);
        let out = output(p);
        assert!(out.contains("1. Depth-first search"));
        assert!(out.contains("5. Iterative deepening search"));
        assert_eq!(out.matches(INVALID_CHOICE).count(), 2);
    }

    #[test]
    fn exit_char_quits_anywhere() {
        let mut p = prompter("Q\n");
        assert!(matches!(p.visualization(), Err(PromptError::Quit)));
        let mut p = prompter("");
        assert!(matches!(p.strategy(), Err(PromptError::Quit)));
    }

    #[test]
    fn visualization_menu() {
        let mut p = prompter("3\n2\n");
        assert_eq!(p.visualization().unwrap(), VisualizationMethod::Gui);
        assert!(output(p).contains("2. Graphical user interface (GUI)"));
    }

    #[test]
    fn default_grid_by_strategy() {
        let mut p = prompter("x\nd\n");
        let grid = p.grid(UninformedStrategy::UniformCost).unwrap();
        assert_eq!(grid.weighted_cells().len(), 2);
    }

    #[test]
    fn manual_grid_entry() {
        let input = "\
m
4x3
0,0
9,9
3,2
y
1,1
y
1,1
1,0
n
y
2,2,7
n
";
        let mut p = prompter(input);
        let grid = p.grid(UninformedStrategy::DepthFirst).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.start(), Point::new(0, 0));
        assert_eq!(grid.goal(), Point::new(3, 2));
        assert_eq!(grid.barriers().len(), 2);
        assert!(grid.is_barrier(Point::new(1, 0)));
        assert_eq!(grid.step_cost(Point::new(2, 2)), 7);
        assert!(grid.validate().is_ok());

        let out = output(p);
        assert!(out.contains(OUTSIDE_GRID));
        assert!(out.contains("Barrier already exists"));
    }

    #[test]
    fn oversized_grid_reprompts() {
        let input = "50000x50000\n65x2\n64x2\n0,0\n63,1\nn\nn\n";
        let mut p = prompter(input);
        let grid = p.manual_grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (MAX_GRID_SIDE, 2));
        assert!(grid.validate().is_ok());
        assert_eq!(output(p).matches("The grid can be at most 64x64").count(), 2);
    }

    #[test]
    fn done_ends_entry_lists() {
        let input = "2x2\n0,0\n1,1\ny\ndone\ny\n1,0,3\ndone\n";
        let mut p = prompter(input);
        let grid = p.manual_grid().unwrap();
        assert!(grid.barriers().is_empty());
        assert_eq!(grid.step_cost(Point::new(1, 0)), 3);
    }

    #[test]
    fn duplicate_weighted_cell_is_rejected() {
        let input = "3x3\n0,0\n2,2\nn\ny\n1,1,4\ny\n1,1,6\n0,1,2\nn\n";
        let mut p = prompter(input);
        let grid = p.manual_grid().unwrap();
        assert_eq!(grid.step_cost(Point::new(1, 1)), 4);
        assert_eq!(grid.step_cost(Point::new(0, 1)), 2);
        assert!(output(p).contains("already has a defined cost"));
    }
}
