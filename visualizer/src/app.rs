//! Wiring: flags and config in, final report out.

use std::error::Error;
use std::io::{self, BufRead, Write};

use seekgrid_core::{Grid, Point};
use seekgrid_crossterm::TerminalSink;
use seekgrid_search::{SearchEngine, SearchReport, UninformedStrategy, VisualizationMethod};
use seekgrid_winit::GuiDriver;

use crate::cli::{Args, GridSource};
use crate::config::{self, VisualizerConfig};
use crate::presets;
use crate::prompt::{PromptError, Prompter};

/// What the user picked, from flags or prompts.
#[derive(Debug, Clone)]
pub struct Selection {
    pub strategy: UninformedStrategy,
    pub method: VisualizationMethod,
    pub grid: Grid,
}

/// Fill in whatever `args` leaves open by prompting, echoing each choice.
pub fn select<R: BufRead, W: Write>(
    args: &Args,
    prompter: &mut Prompter<R, W>,
    out: &mut impl Write,
) -> Result<Selection, Box<dyn Error>> {
    writeln!(out, "Welcome to the Search Algorithm Visualizer!")?;
    writeln!(out, "------------------------------------------\n")?;

    let strategy = match args.strategy {
        Some(s) => s,
        None => prompter.strategy()?,
    };
    writeln!(out, "You selected: {strategy}\n")?;

    let method = match args.visual {
        Some(m) => m,
        None => prompter.visualization()?,
    };
    writeln!(out, "{method} visualization selected.\n")?;

    let grid = match &args.grid {
        Some(GridSource::Default) => presets::default_grid(strategy),
        Some(GridSource::Manual) => prompter.manual_grid()?,
        Some(GridSource::File(path)) => config::load_grid(path)?,
        None => prompter.grid(strategy)?,
    };
    writeln!(out, "Grid configuration:\n{grid}\n")?;

    Ok(Selection {
        strategy,
        method,
        grid,
    })
}

/// Run the selected search with the chosen visualization.
///
/// `None` when the window was closed before the search started.
pub fn execute(
    selection: Selection,
    depth_limit: Option<u32>,
    config: &VisualizerConfig,
    color: bool,
) -> Result<Option<SearchReport>, Box<dyn Error>> {
    let engine =
        SearchEngine::new(selection.grid, selection.strategy)?.with_depth_limit(depth_limit);

    let report = match selection.method {
        VisualizationMethod::Nothing => {
            let mut engine = engine;
            engine.run()?
        }
        VisualizationMethod::Cli => {
            let sink = TerminalSink::stdout().with_color(color);
            let mut engine = engine.with_visualizer(VisualizationMethod::Cli, Box::new(sink));
            engine.run()?
        }
        VisualizationMethod::Gui => match GuiDriver::new(config.gui_config()).run(engine)? {
            Some(outcome) => outcome?,
            None => return Ok(None),
        },
    };
    Ok(Some(report))
}

/// `[(0, 0), (0, 1), ...]`
pub fn format_path(path: &[Point]) -> String {
    let items: Vec<String> = path.iter().map(Point::to_string).collect();
    format!("[{}]", items.join(", "))
}

pub fn print_report(out: &mut impl Write, report: &SearchReport) -> io::Result<()> {
    writeln!(out, "Final path: {}", format_path(&report.path))?;
    writeln!(out, "Final cost: {}", report.final_cost)
}

/// The whole program after flag parsing.
pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };
    crate::logging::init(args.log.as_deref().or(config.logging.filter.as_deref()))?;

    let selection = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout(), config.exit_char);
        select(&args, &mut prompter, &mut io::stdout())?
    };

    let depth_limit = args.depth_limit.or(config.search.depth_limit);
    match execute(selection, depth_limit, &config, !args.no_color)? {
        Some(report) => print_report(&mut io::stdout(), &report)?,
        None => println!("Window closed before the search started."),
    }
    Ok(())
}

/// Whether `err` is the user asking to leave.
pub fn is_quit(err: &(dyn Error + 'static)) -> bool {
    matches!(err.downcast_ref::<PromptError>(), Some(PromptError::Quit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 'q')
    }

    #[test]
    fn path_formatting() {
        assert_eq!(format_path(&[]), "[]");
        assert_eq!(
            format_path(&[Point::new(0, 0), Point::new(1, 0)]),
            "[(0, 0), (1, 0)]"
        );
    }

    #[test]
    fn flags_skip_prompts() {
        let args = Args::try_parse_from(["seekgrid", "-s", "bfs", "-v", "0", "-g", "default"]).unwrap();
        let mut p = prompter("");
        let mut out = Vec::new();
        let sel = select(&args, &mut p, &mut out).unwrap();
        assert_eq!(sel.strategy, UninformedStrategy::BreadthFirst);
        assert_eq!(sel.method, VisualizationMethod::Nothing);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("You selected: Breadth-first search"));
        assert!(out.contains("Nothing visualization selected."));
        assert!(out.contains("Grid configuration:\nsize: 5x5"));
    }

    #[test]
    fn prompts_fill_the_gaps() {
        let args = Args::try_parse_from(["seekgrid"]).unwrap();
        let mut p = prompter("4\n0\nd\n");
        let sel = select(&args, &mut p, &mut Vec::new()).unwrap();
        assert_eq!(sel.strategy, UninformedStrategy::UniformCost);
        assert_eq!(sel.grid.weighted_cells().len(), 2);
    }

    #[test]
    fn quitting_is_recognised() {
        let args = Args::try_parse_from(["seekgrid"]).unwrap();
        let mut p = prompter("q\n");
        let err = select(&args, &mut p, &mut Vec::new()).unwrap_err();
        assert!(is_quit(err.as_ref()));
    }

    #[test]
    fn headless_run_reports_path() {
        let selection = Selection {
            strategy: UninformedStrategy::IterativeDeepening,
            method: VisualizationMethod::Nothing,
            grid: presets::default_grid(UninformedStrategy::IterativeDeepening),
        };
        let report = execute(selection, None, &VisualizerConfig::default(), false)
            .unwrap()
            .unwrap();
        let mut out = Vec::new();
        print_report(&mut out, &report).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Final path: [(0, 0), (0, 1)"));
        assert!(out.ends_with("Final cost: 8\n"));
    }
}
