//! Command-line flags. Anything left out is asked for interactively.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use seekgrid_search::{UninformedStrategy, VisualizationMethod};

#[derive(Parser, Debug)]
#[command(name = "seekgrid")]
#[command(about = "Step through uninformed search strategies on a grid", long_about = None)]
pub struct Args {
    /// Strategy: menu number (1-5), alias (dfs, dls, bfs, ucs, ids) or name
    #[arg(short, long)]
    pub strategy: Option<UninformedStrategy>,

    /// Visualization: nothing, cli or gui (or 0, 1, 2)
    #[arg(short, long)]
    pub visual: Option<VisualizationMethod>,

    /// Grid: "default", "manual" or a TOML grid file
    #[arg(short, long)]
    pub grid: Option<GridSource>,

    /// Depth limit for depth-limited and iterative deepening search (max 100)
    #[arg(short, long)]
    pub depth_limit: Option<u32>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (overrides the config file and RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,

    /// Print terminal snapshots without colour
    #[arg(long)]
    pub no_color: bool,
}

/// Where the grid comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource {
    Default,
    Manual,
    File(PathBuf),
}

impl FromStr for GridSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "default" | "d" => Self::Default,
            "manual" | "m" => Self::Manual,
            path => Self::File(PathBuf::from(path)),
        })
    }
}
