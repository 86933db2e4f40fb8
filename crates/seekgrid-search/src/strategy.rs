//! Strategy and visualization-mode enumerations.

use std::fmt;
use std::str::FromStr;

use seekgrid_core::SearchError;

/// Uninformed search strategies, in menu order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum UninformedStrategy {
    DepthFirst,
    DepthLimited,
    BreadthFirst,
    UniformCost,
    IterativeDeepening,
}

impl UninformedStrategy {
    pub const ALL: [Self; 5] = [
        Self::DepthFirst,
        Self::DepthLimited,
        Self::BreadthFirst,
        Self::UniformCost,
        Self::IterativeDeepening,
    ];

    /// Human-readable name used in menus and log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "Depth-first search",
            Self::DepthLimited => "Depth-limited search",
            Self::BreadthFirst => "Breadth-first search",
            Self::UniformCost => "Uniform-cost search",
            Self::IterativeDeepening => "Iterative deepening search",
        }
    }

    /// Short command-line alias.
    pub const fn alias(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::DepthLimited => "dls",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::IterativeDeepening => "ids",
        }
    }

    /// Whether the strategy needs per-node depth.
    pub const fn tracks_depth(self) -> bool {
        matches!(self, Self::DepthLimited | Self::IterativeDeepening)
    }
}

impl fmt::Display for UninformedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UninformedStrategy {
    type Err = SearchError;

    /// Accepts the alias (`bfs`), the full name (case-insensitive) or a
    /// 1-based menu index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(idx) = s.parse::<usize>() {
            return idx
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| SearchError::invalid(format!("no strategy numbered {idx}")));
        }
        Self::ALL
            .into_iter()
            .find(|st| st.alias().eq_ignore_ascii_case(s) || st.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::invalid(format!("unknown strategy: {s}")))
    }
}

/// Informed strategies. Named so menus and configuration can refer to them;
/// the engine rejects them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InformedStrategy {
    AStar,
    GreedyBestFirst,
}

impl InformedStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A* search",
            Self::GreedyBestFirst => "Greedy best-first search",
        }
    }
}

/// Any strategy a caller may ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    Uninformed(UninformedStrategy),
    Informed(InformedStrategy),
}

impl SearchStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uninformed(s) => s.name(),
            Self::Informed(s) => s.name(),
        }
    }
}

impl From<UninformedStrategy> for SearchStrategy {
    fn from(s: UninformedStrategy) -> Self {
        Self::Uninformed(s)
    }
}

impl From<InformedStrategy> for SearchStrategy {
    fn from(s: InformedStrategy) -> Self {
        Self::Informed(s)
    }
}

/// How a run is displayed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VisualizationMethod {
    /// Just run the search.
    #[default]
    Nothing,
    /// Print the grid after each expansion and wait for Enter.
    Cli,
    /// Paint every dequeued node in a window and wait for a click.
    Gui,
}

impl VisualizationMethod {
    pub const ALL: [Self; 3] = [Self::Nothing, Self::Cli, Self::Gui];
}

impl fmt::Display for VisualizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nothing => "Nothing",
            Self::Cli => "CLI",
            Self::Gui => "GUI",
        })
    }
}

impl FromStr for VisualizationMethod {
    type Err = SearchError;

    /// Accepts `nothing`/`cli`/`gui` or the menu numbers 0/1/2.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "nothing" | "none" => Ok(Self::Nothing),
            "1" | "cli" => Ok(Self::Cli),
            "2" | "gui" => Ok(Self::Gui),
            other => Err(SearchError::invalid(format!(
                "unknown visualization method: {other}"
            ))),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_names_are_kebab_case() {
        let json = serde_json::to_string(&UninformedStrategy::IterativeDeepening).unwrap();
        assert_eq!(json, "\"iterative-deepening\"");
        let back: UninformedStrategy = serde_json::from_str("\"uniform-cost\"").unwrap();
        assert_eq!(back, UninformedStrategy::UniformCost);
    }

    #[test]
    fn method_names_are_lowercase() {
        let m: VisualizationMethod = serde_json::from_str("\"gui\"").unwrap();
        assert_eq!(m, VisualizationMethod::Gui);
    }
}
