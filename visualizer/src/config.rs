//! Optional TOML configuration and grid files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use seekgrid_core::{Grid, GridSpec, SearchError};
use seekgrid_winit::GuiConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Invalid(#[from] SearchError),
}

/// Settings read from `--config`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Typed at any prompt to quit.
    pub exit_char: char,
    pub logging: LoggingConfig,
    pub search: SearchConfig,
    pub gui: GuiSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"debug"` or `"seekgrid_search=debug"`.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub depth_limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuiSection {
    pub title: Option<String>,
    pub cell_size: Option<u32>,
    pub font_path: Option<PathBuf>,
    pub font_size: Option<f32>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            exit_char: 'q',
            logging: LoggingConfig::default(),
            search: SearchConfig::default(),
            gui: GuiSection::default(),
        }
    }
}

impl VisualizerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read(path)?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.gui.cell_size == Some(0) {
            return Err(SearchError::invalid("gui.cell_size must be positive").into());
        }
        Ok(config)
    }

    /// The window settings, with unset fields taken from [`GuiConfig::default`].
    pub fn gui_config(&self) -> GuiConfig {
        let base = GuiConfig::default();
        GuiConfig {
            title: self.gui.title.clone().unwrap_or(base.title),
            cell_size: self.gui.cell_size.unwrap_or(base.cell_size),
            font_path: self.gui.font_path.clone().or(base.font_path),
            font_size: self.gui.font_size.unwrap_or(base.font_size),
        }
    }
}

/// Read a grid description such as
///
/// ```toml
/// width = 5
/// height = 5
/// start = [0, 0]
/// goal = [4, 4]
/// barriers = [[2, 2]]
/// weighted_cells = [[3, 3, 5]]
/// ```
///
/// and check it lies within its own bounds.
pub fn load_grid(path: &Path) -> Result<Grid, ConfigError> {
    let text = read(path)?;
    let spec: GridSpec = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = Grid::from(spec);
    grid.validate()?;
    Ok(grid)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
