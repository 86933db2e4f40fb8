//! **seekgrid-core**: data model for the grid search visualizer.
//!
//! This crate provides the types shared by the search engine and the
//! display backends: geometry primitives, styled cells and the display
//! [`Canvas`], the input vocabulary, the search [`Grid`] with its adjacency
//! queries, the parent-linked [`SearchNode`], and the error taxonomy.

pub mod canvas;
pub mod error;
pub mod geom;
pub mod map;
pub mod messages;
pub mod node;
pub mod style;

pub use canvas::{Canvas, Cell};
pub use error::SearchError;
pub use geom::{Point, Range};
pub use map::{Grid, GridSpec, MAX_GRID_SIDE};
pub use messages::{Key, MouseAction, Msg};
pub use node::{ByCost, SearchNode};
pub use style::{AttrMask, Color, Style};
