//! Input events shared by the display backends: [`Msg`], [`Key`],
//! [`MouseAction`].
//!
//! Backends translate their native events into these so that the decision
//! "does this gesture advance the search?" lives in one place.

use crate::geom::Point;

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    /// A printable character.
    Char(char),
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
}

/// An input message delivered by a backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A mouse button event, in grid-cell coordinates.
    Mouse { action: MouseAction, pos: Point },
    /// Request to quit (window closed).
    Quit,
}

impl Msg {
    /// Convenience: create a `KeyDown`.
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    /// Whether the message is a user gesture that steps the search forward:
    /// a primary click, Enter or Space.
    pub fn is_advance(&self) -> bool {
        matches!(
            self,
            Msg::KeyDown {
                key: Key::Enter | Key::Space
            } | Msg::Mouse {
                action: MouseAction::Main,
                ..
            }
        )
    }
}
