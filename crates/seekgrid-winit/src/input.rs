//! Translates winit input events into seekgrid [`Msg`] values.

use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key as WKey, NamedKey};

use seekgrid_core::{
    Point,
    messages::{Key, MouseAction, Msg},
};

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

pub(crate) fn translate_keyboard(event: &KeyEvent) -> Option<Msg> {
    if event.state != ElementState::Pressed {
        return None;
    }
    translate_key(&event.logical_key).map(Msg::key)
}

fn translate_key(key: &WKey) -> Option<Key> {
    match key {
        WKey::Named(NamedKey::Escape) => Some(Key::Escape),
        WKey::Named(NamedKey::Enter) => Some(Key::Enter),
        WKey::Named(NamedKey::Space) => Some(Key::Space),
        WKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(' '), None) => Some(Key::Space),
                (Some(c), None) => Some(Key::Char(c)),
                _ => None,
            }
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

/// The grid cell under a pixel position.
pub(crate) fn pixel_to_cell(px: f64, py: f64, cell_size: usize) -> Point {
    let cs = (cell_size as i32).max(1);
    Point::new((px as i32) / cs, (py as i32) / cs)
}

pub(crate) fn translate_mouse_button(
    btn_state: ElementState,
    button: MouseButton,
    cursor: Point,
) -> Option<Msg> {
    let action = match btn_state {
        ElementState::Pressed => match button {
            MouseButton::Left => MouseAction::Main,
            MouseButton::Right => MouseAction::Secondary,
            _ => return None,
        },
        ElementState::Released => MouseAction::Release,
    };
    Some(Msg::Mouse {
        action,
        pos: cursor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    #[test]
    fn named_keys() {
        assert_eq!(translate_key(&WKey::Named(NamedKey::Enter)), Some(Key::Enter));
        assert_eq!(translate_key(&WKey::Named(NamedKey::Space)), Some(Key::Space));
        assert_eq!(translate_key(&WKey::Named(NamedKey::Escape)), Some(Key::Escape));
        assert_eq!(translate_key(&WKey::Named(NamedKey::Tab)), None);
    }

    #[test]
    fn character_keys() {
        assert_eq!(
            translate_key(&WKey::Character(SmolStr::new("q"))),
            Some(Key::Char('q'))
        );
        assert_eq!(
            translate_key(&WKey::Character(SmolStr::new(" "))),
            Some(Key::Space)
        );
        assert_eq!(translate_key(&WKey::Character(SmolStr::new("ab"))), None);
    }

    #[test]
    fn left_press_is_an_advance() {
        let msg = translate_mouse_button(ElementState::Pressed, MouseButton::Left, Point::new(1, 2));
        assert!(msg.is_some_and(|m| m.is_advance()));

        let release =
            translate_mouse_button(ElementState::Released, MouseButton::Left, Point::new(1, 2));
        assert!(!release.is_some_and(|m| m.is_advance()));

        let middle = translate_mouse_button(ElementState::Pressed, MouseButton::Middle, Point::ZERO);
        assert!(middle.is_none());
    }

    #[test]
    fn pixels_map_to_cells() {
        assert_eq!(pixel_to_cell(0.0, 0.0, 80), Point::new(0, 0));
        assert_eq!(pixel_to_cell(159.0, 80.0, 80), Point::new(1, 1));
        assert_eq!(pixel_to_cell(10.0, 10.0, 0), Point::new(10, 10));
    }
}
