//! Crossterm terminal sink for seekgrid.
//!
//! Provides a [`TerminalSink`] that implements
//! [`seekgrid_search::Visualizer`], printing each grid snapshot as a framed
//! block of styled characters and, in interactive mode, pausing until the
//! user presses Enter or Space.

use std::io::{self, Write};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use seekgrid_core::{
    AttrMask, Canvas, Color, Grid, Point,
    messages::{Key, MouseAction, Msg},
};
use seekgrid_search::{SearchReport, Visualizer};

/// Maps a [`seekgrid_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = (c.r(), c.g(), c.b());
        CtColor::Rgb { r, g, b }
    }
}

/// Maps a crossterm [`KeyCode`] to a seekgrid [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Translate a terminal event into a seekgrid message.
pub fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
            to_key(code).map(Msg::key)
        }
        Event::Mouse(me) => {
            let pos = Point::new(me.column as i32, me.row as i32);
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                MouseEventKind::Down(_) => MouseAction::Secondary,
                MouseEventKind::Up(_) => MouseAction::Release,
                _ => return None,
            };
            Some(Msg::Mouse { action, pos })
        }
        _ => None,
    }
}

/// Prints grid snapshots to a writer.
pub struct TerminalSink<W: Write> {
    out: W,
    color: bool,
    interactive: bool,
}

impl TerminalSink<io::Stdout> {
    /// A coloured, interactive sink on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout()).with_interactive(true)
    }
}

impl<W: Write> TerminalSink<W> {
    /// A coloured, non-interactive sink.
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: true,
            interactive: false,
        }
    }

    /// Configure whether cells are printed with terminal colours.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Configure whether [`Visualizer::wait_for_advance`] blocks on a key.
    pub fn with_interactive(mut self, enabled: bool) -> Self {
        self.interactive = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one framed snapshot followed by a newline.
    pub fn draw(&mut self, canvas: &Canvas) -> io::Result<()> {
        if !self.color {
            writeln!(self.out, "{canvas}")?;
            return self.out.flush();
        }

        let border = "-".repeat(canvas.width() as usize * 2);
        writeln!(self.out, "+{border}+")?;
        for y in 0..canvas.height() {
            queue!(self.out, Print('|'))?;
            for x in 0..canvas.width() {
                let cell = canvas.at(Point::new(x, y));
                queue!(
                    self.out,
                    SetForegroundColor(to_ct_color(cell.style.fg)),
                    SetBackgroundColor(to_ct_color(cell.style.bg))
                )?;
                let attrs = cell.style.attrs;
                if attrs.contains(AttrMask::BOLD) {
                    queue!(self.out, SetAttribute(Attribute::Bold))?;
                }
                if attrs.contains(AttrMask::REVERSE) {
                    queue!(self.out, SetAttribute(Attribute::Reverse))?;
                }
                if attrs.contains(AttrMask::DIM) {
                    queue!(self.out, SetAttribute(Attribute::Dim))?;
                }
                queue!(self.out, Print(cell.ch), SetAttribute(Attribute::Reset))?;
                queue!(self.out, Print(' '))?;
            }
            queue!(self.out, Print("|\n"))?;
        }
        writeln!(self.out, "+{border}+")?;
        self.out.flush()
    }

    /// Prompt, then block until Enter or Space is pressed.
    fn wait_key(&mut self) -> io::Result<()> {
        write!(self.out, "Press Enter to continue...")?;
        self.out.flush()?;

        terminal::enable_raw_mode()?;
        let res = loop {
            match event::read() {
                Ok(ev) => {
                    if to_msg(ev).is_some_and(|m| m.is_advance()) {
                        break Ok(());
                    }
                }
                Err(e) => break Err(e),
            }
        };
        terminal::disable_raw_mode()?;
        writeln!(self.out)?;
        res
    }
}

impl<W: Write + Send> Visualizer for TerminalSink<W> {
    fn render(&mut self, grid: &Grid, path: &[Point], current: Option<Point>) {
        let canvas = grid.snapshot(current, path);
        if let Err(e) = self.draw(&canvas) {
            log::warn!("failed to draw grid: {e}");
        }
    }

    fn wait_for_advance(&mut self) {
        if !self.interactive {
            return;
        }
        if let Err(e) = self.wait_key() {
            log::warn!("failed to read key, continuing: {e}");
        }
    }

    fn finished(&mut self, grid: &Grid, report: &SearchReport) {
        if !report.found() {
            return;
        }
        let canvas = grid.snapshot(None, &report.path);
        if let Err(e) = self.draw(&canvas) {
            log::warn!("failed to draw final path: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use seekgrid_search::{SearchEngine, UninformedStrategy, VisualizationMethod};

    fn grid() -> Grid {
        Grid::new(3, 2, Point::new(0, 0), Point::new(2, 1)).with_barriers([Point::new(1, 0)])
    }

    fn plain() -> TerminalSink<Vec<u8>> {
        TerminalSink::new(Vec::new()).with_color(false)
    }

    fn text(sink: TerminalSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn default_color_maps_to_reset() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn keys_translate() {
        let ev = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        assert_eq!(to_msg(ev(KeyCode::Enter)), Some(Msg::key(Key::Enter)));
        assert_eq!(to_msg(ev(KeyCode::Char(' '))), Some(Msg::key(Key::Space)));
        assert_eq!(to_msg(ev(KeyCode::Char('q'))), Some(Msg::key(Key::Char('q'))));
        assert_eq!(to_msg(ev(KeyCode::F(1))), None);
    }

    #[test]
    fn left_click_advances() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        });
        let msg = to_msg(ev).unwrap();
        assert!(msg.is_advance());
        assert_eq!(
            msg,
            Msg::Mouse {
                action: MouseAction::Main,
                pos: Point::new(4, 2)
            }
        );
    }

    #[test]
    fn plain_render_is_framed_text() {
        let mut sink = plain();
        sink.render(&grid(), &[], Some(Point::new(0, 1)));
        assert_eq!(text(sink), "+------+\n|S # - |\n|X - G |\n+------+\n");
    }

    #[test]
    fn colored_render_emits_escape_codes() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.render(&grid(), &[], None);
        let out = text(sink);
        assert!(out.contains('\u{1b}'));
        assert!(out.contains('S'));
        assert!(out.contains('G'));
        assert!(out.starts_with("+------+\n"));
    }

    #[test]
    fn non_interactive_wait_returns() {
        let mut sink = plain();
        sink.wait_for_advance();
        assert!(text(sink).is_empty());
    }

    #[test]
    fn finished_draws_path() {
        let mut engine = SearchEngine::new(grid(), UninformedStrategy::BreadthFirst)
            .unwrap()
            .with_visualizer(VisualizationMethod::Nothing, Box::new(plain()));
        let report = engine.run().unwrap();

        let mut sink = plain();
        sink.finished(engine.grid(), &report);
        assert_eq!(text(sink), "+------+\n|S # - |\n|. . G |\n+------+\n");
    }
}
