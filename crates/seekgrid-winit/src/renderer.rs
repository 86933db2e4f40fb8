//! Paints grid scenes into a pixel buffer.
//!
//! Every grid cell is a square tile filled with its state colour and
//! outlined in gray. When a font is loaded, each tile also carries its
//! `(x,y)` coordinate label, rasterized with fontdue.

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use fontdue::{Font, FontSettings};
use seekgrid_core::{Color, Grid, Point};

const OUTLINE: u32 = 0xFF808080;
const LABEL: Color = Color::BLACK;

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Fill colours for every cell of one rendered step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    width: i32,
    height: i32,
    fills: Vec<Color>,
}

impl Scene {
    /// Colour every cell: start, goal, barrier, path, current node, in that
    /// order of precedence, white otherwise.
    pub fn new(grid: &Grid, path: &[Point], current: Option<Point>) -> Self {
        let fills = grid
            .bounds()
            .iter()
            .map(|p| {
                if p == grid.start() {
                    Color::GREEN
                } else if p == grid.goal() {
                    Color::RED
                } else if grid.is_barrier(p) {
                    Color::BLACK
                } else if path.contains(&p) {
                    Color::BLUE
                } else if current == Some(p) {
                    Color::ORANGE
                } else {
                    Color::WHITE
                }
            })
            .collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            fills,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Fill colour at `p`, white outside the scene.
    pub fn fill(&self, p: Point) -> Color {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return Color::WHITE;
        }
        self.fills[(p.y * self.width + p.x) as usize]
    }
}

// ---------------------------------------------------------------------------
// SceneRenderer
// ---------------------------------------------------------------------------

/// Cached rasterized glyph.
struct GlyphCache {
    bitmap: Vec<u8>,
    width: usize,
    height: usize,
    x_offset: i32,
    y_offset: i32,
    advance: f32,
}

pub(crate) struct SceneRenderer {
    cell_size: usize,
    font: Option<Font>,
    font_size: f32,
    glyph_cache: HashMap<char, GlyphCache>,
}

/// Read and parse a TTF/OTF font file.
pub(crate) fn load_font(path: &Path) -> Result<Font, Box<dyn Error>> {
    let data = std::fs::read(path)?;
    let font = Font::from_bytes(data, FontSettings::default())?;
    Ok(font)
}

impl SceneRenderer {
    pub fn new(cell_size: u32, font: Option<Font>, font_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(2) as usize,
            font,
            font_size,
            glyph_cache: HashMap::new(),
        }
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Paint `scene` into `buf`, a `buf_w`×`buf_h` row-major pixel buffer.
    /// Pixels outside the scene are cleared to black.
    pub fn draw(&mut self, scene: &Scene, buf: &mut [u32], buf_w: usize, buf_h: usize) {
        buf.fill(0xFF000000);
        for y in 0..scene.height() {
            for x in 0..scene.width() {
                let p = Point::new(x, y);
                self.draw_cell(buf, buf_w, buf_h, p, scene.fill(p));
            }
        }
    }

    fn draw_cell(&mut self, buf: &mut [u32], buf_w: usize, buf_h: usize, p: Point, fill: Color) {
        let cs = self.cell_size;
        let x0 = p.x as usize * cs;
        let y0 = p.y as usize * cs;
        let fill_px = color_to_pixel(fill);

        for dy in 0..cs {
            let py = y0 + dy;
            if py >= buf_h {
                break;
            }
            for dx in 0..cs {
                let px = x0 + dx;
                if px >= buf_w {
                    break;
                }
                let edge = dx == 0 || dy == 0 || dx == cs - 1 || dy == cs - 1;
                buf[py * buf_w + px] = if edge { OUTLINE } else { fill_px };
            }
        }

        if self.font.is_some() {
            let label = format!("({},{})", p.x, p.y);
            self.draw_label(buf, buf_w, buf_h, x0, y0, &label, fill);
        }
    }

    /// Draw `text` centered in the cell whose top-left corner is `(x0, y0)`.
    #[allow(clippy::too_many_arguments)]
    fn draw_label(
        &mut self,
        buf: &mut [u32],
        buf_w: usize,
        buf_h: usize,
        x0: usize,
        y0: usize,
        text: &str,
        bg: Color,
    ) {
        let Some(font) = self.font.as_ref() else {
            return;
        };
        let ascent = font
            .horizontal_line_metrics(self.font_size)
            .map(|m| m.ascent.ceil() as i32)
            .unwrap_or(self.font_size as i32);

        for c in text.chars() {
            self.cache_glyph(c);
        }
        let text_w: f32 = text.chars().map(|c| self.glyph_cache[&c].advance).sum();

        let cs = self.cell_size as i32;
        let mut pen_x = x0 as f32 + (cs as f32 - text_w) / 2.0;
        let top = y0 as i32 + (cs - ascent) / 2;

        let (fg_r, fg_g, fg_b) = (LABEL.r(), LABEL.g(), LABEL.b());
        let (bg_r, bg_g, bg_b) = (bg.r(), bg.g(), bg.b());

        for c in text.chars() {
            let glyph = &self.glyph_cache[&c];
            let gx0 = pen_x.round() as i32 + glyph.x_offset;
            let gy0 = top + ascent - glyph.y_offset - glyph.height as i32;

            for gy in 0..glyph.height {
                for gx in 0..glyph.width {
                    let alpha = glyph.bitmap[gy * glyph.width + gx];
                    if alpha == 0 {
                        continue;
                    }
                    let px = gx0 + gx as i32;
                    let py = gy0 + gy as i32;
                    if px < 0 || py < 0 || px as usize >= buf_w || py as usize >= buf_h {
                        continue;
                    }

                    // Alpha-blend the label over the fill.
                    let a = alpha as u32;
                    let inv_a = 255 - a;
                    let r = (fg_r as u32 * a + bg_r as u32 * inv_a) / 255;
                    let g = (fg_g as u32 * a + bg_g as u32 * inv_a) / 255;
                    let b = (fg_b as u32 * a + bg_b as u32 * inv_a) / 255;
                    buf[py as usize * buf_w + px as usize] = 0xFF000000 | (r << 16) | (g << 8) | b;
                }
            }
            pen_x += glyph.advance;
        }
    }

    fn cache_glyph(&mut self, ch: char) {
        if self.glyph_cache.contains_key(&ch) {
            return;
        }
        let Some(font) = self.font.as_ref() else {
            return;
        };
        let (metrics, bitmap) = font.rasterize(ch, self.font_size);
        self.glyph_cache.insert(
            ch,
            GlyphCache {
                bitmap,
                width: metrics.width,
                height: metrics.height,
                x_offset: metrics.xmin,
                y_offset: metrics.ymin,
                advance: metrics.advance_width,
            },
        );
    }
}

#[inline]
fn color_to_pixel(c: Color) -> u32 {
    if c == Color::DEFAULT {
        0xFF000000
    } else {
        0xFF000000 | ((c.r() as u32) << 16) | ((c.g() as u32) << 8) | (c.b() as u32)
    }
}
