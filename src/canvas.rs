//! A small software framebuffer for the terminal.
//!
//! The world is 800x600 units; the canvas covers the whole terminal and keeps
//! two pixels per cell (upper and lower half), which are written out with the
//! `▀` glyph: foreground is the top pixel, background the bottom one. Text is
//! kept separately and drawn on top of the pixels.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, style::Style};

use crate::assets::Sprite;
use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::motion::Point;

pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];
pub const WHITE: Rgb = [255, 255, 255];

/// Maps between world units and terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// World width covered by one cell
    fn cell_width(&self) -> f32 {
        WORLD_WIDTH / self.area.width.max(1) as f32
    }

    fn cell_height(&self) -> f32 {
        WORLD_HEIGHT / self.area.height.max(1) as f32
    }

    /// Center of the cell at `column`/`row` (absolute terminal coordinates)
    pub fn cell_to_world(&self, column: u16, row: u16) -> Point {
        let col = column.saturating_sub(self.area.x) as f32;
        let row = row.saturating_sub(self.area.y) as f32;
        Point::new(
            (col + 0.5) * self.cell_width(),
            (row + 0.5) * self.cell_height(),
        )
    }

    /// Cell holding `point`, or None when it is off screen
    pub fn world_to_cell(&self, point: Point) -> Option<(u16, u16)> {
        if !(0.0..WORLD_WIDTH).contains(&point.x) || !(0.0..WORLD_HEIGHT).contains(&point.y) {
            return None;
        }
        let col = (point.x / self.cell_width()) as u16;
        let row = (point.y / self.cell_height()) as u16;
        Some((
            self.area.x + col.min(self.area.width.saturating_sub(1)),
            self.area.y + row.min(self.area.height.saturating_sub(1)),
        ))
    }
}

#[derive(Debug, Clone)]
struct TextOverlay {
    text: String,
    position: Point,
    color: Rgb,
}

pub struct Canvas {
    viewport: Viewport,
    /// Pixels per row (one per cell column)
    width: usize,
    /// Pixel rows (two per cell row)
    height: usize,
    pixels: Vec<Rgb>,
    texts: Vec<TextOverlay>,
}

impl Canvas {
    pub fn new(area: Rect) -> Self {
        let width = area.width as usize;
        let height = area.height as usize * 2;
        Self {
            viewport: Viewport::new(area),
            width,
            height,
            pixels: vec![BLACK; width * height],
            texts: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Follow a terminal resize. Clears the canvas if the size changed.
    pub fn resize(&mut self, area: Rect) {
        if area != self.viewport.area {
            *self = Self::new(area);
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.texts.clear();
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// World size of one pixel
    fn pixel_size(&self) -> (f32, f32) {
        (
            WORLD_WIDTH / self.width.max(1) as f32,
            WORLD_HEIGHT / self.height.max(1) as f32,
        )
    }

    /// Draw `sprite` centered on `center`, turned `rotation_deg` clockwise,
    /// with overall opacity `alpha`
    pub fn draw_sprite(&mut self, sprite: &Sprite, center: Point, rotation_deg: f32, alpha: u8) {
        if alpha == 0 || self.width == 0 || self.height == 0 {
            return;
        }

        let (sin, cos) = rotation_deg.to_radians().sin_cos();
        let half_w = sprite.width() / 2.0;
        let half_h = sprite.height() / 2.0;
        // Extent of the rotated sprite
        let reach_x = cos.abs() * half_w + sin.abs() * half_h;
        let reach_y = sin.abs() * half_w + cos.abs() * half_h;

        let (px_w, px_h) = self.pixel_size();
        let first_x = ((center.x - reach_x) / px_w).floor().max(0.0) as usize;
        let last_x = ((center.x + reach_x) / px_w).ceil().min(self.width as f32) as usize;
        let first_y = ((center.y - reach_y) / px_h).floor().max(0.0) as usize;
        let last_y = ((center.y + reach_y) / px_h).ceil().min(self.height as f32) as usize;

        let image = sprite.pixels();
        let opacity = alpha as f32 / 255.0;

        for y in first_y..last_y {
            for x in first_x..last_x {
                let world_x = (x as f32 + 0.5) * px_w - center.x;
                let world_y = (y as f32 + 0.5) * px_h - center.y;
                // Undo the rotation to find the sprite texel
                let local_x = cos * world_x + sin * world_y + half_w;
                let local_y = -sin * world_x + cos * world_y + half_h;
                if local_x < 0.0 || local_y < 0.0 {
                    continue;
                }
                let (tx, ty) = (local_x as u32, local_y as u32);
                if tx >= image.width() || ty >= image.height() {
                    continue;
                }

                let texel = image.get_pixel(tx, ty).0;
                let a = texel[3] as f32 / 255.0 * opacity;
                if a <= 0.0 {
                    continue;
                }
                let dst = &mut self.pixels[y * self.width + x];
                for channel in 0..3 {
                    let blended = texel[channel] as f32 * a + dst[channel] as f32 * (1.0 - a);
                    dst[channel] = blended.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }

    /// Queue a line of text whose top-left is at `position` (world units)
    pub fn draw_text(&mut self, text: impl Into<String>, position: Point, color: Rgb) {
        self.texts.push(TextOverlay {
            text: text.into(),
            position,
            color,
        });
    }

    /// Write pixels and text into a ratatui buffer
    pub fn render_to(&self, buf: &mut Buffer) {
        let area = self.viewport.area;
        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as usize;
                let top = self.pixels[(row as usize * 2) * self.width + x];
                let bottom = self.pixels[(row as usize * 2 + 1) * self.width + x];
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char('▀').set_fg(to_color(top)).set_bg(to_color(bottom));
                }
            }
        }

        for overlay in &self.texts {
            if let Some((col, row)) = self.viewport.world_to_cell(overlay.position) {
                let max_width = (area.x + area.width).saturating_sub(col) as usize;
                buf.set_stringn(
                    col,
                    row,
                    &overlay.text,
                    max_width,
                    Style::default().fg(to_color(overlay.color)),
                );
            }
        }
    }
}

fn to_color([r, g, b]: Rgb) -> Color {
    Color::Rgb(r, g, b)
}
