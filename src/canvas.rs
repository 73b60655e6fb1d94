//! Drawing surfaces.
//!
//! Scene entities render through the [`Canvas`] trait, which exposes the
//! three primitives the animation needs. Two implementations ship with the
//! crate:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PixelBuffer`] | CPU RGBA framebuffer, presented by a [`Backend`](crate::Backend) |
//! | [`DrawList`] | Records every call, for inspecting render traversal |

use crate::color::Rgb;

/// Sink for the drawing primitives used by the scene.
pub trait Canvas {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Fill an axis-aligned rectangle, blending `color` over the existing
    /// pixels with `alpha` as opacity.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb, alpha: u8);

    /// Fill an opaque disc centered on `(cx, cy)`.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb);
}

/// Software framebuffer holding one RGBA pixel per canvas cell.
///
/// Draw calls are clipped to the buffer. Row-major, top-left origin.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Create a buffer cleared to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK.to_rgba(); (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|idx| {
            let [r, g, b, _] = self.pixels[idx];
            Rgb::new(r, g, b)
        })
    }

    /// Raw RGBA bytes, ready for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as usize) * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Clip the span `[start, start + len)` to `[0, limit)`.
    fn clip(start: i32, len: u32, limit: u32) -> std::ops::Range<i32> {
        let lo = start.max(0);
        let hi = start.saturating_add(len.min(i32::MAX as u32) as i32).min(limit as i32);
        lo..hi.max(lo)
    }
}

impl Canvas for PixelBuffer {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_rgba());
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let cols = Self::clip(x, width, self.width);
        for py in Self::clip(y, height, self.height) {
            let row = py as usize * self.width as usize;
            for px in cols.clone() {
                let pixel = &mut self.pixels[row + px as usize];
                let dst = Rgb::new(pixel[0], pixel[1], pixel[2]);
                *pixel = color.blend_over(dst, alpha).to_rgba();
            }
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) {
        let r = radius as i32;
        let r2 = (r as i64) * (r as i64);
        let rgba = color.to_rgba();
        for py in (cy - r).max(0)..=(cy + r).min(self.height as i32 - 1) {
            let dy = (py - cy) as i64;
            for px in (cx - r).max(0)..=(cx + r).min(self.width as i32 - 1) {
                let dx = (px - cx) as i64;
                if dx * dx + dy * dy <= r2 {
                    let idx = py as usize * self.width as usize + px as usize;
                    self.pixels[idx] = rgba;
                }
            }
        }
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb,
        alpha: u8,
    },
    Circle {
        cx: i32,
        cy: i32,
        radius: u32,
        color: Rgb,
    },
}

/// Canvas that records draw calls in order instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb, alpha: u8) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
            alpha,
        });
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }
}
