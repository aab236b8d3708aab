// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the precomputed heart animation.
// 2) A filled-square "brush" used for every particle.
// 3) A tiny 5x7 bitmap font for the HUD line and the center label.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // The display refreshes at 60 fps so ESC stays responsive; the
        // animation itself only steps on its own slower tick.
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}

/* ---------- Software drawing: pixels, squares, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x, y) is inside bounds.
/// Visual: the exact pixel at (x, y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a filled size x size square with its top-left corner at (x, y),
/// clipped at the canvas borders. This is the particle brush.
pub fn fill_square(fb: &mut FrameBuffer, x: i32, y: i32, size: i32, color: u32) {
    for dy in 0..size {
        for dx in 0..size {
            put_pixel(fb, x + dx, y + dy, color);
        }
    }
}

/* ---------- 5x7 bitmap font (ASCII subset the HUD and label need) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters we need: the HUD tags and "LOVE YOU"
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),

        // Punctuation: space, vertical bar, colon, dot, slash
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '/' => g!(0b00001,0b00001,0b00010,0b00100,0b01000,0b10000,0b10000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x, y), each glyph pixel as a scale x scale
/// block. Visual: the glyph appears with a black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32, scale: i32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass first (offset down-right by one block), then the
        // foreground glyph on top.
        for (offset, pass_color) in [(scale, 0x00000000), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5i32 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        fill_square(
                            fb,
                            x + rx * scale + offset,
                            y + ry as i32 * scale + offset,
                            scale,
                            pass_color,
                        );
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs at the native 1x size.
/// Visual: a compact HUD string; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, x: i32, y: i32, text: &str, color: u32) {
    draw_text_5x7_scaled(fb, x, y, text, color, 1);
}

/// Scaled variant for the big center label.
pub fn draw_text_5x7_scaled(
    fb: &mut FrameBuffer,
    mut x: i32,
    y: i32,
    text: &str,
    color: u32,
    scale: i32,
) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color, scale);
        x += 6 * scale; // 5 blocks glyph width + 1 block spacing
    }
}

/// Pixel width of a rendered string; the trailing spacing column is not drawn.
pub fn text_width_5x7(text: &str, scale: i32) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { (6 * n - 1) * scale }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (100, 100)] {
            put_pixel(&mut fb, x, y, 0x00FFFFFF);
        }
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn fill_square_clips_at_borders() {
        let mut fb = FrameBuffer::new(8, 8);
        // Bottom-right corner: only the 2x2 overlap lands on the canvas.
        fill_square(&mut fb, 6, 6, 4, 0x00FFFFFF);
        assert_eq!(fb.pixels.iter().filter(|&&p| p != 0).count(), 4);
        // Top-left overhang: only (0, 0) survives.
        fb.clear();
        fill_square(&mut fb, -2, -2, 3, 0x00FFFFFF);
        assert_eq!(fb.pixels.iter().filter(|&&p| p != 0).count(), 1);
        assert_ne!(fb.pixels[0], 0);
    }

    #[test]
    fn fill_square_covers_size_squared_pixels() {
        let mut fb = FrameBuffer::new(16, 16);
        fill_square(&mut fb, 5, 5, 3, 0x00FF00FF);
        assert_eq!(fb.pixels.iter().filter(|&&p| p != 0).count(), 9);
    }

    #[test]
    fn printed_characters_all_have_glyphs() {
        for ch in "LOVE YOU FRAME FPS: 0123456789/|.".chars() {
            assert!(glyph5x7(ch).is_some(), "missing glyph for {ch:?}");
        }
    }

    #[test]
    fn text_width_matches_drawn_extent() {
        assert_eq!(text_width_5x7("", 1), 0);
        assert_eq!(text_width_5x7("A", 1), 5);
        assert_eq!(text_width_5x7("AB", 1), 11);
        assert_eq!(text_width_5x7("LOVE YOU", 2), 94);
    }
}
