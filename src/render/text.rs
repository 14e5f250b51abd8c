//! Word wrapping and glyph drawing.
//!
//! Two kinds of font are supported: outline fonts rasterized with `rusttype`,
//! and the built-in 8×8 bitmap font used when no outline font can be loaded.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};

/// Pixel size of one bitmap glyph cell before scaling.
const BITMAP_CELL: u32 = 8;

/// Wrap `text` into lines of at most `width` characters.
///
/// The text is split on `'\n'` first; each segment is then wrapped greedily on
/// whitespace. An empty segment yields one empty line, so blank lines survive.
/// Runs of whitespace collapse to a single space. A word longer than `width`
/// is the only thing ever broken mid-word.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        let wrapped = wrap_segment(segment, width);
        if wrapped.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(wrapped);
        }
    }
    lines
}

fn wrap_segment(segment: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in segment.split_whitespace() {
        for piece in split_long_word(word, width) {
            let piece_len = piece.chars().count();
            if current_len > 0 && current_len + 1 + piece_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(piece);
            current_len += piece_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a word into chunks of at most `width` characters.
fn split_long_word(word: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = word;
    while rest.chars().count() > width {
        let cut = rest.char_indices().nth(width).map_or(rest.len(), |(i, _)| i);
        let (head, tail) = rest.split_at(cut);
        pieces.push(head);
        rest = tail;
    }
    pieces.push(rest);
    pieces
}

/// A font ready to measure and draw text.
pub enum TextFont {
    /// Outline font at a pixel size.
    Outline {
        /// Parsed font.
        font: Font<'static>,
        /// Uniform scale in pixels.
        scale: Scale,
    },
    /// Built-in 8×8 bitmap font, each glyph pixel drawn as a `scale`×`scale` block.
    Bitmap {
        /// Integer magnification.
        scale: u32,
    },
}

impl TextFont {
    /// Parse outline font bytes at `px` pixels. `None` if the bytes are not a font.
    #[must_use]
    pub fn outline(data: Vec<u8>, px: f32) -> Option<Self> {
        Font::try_from_vec(data).map(|font| Self::Outline { font, scale: Scale::uniform(px) })
    }

    /// The built-in bitmap font at an integer magnification.
    #[must_use]
    pub fn bitmap(scale: u32) -> Self {
        Self::Bitmap { scale: scale.max(1) }
    }

    /// Rendered width of `text` in pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn text_width(&self, text: &str) -> u32 {
        match self {
            Self::Outline { font, scale } => {
                let width = font
                    .layout(text, *scale, point(0.0, 0.0))
                    .last()
                    .map_or(0.0, |g| g.position().x + g.unpositioned().h_metrics().advance_width);
                width.max(0.0).ceil() as u32
            }
            Self::Bitmap { scale } => {
                let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
                chars.saturating_mul(BITMAP_CELL * scale)
            }
        }
    }

    /// Height of one line of text in pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn line_height(&self) -> u32 {
        match self {
            Self::Outline { font, scale } => {
                let v = font.v_metrics(*scale);
                (v.ascent - v.descent).max(0.0).ceil() as u32
            }
            Self::Bitmap { scale } => BITMAP_CELL * scale,
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`. Pixels outside the
    /// canvas are skipped.
    pub fn draw(&self, canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, text: &str) {
        match self {
            Self::Outline { font, scale } => draw_outline(canvas, font, *scale, x, y, color, text),
            Self::Bitmap { scale } => draw_bitmap(canvas, *scale, x, y, color, text),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn draw_outline(
    canvas: &mut RgbImage,
    font: &Font<'static>,
    scale: Scale,
    x: i64,
    y: i64,
    color: Rgb<u8>,
    text: &str,
) {
    let v_metrics = font.v_metrics(scale);
    let start = point(x as f32, y as f32 + v_metrics.ascent);
    for glyph in font.layout(text, scale, start) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = i64::from(bb.min.x) + i64::from(gx);
            let py = i64::from(bb.min.y) + i64::from(gy);
            blend(canvas, px, py, color, coverage);
        });
    }
}

fn draw_bitmap(canvas: &mut RgbImage, scale: u32, x: i64, y: i64, color: Rgb<u8>, text: &str) {
    let cell = i64::from(BITMAP_CELL * scale);
    let block = i64::from(scale);
    let mut caret = x;
    for ch in text.chars() {
        let glyph = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')).unwrap_or([0; 8]);
        for (row, bits) in (0i64..).zip(glyph) {
            for col in 0..8i64 {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for by in 0..block {
                    for bx in 0..block {
                        blend(canvas, caret + col * block + bx, y + row * block + by, color, 1.0);
                    }
                }
            }
        }
        caret += cell;
    }
}

/// Alpha-blend `color` over the pixel at `(x, y)` with the given coverage.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if x >= canvas.width() || y >= canvas.height() || coverage <= 0.0 {
        return;
    }
    let alpha = coverage.min(1.0);
    let dst = canvas.get_pixel_mut(x, y);
    for (d, s) in dst.0.iter_mut().zip(color.0) {
        *d = (f32::from(s) * alpha + f32::from(*d) * (1.0 - alpha)).round() as u8;
    }
}
