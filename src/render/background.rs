//! Paper-like backdrop: a fixed tiling plus randomly scattered dots.

use image::{Rgb, RgbImage};
use rand::Rng;

/// Edge length of a background tile, in pixels.
pub const CELL_SIZE: u32 = 40;

/// Number of decorative dots scattered over the tiling.
pub const DOT_COUNT: usize = 180;

/// Tile colours, picked by `(cell_x + cell_y) % 3`.
pub const TILE_COLORS: [Rgb<u8>; 3] =
    [Rgb([0xf7, 0xf0, 0xe8]), Rgb([0xf0, 0xe8, 0xdd]), Rgb([0xe9, 0xe0, 0xd5])];

/// Accent colours for the dots.
pub const DOT_COLORS: [Rgb<u8>; 5] = [
    Rgb([0xd5, 0xc3, 0xb8]),
    Rgb([0xc0, 0xb0, 0xa6]),
    Rgb([0xe0, 0xd0, 0xc4]),
    Rgb([0xb8, 0xc6, 0xd8]),
    Rgb([0xd9, 0xbc, 0xd0]),
];

/// Paint the tile grid over the whole canvas. Partial tiles at the right and
/// bottom edges are clipped.
pub fn tile(canvas: &mut RgbImage) {
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let cell = (x / CELL_SIZE + y / CELL_SIZE) % 3;
        *pixel = TILE_COLORS[cell as usize];
    }
}

/// Scatter [`DOT_COUNT`] filled circles with radius in `[2, 5]`.
pub fn scatter_dots<R: Rng + ?Sized>(canvas: &mut RgbImage, rng: &mut R) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    for _ in 0..DOT_COUNT {
        let radius = rng.random_range(2..=5u32);
        let cx = rng.random_range(0..width);
        let cy = rng.random_range(0..height);
        let color = DOT_COLORS[rng.random_range(0..DOT_COLORS.len())];
        fill_circle(canvas, cx, cy, radius, color);
    }
}

fn fill_circle(canvas: &mut RgbImage, cx: u32, cy: u32, radius: u32, color: Rgb<u8>) {
    let (width, height) = canvas.dimensions();
    let r = i64::from(radius);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let (Ok(x), Ok(y)) =
                (u32::try_from(i64::from(cx) + dx), u32::try_from(i64::from(cy) + dy))
            else {
                continue;
            };
            if x < width && y < height {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}
