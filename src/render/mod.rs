//! Fallback image renderer.
//!
//! Produces a wallpaper-like preview of a prompt: a tiled, dotted paper
//! background with the prompt text written over it. Used when no real image
//! backend is available.

pub mod background;
pub mod fonts;
pub mod text;

use std::path::{Path, PathBuf};

use image::{imageops, Rgb, RgbImage};
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Error;
use crate::output::save_png;
use fonts::{FontProvider, SystemFonts};
use text::{wrap_text, TextFont};

/// Title drawn at the top of every preview.
pub const TITLE: &str = "Matryoshka Prompt";

/// Maximum characters per wrapped body line.
pub const CHARS_PER_LINE: usize = 60;

const BASE_COLOR: Rgb<u8> = Rgb([0xf6, 0xee, 0xe2]);
const TITLE_COLOR: Rgb<u8> = Rgb([0x4a, 0x3a, 0x2c]);
const BODY_COLOR: Rgb<u8> = Rgb([0x3b, 0x2f, 0x26]);

const TITLE_FONT: &str = "DejaVuSans-Bold.ttf";
const BODY_FONT: &str = "DejaVuSans.ttf";
const TITLE_PX: f32 = 30.0;
const BODY_PX: f32 = 20.0;
const TITLE_BITMAP_SCALE: u32 = 3;
const BODY_BITMAP_SCALE: u32 = 1;

const TITLE_TOP: i64 = 30;
const BODY_TOP: i64 = 100;
const BODY_LEFT: i64 = 40;
const LINE_GAP: u32 = 6;

const BLUR_SIGMA: f32 = 0.6;

/// Canvas size, destination and font search path for a render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Directory the PNG is written to; created if absent.
    pub output_dir: PathBuf,
    /// Directories searched for the title and body fonts.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 1200,
            output_dir: PathBuf::from("generated"),
            font_dirs: SystemFonts::default_dirs(),
        }
    }
}

impl RenderConfig {
    /// Default size and fonts, writing to `output_dir`.
    #[must_use]
    pub fn with_output_dir(output_dir: impl AsRef<Path>) -> Self {
        Self { output_dir: output_dir.as_ref().to_path_buf(), ..Self::default() }
    }
}

/// Render `prompt` with system fonts and a freshly seeded random source.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or the PNG
/// cannot be written.
pub fn render(prompt: &str, config: &RenderConfig) -> Result<PathBuf, Error> {
    let fonts = SystemFonts::new(config.font_dirs.clone());
    render_with(prompt, config, &fonts, &mut rand::rng())
}

/// Render `prompt` with an explicit font provider and random source.
///
/// # Errors
///
/// Returns an error if the canvas is empty, the output directory cannot be
/// created, or the PNG cannot be written.
pub fn render_with<R: Rng + ?Sized>(
    prompt: &str,
    config: &RenderConfig,
    fonts: &dyn FontProvider,
    rng: &mut R,
) -> Result<PathBuf, Error> {
    if config.width == 0 || config.height == 0 {
        return Err(Error::Config(format!(
            "Canvas must be non-empty, got {}x{}",
            config.width, config.height
        )));
    }
    let canvas = paint(prompt, config.width, config.height, fonts, rng);
    let path = save_png(&canvas, &config.output_dir)?;
    info!(
        path = %path.display(),
        width = config.width,
        height = config.height,
        "rendered fallback image"
    );
    Ok(path)
}

/// Paint the preview in memory without touching the filesystem.
pub fn paint<R: Rng + ?Sized>(
    prompt: &str,
    width: u32,
    height: u32,
    fonts: &dyn FontProvider,
    rng: &mut R,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, BASE_COLOR);
    background::tile(&mut canvas);
    background::scatter_dots(&mut canvas, rng);

    let (title_font, body_font) = load_fonts(fonts);

    let title_x = i64::from(width.saturating_sub(title_font.text_width(TITLE)) / 2);
    title_font.draw(&mut canvas, title_x, TITLE_TOP, TITLE_COLOR, TITLE);

    let advance = i64::from(body_font.line_height() + LINE_GAP);
    let mut y = BODY_TOP;
    for line in wrap_text(prompt, CHARS_PER_LINE) {
        body_font.draw(&mut canvas, BODY_LEFT, y, BODY_COLOR, &line);
        y += advance;
    }

    imageops::blur(&canvas, BLUR_SIGMA)
}

/// Title and body fonts. Both fall back to the bitmap font if either outline
/// font is missing or unreadable.
fn load_fonts(fonts: &dyn FontProvider) -> (TextFont, TextFont) {
    let outline =
        |name: &str, px: f32| fonts.load(name).and_then(|data| TextFont::outline(data, px));
    match (outline(TITLE_FONT, TITLE_PX), outline(BODY_FONT, BODY_PX)) {
        (Some(title), Some(body)) => (title, body),
        _ => {
            debug!(title = TITLE_FONT, body = BODY_FONT, "fonts unavailable, using bitmap font");
            (TextFont::bitmap(TITLE_BITMAP_SCALE), TextFont::bitmap(BODY_BITMAP_SCALE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fonts::NoFonts;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct CorruptFonts;

    impl FontProvider for CorruptFonts {
        fn load(&self, _name: &str) -> Option<Vec<u8>> {
            Some(b"garbage".to_vec())
        }
    }

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn config_in(dir: &Path, width: u32, height: u32) -> RenderConfig {
        RenderConfig { width, height, ..RenderConfig::with_output_dir(dir) }
    }

    #[test]
    fn default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 900);
        assert_eq!(config.height, 1200);
        assert_eq!(config.output_dir, PathBuf::from("generated"));
        assert!(!config.font_dirs.is_empty());
    }

    #[test]
    fn paint_has_requested_size() {
        let canvas = paint("hello", 321, 123, &NoFonts, &mut StdRng::seed_from_u64(1));
        assert_eq!(canvas.dimensions(), (321, 123));
    }

    #[test]
    fn same_seed_is_pixel_identical() {
        let a = paint("a prompt", 200, 260, &NoFonts, &mut StdRng::seed_from_u64(99));
        let b = paint("a prompt", 200, 260, &NoFonts, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = paint("a prompt", 200, 260, &NoFonts, &mut StdRng::seed_from_u64(1));
        let b = paint("a prompt", 200, 260, &NoFonts, &mut StdRng::seed_from_u64(2));
        assert_ne!(a, b);
    }

    #[test]
    fn prompt_text_is_drawn() {
        let empty = paint("", 400, 300, &NoFonts, &mut StdRng::seed_from_u64(5));
        let text = paint("WORDS ON PAPER", 400, 300, &NoFonts, &mut StdRng::seed_from_u64(5));
        assert_ne!(empty, text);
    }

    #[test]
    fn corrupt_font_falls_back() {
        let a = paint("x", 120, 140, &CorruptFonts, &mut StdRng::seed_from_u64(3));
        let b = paint("x", 120, 140, &NoFonts, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn render_writes_png_of_requested_size() {
        let dir = test_dir("matryoshka_render_png_test");
        let config = config_in(&dir.join("nested"), 300, 400);

        let path =
            render_with("line one\n\nline two", &config, &NoFonts, &mut StdRng::seed_from_u64(8))
                .unwrap();

        assert!(path.exists());
        assert!(path.starts_with(dir.join("nested")));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("matryoshka_prompt_"));
        assert_eq!(path.extension().unwrap(), "png");
        assert_eq!(image::image_dimensions(&path).unwrap(), (300, 400));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn render_without_fonts_succeeds() {
        let dir = test_dir("matryoshka_render_nofont_test");
        let config = RenderConfig {
            font_dirs: vec![PathBuf::from("/nonexistent/matryoshka/fonts")],
            ..config_in(&dir, 180, 200)
        };

        let path = render("no fonts here", &config).unwrap();
        assert!(image::open(&path).is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn same_second_renders_do_not_collide() {
        let dir = test_dir("matryoshka_render_collision_test");
        let config = config_in(&dir, 60, 60);

        let first = render_with("a", &config, &NoFonts, &mut StdRng::seed_from_u64(1)).unwrap();
        let second = render_with("b", &config, &NoFonts, &mut StdRng::seed_from_u64(2)).unwrap();

        assert_ne!(first, second);
        assert!(first.exists() && second.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_canvas_rejected() {
        let dir = test_dir("matryoshka_render_empty_test");
        let config = config_in(&dir, 0, 100);
        let err = render_with("a", &config, &NoFonts, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn unwritable_output_dir_is_io_error() {
        let dir = test_dir("matryoshka_render_blocked_test");
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let config = config_in(&blocker.join("out"), 50, 50);

        let err = render_with("a", &config, &NoFonts, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
