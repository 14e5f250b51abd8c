//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use matryoshka::options::{EyeStyle, PatternDensity, PromptOptions, TextureStrength};
use matryoshka::render::RenderConfig;

/// Matryoshka wallpaper prompt builder with a built-in fallback preview renderer.
///
/// Any prompt option left out falls back to the config file's `[prompt]`
/// section, then to the built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "matryoshka", version, about)]
pub struct Cli {
    /// Main figures (e.g. "matryoshka dolls").
    #[arg(long)]
    pub primary_subject: Option<String>,

    /// Second kind of figure, or "none".
    #[arg(long)]
    pub secondary_subject: Option<String>,

    /// What the figures are doing.
    #[arg(long)]
    pub scene: Option<String>,

    /// Background colour tone.
    #[arg(long)]
    pub background_color: Option<String>,

    /// Motifs scattered across the background.
    #[arg(long)]
    pub background_elements: Option<String>,

    /// Overall colour palette.
    #[arg(long)]
    pub palette: Option<String>,

    /// Head-to-body ratio (e.g. 1:1.3).
    #[arg(long)]
    pub head_body_ratio: Option<String>,

    /// Flat round faces with smoothly curved bases: true or false.
    #[arg(long, value_name = "BOOL")]
    pub flat_faces: Option<bool>,

    /// Mouth colour.
    #[arg(long)]
    pub mouth_color: Option<String>,

    /// Eye style: dot, "curved line".
    #[arg(long)]
    pub eye_style: Option<EyeStyle>,

    /// Comma-separated objects held by the figures.
    #[arg(long)]
    pub held_objects: Option<String>,

    /// Background pattern density: spacious, balanced, dense.
    #[arg(long)]
    pub pattern_density: Option<PatternDensity>,

    /// Paper texture strength: subtle, medium, pronounced.
    #[arg(long)]
    pub texture_strength: Option<TextureStrength>,

    /// Image backend: fallback, none.
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Preview width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Preview height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Directory for rendered previews.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Seed for reproducible preview decoration.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON report instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

fn trimmed(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

impl Cli {
    /// Apply the prompt flags on top of `base`. Text values are trimmed.
    #[must_use]
    pub fn prompt_options(&self, base: PromptOptions) -> PromptOptions {
        PromptOptions {
            primary_subject: trimmed(self.primary_subject.as_ref()).unwrap_or(base.primary_subject),
            secondary_subject: trimmed(self.secondary_subject.as_ref())
                .or(base.secondary_subject),
            scene_description: trimmed(self.scene.as_ref()).unwrap_or(base.scene_description),
            background_color: trimmed(self.background_color.as_ref())
                .unwrap_or(base.background_color),
            background_elements: trimmed(self.background_elements.as_ref())
                .unwrap_or(base.background_elements),
            palette: trimmed(self.palette.as_ref()).unwrap_or(base.palette),
            head_body_ratio: trimmed(self.head_body_ratio.as_ref()).unwrap_or(base.head_body_ratio),
            apply_flat_faces: self.flat_faces.unwrap_or(base.apply_flat_faces),
            mouth_color: trimmed(self.mouth_color.as_ref()).unwrap_or(base.mouth_color),
            eye_style: self.eye_style.unwrap_or(base.eye_style),
            held_objects: trimmed(self.held_objects.as_ref()).unwrap_or(base.held_objects),
            pattern_density: self.pattern_density.unwrap_or(base.pattern_density),
            texture_strength: self.texture_strength.unwrap_or(base.texture_strength),
        }
    }

    /// Apply the size and output flags on top of `base`.
    #[must_use]
    pub fn render_config(&self, base: RenderConfig) -> RenderConfig {
        RenderConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            output_dir: self.output_dir.clone().unwrap_or(base.output_dir),
            font_dirs: base.font_dirs,
        }
    }
}
