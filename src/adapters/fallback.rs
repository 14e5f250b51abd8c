//! Backend adapter around the built-in fallback renderer.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Error;
use crate::ports::ImageBackend;
use crate::render::fonts::SystemFonts;
use crate::render::{render_with, RenderConfig};

/// Renders the prompt as text over a textured background.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackBackend {
    seed: Option<u64>,
}

impl FallbackBackend {
    /// Registered name of this backend.
    pub const NAME: &'static str = "fallback";

    /// Decoration is freshly randomized on every call.
    #[must_use]
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Decoration is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl ImageBackend for FallbackBackend {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn generate(&self, prompt: &str, config: &RenderConfig) -> Result<PathBuf, Error> {
        let fonts = SystemFonts::new(config.font_dirs.clone());
        match self.seed {
            Some(seed) => render_with(prompt, config, &fonts, &mut StdRng::seed_from_u64(seed)),
            None => render_with(prompt, config, &fonts, &mut rand::rng()),
        }
    }
}
