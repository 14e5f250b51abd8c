//! Image backend port: turns a composed prompt into an image file.

use std::path::PathBuf;

use crate::error::Error;
use crate::render::RenderConfig;

/// Generates an image file from prompt text.
///
/// Callers inject an implementation explicitly; having none is a normal,
/// non-fatal state (see [`crate::context::ImageOutcome::NotConfigured`]).
pub trait ImageBackend: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Generate an image for `prompt`, returning the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce or store the image.
    fn generate(&self, prompt: &str, config: &RenderConfig) -> Result<PathBuf, Error>;
}
