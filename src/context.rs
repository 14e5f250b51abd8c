//! Service context that bundles the optional image backend.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::adapters::fallback::FallbackBackend;
use crate::error::Error;
use crate::ports::ImageBackend;
use crate::render::RenderConfig;

/// Shown in place of an image when no backend is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "Image generation is not configured. Use the prompt \
above with your own generator, or select the built-in fallback renderer with --backend fallback.";

/// Result of asking the context for an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageOutcome {
    /// The backend wrote an image file.
    Generated {
        /// Path of the image file.
        path: PathBuf,
    },
    /// No backend is available; informational, not an error.
    NotConfigured,
    /// The backend failed; the message wraps the original error.
    Failed {
        /// Description of the failure.
        message: String,
    },
}

impl ImageOutcome {
    /// Path of the generated image, if any.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Generated { path } => Some(path),
            Self::NotConfigured | Self::Failed { .. } => None,
        }
    }

    /// Text to show when there is no image.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Generated { .. } => None,
            Self::NotConfigured => Some(NOT_CONFIGURED_MESSAGE),
            Self::Failed { message } => Some(message),
        }
    }
}

/// Bundles the image backend, if one is configured.
pub struct ServiceContext {
    /// Image backend port.
    pub backend: Option<Box<dyn ImageBackend>>,
}

impl ServiceContext {
    /// Create a context around an explicitly injected backend.
    #[must_use]
    pub fn new(backend: Option<Box<dyn ImageBackend>>) -> Self {
        Self { backend }
    }

    /// Select a backend by name.
    ///
    /// `None`, empty and `"none"` mean no backend. Unknown names are logged
    /// and also leave the context without a backend. `seed` makes the
    /// fallback renderer's decoration reproducible.
    #[must_use]
    pub fn from_backend_name(name: Option<&str>, seed: Option<u64>) -> Self {
        let name =
            name.map(str::trim).filter(|n| !n.is_empty() && !n.eq_ignore_ascii_case("none"));
        let backend: Option<Box<dyn ImageBackend>> = match name {
            None => None,
            Some(n) if n.eq_ignore_ascii_case(FallbackBackend::NAME) => {
                Some(Box::new(seed.map_or_else(FallbackBackend::new, FallbackBackend::with_seed)))
            }
            Some(unknown) => {
                warn!(backend = unknown, "unknown image backend, image generation disabled");
                None
            }
        };
        Self { backend }
    }

    /// Ask the backend for an image. Backend errors are caught and reported in
    /// the outcome rather than propagated.
    #[must_use]
    pub fn generate(&self, prompt: &str, config: &RenderConfig) -> ImageOutcome {
        let Some(backend) = self.backend.as_deref() else {
            info!("no image backend configured");
            return ImageOutcome::NotConfigured;
        };
        match backend.generate(prompt, config) {
            Ok(path) => ImageOutcome::Generated { path },
            Err(e) => {
                let wrapped =
                    Error::Backend { backend: backend.name().to_string(), message: e.to_string() };
                warn!(error = %wrapped, "image generation failed");
                ImageOutcome::Failed { message: format!("Image generation failed. {wrapped}") }
            }
        }
    }
}
