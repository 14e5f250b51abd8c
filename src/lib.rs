//! Matryoshka - wallpaper prompt composer with a procedural fallback renderer.
//!
//! [`compose`] turns [`PromptOptions`] into prompt text. [`render`] draws that
//! text over a textured background and writes a PNG, for use when no real
//! image backend is available.

pub mod adapters;
pub mod composer;
pub mod config;
pub mod context;
pub mod error;
pub mod options;
pub mod output;
pub mod ports;
pub mod render;

pub use composer::compose;
pub use error::Error;
pub use options::PromptOptions;
pub use render::{render, render_with, RenderConfig};
