//! Stylistic choices fed into the prompt composer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the figures' eyes are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EyeStyle {
    /// Small dot eyes.
    #[default]
    #[serde(rename = "dot")]
    Dot,
    /// Gently curved line eyes.
    #[serde(rename = "curved line", alias = "curved_line", alias = "curved-line")]
    CurvedLine,
}

/// How densely the background motifs are scattered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternDensity {
    /// Plenty of empty space between motifs.
    Spacious,
    /// Even spacing.
    #[default]
    Balanced,
    /// Tightly packed motifs.
    Dense,
}

/// How visible the paper grain is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureStrength {
    /// Barely noticeable grain.
    Subtle,
    /// Noticeable grain.
    #[default]
    Medium,
    /// Strong grain.
    Pronounced,
}

impl EyeStyle {
    /// Label used inside the prompt text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::CurvedLine => "curved line",
        }
    }
}

impl PatternDensity {
    /// Label used inside the prompt text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Spacious => "spacious",
            Self::Balanced => "balanced",
            Self::Dense => "dense",
        }
    }
}

impl TextureStrength {
    /// Label used inside the prompt text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::Medium => "medium",
            Self::Pronounced => "pronounced",
        }
    }
}

/// Lowercases and folds `-`/`_` to spaces so `curved-line` and `Curved Line` agree.
fn normalize_label(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', '_'], " ")
}

impl FromStr for EyeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "dot" => Ok(Self::Dot),
            "curved line" => Ok(Self::CurvedLine),
            _ => Err(format!("Unsupported eye style '{s}'. Valid: dot, curved line")),
        }
    }
}

impl FromStr for PatternDensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "spacious" => Ok(Self::Spacious),
            "balanced" => Ok(Self::Balanced),
            "dense" => Ok(Self::Dense),
            _ => Err(format!(
                "Unsupported pattern density '{s}'. Valid: spacious, balanced, dense"
            )),
        }
    }
}

impl FromStr for TextureStrength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "subtle" => Ok(Self::Subtle),
            "medium" => Ok(Self::Medium),
            "pronounced" => Ok(Self::Pronounced),
            _ => Err(format!(
                "Unsupported texture strength '{s}'. Valid: subtle, medium, pronounced"
            )),
        }
    }
}

impl fmt::Display for EyeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PatternDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TextureStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every choice that shapes a composed prompt.
///
/// Constructed fresh for each composition. Strings are expected to be trimmed
/// already; the composer applies no validation beyond its omission rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    /// Main figures, e.g. `"matryoshka dolls"`.
    pub primary_subject: String,
    /// Optional second kind of figure; `"none"` or empty means absent.
    pub secondary_subject: Option<String>,
    /// What the figures are doing.
    pub scene_description: String,
    /// Background colour tone.
    pub background_color: String,
    /// Motifs scattered across the background.
    pub background_elements: String,
    /// Overall colour palette.
    pub palette: String,
    /// Head-to-body ratio, e.g. `"1:1.3"`.
    pub head_body_ratio: String,
    /// Adds the flat-face / curved-base clause.
    pub apply_flat_faces: bool,
    /// Mouth colour.
    pub mouth_color: String,
    /// Eye style.
    pub eye_style: EyeStyle,
    /// Comma-separated objects held by the figures.
    pub held_objects: String,
    /// Background motif density.
    pub pattern_density: PatternDensity,
    /// Paper texture strength.
    pub texture_strength: TextureStrength,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            primary_subject: "matryoshka dolls".to_string(),
            secondary_subject: Some("none".to_string()),
            scene_description: "doing different cosy activities".to_string(),
            background_color: "pastel blue".to_string(),
            background_elements: "mushrooms, evergreen trees, stars, books, leaves and berries"
                .to_string(),
            palette: "pastel blues, warm creams, earthy greens and browns".to_string(),
            head_body_ratio: "1:1.3".to_string(),
            apply_flat_faces: true,
            mouth_color: "red".to_string(),
            eye_style: EyeStyle::Dot,
            held_objects: "lantern, book, wrapped gift, holly and berries, mug".to_string(),
            pattern_density: PatternDensity::Balanced,
            texture_strength: TextureStrength::Medium,
        }
    }
}

impl PromptOptions {
    /// The secondary subject, unless it is missing, empty, or `"none"` in any case.
    #[must_use]
    pub fn secondary(&self) -> Option<&str> {
        self.secondary_subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("none"))
    }

    /// Held objects split on commas, trimmed, with empty items dropped.
    #[must_use]
    pub fn cleaned_objects(&self) -> Vec<&str> {
        self.held_objects.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
    }
}
