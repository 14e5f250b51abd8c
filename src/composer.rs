//! Prompt assembly from [`PromptOptions`].
//!
//! The output is a fixed sequence of paragraphs. Only the flat-face and
//! held-objects clauses are optional; everything else is always present, in
//! the same order.

use crate::options::PromptOptions;

/// Opening paragraph describing the medium.
const OPENING: &str = "A vertical wallpaper illustration in a cozy, textured, minimalist \
folk-art style, resembling risograph or colored pencil on grainy paper, \
matching the aesthetic of the reference images.";

/// Strict style recipe, included verbatim in every prompt.
const STYLE_RECIPE: &str = "Follow this strict style recipe: a visible grainy paper texture \
across every surface; flat color fills with no gradients, gloss, or hard shading; rounded \
matryoshka silhouettes with a wide, softly curved body and a smaller head; simple eyes, no \
noses, and tiny mouths; a limited palette of no more than five harmonious colors; small \
background motifs drawn as simple flat shapes such as mushrooms, trees, stars, leaves, and \
berries; and generous, even spacing so that no figures or motifs overlap.";

const FLAT_FACES: &str = " Their faces are flat and circular, and their bases are smoothly \
curved for a natural transition to the body.";

const PARAGRAPH_BREAK: &str = "\n\n";

/// Compose the full image-generation prompt.
///
/// Pure and total: identical options always give identical text.
#[must_use]
pub fn compose(options: &PromptOptions) -> String {
    let subjects = subjects_clause(options);

    let mut scene = format!(
        "The scene includes repeating, rounded {subjects} {}.",
        options.scene_description
    );
    scene.push_str(&format!(
        " They have round plump faces with a head-to-body ratio of {}, no noses, \
small {} eyes and small {} mouths.",
        options.head_body_ratio,
        options.eye_style.label(),
        options.mouth_color
    ));
    if options.apply_flat_faces {
        scene.push_str(FLAT_FACES);
    }
    if let Some(objects) = join_objects(&options.cleaned_objects()) {
        scene.push_str(&format!(" Each figure holds one of the following objects: {objects}."));
    }

    let background = format!(
        "The background is a soft {} filled with scattered, simple {}, arranged in a {} pattern.",
        options.background_color,
        options.background_elements,
        options.pattern_density.label()
    );

    let palette = format!(
        "The overall color palette is {}, with a {} paper texture, and the texture is grainy, \
soft, and matte.",
        options.palette,
        options.texture_strength.label()
    );

    [OPENING, STYLE_RECIPE, scene.as_str(), background.as_str(), palette.as_str()]
        .join(PARAGRAPH_BREAK)
}

/// `"{primary} figures"`, or `"{primary} and {secondary} figures"`.
fn subjects_clause(options: &PromptOptions) -> String {
    match options.secondary() {
        Some(secondary) => format!("{} and {secondary} figures", options.primary_subject),
        None => format!("{} figures", options.primary_subject),
    }
}

/// Join items as `a`, `a and b`, or `a, b, and c`. `None` for an empty list.
#[must_use]
pub fn join_objects(items: &[&str]) -> Option<String> {
    match items {
        [] => None,
        [one] => Some((*one).to_string()),
        [first, second] => Some(format!("{first} and {second}")),
        [init @ .., last] => Some(format!("{}, and {last}", init.join(", "))),
    }
}
