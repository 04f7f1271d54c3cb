//! Luminance-based contrast enforcement for white label text.
//!
//! Every sector is filled with a palette color and labeled in white, so
//! the fill must be dark enough for the label to read. Rather than a
//! full WCAG ratio check, the wheel pins a single number: a color is
//! label-safe when its relative luminance is at or below
//! [`LABEL_LUMINANCE`] (which corresponds to roughly 3:1 against white).
//!
//! Colors that are too bright are darkened by whole-channel
//! multiplication — the darkening preserves the channel ratios, so hues
//! stay recognizably themselves instead of drifting toward gray.

use crate::color::Color;

/// Maximum relative luminance a sector fill may have and still carry
/// legible white text.
pub const LABEL_LUMINANCE: f64 = 0.25;

/// Initial per-iteration darkening factor.
const DARKEN_START: f64 = 0.95;

/// How much the factor decays each iteration (darkening accelerates).
const DARKEN_STEP: f64 = 0.05;

/// The factor never drops below this — each step removes at most 60%.
const DARKEN_FLOOR: f64 = 0.40;

/// Iteration bound. Reaching it returns the closest attained color
/// rather than failing; with the floor above, 30 multiplications take
/// any channel to zero, so in practice the target is always met.
const MAX_DARKEN_STEPS: u32 = 30;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Contrast ratio of white text over the given background color.
///
/// `(L_white + 0.05) / (L_bg + 0.05)`, in [1.0, 21.0].
#[must_use]
pub fn contrast_with_white(background: Color) -> f64 {
    (1.0 + 0.05) / (relative_luminance(background) + 0.05)
}

/// Darken `color` until its relative luminance is at or below `target`.
///
/// Already-dark colors pass through untouched, which also makes the
/// function idempotent. The darkening factor starts at 0.95 and decays
/// by 0.05 per iteration down to a floor of 0.40, so stubbornly bright
/// colors converge quickly. After 30 iterations the closest attained
/// color is returned — a documented relaxation; this function never
/// fails.
#[must_use]
pub fn ensure_contrast(color: Color, target: f64) -> Color {
    if relative_luminance(color) <= target {
        return color;
    }

    let mut current = color;
    let mut factor = DARKEN_START;
    for _ in 0..MAX_DARKEN_STEPS {
        if relative_luminance(current) <= target {
            break;
        }
        current = current.darken(factor);
        factor = (factor - DARKEN_STEP).max(DARKEN_FLOOR);
    }
    current
}

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
