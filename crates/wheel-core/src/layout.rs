//! Label layout — greedy pixel-width word wrapping.
//!
//! Sector labels render in a fixed bold font inside a width budget that
//! the geometry derives from the sector's chord. The wrapper is pure:
//! actual pixel widths come from the injected [`TextMeasure`] port, so
//! the algorithm runs identically against real font metrics and against
//! a fixed-width fake in tests.
//!
//! The shape of the output is bounded on both axes:
//!
//! - at most [`MAX_LABEL_LINES`] lines — overflow beyond the first two
//!   lines is gathered into a final line and ellipsis-truncated
//! - no line wider than the budget, except the unavoidable minimum of a
//!   single grapheme plus the ellipsis when even that overflows

use unicode_segmentation::UnicodeSegmentation;

/// Labels never exceed this many lines.
pub const MAX_LABEL_LINES: usize = 3;

/// The truncation mark appended to words that had to be cut.
pub const ELLIPSIS: char = '…';

/// Pixel-width measurement capability.
///
/// Implemented by the rendering backend (a font metrics table, a canvas
/// context, a shaping engine). Defined here so the core depends on the
/// capability, not on any backend crate.
pub trait TextMeasure {
    /// Width in pixels of `text` set in the label font at `font_px`.
    fn text_width(&self, text: &str, font_px: f64) -> f64;
}

/// A wrapped label: the lines to stack, and the font they were measured
/// at (carried along so the renderer and the wrapper can never disagree).
#[derive(Debug, Clone, PartialEq)]
pub struct Wrapped {
    /// At most [`MAX_LABEL_LINES`] lines, in stacking order.
    pub lines: Vec<String>,
    /// Font size the measurements were taken at.
    pub font_px: f64,
}

/// Greedily wrap `text` into lines no wider than `max_width_px`.
///
/// Words accumulate onto the current line while the measured width
/// stays within budget. A word that cannot fit even on a line of its
/// own is cut grapheme by grapheme and marked with an ellipsis. If
/// wrapping produces more than three lines, the first two are kept
/// verbatim and everything else is joined into a final truncated line.
#[must_use]
pub fn wrap(measure: &dyn TextMeasure, text: &str, max_width_px: f64, font_px: f64) -> Wrapped {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in &words {
        let tentative = if current.is_empty() {
            (*word).to_string()
        } else {
            format!("{current} {word}")
        };
        if measure.text_width(&tentative, font_px) <= max_width_px {
            current = tentative;
            continue;
        }

        if current.is_empty() {
            // A word alone on its line and still too wide: cut it.
            lines.push(truncate_with_ellipsis(measure, word, max_width_px, font_px));
        } else {
            lines.push(std::mem::take(&mut current));
            if measure.text_width(word, font_px) <= max_width_px {
                current = (*word).to_string();
            } else {
                lines.push(truncate_with_ellipsis(measure, word, max_width_px, font_px));
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > MAX_LABEL_LINES {
        // Keep two lines verbatim, gather the rest into one.
        let tail = lines.split_off(MAX_LABEL_LINES - 1).join(" ");
        if measure.text_width(&tail, font_px) <= max_width_px {
            lines.push(tail);
        } else {
            lines.push(truncate_with_ellipsis(measure, &tail, max_width_px, font_px));
        }
    }

    Wrapped { lines, font_px }
}

/// Cut `text` grapheme by grapheme until `text…` fits, down to a single
/// grapheme. Always terminates, always returns at least one grapheme
/// plus the ellipsis.
fn truncate_with_ellipsis(
    measure: &dyn TextMeasure,
    text: &str,
    max_width_px: f64,
    font_px: f64,
) -> String {
    let mut graphemes: Vec<&str> = text.graphemes(true).collect();
    while graphemes.len() > 1 {
        let candidate = format!("{}{ELLIPSIS}", graphemes.concat());
        if measure.text_width(&candidate, font_px) <= max_width_px {
            break;
        }
        graphemes.pop();
    }
    format!("{}{ELLIPSIS}", graphemes.concat())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
