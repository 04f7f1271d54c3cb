//! Curated color sets and the cursor that hands them out.
//!
//! Two fixed sets feed the wheel: a small base set for the starter
//! sectors and a larger extended set for everything added afterwards.
//! Both are shuffled before use so two wheels rarely look alike, and
//! every color goes through the contrast pass on the way out — the rest
//! of the system never sees a label-unsafe color.
//!
//! Exhaustion is expected: once the extended sequence runs dry the set
//! is reshuffled and the cursor starts over. Colors are best-effort
//! distinct, never globally unique.

use crate::color::Color;
use crate::contrast::{LABEL_LUMINANCE, ensure_contrast};
use crate::rng::Xorshift32;

/// The starter sectors draw from this set, one color each.
pub const BASE_COLORS: [Color; 5] = [
    Color::rgb(0x00, 0xB4, 0xD8), // cerulean
    Color::rgb(0x52, 0xB7, 0x88), // jade
    Color::rgb(0xFF, 0xD2, 0x3F), // sunflower
    Color::rgb(0xFF, 0x9F, 0x1C), // tangerine
    Color::rgb(0xE6, 0x39, 0x46), // crimson
];

/// Superset for sectors added beyond the starter five.
pub const EXTENDED_COLORS: [Color; 15] = [
    Color::rgb(0x72, 0x09, 0xB7), // violet
    Color::rgb(0xF7, 0x25, 0x85), // magenta
    Color::rgb(0x06, 0xFF, 0xA5), // neon green
    Color::rgb(0xFF, 0x6B, 0x6B), // coral
    Color::rgb(0x4E, 0xCD, 0xC4), // turquoise
    Color::rgb(0x45, 0xB7, 0xD1), // sky
    Color::rgb(0x96, 0xCE, 0xB4), // mint
    Color::rgb(0xFF, 0xEA, 0xA7), // pale yellow
    Color::rgb(0xDD, 0xA0, 0xDD), // plum
    Color::rgb(0x98, 0xD8, 0xC8), // seafoam
    Color::rgb(0xF7, 0xDC, 0x6F), // gold
    Color::rgb(0xBB, 0x8F, 0xCE), // lavender
    Color::rgb(0x85, 0xC1, 0xE9), // powder blue
    Color::rgb(0xF8, 0xC4, 0x71), // apricot
    Color::rgb(0x82, 0xE0, 0xAA), // lime
];

/// Shuffle the base set and contrast-adjust every color.
#[must_use]
pub fn generate_base(rng: &mut Xorshift32) -> Vec<Color> {
    shuffled_label_safe(&BASE_COLORS, rng)
}

/// Shuffle the extended superset and contrast-adjust every color.
#[must_use]
pub fn generate_extended(rng: &mut Xorshift32) -> Vec<Color> {
    shuffled_label_safe(&EXTENDED_COLORS, rng)
}

fn shuffled_label_safe(set: &[Color], rng: &mut Xorshift32) -> Vec<Color> {
    let mut colors = set.to_vec();
    rng.shuffle(&mut colors);
    for color in &mut colors {
        *color = ensure_contrast(*color, LABEL_LUMINANCE);
    }
    colors
}

// ---------------------------------------------------------------------------
// PaletteCursor
// ---------------------------------------------------------------------------

/// Explicit palette state: a shuffled extended sequence, a cursor into
/// it, and the generator that reshuffles on exhaustion.
///
/// The cursor owns its [`Xorshift32`] so callers thread one value
/// around instead of sharing a hidden used-colors set.
#[derive(Debug, Clone)]
pub struct PaletteCursor {
    colors: Vec<Color>,
    next: usize,
    rng: Xorshift32,
}

impl PaletteCursor {
    /// Create a cursor over a freshly shuffled extended palette.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self::from_rng(Xorshift32::new(seed))
    }

    /// Create a cursor from an already-running generator, preserving
    /// its stream position.
    #[must_use]
    pub fn from_rng(mut rng: Xorshift32) -> Self {
        let colors = generate_extended(&mut rng);
        Self {
            colors,
            next: 0,
            rng,
        }
    }

    /// Hand out the next color, reshuffling the set when it runs dry.
    pub fn next_color(&mut self) -> Color {
        if self.next >= self.colors.len() {
            self.colors = generate_extended(&mut self.rng);
            self.next = 0;
        }
        let color = self.colors[self.next];
        self.next += 1;
        color
    }

    /// How many colors remain before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.colors.len() - self.next
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
