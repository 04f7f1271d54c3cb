// SPDX-License-Identifier: MIT
//
// Font metrics — the TextMeasure implementation behind label layout.
//
// Widths come from a per-character advance table for the bold
// geometric sans the wheel renders labels in, expressed in thousandths
// of an em and scaled by the font size. Characters outside the table
// fall back on their terminal display width: wide (CJK, emoji) counts
// as a full em, everything else as the average lowercase advance. The
// goal is layout that matches the rendered glyphs closely enough for
// wrapping decisions, not shaping-grade precision.

use unicode_width::UnicodeWidthChar;
use wheel_core::TextMeasure;

/// Advance widths for ASCII 0x20..=0x7E, in thousandths of an em.
const ASCII_ADVANCE: [u16; 95] = [
    260, // space
    280, // !
    420, // "
    640, // #
    580, // $
    830, // %
    700, // &
    240, // '
    340, // (
    340, // )
    440, // *
    580, // +
    260, // ,
    380, // -
    260, // .
    400, // /
    580, 580, 580, 580, 580, 580, 580, 580, 580, 580, // 0-9
    280, // :
    280, // ;
    580, // <
    580, // =
    580, // >
    520, // ?
    860, // @
    660, 640, 680, 700, 580, 560, 720, 720, 280, 540, // A-J
    640, 520, 860, 720, 740, 620, 740, 640, 600, 600, // K-T
    700, 640, 920, 620, 600, 600, // U-Z
    340, // [
    400, // \
    340, // ]
    560, // ^
    500, // _
    300, // `
    560, 600, 540, 600, 570, 360, 600, 600, 260, 260, // a-j
    560, 260, 880, 600, 590, 600, 600, 400, 500, 380, // k-t
    600, 540, 800, 540, 540, 480, // u-z
    340, // {
    260, // |
    340, // }
    580, // ~
];

/// Ellipsis advance — the one non-ASCII character the wheel emits
/// itself.
const ELLIPSIS_ADVANCE: u16 = 700;

/// Fallback advance for narrow characters outside the table.
const NARROW_ADVANCE: u16 = 600;

/// Metrics for the wheel's bold label face.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontMetrics;

impl FontMetrics {
    /// Metrics for the bundled bold sans.
    #[must_use]
    pub const fn bold_sans() -> Self {
        Self
    }

    /// Advance of one character in thousandths of an em.
    fn char_advance(ch: char) -> u16 {
        if let Some(index) = (ch as usize).checked_sub(0x20) {
            if let Some(&advance) = ASCII_ADVANCE.get(index) {
                return advance;
            }
        }
        if ch == '…' {
            return ELLIPSIS_ADVANCE;
        }
        match ch.width() {
            Some(2) => 1000,
            Some(1) => NARROW_ADVANCE,
            // Combining marks and control characters take no space.
            _ => 0,
        }
    }
}

impl TextMeasure for FontMetrics {
    fn text_width(&self, text: &str, font_px: f64) -> f64 {
        let thousandths: u32 = text.chars().map(|ch| u32::from(Self::char_advance(ch))).sum();
        f64::from(thousandths) * font_px / 1000.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
