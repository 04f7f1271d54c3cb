//! Sector geometry — from an item list to a renderable scene.
//!
//! The wheel is a fixed circle cut into N equal sectors. Sector 0
//! starts at the 12 o'clock position and sectors proceed clockwise, so
//! sector `i` spans
//!
//! ```text
//! start = 2π·i/N − π/2        end = 2π·(i+1)/N − π/2
//! ```
//!
//! in screen coordinates (y grows downward, angles grow clockwise).
//! Together the N sectors partition `[−π/2, 3π/2)` exactly.
//!
//! Projection is pure: `(items, circle, rotation, measurer)` in,
//! [`Scene`] out. The scene carries the wheel rotation and an ordered
//! list of draw commands — a filled wedge and a rotated multi-line
//! label per sector — that any backend can serialize. No backend types
//! appear here; the scene is the boundary.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use wheel_palette::Color;

use crate::layout::{self, TextMeasure};
use crate::store::Item;

/// Label font size before any fitting.
pub const BASE_FONT_PX: f64 = 26.0;

/// Labels sit at this fraction of the outer radius.
pub const LABEL_RADIUS_RATIO: f64 = 0.6;

/// Breathing room subtracted from the sector chord when budgeting
/// label width.
pub const LABEL_MARGIN_PX: f64 = 22.0;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.15;

// ---------------------------------------------------------------------------
// Circle
// ---------------------------------------------------------------------------

/// The wheel's circle in render-target coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Outer radius.
    pub radius: f64,
}

impl Circle {
    /// Create a circle.
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }
}

impl Default for Circle {
    /// The classic 800×800 canvas with the wheel filling it.
    fn default() -> Self {
        Self::new(400.0, 400.0, 400.0)
    }
}

// ---------------------------------------------------------------------------
// Sector angles
// ---------------------------------------------------------------------------

/// Start and end angle in radians for sector `i` of `n`.
///
/// # Panics
///
/// Panics if `i >= n` or `n == 0` — callers iterate `0..n`.
#[must_use]
pub fn sector_angles(n: usize, i: usize) -> (f64, f64) {
    assert!(n > 0 && i < n, "sector {i} of {n}");
    #[allow(clippy::cast_precision_loss)]
    let (i, n) = (i as f64, n as f64);
    let start = TAU * i / n - FRAC_PI_2;
    let end = TAU * (i + 1.0) / n - FRAC_PI_2;
    (start, end)
}

// ---------------------------------------------------------------------------
// Draw commands
// ---------------------------------------------------------------------------

/// A filled pie wedge: center, two arc endpoints on the outer radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    /// Arc start point.
    pub x1: f64,
    /// Arc start point.
    pub y1: f64,
    /// Arc end point.
    pub x2: f64,
    /// Arc end point.
    pub y2: f64,
    /// Arc radius (the circle's outer radius).
    pub radius: f64,
    /// True when the swept angle exceeds π — only possible for a
    /// single-sector wheel, where the wedge is nearly the full disc.
    pub large_arc: bool,
    /// Fill color (already label-safe).
    pub fill: Color,
}

/// A radially oriented label block, vertically centered on its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Anchor x (on the label radius, at the sector mid-angle).
    pub x: f64,
    /// Anchor y.
    pub y: f64,
    /// Rotation around the anchor, in degrees, keeping the text radial.
    pub rotate_deg: f64,
    /// Font size after fitting.
    pub font_px: f64,
    /// Vertical advance between lines.
    pub line_height: f64,
    /// The wrapped lines, stacking downward.
    pub lines: Vec<String>,
}

impl Label {
    /// Vertical offset of the first line relative to the anchor: the
    /// block is centered, so the first line rises by half the block
    /// height and later lines each advance by [`Self::line_height`].
    #[must_use]
    pub fn first_dy(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let extra_lines = self.lines.len().saturating_sub(1) as f64;
        -(self.line_height * extra_lines) / 2.0
    }
}

/// One renderable primitive. Wedges come before their labels so a
/// painter's-algorithm backend can just run the list in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled sector wedge.
    Wedge(Wedge),
    /// A sector label.
    Label(Label),
}

/// The full frame: wheel rotation plus ordered primitives.
///
/// The rotation applies to the whole wheel around the circle center —
/// backends rotate the group rather than every point, mirroring how the
/// spin animation works.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Wheel rotation in degrees (unbounded; accumulates over spins).
    pub rotation_deg: f64,
    /// Center of rotation, the circle center.
    pub circle: Circle,
    /// Primitives in paint order. Empty when the wheel has no items.
    pub commands: Vec<DrawCommand>,
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Project items onto a circle, producing the scene for one frame.
///
/// Pure: same inputs, same scene. An empty item list produces an empty
/// command list (nothing to draw, nothing to spin for).
#[must_use]
pub fn project(
    items: &[Item],
    circle: Circle,
    rotation_deg: f64,
    measure: &dyn TextMeasure,
) -> Scene {
    let n = items.len();
    let mut commands = Vec::with_capacity(n * 2);

    for (i, item) in items.iter().enumerate() {
        let (start, end) = sector_angles(n, i);

        commands.push(DrawCommand::Wedge(Wedge {
            x1: circle.cx + circle.radius * start.cos(),
            y1: circle.cy + circle.radius * start.sin(),
            x2: circle.cx + circle.radius * end.cos(),
            y2: circle.cy + circle.radius * end.sin(),
            radius: circle.radius,
            large_arc: (end - start) > PI,
            fill: item.color,
        }));

        commands.push(DrawCommand::Label(label_for(
            &item.text, circle, n, start, end, measure,
        )));
    }

    Scene {
        rotation_deg,
        circle,
        commands,
    }
}

/// Place and wrap one sector label.
///
/// The label anchors at the sector mid-angle on the label radius. Its
/// width budget is the sector chord at that radius minus a margin —
/// for very thin sectors the chord can dip below the margin, in which
/// case the budget bottoms out at zero and wrapping degrades to
/// single-grapheme ellipsis lines.
fn label_for(
    text: &str,
    circle: Circle,
    n: usize,
    start: f64,
    end: f64,
    measure: &dyn TextMeasure,
) -> Label {
    let mid = (start + end) / 2.0;
    let label_radius = circle.radius * LABEL_RADIUS_RATIO;

    #[allow(clippy::cast_precision_loss)]
    let arc_angle = TAU / n as f64;
    let chord = 2.0 * label_radius * (arc_angle / 2.0).sin();
    let max_width = (chord - LABEL_MARGIN_PX).max(0.0);

    let wrapped = layout::wrap(measure, text, max_width, BASE_FONT_PX);

    Label {
        x: circle.cx + label_radius * mid.cos(),
        y: circle.cy + label_radius * mid.sin(),
        rotate_deg: mid.to_degrees() + 90.0,
        font_px: wrapped.font_px,
        line_height: wrapped.font_px * LINE_HEIGHT_RATIO,
        lines: wrapped.lines,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct MonoMeasure;

    impl TextMeasure for MonoMeasure {
        fn text_width(&self, text: &str, _font_px: f64) -> f64 {
            #[allow(clippy::cast_precision_loss)]
            let count = text.chars().count() as f64;
            count * 10.0
        }
    }

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                text: format!("Option {}", i + 1),
                color: Color::rgb(10, 20, 30),
            })
            .collect()
    }

    // ── Sector angles ───────────────────────────────────────────────

    #[test]
    fn sectors_partition_the_full_turn() {
        for n in 1..=12 {
            let mut total = 0.0;
            for i in 0..n {
                let (start, end) = sector_angles(n, i);
                assert!(end > start, "empty sector {i} of {n}");
                total += end - start;
                // Adjacent sectors share a boundary exactly.
                if i > 0 {
                    let (_, prev_end) = sector_angles(n, i - 1);
                    assert!((start - prev_end).abs() < 1e-12, "gap at {i} of {n}");
                }
            }
            assert!((total - TAU).abs() < 1e-9, "N={n} covers {total}");
        }
    }

    #[test]
    fn sector_zero_starts_at_twelve_oclock() {
        for n in [1, 2, 5, 8] {
            let (start, _) = sector_angles(n, 0);
            assert!((start - (-FRAC_PI_2)).abs() < 1e-12);
        }
    }

    #[test]
    fn last_sector_ends_where_the_wheel_wraps() {
        let (_, end) = sector_angles(5, 4);
        assert!((end - (TAU - FRAC_PI_2)).abs() < 1e-9);
    }

    #[test]
    fn equal_sectors_for_five_items() {
        let (start, end) = sector_angles(5, 1);
        assert!((end - start - TAU / 5.0).abs() < 1e-12);
    }

    // ── Wedges ──────────────────────────────────────────────────────

    #[test]
    fn large_arc_only_for_a_single_sector() {
        let circle = Circle::default();
        let single = project(&items(1), circle, 0.0, &MonoMeasure);
        let DrawCommand::Wedge(w) = &single.commands[0] else {
            panic!("expected wedge first");
        };
        assert!(w.large_arc);

        for n in 2..=10 {
            let scene = project(&items(n), circle, 0.0, &MonoMeasure);
            for cmd in &scene.commands {
                if let DrawCommand::Wedge(w) = cmd {
                    assert!(!w.large_arc, "large arc at N={n}");
                }
            }
        }
    }

    #[test]
    fn wedge_endpoints_sit_on_the_circle() {
        let circle = Circle::new(400.0, 400.0, 400.0);
        let scene = project(&items(4), circle, 0.0, &MonoMeasure);
        for cmd in &scene.commands {
            if let DrawCommand::Wedge(w) = cmd {
                let d1 = (w.x1 - circle.cx).hypot(w.y1 - circle.cy);
                let d2 = (w.x2 - circle.cx).hypot(w.y2 - circle.cy);
                assert!((d1 - 400.0).abs() < 1e-9);
                assert!((d2 - 400.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn four_sector_wedges_hit_the_compass_points() {
        let circle = Circle::new(400.0, 400.0, 400.0);
        let scene = project(&items(4), circle, 0.0, &MonoMeasure);
        let DrawCommand::Wedge(w) = &scene.commands[0] else {
            panic!("expected wedge first");
        };
        // Sector 0 runs from 12 o'clock to 3 o'clock.
        assert!((w.x1 - 400.0).abs() < 1e-9 && (w.y1 - 0.0).abs() < 1e-9);
        assert!((w.x2 - 800.0).abs() < 1e-9 && (w.y2 - 400.0).abs() < 1e-9);
    }

    // ── Labels ──────────────────────────────────────────────────────

    #[test]
    fn label_sits_on_the_label_radius() {
        let circle = Circle::new(400.0, 400.0, 400.0);
        let scene = project(&items(5), circle, 0.0, &MonoMeasure);
        for cmd in &scene.commands {
            if let DrawCommand::Label(label) = cmd {
                let d = (label.x - circle.cx).hypot(label.y - circle.cy);
                assert!((d - 240.0).abs() < 1e-9, "label at distance {d}");
            }
        }
    }

    #[test]
    fn label_rotation_is_radial() {
        let circle = Circle::default();
        let scene = project(&items(4), circle, 0.0, &MonoMeasure);
        let DrawCommand::Label(label) = &scene.commands[1] else {
            panic!("expected label second");
        };
        // Sector 0 of 4: mid-angle −45°, so the text rotates to 45°.
        assert!((label.rotate_deg - 45.0).abs() < 1e-9);
    }

    #[test]
    fn label_line_height_tracks_the_font() {
        let circle = Circle::default();
        let scene = project(&items(3), circle, 0.0, &MonoMeasure);
        for cmd in &scene.commands {
            if let DrawCommand::Label(label) = cmd {
                assert!((label.line_height - label.font_px * LINE_HEIGHT_RATIO).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn first_dy_centers_the_block() {
        let label = Label {
            x: 0.0,
            y: 0.0,
            rotate_deg: 0.0,
            font_px: 26.0,
            line_height: 29.9,
            lines: vec!["a".into(), "b".into(), "c".into()],
        };
        // Three lines: two advances of 29.9, block centered.
        assert!((label.first_dy() - (-29.9)).abs() < 1e-9);

        let single = Label {
            lines: vec!["a".into()],
            ..label
        };
        assert!(single.first_dy().abs() < f64::EPSILON);
    }

    #[test]
    fn thin_sectors_clamp_the_width_budget() {
        // 60 sectors at radius 100: the chord drops under the margin;
        // labels must still come out, just heavily truncated.
        let circle = Circle::new(100.0, 100.0, 100.0);
        let scene = project(&items(60), circle, 0.0, &MonoMeasure);
        assert_eq!(scene.commands.len(), 120);
    }

    // ── Scene ───────────────────────────────────────────────────────

    #[test]
    fn empty_wheel_projects_nothing() {
        let scene = project(&[], Circle::default(), 123.0, &MonoMeasure);
        assert!(scene.commands.is_empty());
        assert!((scene.rotation_deg - 123.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scene_has_a_wedge_and_label_per_item() {
        let scene = project(&items(5), Circle::default(), 0.0, &MonoMeasure);
        let wedges = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Wedge(_)))
            .count();
        let labels = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Label(_)))
            .count();
        assert_eq!((wedges, labels), (5, 5));
    }

    #[test]
    fn projection_is_pure() {
        let list = items(5);
        let a = project(&list, Circle::default(), 42.0, &MonoMeasure);
        let b = project(&list, Circle::default(), 42.0, &MonoMeasure);
        assert_eq!(a, b);
    }
}
