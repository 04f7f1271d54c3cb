// SPDX-License-Identifier: MIT
//
// SVG document emission — Scene in, markup out.
//
// Every frame is a full document: a viewBox sized to the circle, a
// rotated group holding the wedges and labels in paint order. The
// group rotation mirrors how the spin animates — the wheel turns as a
// whole; individual sector coordinates never change between frames.

use std::fmt::Write as _;

use wheel_core::geometry::{DrawCommand, Label, Scene, Wedge};

/// Sector outline color.
const STROKE: &str = "#fff";

/// Sector outline width in px.
const STROKE_WIDTH: f64 = 1.0;

/// Label text color — the contrast pass guarantees this reads on every
/// fill.
const LABEL_FILL: &str = "#fff";

/// Label font stack and weight.
const FONT_FAMILY: &str = "Outfit, sans-serif";
const FONT_WEIGHT: u32 = 700;

/// Render a scene as a standalone SVG document.
///
/// `width` and `height` size the viewBox; the caller is responsible
/// for picking a box that contains the scene's circle.
#[must_use]
pub fn render_document(scene: &Scene, width: f64, height: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        fmt_num(width),
        fmt_num(height),
    );

    if !scene.commands.is_empty() {
        let _ = writeln!(
            out,
            r#"  <g transform="rotate({} {} {})">"#,
            fmt_num(scene.rotation_deg),
            fmt_num(scene.circle.cx),
            fmt_num(scene.circle.cy),
        );
        for command in &scene.commands {
            match command {
                DrawCommand::Wedge(wedge) => write_wedge(&mut out, scene, wedge),
                DrawCommand::Label(label) => write_label(&mut out, label),
            }
        }
        let _ = writeln!(out, "  </g>");
    }

    out.push_str("</svg>\n");
    out
}

fn write_wedge(out: &mut String, scene: &Scene, wedge: &Wedge) {
    let large = u8::from(wedge.large_arc);
    let _ = writeln!(
        out,
        r#"    <path d="M {cx},{cy} L {x1},{y1} A {r},{r} 0 {large},1 {x2},{y2} Z" fill="{fill}" stroke="{STROKE}" stroke-width="{sw}"/>"#,
        cx = fmt_num(scene.circle.cx),
        cy = fmt_num(scene.circle.cy),
        x1 = fmt_num(wedge.x1),
        y1 = fmt_num(wedge.y1),
        r = fmt_num(wedge.radius),
        x2 = fmt_num(wedge.x2),
        y2 = fmt_num(wedge.y2),
        fill = wedge.fill.to_hex(),
        sw = fmt_num(STROKE_WIDTH),
    );
}

fn write_label(out: &mut String, label: &Label) {
    if label.lines.is_empty() {
        return;
    }
    let x = fmt_num(label.x);
    let y = fmt_num(label.y);
    let _ = writeln!(
        out,
        r#"    <text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" font-size="{size}" fill="{LABEL_FILL}" font-family="{FONT_FAMILY}" font-weight="{FONT_WEIGHT}" transform="rotate({rot}, {x}, {y})">"#,
        size = fmt_num(label.font_px),
        rot = fmt_num(label.rotate_deg),
    );
    for (i, line) in label.lines.iter().enumerate() {
        let dy = if i == 0 {
            label.first_dy()
        } else {
            label.line_height
        };
        let _ = writeln!(
            out,
            r#"      <tspan x="{x}" dy="{dy}">{text}</tspan>"#,
            dy = fmt_num(dy),
            text = escape_text(line),
        );
    }
    let _ = writeln!(out, "    </text>");
}

/// Format a coordinate: round to two decimals, trim a trailing ".00".
fn fmt_num(v: f64) -> String {
    // Adding 0.0 folds -0.0 into 0.0 before formatting.
    let rounded = (v * 100.0).round() / 100.0 + 0.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

/// Escape text content for XML.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
