//! SVG preview of a composed meme frame.
//!
//! Renders a command list to a single annotated SVG panel: surface outline,
//! background fill, the fitted-image rectangle, and caption text at its
//! computed anchors. A debug aid for eyeballing layout decisions without a
//! drawing surface.
//!
//! # Example
//!
//! ```
//! use memelayout::{Meme, svg::render_preview_svg};
//!
//! let commands = Meme::new(400.0, 400.0)
//!     .image(800.0, 400.0)
//!     .top_text("TOP")
//!     .compose()
//!     .unwrap();
//!
//! let svg = render_preview_svg(400.0, 400.0, &commands);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::caption::Color;
use crate::plan::Command;

/// Maximum pixel width of the preview panel.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height of the preview panel.
const MAX_PANEL_H: f64 = 300.0;
/// Margin around the panel.
const MARGIN: f64 = 30.0;
/// Height of the label text area above the panel.
const LABEL_H: f64 = 22.0;

/// Render a composed command list as a standalone SVG document.
///
/// `surface_width` / `surface_height` are the surface the commands were
/// composed for; the panel is scaled to fit the preview while preserving
/// the surface's aspect ratio.
pub fn render_preview_svg(surface_width: f64, surface_height: f64, commands: &[Command]) -> String {
    let (panel_w, panel_h, scale) = scale_to_fit(surface_width, surface_height);
    let total_w = panel_w + 2.0 * MARGIN;
    let total_h = panel_h + 2.0 * MARGIN + LABEL_H;
    let panel_x = MARGIN;
    let panel_y = MARGIN + LABEL_H;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .surface { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .image { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .caption { font-weight: bold; }
</style>
"##,
    );

    // Label
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">Meme  {}×{}</text>"#,
        total_w / 2.0,
        MARGIN - 6.0,
        surface_width,
        surface_height
    ));
    svg.push('\n');

    // Surface outline
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="surface" rx="2"/>"#,
        panel_x, panel_y, panel_w, panel_h
    ));
    svg.push('\n');

    for command in commands {
        match command {
            Command::Clear => {}
            Command::Fill(color) => {
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                    panel_x,
                    panel_y,
                    panel_w,
                    panel_h,
                    css_color(color)
                ));
                svg.push('\n');
            }
            Command::DrawImage(p) => {
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="image" rx="1"/>"#,
                    panel_x + p.start_x * scale,
                    panel_y + p.start_y * scale,
                    p.width * scale,
                    p.height * scale
                ));
                svg.push('\n');
            }
            Command::DrawCaption {
                anchor,
                text,
                style,
                ..
            } => {
                svg.push_str(&format!(
                    r#"<text x="{:.1}" y="{:.1}" class="caption" text-anchor="middle" font-size="{:.1}" fill="{}">{}</text>"#,
                    panel_x + anchor.x * scale,
                    panel_y + anchor.y * scale,
                    style.font_px * scale,
                    css_color(&style.fill),
                    escape_xml(text)
                ));
                svg.push('\n');
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Scale surface dimensions to fit within the panel bounds, preserving
/// aspect ratio. Returns (panel width, panel height, scale factor).
fn scale_to_fit(w: f64, h: f64) -> (f64, f64, f64) {
    if w <= 0.0 || h <= 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// CSS rgba() for a fill color.
fn css_color(c: &Color) -> String {
    format!("rgba({},{},{},{:.3})", c.r, c.g, c.b, c.a as f64 / 255.0)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
