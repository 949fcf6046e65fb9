//! SVG visualization of a [`Resize`].
//!
//! Draws a vertical sequence of annotated panels: the source with the
//! sampled region highlighted, the scaled size, and the target canvas with
//! the placed result.
//!
//! # Example
//!
//! ```
//! use zenmetrics::{Size, SizeMetrics, UpsizePolicy, svg::render_resize_svg};
//!
//! let resize = SizeMetrics::new(1600.0, 900.0)
//!     .cover(400, 400, "center", UpsizePolicy::Allow)
//!     .unwrap();
//!
//! let svg = render_resize_svg(&resize, Some(Size::new(400.0, 400.0)));
//! assert!(svg.starts_with("<svg"));
//! ```

use core::fmt::Write;

use crate::geometry::{Rect, Size};
use crate::resize::Resize;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
const MARGIN_X: f64 = 50.0;
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

/// One panel of the drawing.
struct Panel {
    label: String,
    outer: Size,
    /// Highlighted region in `outer` coordinates. `None` fills the panel.
    inner: Option<Rect>,
    annotation: String,
}

/// Render a complete SVG document for `resize`.
///
/// `canvas` is the requested output size. Without it the canvas is the
/// smallest box at the origin that holds the normalized target.
pub fn render_resize_svg(resize: &Resize, canvas: Option<Size>) -> String {
    let canvas = canvas.unwrap_or_else(|| Size::new(resize.to_rect.right(), resize.to_rect.bottom()));
    render_panels(&build_panels(resize, canvas))
}

fn build_panels(resize: &Resize, canvas: Size) -> Vec<Panel> {
    let source = resize.from_rect_input;
    let from = resize.from_rect;
    let to = resize.to_rect;
    let scaled = resize.to_rect_input.size();

    let mut panels = Vec::with_capacity(3);

    panels.push(Panel {
        label: format!("Source  {}", dims(source.size())),
        outer: source.size(),
        inner: (from != source).then_some(from.move_by(-source.x, -source.y)),
        annotation: if from != source {
            format!("sample {} at ({}, {})", dims(from.size()), from.x, from.y)
        } else {
            String::new()
        },
    });

    panels.push(Panel {
        label: format!("Scale  {}", dims(scaled)),
        outer: scaled,
        inner: None,
        annotation: format!(
            "x{:.3} y{:.3}{}",
            resize.scale_x(),
            resize.scale_y(),
            if resize.upsized { ", upsized" } else { "" }
        ),
    });

    panels.push(Panel {
        label: format!("Canvas  {}", dims(canvas)),
        outer: canvas,
        inner: Some(to),
        annotation: format!("place {} at ({}, {})", dims(to.size()), to.x, to.y),
    });

    panels
}

fn dims(size: Size) -> String {
    format!("{}×{}", size.width, size.height)
}

/// Scale a size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    let Size { width: w, height: h } = size;
    if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn render_panels(panels: &[Panel]) -> String {
    let count = panels.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + count * (LABEL_H + MAX_PANEL_H) + (count - 1.0).max(0.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);

    // `write!` into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    );

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; marker-end: url(#arrowhead); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .inner { fill: #3a72a4; stroke: #5a9fd4; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
<defs>
  <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
</defs>
"##,
    );

    let center_x = total_w / 2.0;
    let mut y = MARGIN_TOP;

    for (i, panel) in panels.iter().enumerate() {
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        );
        y += LABEL_H;

        let (sw, sh, scale) = scale_to_fit(panel.outer);
        let panel_x = center_x - sw / 2.0;
        let panel_y = y;

        let _ = writeln!(
            svg,
            r#"<rect x="{panel_x:.1}" y="{panel_y:.1}" width="{sw:.1}" height="{sh:.1}" class="outer" rx="2"/>"#
        );

        let inner = panel.inner.map_or(Rect::new(0.0, 0.0, sw, sh), |r| {
            Rect::new(r.x * scale, r.y * scale, r.width * scale, r.height * scale)
        });
        let _ = writeln!(
            svg,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner" rx="1"/>"#,
            panel_x + inner.x,
            panel_y + inner.y,
            inner.width,
            inner.height
        );

        if !panel.annotation.is_empty() {
            let _ = writeln!(
                svg,
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                panel_y + sh + 14.0,
                escape_xml(&panel.annotation)
            );
        }

        y += MAX_PANEL_H;

        if i + 1 < panels.len() {
            let _ = writeln!(
                svg,
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="arrow"/>"#,
                center_x,
                y + 8.0,
                center_x,
                y + PANEL_GAP - 8.0
            );
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{SizeMetrics, UpsizePolicy};

    #[test]
    fn svg_contain_shows_all_panels() {
        let resize = SizeMetrics::new(200.0, 100.0)
            .contain(50, 50, "center", UpsizePolicy::Allow)
            .unwrap();
        let svg = render_resize_svg(&resize, Some(Size::new(50.0, 50.0)));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("Source  200×100"));
        assert!(svg.contains("Scale  50×25"));
        assert!(svg.contains("Canvas  50×50"));
        assert!(svg.contains("place 50×25 at (0, 12.5)"));
        assert_eq!(svg.matches(r#"class="arrow""#).count(), 2);
    }

    #[test]
    fn svg_cover_highlights_sampled_region() {
        let resize = SizeMetrics::new(150.0, 100.0)
            .cover(50, 50, "center", UpsizePolicy::Allow)
            .unwrap();
        let svg = render_resize_svg(&resize, Some(Size::new(50.0, 50.0)));
        assert!(svg.contains("sample 125×100 at (25, 0)"));
        assert!(svg.contains("x0.500 y0.500"));
        assert!(!svg.contains("upsized"));
    }

    #[test]
    fn svg_marks_upsized() {
        let resize = SizeMetrics::new(200.0, 100.0)
            .contain(500, 500, "center", UpsizePolicy::Allow)
            .unwrap();
        let svg = render_resize_svg(&resize, None);
        assert!(svg.contains(", upsized"));
        assert!(svg.contains("Canvas  500×375"));
    }

    #[test]
    fn svg_degenerate_sizes_do_not_panic() {
        let resize = Resize::new(
            Rect::new(0.0, 0.0, 0.0, 0.0),
            Rect::new(0.0, 0.0, 0.0, 0.0),
        );
        let svg = render_resize_svg(&resize, None);
        assert!(svg.contains("Canvas  0×0"));
    }

    #[test]
    fn escapes_text() {
        assert_eq!(escape_xml("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
