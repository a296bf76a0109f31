#![forbid(unsafe_code)]

use std::fmt::Write;

/// Minimal SVG document builder for the badge compositions.
pub struct SvgDoc {
    width: u32,
    height: u32,
    body: String,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;")
}

impl SvgDoc {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#
        );
    }

    pub fn circle_outline(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, stroke_width: f64) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}"/>"#
        );
    }

    pub fn polygon(&mut self, points: &[(f64, f64)], fill: &str) {
        let coords = points
            .iter()
            .map(|(x, y)| format!("{x:.2},{y:.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(self.body, r#"  <polygon points="{coords}" fill="{fill}"/>"#);
    }

    /// Centered text, baseline through the anchor point.
    pub fn text(&mut self, x: f64, y: f64, size: f64, family: &str, fill: &str, content: &str) {
        let _ = writeln!(
            self.body,
            r#"  <text x="{x}" y="{y}" font-family="{family}" font-size="{size}" font-weight="bold" fill="{fill}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            escape(content)
        );
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_wraps_shapes_in_an_svg_root() {
        let mut doc = SvgDoc::new(200, 200);
        doc.circle(100.0, 100.0, 70.0, "#0b162a");
        doc.text(100.0, 100.0, 56.0, "Arial", "#ffffff", "B");
        let svg = doc.finish();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"r="70" fill="#0b162a""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut doc = SvgDoc::new(10, 10);
        doc.text(5.0, 5.0, 4.0, "serif", "#000000", "A & B < C");
        assert!(doc.finish().contains("A &amp; B &lt; C"));
    }
}
