//! SVG drawing surface for the analog face.
//!
//! The CLI's equivalent of a fixed-size canvas: collects the primitives the
//! renderer issues and serializes them into a standalone SVG document.

use super::face::Canvas;

pub struct SvgCanvas {
    size: f64,
    elements: Vec<String>,
}

impl SvgCanvas {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            elements: Vec::new(),
        }
    }

    /// Consume the canvas and produce the SVG document.
    pub fn finish(self) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{s}\" height=\"{s}\" viewBox=\"0 0 {s} {s}\">\n",
            s = self.size
        );
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str) {
        self.elements.push(format!(
            "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{radius}\" fill=\"{color}\"/>"
        ));
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: &str) {
        self.elements.push(format!(
            "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{radius}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{width}\"/>"
        ));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: &str) {
        self.elements.push(format!(
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{color}\" stroke-width=\"{width}\" stroke-linecap=\"round\"/>"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::face::{ClockFace, ACCENT_COLOR};
    use crate::time::ClockTime;

    #[test]
    fn produces_well_formed_document() {
        let mut canvas = SvgCanvas::new(400.0);
        ClockFace::default().render(&ClockTime::from_hms(10, 10, 30), &mut canvas);
        let svg = canvas.finish();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // Face circle, 3 hands in accent/white, 60 ticks.
        assert!(svg.matches("<line").count() >= 63);
        assert!(svg.contains(ACCENT_COLOR));
    }

    #[test]
    fn clear_discards_previous_frame() {
        let mut canvas = SvgCanvas::new(400.0);
        let face = ClockFace::default();
        face.render(&ClockTime::from_hms(1, 0, 0), &mut canvas);
        face.render(&ClockTime::from_hms(2, 0, 0), &mut canvas);
        let svg = canvas.finish();
        // Two renders must not stack: one face fill only.
        assert_eq!(svg.matches("rgba(18, 18, 18, 0.7)").count(), 1);
    }
}
