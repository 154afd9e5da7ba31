use std::fmt::Write;

use super::{Rgb, Vec2, Viewport};

/// Drawing primitives the background needs.
pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, color: Rgb, alpha: f64);
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgb, alpha: f64);
    fn stroke_circle(&mut self, center: Vec2, radius: f64, stroke: Stroke);
    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
    fn polyline(&mut self, points: &[Vec2], stroke: Stroke);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb, alpha: f64);
    /// Subsequent primitives are drawn shifted by `offset` until [`Surface::pop_offset`].
    fn push_offset(&mut self, offset: Vec2);
    fn pop_offset(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub alpha: f64,
    pub width: f64,
    pub dash: Option<f64>,
}

impl Stroke {
    pub fn new(color: Rgb, alpha: f64, width: f64) -> Self {
        Self {
            color,
            alpha,
            width,
            dash: None,
        }
    }

    pub fn dashed(mut self, dash: f64) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// Surface writing an SVG document.
#[derive(Debug)]
pub struct SvgSurface {
    viewport: Viewport,
    body: String,
    depth: usize,
}

impl SvgSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            body: String::new(),
            depth: 0,
        }
    }

    pub fn finish(mut self) -> String {
        for _ in 0..self.depth {
            self.body.push_str("</g>");
        }
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
            w = fmt_num(self.viewport.width),
            h = fmt_num(self.viewport.height),
            body = self.body
        )
    }

    fn stroke_attrs(stroke: &Stroke) -> String {
        let mut attrs = format!(
            r#"fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
            stroke.color.hex(),
            fmt_num(stroke.alpha),
            fmt_num(stroke.width)
        );
        if let Some(dash) = stroke.dash {
            let _ = write!(attrs, r#" stroke-dasharray="{}""#, fmt_num(dash));
        }
        attrs
    }

    fn points(points: &[Vec2]) -> String {
        points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Two decimals, trailing zeros trimmed.
fn fmt_num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, color: Rgb) {
        self.body.clear();
        self.depth = 0;
        let _ = write!(
            self.body,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            color.hex()
        );
    }

    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, color: Rgb, alpha: f64) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
            fmt_num(origin.x),
            fmt_num(origin.y),
            fmt_num(width),
            fmt_num(height),
            color.hex(),
            fmt_num(alpha)
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgb, alpha: f64) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            color.hex(),
            fmt_num(alpha)
        );
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, stroke: Stroke) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            Self::stroke_attrs(&stroke)
        );
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            Self::stroke_attrs(&stroke)
        );
    }

    fn polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        let _ = write!(
            self.body,
            r#"<polyline points="{}" {}/>"#,
            Self::points(points),
            Self::stroke_attrs(&stroke)
        );
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb, alpha: f64) {
        if points.len() < 3 {
            return;
        }
        let _ = write!(
            self.body,
            r#"<polygon points="{}" fill="{}" fill-opacity="{}"/>"#,
            Self::points(points),
            color.hex(),
            fmt_num(alpha)
        );
    }

    fn push_offset(&mut self, offset: Vec2) {
        let _ = write!(
            self.body,
            r#"<g transform="translate({} {})">"#,
            fmt_num(offset.x),
            fmt_num(offset.y)
        );
        self.depth += 1;
    }

    fn pop_offset(&mut self) {
        if self.depth > 0 {
            self.body.push_str("</g>");
            self.depth -= 1;
        }
    }
}
