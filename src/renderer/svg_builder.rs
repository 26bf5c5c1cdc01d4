//! SVG builder: accumulates SVG elements and produces the final string.
//!
//! Also owns the drawing surface handed to each renderer. A surface has a
//! fixed pixel size; gradients and filters are collected into a single
//! `<defs>` block, deduplicated by id so repeated keys share one
//! definition.

use crate::model::Snapshot;

// ═══════════════════════════════════════════════════════════════════════
// Drawing surface
// ═══════════════════════════════════════════════════════════════════════

/// A fixed-size drawing target, created per render call.
pub(super) struct DiagramSurface {
    svg: SvgBuilder,
}

impl DiagramSurface {
    /// Acquire a surface of the given size. Returns `None` for a zero-sized
    /// surface, which callers treat as "nothing to draw".
    pub(super) fn acquire(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { svg: SvgBuilder::new(width, height) })
    }

    /// Surface for one of the fixed diagram pages, whose sizes are constants.
    pub(super) fn page(width: u32, height: u32) -> Self {
        Self { svg: SvgBuilder::new(width.max(1), height.max(1)) }
    }

    pub(super) fn svg(&mut self) -> &mut SvgBuilder {
        &mut self.svg
    }

    pub(super) fn into_snapshot(self) -> Snapshot {
        let width = self.svg.width;
        let height = self.svg.height;
        Snapshot { width, height, svg: self.svg.build() }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    defs: Vec<(String, String)>,
    width: u32,
    height: u32,
}

impl SvgBuilder {
    pub(super) fn new(width: u32, height: u32) -> Self {
        Self {
            elements: Vec::new(),
            defs: Vec::new(),
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        if !self.defs.is_empty() {
            svg.push_str("  <defs>");
            for (_, def) in &self.defs {
                svg.push_str(def);
            }
            svg.push_str("</defs>\n");
        }
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn has_def(&self, id: &str) -> bool {
        self.defs.iter().any(|(existing, _)| existing == id)
    }

    /// Register a left-to-right gradient spanning the filled shape's
    /// bounding box. Stops are `(offset, color, opacity)`. Returns the paint
    /// reference to use as a fill.
    pub(super) fn horizontal_gradient(&mut self, id: &str, stops: &[(f64, &str, f64)]) -> String {
        if !self.has_def(id) {
            let mut def = format!(r#"<linearGradient id="{}" x1="0" y1="0" x2="1" y2="0">"#, id);
            for (offset, color, opacity) in stops {
                def.push_str(&format!(
                    r#"<stop offset="{:.2}" stop-color="{}" stop-opacity="{:.2}"/>"#,
                    offset, color, opacity
                ));
            }
            def.push_str("</linearGradient>");
            self.defs.push((id.to_string(), def));
        }
        format!("url(#{})", id)
    }

    /// Register a drop-shadow filter. Returns the filter reference.
    pub(super) fn drop_shadow(&mut self, id: &str, dy: f64, blur: f64, opacity: f64) -> String {
        if !self.has_def(id) {
            let def = format!(
                r##"<filter id="{}" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="0" dy="{:.1}" stdDeviation="{:.1}" flood-color="#000" flood-opacity="{:.2}"/></filter>"##,
                id, dy, blur / 2.0, opacity
            );
            self.defs.push((id.to_string(), def));
        }
        format!("url(#{})", id)
    }

    /// Register a pre-serialized definition under `id`. Returns false when
    /// the id is already taken.
    pub(super) fn raw_def(&mut self, id: &str, markup: &str) -> bool {
        if self.has_def(id) {
            return false;
        }
        self.defs.push((id.to_string(), markup.to_string()));
        true
    }

    /// Append pre-serialized markup as-is.
    pub(super) fn raw(&mut self, markup: String) {
        self.elements.push(markup);
    }

    pub(super) fn group_start(&mut self, filter: &str) {
        self.elements.push(format!(r#"<g filter="{}">"#, filter));
    }

    pub(super) fn group_end(&mut self) {
        self.elements.push("</g>".to_string());
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="butt"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, stroke_width: f64) {
        if stroke_width > 0.0 {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}" stroke-linejoin="round"/>"#,
                x, y, w, h, fill, stroke, stroke_width
            ));
        } else {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                x, y, w, h, fill
            ));
        }
    }

    /// Translucent fill, e.g. shadows and bevels.
    pub(super) fn shade_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, opacity: f64) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" fill-opacity="{:.2}"/>"#,
            x, y, w, h, color, opacity
        ));
    }

    pub(super) fn rounded_rect(
        &mut self, x: f64, y: f64, w: f64, h: f64, radius: f64,
        fill: &str, stroke: &str, stroke_width: f64,
    ) {
        let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" ry="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
            x, y, w, h, r, r, fill, stroke, stroke_width
        ));
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            cx, cy, r, fill
        ));
    }

    /// Circle with an outline. Pass `"none"` as `fill` for a ring.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn outlined_circle(
        &mut self, cx: f64, cy: f64, r: f64, fill: &str,
        stroke: &str, stroke_width: f64, stroke_opacity: f64,
    ) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}" stroke-opacity="{:.2}"/>"#,
            cx, cy, r, fill, stroke, stroke_width, stroke_opacity
        ));
    }

    pub(super) fn path(&mut self, d: &str, fill: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            d, fill, stroke, stroke_width
        ));
    }

    /// Open stroked path with round caps and joins (arrows, crosses).
    pub(super) fn stroke_path(&mut self, d: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            d, stroke, stroke_width
        ));
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        self.styled_text(x, y, content, size, weight, fill, anchor, super::constants::BODY_FONT, None);
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn styled_text(
        &mut self, x: f64, y: f64, content: &str, size: f64, weight: &str,
        fill: &str, anchor: &str, family: &str, baseline: Option<&str>,
    ) {
        let baseline_attr = baseline
            .map(|b| format!(r#" dominant-baseline="{}""#, b))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}"{}>{}</text>"#,
            x, y, family, size, weight, fill, anchor, baseline_attr, escape_text(content)
        ));
    }

    /// Filled text with an outline drawn underneath (brand lettering).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn outlined_text(
        &mut self, x: f64, y: f64, content: &str, size: f64, fill: &str,
        stroke: &str, stroke_width: f64, family: &str,
    ) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.0}" fill="{}" stroke="{}" stroke-width="{:.1}" paint-order="stroke" text-anchor="middle">{}</text>"#,
            x, y, family, size, fill, stroke, stroke_width, escape_text(content)
        ));
    }
}

pub(super) fn escape_text(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_surface_is_unavailable() {
        assert!(DiagramSurface::acquire(0, 100).is_none());
        assert!(DiagramSurface::acquire(100, 0).is_none());
        assert!(DiagramSurface::acquire(1, 1).is_some());
    }

    #[test]
    fn gradients_are_defined_once() {
        let mut svg = SvgBuilder::new(10, 10);
        let a = svg.horizontal_gradient("gloss", &[(0.0, "#000", 0.2), (1.0, "#fff", 0.2)]);
        let b = svg.horizontal_gradient("gloss", &[(0.0, "#000", 0.2), (1.0, "#fff", 0.2)]);
        assert_eq!(a, "url(#gloss)");
        assert_eq!(a, b);
        let out = svg.build();
        assert_eq!(out.matches("<linearGradient").count(), 1);
    }

    #[test]
    fn text_is_escaped() {
        let mut svg = SvgBuilder::new(10, 10);
        svg.text(0.0, 0.0, "e|--<3>--&", 10.0, "bold", "#000", "start");
        let out = svg.build();
        assert!(out.contains("e|--&lt;3&gt;--&amp;"));
    }
}
