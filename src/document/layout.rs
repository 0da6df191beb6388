use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::{
    document::node::{Document, NodeId, NodeKind},
    foundation::core::Rect,
};

/// Port through which the runtime reads rendered geometry.
///
/// Boxes are in document space: `y0` grows downward from the top of the page and
/// does not depend on the current scroll position.
pub trait LayoutProbe {
    /// Bounding box of `node`, `None` when the host cannot measure it.
    fn rect(&self, doc: &Document, node: NodeId) -> Option<Rect>;
}

/// Deterministic layout: explicit boxes plus fixed-advance inline flow.
///
/// - Nodes with an explicit box report it.
/// - `span` elements flow inline inside their parent's box, advancing `char_width` per
///   grapheme and wrapping at the parent's width. Spans with class `cue-line` are blocks.
/// - Everything else inherits the nearest measured ancestor's box.
#[derive(Clone, Debug)]
pub struct FixedMetricsLayout {
    rects: HashMap<NodeId, Rect>,
    /// Advance of one grapheme in px.
    pub char_width: f64,
    /// Height of one text line in px.
    pub line_height: f64,
    /// Width of the root box when nothing explicit covers it.
    pub page_width: f64,
}

impl FixedMetricsLayout {
    /// Layout with default metrics (10 px advance, 20 px lines).
    pub fn new(page_width: f64) -> Self {
        Self {
            rects: HashMap::new(),
            char_width: 10.0,
            line_height: 20.0,
            page_width,
        }
    }

    /// Override text metrics.
    pub fn with_metrics(mut self, char_width: f64, line_height: f64) -> Self {
        self.char_width = char_width;
        self.line_height = line_height;
        self
    }

    /// Seed explicit boxes, e.g. from [`LoadedMarkup`](crate::LoadedMarkup).
    pub fn with_rects(mut self, rects: HashMap<NodeId, Rect>) -> Self {
        self.rects.extend(rects);
        self
    }

    /// Set one explicit box.
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        self.rects.insert(node, rect);
    }

    fn inline_width(&self, doc: &Document, node: NodeId) -> f64 {
        doc.text_content(node).graphemes(true).count() as f64 * self.char_width
    }

    fn is_inline_span(&self, doc: &Document, node: NodeId) -> bool {
        doc.tag(node) == Some("span") && !doc.has_class(node, "cue-line")
    }

    fn flow(&self, doc: &Document, parent: NodeId, container: Rect, target: NodeId) -> Rect {
        let width = container.width().max(self.char_width);
        let (mut x, mut y) = (0.0_f64, 0.0_f64);
        for &child in doc.children(parent) {
            match doc.kind(child) {
                Some(NodeKind::Text(t)) => {
                    for g in t.graphemes(true) {
                        if g.chars().all(char::is_whitespace) && x == 0.0 {
                            continue;
                        }
                        x += self.char_width;
                    }
                }
                Some(NodeKind::Element(_)) if !self.is_inline_span(doc, child) => {
                    if x > 0.0 {
                        y += self.line_height;
                    }
                    let lines = self.block_lines(doc, child, width);
                    if child == target {
                        return Rect::new(
                            container.x0,
                            container.y0 + y,
                            container.x0 + width,
                            container.y0 + y + lines * self.line_height,
                        );
                    }
                    y += lines * self.line_height;
                    x = 0.0;
                }
                Some(NodeKind::Element(_)) => {
                    let w = self.inline_width(doc, child);
                    if x > 0.0 && x + w > width {
                        x = 0.0;
                        y += self.line_height;
                    }
                    if child == target {
                        return Rect::new(
                            container.x0 + x,
                            container.y0 + y,
                            container.x0 + x + w,
                            container.y0 + y + self.line_height,
                        );
                    }
                    x += w;
                }
                None => {}
            }
        }
        container
    }

    fn block_lines(&self, doc: &Document, node: NodeId, width: f64) -> f64 {
        let w = self.inline_width(doc, node);
        (w / width).ceil().max(1.0)
    }
}

impl LayoutProbe for FixedMetricsLayout {
    fn rect(&self, doc: &Document, node: NodeId) -> Option<Rect> {
        if let Some(r) = self.rects.get(&node) {
            return Some(*r);
        }
        let Some(parent) = doc.parent(node) else {
            return Some(Rect::new(0.0, 0.0, self.page_width, 0.0));
        };
        let container = self.rect(doc, parent)?;
        if self.is_inline_span(doc, node) || doc.has_class(node, "cue-line") {
            return Some(self.flow(doc, parent, container, node));
        }
        Some(container)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/layout.rs"]
mod tests;
