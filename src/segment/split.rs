use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::{
    document::layout::LayoutProbe,
    document::node::{Document, NodeId, normalize_whitespace},
    foundation::core::Rect,
    foundation::error::ScrollCueResult,
    segment::lines::{LineGrouper, TopAligned},
};

/// Class carried by generated word wrappers.
pub const WORD_CLASS: &str = "cue-word";
/// Class carried by generated character wrappers.
pub const CHAR_CLASS: &str = "cue-char";
/// Class carried by generated line wrappers.
pub const LINE_CLASS: &str = "cue-line";
/// Class carried by the single span created for script-style clip reveals.
pub const SCRIPT_CLASS: &str = "cue-script-text";

/// Unit size requested from [`Segmenter::segment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Extended grapheme clusters, grouped in word wrappers.
    Char,
    /// Whitespace-separated words.
    Word,
    /// Visual lines detected from word boxes.
    Line,
}

/// Wrapper nodes produced by one segmentation, all in document order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Segments {
    /// Granularity the element was split at.
    pub granularity: Granularity,
    /// Line wrappers, only for [`Granularity::Line`].
    pub lines: Vec<NodeId>,
    /// Word wrappers.
    pub words: Vec<NodeId>,
    /// Character wrappers, only for [`Granularity::Char`].
    pub chars: Vec<NodeId>,
}

impl Segments {
    fn empty(granularity: Granularity) -> Self {
        Self {
            granularity,
            lines: Vec::new(),
            words: Vec::new(),
            chars: Vec::new(),
        }
    }

    /// Units at the recorded granularity.
    pub fn units(&self) -> &[NodeId] {
        match self.granularity {
            Granularity::Char => &self.chars,
            Granularity::Word => &self.words,
            Granularity::Line => &self.lines,
        }
    }

    /// Return `true` when the element had no text to split.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits element text into animatable wrapper spans and remembers what it split.
///
/// The record table is the idempotence marker: an element is never split twice by the
/// same segmenter. Callers that need to undo the split snapshot the element's children
/// and attributes before the first call.
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    grouper: TopAligned,
    records: HashMap<NodeId, Segments>,
    scripts: HashMap<NodeId, NodeId>,
}

impl Segmenter {
    /// Segmenter that groups lines with the given top tolerance in px.
    pub fn new(line_tolerance: f64) -> Self {
        Self {
            grouper: TopAligned::new(line_tolerance),
            ..Self::default()
        }
    }

    /// Recorded segmentation of `el`, if any.
    pub fn record(&self, el: NodeId) -> Option<&Segments> {
        self.records.get(&el)
    }

    /// Script span created for `el`, if any.
    pub fn script(&self, el: NodeId) -> Option<NodeId> {
        self.scripts.get(&el).copied()
    }

    /// `true` when this segmenter already rewrote `el`.
    pub fn is_touched(&self, el: NodeId) -> bool {
        self.records.contains_key(&el) || self.scripts.contains_key(&el)
    }

    /// Forget every record. Document nodes are left as they are.
    pub fn clear(&mut self) {
        self.records.clear();
        self.scripts.clear();
    }

    /// Split the text of `el` at `granularity`.
    ///
    /// Whitespace is normalized first and inter-word spaces stay plain text nodes.
    /// The container is labelled with the normalized text and every generated span is
    /// hidden from assistive technology. A repeat call returns the recorded units
    /// without touching the document, even when a different granularity is asked for.
    pub fn segment(
        &mut self,
        doc: &mut Document,
        layout: &dyn LayoutProbe,
        el: NodeId,
        granularity: Granularity,
    ) -> ScrollCueResult<Segments> {
        if let Some(rec) = self.records.get(&el) {
            if rec.granularity != granularity {
                tracing::debug!(
                    node = el.0,
                    recorded = ?rec.granularity,
                    requested = ?granularity,
                    "element already segmented, reusing recorded units"
                );
            }
            return Ok(rec.clone());
        }

        let text = normalize_whitespace(&doc.text_content(el));
        if text.is_empty() {
            return Ok(Segments::empty(granularity));
        }

        let mut out = Segments::empty(granularity);
        let mut children = Vec::new();
        for (i, word) in text.split(' ').enumerate() {
            if i > 0 {
                children.push(doc.create_text(" "));
            }
            let w = hidden_span(doc, WORD_CLASS)?;
            if granularity == Granularity::Char {
                for g in word.graphemes(true) {
                    let c = hidden_span(doc, CHAR_CLASS)?;
                    doc.append_text(c, g)?;
                    doc.append_child(w, c)?;
                    out.chars.push(c);
                }
            } else {
                doc.append_text(w, word)?;
            }
            out.words.push(w);
            children.push(w);
        }
        doc.replace_children(el, children)?;

        if granularity == Granularity::Line {
            out.lines = self.rebuild_lines(doc, layout, el, &out.words)?;
        }

        doc.set_attr(el, "aria-label", &text)?;
        doc.set_attr(el, "role", "text")?;
        self.records.insert(el, out.clone());
        Ok(out)
    }

    fn rebuild_lines(
        &self,
        doc: &mut Document,
        layout: &dyn LayoutProbe,
        el: NodeId,
        words: &[NodeId],
    ) -> ScrollCueResult<Vec<NodeId>> {
        // Unmeasurable words stay on the row of the previous word.
        let mut last = Rect::ZERO;
        let boxes: Vec<Rect> = words
            .iter()
            .map(|w| {
                if let Some(r) = layout.rect(doc, *w) {
                    last = r;
                }
                last
            })
            .collect();

        let mut lines = Vec::new();
        let mut children = Vec::new();
        for range in self.grouper.group(&boxes) {
            if !lines.is_empty() {
                children.push(doc.create_text(" "));
            }
            let line = hidden_span(doc, LINE_CLASS)?;
            for (k, &w) in words[range].iter().enumerate() {
                if k > 0 {
                    doc.append_text(line, " ")?;
                }
                doc.append_child(line, w)?;
            }
            lines.push(line);
            children.push(line);
        }
        doc.replace_children(el, children)?;
        Ok(lines)
    }

    /// Replace the text of `el` with one hidden `cue-script-text` span.
    ///
    /// Returns the span, or `None` when `el` has no text. Repeat calls return the span
    /// created the first time.
    pub fn prepare_script(
        &mut self,
        doc: &mut Document,
        el: NodeId,
    ) -> ScrollCueResult<Option<NodeId>> {
        if let Some(span) = self.scripts.get(&el) {
            return Ok(Some(*span));
        }
        let text = normalize_whitespace(&doc.text_content(el));
        if text.is_empty() {
            return Ok(None);
        }
        let span = hidden_span(doc, SCRIPT_CLASS)?;
        doc.append_text(span, &text)?;
        doc.replace_children(el, vec![span])?;
        doc.set_attr(el, "aria-label", &text)?;
        doc.set_attr(el, "role", "text")?;
        self.scripts.insert(el, span);
        Ok(Some(span))
    }
}

/// Wrap the bare text of a button in a single `span`, so fill and label clip separately.
///
/// An existing descendant `span` is reused as is. Returns `None` when there is no text.
pub fn wrap_text(doc: &mut Document, el: NodeId) -> ScrollCueResult<Option<NodeId>> {
    if let Some(span) = doc
        .descendants(el)
        .into_iter()
        .find(|n| doc.tag(*n) == Some("span"))
    {
        return Ok(Some(span));
    }
    let text = doc.text_content(el).trim().to_owned();
    if text.is_empty() {
        return Ok(None);
    }
    let span = doc.create_element("span");
    doc.append_text(span, &text)?;
    doc.replace_children(el, vec![span])?;
    Ok(Some(span))
}

fn hidden_span(doc: &mut Document, class: &str) -> ScrollCueResult<NodeId> {
    let span = doc.create_element("span");
    doc.add_class(span, class)?;
    doc.set_attr(span, "aria-hidden", "true")?;
    Ok(span)
}

#[cfg(test)]
#[path = "../../tests/unit/segment/split.rs"]
mod tests;
