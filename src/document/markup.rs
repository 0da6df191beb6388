use std::collections::{BTreeMap, HashMap};

use crate::{
    document::node::{Document, NodeId, NodeKind},
    foundation::core::Rect,
    foundation::error::{ScrollCueError, ScrollCueResult},
};

/// Serializable markup tree used to load documents from JSON.
///
/// A bare JSON string is a text node; an object is an element:
///
/// ```json
/// { "tag": "section", "class": "hero", "attrs": { "data-cue": "fade-up" },
///   "rect": [0, 900, 1280, 600], "children": ["Hello"] }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Markup {
    /// Text node.
    Text(String),
    /// Element node.
    Element(MarkupElement),
}

/// Element entry of a [`Markup`] tree.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarkupElement {
    /// Tag name.
    pub tag: String,
    /// Space-separated class list.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class: String,
    /// Attributes other than `class`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Document-space box as `[x, y, width, height]`, consumed by layout probes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<[f64; 4]>,
    /// Child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Markup>,
}

/// A loaded markup document together with the boxes it declared.
#[derive(Clone, Debug)]
pub struct LoadedMarkup {
    /// The document; the markup root element becomes a child of [`Document::root`].
    pub doc: Document,
    /// The node created for the markup root.
    pub top: NodeId,
    /// Explicit boxes keyed by node.
    pub rects: HashMap<NodeId, Rect>,
}

impl Markup {
    /// Parse markup JSON.
    pub fn from_json(src: &str) -> ScrollCueResult<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// Build a fresh document from this markup.
    pub fn load(&self) -> ScrollCueResult<LoadedMarkup> {
        let mut doc = Document::new();
        let mut rects = HashMap::new();
        let root = doc.root();
        let top = build(&mut doc, &mut rects, root, self)?;
        Ok(LoadedMarkup { doc, top, rects })
    }

    /// Serialize a document subtree back to markup, omitting inline styles.
    pub fn from_document(doc: &Document, id: NodeId) -> ScrollCueResult<Self> {
        match doc.kind(id) {
            Some(NodeKind::Text(t)) => Ok(Self::Text(t.clone())),
            Some(NodeKind::Element(el)) => Ok(Self::Element(MarkupElement {
                tag: el.tag.clone(),
                class: el.classes.join(" "),
                attrs: el.attrs.clone(),
                rect: None,
                children: doc
                    .children(id)
                    .iter()
                    .map(|c| Self::from_document(doc, *c))
                    .collect::<ScrollCueResult<_>>()?,
            })),
            None => Err(ScrollCueError::document(format!("unknown node {}", id.0))),
        }
    }
}

fn build(
    doc: &mut Document,
    rects: &mut HashMap<NodeId, Rect>,
    parent: NodeId,
    markup: &Markup,
) -> ScrollCueResult<NodeId> {
    match markup {
        Markup::Text(t) => doc.append_text(parent, t),
        Markup::Element(el) => {
            if el.tag.trim().is_empty() {
                return Err(ScrollCueError::validation("markup element tag must be non-empty"));
            }
            let id = doc.append_element(parent, &el.tag, &el.class)?;
            for (k, v) in &el.attrs {
                if k == "class" {
                    return Err(ScrollCueError::validation(
                        "use the `class` field instead of a class attribute",
                    ));
                }
                doc.set_attr(id, k, v)?;
            }
            if let Some([x, y, w, h]) = el.rect {
                if !(w >= 0.0 && h >= 0.0) {
                    return Err(ScrollCueError::validation(format!(
                        "rect of <{}> must have non-negative size",
                        el.tag
                    )));
                }
                rects.insert(id, Rect::new(x, y, x + w, y + h));
            }
            for child in &el.children {
                build(doc, rects, id, child)?;
            }
            Ok(id)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/markup.rs"]
mod tests;
