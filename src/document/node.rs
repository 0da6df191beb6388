use std::collections::BTreeMap;

use crate::{
    animation::props::Style,
    document::selector::Selector,
    foundation::error::{ScrollCueError, ScrollCueResult},
};

/// Compact handle to a node in a [`Document`] arena.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Element payload: tag, classes, attributes and the inline visual style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementData {
    /// Lower-case tag name.
    pub tag: String,
    /// Class list in authored order.
    pub classes: Vec<String>,
    /// Attributes other than `class`.
    pub attrs: BTreeMap<String, String>,
    /// Inline visual properties written by the runtime.
    pub style: Style,
}

/// Node payload.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// An element.
    Element(ElementData),
    /// A text node.
    Text(String),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-allocated element/text tree standing in for the host's rendered subtree.
///
/// Nodes are never freed; detached nodes simply stop being reachable from
/// [`Document::root`]. This keeps every [`NodeId`] valid for the life of the document,
/// which is what lets a scope journal restore earlier children lists verbatim.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document whose root is a `body` element.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.create_element("body");
        doc
    }

    /// Root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes ever allocated, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` when only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn node(&self, id: NodeId) -> ScrollCueResult<&Node> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| ScrollCueError::document(format!("unknown node {}", id.0)))
    }

    fn node_mut(&mut self, id: NodeId) -> ScrollCueResult<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or_else(|| ScrollCueError::document(format!("unknown node {}", id.0)))
    }

    fn element_mut(&mut self, id: NodeId) -> ScrollCueResult<&mut ElementData> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element(el) => Ok(el),
            NodeKind::Text(_) => Err(ScrollCueError::document(format!(
                "node {} is a text node",
                id.0
            ))),
        }
    }

    /// Element payload, `None` for text nodes and unknown ids.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes.get(id.index())?.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    /// Node payload.
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.index()).map(|n| &n.kind)
    }

    /// Allocate a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            ..ElementData::default()
        }))
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_owned()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` to `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> ScrollCueResult<()> {
        if self.element(parent).is_none() {
            return Err(ScrollCueError::document(format!(
                "node {} cannot have children",
                parent.0
            )));
        }
        if parent == child || self.is_descendant_of(parent, child) {
            return Err(ScrollCueError::document("append would create a cycle"));
        }
        self.detach(child)?;
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Create an element with space-separated `classes` and append it to `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        classes: &str,
    ) -> ScrollCueResult<NodeId> {
        let id = self.create_element(tag);
        for class in classes.split_whitespace() {
            self.add_class(id, class)?;
        }
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Create a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> ScrollCueResult<NodeId> {
        let id = self.create_text(text);
        self.append_child(parent, id)?;
        Ok(id)
    }

    fn detach(&mut self, child: NodeId) -> ScrollCueResult<()> {
        if let Some(old) = self.node(child)?.parent {
            self.node_mut(old)?.children.retain(|c| *c != child);
            self.node_mut(child)?.parent = None;
        }
        Ok(())
    }

    /// Replace the children of `parent` wholesale and return the previous list.
    ///
    /// Previous children not present in `children` become detached.
    pub fn replace_children(
        &mut self,
        parent: NodeId,
        children: Vec<NodeId>,
    ) -> ScrollCueResult<Vec<NodeId>> {
        if self.element(parent).is_none() {
            return Err(ScrollCueError::document(format!(
                "node {} cannot have children",
                parent.0
            )));
        }
        for &c in &children {
            self.node(c)?;
            if c == parent || self.is_descendant_of(parent, c) {
                return Err(ScrollCueError::document("replace would create a cycle"));
            }
        }
        let old = std::mem::take(&mut self.node_mut(parent)?.children);
        for &c in &old {
            self.node_mut(c)?.parent = None;
        }
        for &c in &children {
            self.detach(c)?;
            self.node_mut(c)?.parent = Some(parent);
        }
        self.node_mut(parent)?.children = children;
        Ok(old)
    }

    /// Children in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Element children only.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.element(*c).is_some())
            .collect()
    }

    /// Parent node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    /// `true` when `node` is a strict descendant of `ancestor`.
    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cur = self.parent(node);
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.parent(p);
        }
        false
    }

    /// `true` when the node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        id == self.root || self.is_descendant_of(id, self.root)
    }

    /// All descendants of `id` in document (pre-)order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    /// Tag name of an element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    /// Class membership test.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> ScrollCueResult<()> {
        let el = self.element_mut(id)?;
        if !el.classes.iter().any(|c| c == class) {
            el.classes.push(class.to_owned());
        }
        Ok(())
    }

    /// Remove a class, returning whether it was present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> ScrollCueResult<bool> {
        let el = self.element_mut(id)?;
        let before = el.classes.len();
        el.classes.retain(|c| c != class);
        Ok(el.classes.len() != before)
    }

    /// Attribute value.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attrs.get(name).map(String::as_str)
    }

    /// Attribute presence test.
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: &str,
        value: &str,
    ) -> ScrollCueResult<Option<String>> {
        Ok(self
            .element_mut(id)?
            .attrs
            .insert(name.to_owned(), value.to_owned()))
    }

    /// Remove an attribute, returning the previous value.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> ScrollCueResult<Option<String>> {
        Ok(self.element_mut(id)?.attrs.remove(name))
    }

    /// Inline style of an element.
    pub fn style(&self, id: NodeId) -> Option<&Style> {
        self.element(id).map(|e| &e.style)
    }

    /// Mutable inline style of an element.
    pub fn style_mut(&mut self, id: NodeId) -> ScrollCueResult<&mut Style> {
        Ok(&mut self.element_mut(id)?.style)
    }

    /// Concatenated text of all descendant text nodes, unmodified.
    pub fn text_content(&self, id: NodeId) -> String {
        match self.kind(id) {
            Some(NodeKind::Text(t)) => t.clone(),
            Some(NodeKind::Element(_)) => self
                .descendants(id)
                .into_iter()
                .filter_map(|n| match self.kind(n) {
                    Some(NodeKind::Text(t)) => Some(t.as_str()),
                    _ => None,
                })
                .collect(),
            None => String::new(),
        }
    }

    /// Nearest inclusive ancestor matching `selector`.
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut cur = Some(id);
        while let Some(n) = cur {
            if selector.matches(self, n) {
                return Some(n);
            }
            cur = self.parent(n);
        }
        None
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|n| selector.matches(self, *n))
    }

    /// All descendants of `scope` matching `selector`, in document order.
    pub fn query_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|n| selector.matches(self, *n))
            .collect()
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text that assistive technology would expose for `id`.
///
/// `aria-label` wins over content, `aria-hidden="true"` subtrees contribute nothing,
/// and the result is whitespace-normalized.
pub fn accessible_text(doc: &Document, id: NodeId) -> String {
    fn collect(doc: &Document, id: NodeId, out: &mut String) {
        match doc.kind(id) {
            Some(NodeKind::Text(t)) => out.push_str(t),
            Some(NodeKind::Element(el)) => {
                if el.attrs.get("aria-hidden").map(String::as_str) == Some("true") {
                    return;
                }
                if let Some(label) = el.attrs.get("aria-label") {
                    out.push(' ');
                    out.push_str(label);
                    out.push(' ');
                    return;
                }
                for &c in doc.children(id) {
                    collect(doc, c, out);
                }
            }
            None => {}
        }
    }

    let mut out = String::new();
    collect(doc, id, &mut out);
    normalize_whitespace(&out)
}

#[cfg(test)]
#[path = "../../tests/unit/document/node.rs"]
mod tests;
