use std::collections::HashSet;

use crate::{
    animation::props::Style,
    document::node::{Document, NodeId},
};

#[derive(Clone, Debug)]
enum Entry {
    Style { node: NodeId, before: Style },
    Children { node: NodeId, before: Vec<NodeId> },
    Attr { node: NodeId, name: String, before: Option<String> },
    Class { node: NodeId, class: String },
}

/// Undo log of every document mutation made by one scope.
///
/// Only the first snapshot of each node (or attribute) is kept, so replaying the log
/// backwards lands on the state from before the scope existed.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    entries: Vec<Entry>,
    styles: HashSet<NodeId>,
    children: HashSet<NodeId>,
    attrs: HashSet<(NodeId, String)>,
}

impl Journal {
    /// Remember the inline style of `node` unless already remembered.
    pub fn snapshot_style(&mut self, doc: &Document, node: NodeId) {
        if !self.styles.insert(node) {
            return;
        }
        if let Some(style) = doc.style(node) {
            self.entries.push(Entry::Style {
                node,
                before: style.clone(),
            });
        }
    }

    /// Remember the children list of `node` unless already remembered.
    pub fn snapshot_children(&mut self, doc: &Document, node: NodeId) {
        if self.children.insert(node) {
            self.entries.push(Entry::Children {
                node,
                before: doc.children(node).to_vec(),
            });
        }
    }

    /// Remember attribute `name` of `node` unless already remembered.
    pub fn snapshot_attr(&mut self, doc: &Document, node: NodeId, name: &str) {
        if self.attrs.insert((node, name.to_owned())) {
            self.entries.push(Entry::Attr {
                node,
                name: name.to_owned(),
                before: doc.attr(node, name).map(str::to_owned),
            });
        }
    }

    /// Record that `class` was added to `node` by this scope.
    pub fn record_class(&mut self, node: NodeId, class: &str) {
        self.entries.push(Entry::Class {
            node,
            class: class.to_owned(),
        });
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Undo every recorded mutation, newest first, and empty the journal.
    pub fn revert(&mut self, doc: &mut Document) {
        for entry in std::mem::take(&mut self.entries).into_iter().rev() {
            let res = match entry {
                Entry::Style { node, before } => {
                    doc.style_mut(node).map(|style| *style = before)
                }
                Entry::Children { node, before } => doc.replace_children(node, before).map(drop),
                Entry::Attr {
                    node,
                    name,
                    before: Some(v),
                } => doc.set_attr(node, &name, &v).map(drop),
                Entry::Attr {
                    node,
                    name,
                    before: None,
                } => doc.remove_attr(node, &name).map(drop),
                Entry::Class { node, class } => doc.remove_class(node, &class).map(drop),
            };
            if let Err(err) = res {
                tracing::warn!(error = %err, "failed to revert scope mutation");
            }
        }
        self.styles.clear();
        self.children.clear();
        self.attrs.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scope/journal.rs"]
mod tests;
