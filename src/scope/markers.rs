use std::collections::HashSet;

use crate::{document::node::NodeId, segment::split::Segmenter};

/// Scope-owned side table of lifecycle markers.
///
/// Nothing here is stored on document nodes, so two scopes over overlapping
/// subtrees never see each other's state.
#[derive(Clone, Debug, Default)]
pub struct Markers {
    wired: HashSet<NodeId>,
    revealed: HashSet<NodeId>,
    flags: HashSet<(NodeId, &'static str)>,
    /// Segmentation and script records.
    pub segmenter: Segmenter,
}

impl Markers {
    /// Empty table whose segmenter groups lines with `line_tolerance` px.
    pub fn new(line_tolerance: f64) -> Self {
        Self {
            segmenter: Segmenter::new(line_tolerance),
            ..Self::default()
        }
    }

    /// Mark a declaration as dispatched.
    pub fn mark_wired(&mut self, el: NodeId) {
        self.wired.insert(el);
    }

    /// Whether a declaration was dispatched.
    pub fn is_wired(&self, el: NodeId) -> bool {
        self.wired.contains(&el)
    }

    /// Mark a one-shot declaration as finished.
    pub fn mark_revealed(&mut self, el: NodeId) {
        self.revealed.insert(el);
    }

    /// Whether a one-shot declaration finished.
    pub fn is_revealed(&self, el: NodeId) -> bool {
        self.revealed.contains(&el)
    }

    /// Set a per-element flag; `true` when it was not set before.
    pub fn flag(&mut self, el: NodeId, key: &'static str) -> bool {
        self.flags.insert((el, key))
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.wired.clear();
        self.revealed.clear();
        self.flags.clear();
        self.segmenter.clear();
    }
}
