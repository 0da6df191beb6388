use crate::{
    animation::props::Props,
    config::RuntimeConfig,
    document::{
        layout::LayoutProbe,
        node::{Document, NodeId},
        selector::Selector,
    },
    foundation::core::Rect,
    foundation::error::{ScrollCueError, ScrollCueResult},
    responsive::Viewport,
    scope::{DiagnosticKind, Handle, ScopeState, Scheduled, TimelineId},
    segment::split::{Granularity, Segments, wrap_text},
    timeline::{model::TimelineDef, trigger::TriggerSpec},
};

/// Everything a variant handler may touch while applying one declaration.
///
/// All document writes go through here so the scope journal sees them.
pub struct ApplyCx<'a> {
    /// Host document.
    pub doc: &'a mut Document,
    /// Box source.
    pub layout: &'a dyn LayoutProbe,
    /// Viewport of the scan.
    pub viewport: Viewport,
    /// Runtime settings.
    pub settings: &'a RuntimeConfig,
    scope: &'a mut ScopeState,
    owner: NodeId,
    variant: String,
    scheduled: Vec<TimelineId>,
}

impl<'a> ApplyCx<'a> {
    pub(crate) fn new(
        doc: &'a mut Document,
        layout: &'a dyn LayoutProbe,
        settings: &'a RuntimeConfig,
        scope: &'a mut ScopeState,
        owner: NodeId,
        variant: &str,
    ) -> Self {
        Self {
            doc,
            layout,
            viewport: scope.viewport,
            settings,
            scope,
            owner,
            variant: variant.to_owned(),
            scheduled: Vec::new(),
        }
    }

    /// Declaring element.
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query(&self, scope: NodeId, selector: &str) -> ScrollCueResult<Option<NodeId>> {
        Ok(self.doc.query(scope, &Selector::parse(selector)?))
    }

    /// Descendants of `scope` matching `selector`, in document order.
    pub fn query_all(&self, scope: NodeId, selector: &str) -> ScrollCueResult<Vec<NodeId>> {
        Ok(self.doc.query_all(scope, &Selector::parse(selector)?))
    }

    /// Nearest inclusive ancestor matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &str) -> ScrollCueResult<Option<NodeId>> {
        Ok(self.doc.closest(node, &Selector::parse(selector)?))
    }

    /// Element children of `node`.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.doc.element_children(node)
    }

    /// Current box of `node`.
    pub fn rect(&self, node: NodeId) -> Option<Rect> {
        self.layout.rect(&*self.doc, node)
    }

    /// Write inline properties now.
    pub fn set(&mut self, node: NodeId, props: &Props) -> ScrollCueResult<()> {
        self.scope.journal.snapshot_style(self.doc, node);
        self.doc.style_mut(node)?.apply(props);
        Ok(())
    }

    /// Write the same properties on several nodes.
    pub fn set_all(&mut self, nodes: &[NodeId], props: &Props) -> ScrollCueResult<()> {
        for &n in nodes {
            self.set(n, props)?;
        }
        Ok(())
    }

    /// Add a class, undone on teardown.
    pub fn add_class(&mut self, node: NodeId, class: &str) -> ScrollCueResult<()> {
        if !self.doc.has_class(node, class) {
            self.doc.add_class(node, class)?;
            self.scope.journal.record_class(node, class);
        }
        Ok(())
    }

    /// Wrap `node` in a new element of `tag`, in place.
    pub fn wrap(&mut self, node: NodeId, tag: &str) -> ScrollCueResult<NodeId> {
        let parent = self.doc.parent(node).ok_or_else(|| {
            ScrollCueError::document(format!(
                "node {} has no parent to wrap in",
                node.0
            ))
        })?;
        self.scope.journal.snapshot_children(self.doc, parent);
        let wrapper = self.doc.create_element(tag);
        let siblings: Vec<NodeId> = self
            .doc
            .children(parent)
            .iter()
            .map(|&c| if c == node { wrapper } else { c })
            .collect();
        self.doc.replace_children(parent, siblings)?;
        self.doc.append_child(wrapper, node)?;
        Ok(wrapper)
    }

    fn journal_rewrite(&mut self, el: NodeId) {
        if self.scope.markers.segmenter.is_touched(el) {
            return;
        }
        let journal = &mut self.scope.journal;
        journal.snapshot_children(self.doc, el);
        journal.snapshot_attr(self.doc, el, "aria-label");
        journal.snapshot_attr(self.doc, el, "role");
    }

    /// Split the text of `el`; repeat calls return the recorded units.
    pub fn segment(&mut self, el: NodeId, granularity: Granularity) -> ScrollCueResult<Segments> {
        self.journal_rewrite(el);
        self.scope
            .markers
            .segmenter
            .segment(self.doc, self.layout, el, granularity)
    }

    /// Replace the text of `el` with one script span.
    pub fn prepare_script(&mut self, el: NodeId) -> ScrollCueResult<Option<NodeId>> {
        self.journal_rewrite(el);
        self.scope.markers.segmenter.prepare_script(self.doc, el)
    }

    /// Wrap the bare text of a button in one span.
    pub fn wrap_text(&mut self, el: NodeId) -> ScrollCueResult<Option<NodeId>> {
        self.scope.journal.snapshot_children(self.doc, el);
        wrap_text(self.doc, el)
    }

    /// Apply the pre-play state of `def` and register it behind `trigger`.
    pub fn schedule(&mut self, def: TimelineDef, trigger: TriggerSpec) -> TimelineId {
        for (node, props) in def.initial_state() {
            self.scope.journal.snapshot_style(self.doc, node);
            if let Ok(style) = self.doc.style_mut(node) {
                style.apply(&props);
            }
        }
        let id = TimelineId(self.scope.scheduled.len());
        self.scope
            .scheduled
            .push(Scheduled::new(self.owner, def, trigger));
        self.scheduled.push(id);
        id
    }

    /// Timelines scheduled through this context so far.
    pub fn handle(&self) -> Handle {
        Handle {
            timelines: self.scheduled.clone(),
        }
    }

    /// Report a missing sub-element; the stage using it is skipped.
    pub fn missing(&mut self, what: &str) {
        self.report(
            DiagnosticKind::MissingTarget,
            format!("no element matches {what}"),
        );
    }

    /// Record a diagnostic against the declaring element.
    pub fn report(&mut self, kind: DiagnosticKind, message: String) {
        self.scope
            .report(kind, self.owner, &self.variant, message);
    }

    /// Set a per-element flag; `true` when it was not set before.
    pub fn flag(&mut self, node: NodeId, key: &'static str) -> bool {
        self.scope.markers.flag(node, key)
    }

    /// Viewport is at or below the mobile breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile(&self.settings.breakpoints)
    }

    /// Viewport is tablet-sized or touch-driven.
    pub fn is_wide(&self) -> bool {
        self.viewport.is_wide(&self.settings.breakpoints)
    }

    /// User asked for reduced motion.
    pub fn reduced_motion(&self) -> bool {
        self.viewport.prefers_reduced_motion
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scope/cx.rs"]
mod tests;
