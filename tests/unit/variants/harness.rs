//! Applies built-in variants to markup fixtures outside a full runtime.

use crate::{
    animation::props::Prop,
    config::{RuntimeConfig, attrs::AttrNames, resolve::resolve},
    document::{
        layout::FixedMetricsLayout,
        markup::Markup,
        node::{Document, NodeId},
        selector::Selector,
    },
    responsive::Viewport,
    scope::{Handle, ScopeState, Scheduled, cx::ApplyCx},
    timeline::trigger::{Activation, TriggerPoint},
    variants::Registry,
};

pub(crate) const DESKTOP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
    pointer_coarse: false,
    prefers_reduced_motion: false,
};

pub(crate) const PHONE: Viewport = Viewport {
    width: 390.0,
    height: 844.0,
    pointer_coarse: true,
    prefers_reduced_motion: false,
};

pub(crate) struct Harness {
    pub doc: Document,
    pub layout: FixedMetricsLayout,
    pub settings: RuntimeConfig,
    pub scope: ScopeState,
    registry: Registry,
}

impl Harness {
    pub fn new(markup: serde_json::Value) -> Self {
        Self::on(markup, DESKTOP)
    }

    pub fn on(markup: serde_json::Value, viewport: Viewport) -> Self {
        let markup: Markup = serde_json::from_value(markup).unwrap();
        let loaded = markup.load().unwrap();
        let settings = RuntimeConfig::default();
        let scope = ScopeState::new(loaded.top, viewport, settings.line_tolerance);
        Self {
            doc: loaded.doc,
            layout: FixedMetricsLayout::new(viewport.width).with_rects(loaded.rects),
            settings,
            scope,
            registry: Registry::with_builtin(),
        }
    }

    pub fn find(&self, selector: &str) -> NodeId {
        let sel = Selector::parse(selector).unwrap();
        self.doc
            .query(self.doc.root(), &sel)
            .unwrap_or_else(|| panic!("fixture has no {selector}"))
    }

    pub fn find_all(&self, selector: &str) -> Vec<NodeId> {
        let sel = Selector::parse(selector).unwrap();
        self.doc.query_all(self.doc.root(), &sel)
    }

    /// Dispatch the declaration carried by the first match of `selector`.
    pub fn apply(&mut self, selector: &str) -> Option<Handle> {
        let el = self.find(selector);
        let names = AttrNames::new(&self.settings.attr_prefix);
        let cfg = resolve(&self.doc, el, &names, &self.settings, &self.scope.viewport)
            .expect("element carries a declaration");
        let mut cx = ApplyCx::new(
            &mut self.doc,
            &self.layout,
            &self.settings,
            &mut self.scope,
            el,
            &cfg.name,
        );
        self.registry.dispatch(&cfg.name, &mut cx, el, &cfg)
    }

    pub fn scheduled(&self) -> &[Scheduled] {
        self.scope.scheduled()
    }

    pub fn get(&self, node: NodeId, prop: Prop) -> f64 {
        self.doc.style(node).unwrap().get(prop)
    }

    pub fn visible(&self, node: NodeId) -> bool {
        self.doc.style(node).unwrap().is_visible()
    }

    /// Trigger element and start point of the `i`-th scheduled timeline.
    pub fn trigger_of(&self, i: usize) -> (NodeId, TriggerPoint) {
        match self.scheduled()[i].trigger.activation {
            Activation::Scroll { trigger, start, .. } => (trigger, start),
            Activation::Autoplay { .. } => panic!("timeline {i} autoplays"),
        }
    }

    /// Start time of the first tween of `node` in timeline `i`.
    pub fn start_of(&self, i: usize, node: NodeId) -> f64 {
        self.scheduled()[i]
            .def
            .tweens_of(node)
            .next()
            .unwrap_or_else(|| panic!("node {} is not animated by timeline {i}", node.0))
            .span
            .start
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
