//! Scan entry points and the per-frame clock.

use std::collections::BTreeMap;

use crate::{
    config::{RuntimeConfig, attrs::AttrNames, resolve::resolve},
    document::{
        layout::LayoutProbe,
        node::{Document, NodeId},
    },
    foundation::error::{ScrollCueError, ScrollCueResult},
    responsive::Viewport,
    scope::{Declaration, ScopeState, Scheduled, cx::ApplyCx},
    timeline::trigger::{
        Activation, ReplayPolicy, ScrollRange, TriggerEvent, Zone, crossings,
    },
    variants::{Registry, Variant},
};

/// Class on the document root that opens `wait-loaded` autoplay gates.
pub const LOADED_CLASS: &str = "loaded";

/// Opaque id of a live scan scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ScopeHandle(u64);

/// Host input for one animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameInput {
    /// Vertical scroll offset in px.
    pub scroll_y: f64,
    /// Wall time since the previous frame, seconds.
    pub dt: f64,
}

/// Owns every live scope and drives their timelines.
#[derive(Debug)]
pub struct Runtime {
    settings: RuntimeConfig,
    names: AttrNames,
    registry: Registry,
    scopes: BTreeMap<ScopeHandle, ScopeState>,
    next: u64,
}

impl Runtime {
    /// Runtime with the built-in variants.
    pub fn new(settings: RuntimeConfig) -> ScrollCueResult<Self> {
        Self::with_registry(settings, Registry::with_builtin())
    }

    /// Runtime dispatching to `registry` only.
    pub fn with_registry(settings: RuntimeConfig, registry: Registry) -> ScrollCueResult<Self> {
        settings.validate()?;
        Ok(Self {
            names: AttrNames::new(&settings.attr_prefix),
            settings,
            registry,
            scopes: BTreeMap::new(),
            next: 0,
        })
    }

    /// Add or replace a variant.
    pub fn register(&mut self, variant: impl Variant + 'static) {
        self.registry.register(variant);
    }

    /// Host settings.
    pub fn settings(&self) -> &RuntimeConfig {
        &self.settings
    }

    /// Variant registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Live scope behind `handle`.
    pub fn scope(&self, handle: ScopeHandle) -> Option<&ScopeState> {
        self.scopes.get(&handle)
    }

    /// Handles of every live scope, oldest first.
    pub fn handles(&self) -> Vec<ScopeHandle> {
        self.scopes.keys().copied().collect()
    }

    fn owner_of(&self, root: NodeId) -> Option<ScopeHandle> {
        self.scopes
            .iter()
            .find(|(_, s)| s.root == root)
            .map(|(h, _)| *h)
    }

    fn wired_elsewhere(&self, current: ScopeHandle, el: NodeId) -> bool {
        self.scopes
            .iter()
            .any(|(h, s)| *h != current && s.is_wired(el))
    }

    /// Scan `root` and everything below it.
    ///
    /// A root already owned by a live scope is rescanned in place: declarations that
    /// scope already wired are skipped, so nothing replays and no trigger is stacked
    /// twice. Declarations wired by any other live scope are skipped as well.
    #[tracing::instrument(skip(self, doc, layout))]
    pub fn initialize(
        &mut self,
        doc: &mut Document,
        layout: &dyn LayoutProbe,
        viewport: Viewport,
        root: NodeId,
    ) -> ScrollCueResult<ScopeHandle> {
        if doc.element(root).is_none() {
            return Err(ScrollCueError::document(format!(
                "scan root {} is not an element",
                root.0
            )));
        }
        let handle = match self.owner_of(root) {
            Some(h) => h,
            None => {
                let h = ScopeHandle(self.next);
                self.next += 1;
                self.scopes.insert(
                    h,
                    ScopeState::new(root, viewport, self.settings.line_tolerance),
                );
                h
            }
        };

        let candidates: Vec<NodeId> = std::iter::once(root)
            .chain(doc.descendants(root))
            .filter(|n| doc.has_attr(*n, self.names.name()))
            .filter(|n| !self.wired_elsewhere(handle, *n))
            .collect();

        let Some(scope) = self.scopes.get_mut(&handle) else {
            return Err(ScrollCueError::validation("scope vanished during scan"));
        };
        // Rescans stage new declarations for the device of this scan.
        scope.viewport = viewport;
        let mut wired = 0usize;
        for el in candidates {
            if scope.markers.is_wired(el) {
                continue;
            }
            let Some(config) = resolve(doc, el, &self.names, &self.settings, &viewport) else {
                continue;
            };
            scope.markers.mark_wired(el);
            let mut cx = ApplyCx::new(doc, layout, &self.settings, scope, el, &config.name);
            let produced = self
                .registry
                .dispatch(&config.name, &mut cx, el, &config)
                .unwrap_or_default();
            scope.declarations.push(Declaration {
                node: el,
                config,
                handle: produced,
            });
            wired += 1;
        }
        tracing::debug!(
            wired,
            timelines = scope.scheduled.len(),
            diagnostics = scope.diagnostics.len(),
            "scan finished"
        );
        Ok(handle)
    }

    /// Cancel everything `handle` scheduled and undo its document mutations.
    ///
    /// Returns `false` when the scope was already gone.
    #[tracing::instrument(skip(self, doc))]
    pub fn teardown(&mut self, handle: ScopeHandle, doc: &mut Document) -> bool {
        let Some(mut scope) = self.scopes.remove(&handle) else {
            return false;
        };
        scope.scheduled.clear();
        scope.journal.revert(doc);
        scope.markers.clear();
        tracing::debug!(root = scope.root.0, "scope torn down");
        true
    }

    /// Tear down `handle` and scan its root again for `viewport`.
    pub fn reinitialize(
        &mut self,
        handle: ScopeHandle,
        doc: &mut Document,
        layout: &dyn LayoutProbe,
        viewport: Viewport,
    ) -> ScrollCueResult<ScopeHandle> {
        let root = self
            .scopes
            .get(&handle)
            .map(|s| s.root)
            .ok_or_else(|| ScrollCueError::validation(format!("unknown scope {handle:?}")))?;
        self.teardown(handle, doc);
        self.initialize(doc, layout, viewport, root)
    }

    /// Evaluate every trigger against `input.scroll_y`, advance play heads by
    /// `input.dt` and write the sampled values into `doc`.
    pub fn tick(&mut self, doc: &mut Document, layout: &dyn LayoutProbe, input: FrameInput) {
        let loaded = doc.has_class(doc.root(), LOADED_CLASS);
        for scope in self.scopes.values_mut() {
            let height = scope.viewport.height;
            for s in &mut scope.scheduled {
                if s.frozen {
                    continue;
                }
                drive(s, doc, layout, height, loaded, input);
                s.playback.advance(input.dt);
                if s.playback.take_dirty() {
                    render(s, doc);
                }
                if s.playback.is_complete() && freezes(s.trigger.policy) {
                    s.frozen = true;
                }
            }

            let mut owners: BTreeMap<NodeId, bool> = BTreeMap::new();
            for s in &scope.scheduled {
                if freezes(s.trigger.policy) {
                    *owners.entry(s.owner).or_insert(true) &= s.frozen;
                }
            }
            for (owner, done) in owners {
                if done && !scope.markers.is_revealed(owner) {
                    tracing::debug!(node = owner.0, "reveal finished");
                    scope.markers.mark_revealed(owner);
                }
            }
        }
    }
}

/// Policies whose timelines stop for good once they reach the end.
fn freezes(policy: ReplayPolicy) -> bool {
    matches!(
        policy,
        ReplayPolicy::Once | ReplayPolicy::Scrub { once: true, .. }
    )
}

/// Update one play head from the trigger state.
fn drive(
    s: &mut Scheduled,
    doc: &Document,
    layout: &dyn LayoutProbe,
    viewport_height: f64,
    loaded: bool,
    input: FrameInput,
) {
    let (trigger, start, end) = match s.trigger.activation {
        Activation::Autoplay { wait_loaded } => {
            if !s.started && (loaded || !wait_loaded) {
                s.started = true;
                s.playback.play();
            }
            return;
        }
        Activation::Scroll {
            trigger,
            start,
            end,
        } => (trigger, start, end),
    };
    // Unmeasurable triggers wait for a later frame.
    let Some(rect) = layout.rect(doc, trigger) else {
        return;
    };
    let range = ScrollRange::resolve(rect, start, end, viewport_height);
    let zone = range.zone(input.scroll_y);
    let events = crossings(s.zone.unwrap_or(Zone::Before), zone);
    s.zone = Some(zone);

    match s.trigger.policy {
        ReplayPolicy::Once => {
            if !s.started && events.contains(&TriggerEvent::Enter) {
                s.started = true;
                s.playback.play();
            }
        }
        ReplayPolicy::Toggle { reverse_on_leave } => {
            for event in events {
                match event {
                    TriggerEvent::Enter | TriggerEvent::EnterBack => {
                        s.started = true;
                        s.playback.play();
                    }
                    TriggerEvent::Leave if reverse_on_leave => s.playback.reverse(),
                    TriggerEvent::LeaveBack => s.playback.reverse(),
                    TriggerEvent::Leave => {}
                }
            }
        }
        ReplayPolicy::Scrub { smoothing, .. } => {
            let progress = range.progress(input.scroll_y);
            if s.scrub != Some(progress) {
                s.scrub = Some(progress);
                s.started = true;
                s.playback.scrub_to(progress, smoothing);
            }
        }
    }
}

fn render(s: &Scheduled, doc: &mut Document) {
    for (node, props) in s.def.sample(s.playback.sample_time()) {
        match doc.style_mut(node) {
            Ok(style) => style.apply(&props),
            Err(err) => tracing::warn!(node = node.0, %err, "animated node is gone"),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/runtime.rs"]
mod tests;
