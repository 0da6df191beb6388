//! Scan scopes: everything one `initialize` call created, and how to undo it.

pub(crate) mod cx;
pub(crate) mod journal;
pub(crate) mod markers;

use crate::{
    config::resolve::Config,
    document::node::NodeId,
    responsive::Viewport,
    scope::{journal::Journal, markers::Markers},
    timeline::{
        model::TimelineDef,
        playback::Playback,
        trigger::{TriggerSpec, Zone},
    },
};

/// Index of a scheduled timeline inside its scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TimelineId(pub usize);

/// What a variant handler scheduled.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Handle {
    /// Timelines in scheduling order.
    pub timelines: Vec<TimelineId>,
}

impl Handle {
    /// Return `true` when nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}

/// Category of a scan diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// No variant is registered under the declared name.
    UnknownVariant,
    /// A sub-element the variant looks for is absent; that stage was skipped.
    MissingTarget,
    /// The handler returned an error; the declaration was skipped.
    Failed,
}

/// Non-fatal problem found while scanning.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    /// Category.
    pub kind: DiagnosticKind,
    /// Declaring element.
    pub node: NodeId,
    /// Variant name as resolved.
    pub variant: String,
    /// Human-readable detail.
    pub message: String,
}

/// One resolved declaration and what it produced.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Declaration {
    /// Declaring element.
    pub node: NodeId,
    /// Resolved parameters.
    pub config: Config,
    /// Timelines it scheduled.
    pub handle: Handle,
}

/// A timeline registered behind a trigger.
#[derive(Clone, Debug)]
pub struct Scheduled {
    /// Declaring element.
    pub owner: NodeId,
    /// Immutable description.
    pub def: TimelineDef,
    /// Start condition and replay behavior.
    pub trigger: TriggerSpec,
    /// Play head.
    pub playback: Playback,
    pub(crate) zone: Option<Zone>,
    pub(crate) started: bool,
    pub(crate) frozen: bool,
    pub(crate) scrub: Option<f64>,
}

impl Scheduled {
    pub(crate) fn new(owner: NodeId, def: TimelineDef, trigger: TriggerSpec) -> Self {
        let playback = Playback::new(def.duration, def.repeat);
        Self {
            owner,
            def,
            trigger,
            playback,
            zone: None,
            started: false,
            frozen: false,
            scrub: None,
        }
    }
}

/// Everything one scan scope owns.
#[derive(Debug)]
pub struct ScopeState {
    /// Scanned subtree.
    pub root: NodeId,
    /// Viewport the scope was staged for.
    pub viewport: Viewport,
    pub(crate) journal: Journal,
    pub(crate) markers: Markers,
    pub(crate) scheduled: Vec<Scheduled>,
    pub(crate) declarations: Vec<Declaration>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl ScopeState {
    pub(crate) fn new(root: NodeId, viewport: Viewport, line_tolerance: f64) -> Self {
        Self {
            root,
            viewport,
            journal: Journal::default(),
            markers: Markers::new(line_tolerance),
            scheduled: Vec::new(),
            declarations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scheduled timelines.
    pub fn scheduled(&self) -> &[Scheduled] {
        &self.scheduled
    }

    /// Resolved declarations in scan order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Diagnostics in scan order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether the declaration on `el` was dispatched by this scope.
    pub fn is_wired(&self, el: NodeId) -> bool {
        self.markers.is_wired(el)
    }

    /// Whether every one-shot timeline of `el` has finished.
    pub fn is_revealed(&self, el: NodeId) -> bool {
        self.markers.is_revealed(el)
    }

    pub(crate) fn report(
        &mut self,
        kind: DiagnosticKind,
        node: NodeId,
        variant: &str,
        message: impl Into<String>,
    ) {
        let message = message.into();
        tracing::warn!(node = node.0, variant, ?kind, "{message}");
        self.diagnostics.push(Diagnostic {
            kind,
            node,
            variant: variant.to_owned(),
            message,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scope/mod.rs"]
mod tests;
