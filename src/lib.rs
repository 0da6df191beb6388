//! ScrollCue is a declarative scroll-driven animation runtime.
//!
//! Elements opt in with a `data-cue="<variant>"` attribute plus optional parameter
//! attributes. A scan resolves every declaration, hands it to the named
//! [`Variant`], and schedules the resulting timelines behind scroll or autoplay
//! triggers:
//!
//! - Load a [`Document`] (for example from [`Markup`])
//! - Create a [`Runtime`] and [`initialize`](Runtime::initialize) a scan root
//! - Feed scroll positions to [`Runtime::tick`] once per frame
//! - [`teardown`](Runtime::teardown) to cancel triggers and restore the document
//!
//! Problems found while scanning never abort the scan; they are collected as
//! [`Diagnostic`]s on the owning scope.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod document;
pub(crate) mod responsive;
pub(crate) mod runtime;
pub(crate) mod scope;
pub(crate) mod segment;
/// Timeline construction, sampling, play heads and triggers.
pub mod timeline;
pub(crate) mod variants;

pub use crate::foundation::core::{Point, Rect, TIME_EPSILON, TimeSpan, Vec2};
pub use crate::foundation::error::{ScrollCueError, ScrollCueResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::props::{Prop, Props, Style};
pub use crate::config::attrs::{AttrNames, DEFAULT_PREFIX};
pub use crate::config::resolve::{Config, Param, TargetMode, resolve};
pub use crate::config::{Defaults, RuntimeConfig};
pub use crate::document::layout::{FixedMetricsLayout, LayoutProbe};
pub use crate::document::markup::{LoadedMarkup, Markup, MarkupElement};
pub use crate::document::node::{
    Document, ElementData, NodeId, NodeKind, accessible_text, normalize_whitespace,
};
pub use crate::document::selector::{AttrMatch, Compound, Selector};
pub use crate::responsive::{Breakpoints, DeviceClass, Viewport};
pub use crate::runtime::{FrameInput, LOADED_CLASS, Runtime, ScopeHandle};
pub use crate::scope::cx::ApplyCx;
pub use crate::scope::{
    Declaration, Diagnostic, DiagnosticKind, Handle, Scheduled, ScopeState, TimelineId,
};
pub use crate::segment::lines::{DEFAULT_LINE_TOLERANCE, LineGrouper, TopAligned};
pub use crate::segment::split::{
    CHAR_CLASS, Granularity, LINE_CLASS, SCRIPT_CLASS, Segmenter, Segments, WORD_CLASS,
};
pub use crate::timeline::trigger::TriggerPoint;
pub use crate::variants::clip::CLIP_REVEAL_CLASS;
pub use crate::variants::reveal::Reveal;
pub use crate::variants::{Choreography, Registry, Variant};
