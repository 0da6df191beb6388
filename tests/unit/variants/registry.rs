use super::*;
use crate::{
    foundation::error::ScrollCueError,
    scope::DiagnosticKind,
    variants::harness::Harness,
};
use serde_json::json;

fn boom(_cx: &mut ApplyCx<'_>, _el: NodeId, _cfg: &Config) -> ScrollCueResult<()> {
    Err(ScrollCueError::validation("boom"))
}

#[test]
fn builtin_catalogue_is_complete() {
    let reg = Registry::with_builtin();
    let names = reg.names();
    assert_eq!(names.len(), 44);
    for name in [
        "fade-up",
        "scale-up",
        "clip-reveal-center",
        "news-card",
        "scroll-text-reveal",
        "hero-preschool",
        "three-campuses",
        "tilt-card",
        "marquee",
        "parallax-bg",
    ] {
        assert!(reg.contains(name), "{name} missing");
    }
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn unknown_name_reports_once_and_schedules_nothing() {
    let mut h = Harness::new(json!({
        "tag": "div", "attrs": { "data-cue": "wobble" }
    }));
    assert_eq!(h.apply("[data-cue]"), None);
    assert!(h.scheduled().is_empty());
    let diags = h.scope.diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::UnknownVariant);
    assert_eq!(diags[0].variant, "wobble");
}

#[test]
fn handler_errors_become_diagnostics() {
    let mut reg = Registry::new();
    reg.register(Choreography::new("boom", boom));
    let mut h = Harness::new(json!({ "tag": "div", "attrs": { "data-cue": "boom" } }));
    let el = h.find("[data-cue]");
    let cfg = crate::config::resolve::resolve(
        &h.doc,
        el,
        &crate::config::attrs::AttrNames::default(),
        &h.settings,
        &h.scope.viewport,
    )
    .unwrap();
    let mut cx = ApplyCx::new(&mut h.doc, &h.layout, &h.settings, &mut h.scope, el, "boom");
    assert_eq!(reg.dispatch("boom", &mut cx, el, &cfg), None);
    let d = &h.scope.diagnostics()[0];
    assert_eq!(d.kind, DiagnosticKind::Failed);
    assert!(d.message.contains("boom"));
}

#[test]
fn register_replaces_by_name() {
    let mut reg = Registry::with_builtin();
    reg.register(Choreography::new("fade-up", boom));
    assert_eq!(reg.names().len(), 44);
    assert!(format!("{reg:?}").contains("fade-up"));
}

#[test]
fn handle_lists_scheduled_timelines() {
    let mut h = Harness::new(json!({
        "tag": "section",
        "children": [{ "tag": "div", "attrs": { "data-cue": "fade-up" }, "children": ["Hi"] }]
    }));
    let handle = h.apply("[data-cue]").unwrap();
    assert_eq!(handle.timelines.len(), 1);
    assert_eq!(h.scheduled().len(), 1);
}
