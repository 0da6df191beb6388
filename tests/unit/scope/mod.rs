use super::*;

#[test]
fn report_records_diagnostic() {
    let mut scope = ScopeState::new(NodeId(0), Viewport::new(1280.0, 800.0), 1.0);
    scope.report(DiagnosticKind::UnknownVariant, NodeId(4), "wobble", "unknown variant");
    let d = &scope.diagnostics()[0];
    assert_eq!(d.kind, DiagnosticKind::UnknownVariant);
    assert_eq!(d.node, NodeId(4));
    assert_eq!(d.variant, "wobble");
}

#[test]
fn diagnostic_kinds_serialize_kebab_case() {
    let json = serde_json::to_string(&DiagnosticKind::MissingTarget).unwrap();
    assert_eq!(json, "\"missing-target\"");
}

#[test]
fn new_scheduled_is_idle() {
    let s = Scheduled::new(NodeId(1), TimelineDef::default(), TriggerSpec::autoplay(false));
    assert!(!s.started);
    assert!(s.zone.is_none());
    assert_eq!(s.playback.time(), 0.0);
}
