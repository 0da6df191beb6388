use super::*;

#[test]
fn defaults_match_declared_fallbacks() {
    let cfg = RuntimeConfig::default();
    assert_eq!(cfg.attr_prefix, "data-cue");
    assert_eq!(cfg.defaults.duration, 1.25);
    assert_eq!(cfg.defaults.start, TriggerPoint::top(80.0));
    assert_eq!(cfg.line_tolerance, 1.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg = RuntimeConfig::from_json(
        r#"{ "attr_prefix": "data-anim", "defaults": { "start": "top 60%" } }"#,
    )
    .unwrap();
    assert_eq!(cfg.attr_prefix, "data-anim");
    assert_eq!(cfg.defaults.start, TriggerPoint::top(60.0));
    assert_eq!(cfg.defaults.duration, 1.25);
    assert_eq!(cfg.breakpoints.mobile_max, 991.0);
}

#[test]
fn rejects_unusable_settings() {
    assert!(RuntimeConfig::from_json(r#"{ "attr_prefix": " " }"#).is_err());
    assert!(RuntimeConfig::from_json(r#"{ "defaults": { "duration": 0 } }"#).is_err());
    assert!(RuntimeConfig::from_json(r#"{ "line_tolerance": -1 }"#).is_err());
    assert!(RuntimeConfig::from_json(r#"{ "defaults": { "start": "nowhere" } }"#).is_err());
}
