use super::*;

#[test]
fn parses_keywords_percent_and_px() {
    let p = TriggerPoint::parse("top 80%").unwrap();
    assert_eq!(p, TriggerPoint::top(80.0));
    let p = TriggerPoint::parse("center 100px").unwrap();
    assert_eq!(p.element, Anchor::Percent(50.0));
    assert_eq!(p.viewport, Anchor::Px(100.0));
    let p = TriggerPoint::parse("bottom 20").unwrap();
    assert_eq!(p.viewport, Anchor::Px(20.0));
}

#[test]
fn rejects_malformed_points() {
    assert!(TriggerPoint::parse("").is_none());
    assert!(TriggerPoint::parse("top").is_none());
    assert!(TriggerPoint::parse("top 80% extra").is_none());
    assert!(TriggerPoint::parse("middle 10%").is_none());
    assert!("top nan%".parse::<TriggerPoint>().is_err());
}

#[test]
fn display_round_trips_through_serde() {
    let p = TriggerPoint::top(80.0);
    assert_eq!(p.to_string(), "top 80%");
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "\"top 80%\"");
    let back: TriggerPoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn scroll_offset_matches_element_and_viewport_points() {
    let rect = Rect::new(0.0, 1000.0, 800.0, 1200.0);
    // element top (1000) meets 80% of an 800px viewport (640)
    assert_eq!(TriggerPoint::top(80.0).scroll_offset(rect, 800.0), 360.0);
    assert_eq!(TriggerPoint::bottom(0.0).scroll_offset(rect, 800.0), 1200.0);
}

#[test]
fn range_end_never_precedes_start() {
    let rect = Rect::new(0.0, 100.0, 10.0, 110.0);
    let r = ScrollRange::resolve(rect, TriggerPoint::top(0.0), TriggerPoint::top(100.0), 500.0);
    assert_eq!(r.start, 100.0);
    assert_eq!(r.end, 100.0);
    assert_eq!(r.progress(99.0), 0.0);
    assert_eq!(r.progress(100.0), 1.0);
}

#[test]
fn zones_and_progress() {
    let r = ScrollRange { start: 100.0, end: 300.0 };
    assert_eq!(r.zone(50.0), Zone::Before);
    assert_eq!(r.zone(100.0), Zone::Active);
    assert_eq!(r.zone(300.0), Zone::Active);
    assert_eq!(r.zone(301.0), Zone::After);
    assert_eq!(r.progress(200.0), 0.5);
}

#[test]
fn crossings_report_both_edges_on_jumps() {
    use TriggerEvent::*;
    assert_eq!(crossings(Zone::Before, Zone::After).as_slice(), &[Enter, Leave]);
    assert_eq!(crossings(Zone::After, Zone::Before).as_slice(), &[EnterBack, LeaveBack]);
    assert_eq!(crossings(Zone::Active, Zone::Before).as_slice(), &[LeaveBack]);
    assert!(crossings(Zone::Active, Zone::Active).is_empty());
}

#[test]
fn trigger_spec_builders() {
    let spec = TriggerSpec::scroll(NodeId(3), TriggerPoint::top(75.0))
        .end(TriggerPoint::bottom(50.0))
        .policy(ReplayPolicy::Scrub { smoothing: 1.0, once: true });
    match spec.activation {
        Activation::Scroll { trigger, start, end } => {
            assert_eq!(trigger, NodeId(3));
            assert_eq!(start, TriggerPoint::top(75.0));
            assert_eq!(end, TriggerPoint::bottom(50.0));
        }
        Activation::Autoplay { .. } => panic!("expected scroll activation"),
    }
    // end() leaves autoplay untouched
    let auto = TriggerSpec::autoplay(true).end(TriggerPoint::top(0.0));
    assert_eq!(auto.activation, Activation::Autoplay { wait_loaded: true });
}
