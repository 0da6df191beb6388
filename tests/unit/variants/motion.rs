use super::*;
use crate::{
    animation::props::Prop,
    timeline::trigger::Activation,
    variants::harness::{Harness, PHONE, assert_close},
};
use serde_json::json;

#[test]
fn marquee_loops_forever_on_autoplay() {
    let mut h = Harness::new(json!({
        "tag": "div", "attrs": { "data-cue": "marquee", "data-cue-duration": "12" },
        "children": [
            { "tag": "span", "class": "a", "children": ["News"] },
            { "tag": "span", "class": "b", "children": ["News"] }
        ]
    }));
    h.apply("[data-cue]").unwrap();
    let s = &h.scheduled()[0];
    assert_eq!(s.def.repeat, Repeat::Infinite);
    assert_close(s.def.duration, 12.0);
    assert!(matches!(s.trigger.activation, Activation::Autoplay { .. }));
    let end = s.def.sample(12.0);
    assert_eq!(end[&h.find(".b")].get(Prop::XPercent), Some(-100.0));
}

#[test]
fn marquee_stays_still_for_reduced_motion() {
    let mut h = Harness::on(
        json!({
            "tag": "div", "attrs": { "data-cue": "marquee" },
            "children": [{ "tag": "span" }]
        }),
        PHONE.with_reduced_motion(true),
    );
    assert!(h.apply("[data-cue]").unwrap().is_empty());
}

#[test]
fn parallax_scrubs_the_image_across_the_viewport() {
    let mut h = Harness::new(json!({
        "tag": "div", "attrs": { "data-cue": "parallax-bg", "data-cue-x-amount": "20" },
        "children": [{ "tag": "img" }]
    }));
    h.apply("[data-cue]").unwrap();
    let img = h.find("img");
    assert_close(h.get(img, Prop::YPercent), -20.0);
    let s = &h.scheduled()[0];
    assert_eq!(
        s.trigger.policy,
        ReplayPolicy::Scrub {
            smoothing: 0.0,
            once: false
        }
    );
    match s.trigger.activation {
        Activation::Scroll { start, end, .. } => {
            assert_eq!(start, TriggerPoint::top(100.0));
            assert_eq!(end, TriggerPoint::bottom(0.0));
        }
        Activation::Autoplay { .. } => panic!("parallax must be scroll driven"),
    }
}
