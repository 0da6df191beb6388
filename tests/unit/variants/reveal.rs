use super::*;
use crate::{
    animation::props::Prop,
    timeline::trigger::TriggerPoint,
    variants::harness::{Harness, assert_close},
};
use serde_json::json;

#[test]
fn fade_up_hides_then_rests() {
    let mut h = Harness::new(json!({
        "tag": "section",
        "children": [{ "tag": "h2", "attrs": { "data-cue": "fade-up" }, "children": ["Title"] }]
    }));
    h.apply("h2").unwrap();
    let el = h.find("h2");
    assert_close(h.get(el, Prop::Y), 50.0);
    assert!(!h.visible(el));

    let s = &h.scheduled()[0];
    assert_eq!(h.trigger_of(0), (el, TriggerPoint::top(80.0)));
    assert_close(s.def.duration, 1.25);
    let end = s.def.sample(f64::INFINITY);
    assert_eq!(end[&el].get(Prop::Y), Some(0.0));
    assert_eq!(end[&el].get(Prop::Opacity), Some(1.0));
}

#[test]
fn own_duration_and_ease_yield_to_authored_values() {
    let mut h = Harness::new(json!({
        "tag": "section",
        "children": [
            { "tag": "img", "class": "a", "attrs": { "data-cue": "zoom-in" } },
            { "tag": "img", "class": "b",
              "attrs": { "data-cue": "zoom-in", "data-cue-duration": "0.5", "data-cue-ease": "none" } }
        ]
    }));
    h.apply(".a").unwrap();
    h.apply(".b").unwrap();
    let own = &h.scheduled()[0].def.tweens[0];
    assert_close(own.span.len(), 1.9);
    assert_eq!(own.ease, Ease::OutBack(1.05));
    let authored = &h.scheduled()[1].def.tweens[0];
    assert_close(authored.span.len(), 0.5);
    assert_eq!(authored.ease, Ease::Linear);
}

#[test]
fn stagger_animates_children_in_document_order() {
    let mut h = Harness::new(json!({
        "tag": "ul",
        "attrs": { "data-cue": "fade-left", "data-cue-stagger": "0.1", "data-cue-delay": "0.3" },
        "children": [
            { "tag": "li", "class": "one" },
            { "tag": "li", "class": "two" },
            { "tag": "li", "class": "three" }
        ]
    }));
    h.apply("ul").unwrap();
    let ul = h.find("ul");
    for (i, class) in [".one", ".two", ".three"].iter().enumerate() {
        let li = h.find(class);
        assert_close(h.start_of(0, li), 0.3 + 0.1 * i as f64);
        assert_close(h.get(li, Prop::X), -50.0);
    }
    assert!(h.scheduled()[0].def.tweens_of(ul).next().is_none());
}

#[test]
fn stagger_without_children_animates_the_element() {
    let mut h = Harness::new(json!({
        "tag": "p", "attrs": { "data-cue": "slide-up", "data-cue-stagger": "0.2" },
        "children": ["text only"]
    }));
    h.apply("p").unwrap();
    let p = h.find("p");
    assert_close(h.get(p, Prop::Y), 100.0);
    assert_eq!(h.scheduled()[0].def.tweens.len(), 1);
}

#[test]
fn every_reveal_returns_to_rest() {
    for reveal in REVEALS {
        let rest = crate::variants::common::rest(&reveal.from());
        for (prop, v) in rest.iter() {
            assert_eq!(v, prop.default_value(), "{} {prop:?}", reveal.name());
        }
        assert!(!reveal.from().is_empty());
    }
}
