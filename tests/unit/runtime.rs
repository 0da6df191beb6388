use super::*;
use crate::{
    animation::{
        ease::Ease,
        props::{Prop, Props},
    },
    config::resolve::Config,
    document::{layout::FixedMetricsLayout, markup::Markup, selector::Selector},
    scope::DiagnosticKind,
    timeline::{
        builder::{Position, TimelineBuilder, Timing},
        trigger::{TriggerPoint, TriggerSpec},
    },
    variants::{Choreography, common::commit},
};
use serde_json::json;

const DESKTOP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
    pointer_coarse: false,
    prefers_reduced_motion: false,
};

const PHONE: Viewport = Viewport {
    width: 390.0,
    height: 844.0,
    pointer_coarse: true,
    prefers_reduced_motion: false,
};

struct Page {
    rt: Runtime,
    doc: Document,
    layout: FixedMetricsLayout,
    top: NodeId,
}

impl Page {
    fn new(markup: serde_json::Value) -> Self {
        let markup: Markup = serde_json::from_value(markup).unwrap();
        let loaded = markup.load().unwrap();
        Self {
            rt: Runtime::new(RuntimeConfig::default()).unwrap(),
            doc: loaded.doc,
            layout: FixedMetricsLayout::new(DESKTOP.width).with_rects(loaded.rects),
            top: loaded.top,
        }
    }

    fn scan(&mut self, root: NodeId) -> ScopeHandle {
        self.rt
            .initialize(&mut self.doc, &self.layout, DESKTOP, root)
            .unwrap()
    }

    fn frame(&mut self, scroll_y: f64, dt: f64) {
        self.rt
            .tick(&mut self.doc, &self.layout, FrameInput { scroll_y, dt });
    }

    fn find(&self, selector: &str) -> NodeId {
        let sel = Selector::parse(selector).unwrap();
        self.doc.query(self.doc.root(), &sel).unwrap()
    }

    fn get(&self, node: NodeId, prop: Prop) -> f64 {
        self.doc.style(node).unwrap().get(prop)
    }
}

fn close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn card(name: &str) -> serde_json::Value {
    json!({
        "tag": "main",
        "children": [
            { "tag": "div", "class": "card", "attrs": { "data-cue": name },
              "rect": [0, 1000, 400, 200], "children": ["Card"] }
        ]
    })
}

fn toggle_fade(cx: &mut ApplyCx<'_>, el: NodeId, _cfg: &Config) -> ScrollCueResult<()> {
    let mut b = TimelineBuilder::new();
    b.from_to(
        &[el],
        &Props::new().opacity(0.0),
        Props::new().opacity(1.0),
        Timing::new(1.0, Ease::Linear),
        Position::At(0.0),
    );
    let trigger = TriggerSpec::scroll(el, TriggerPoint::top(80.0)).policy(ReplayPolicy::Toggle {
        reverse_on_leave: false,
    });
    commit(cx, b, trigger)?;
    Ok(())
}

#[test]
fn rejects_invalid_settings() {
    let mut settings = RuntimeConfig::default();
    settings.attr_prefix = "  ".to_owned();
    assert!(Runtime::new(settings).is_err());
}

#[test]
fn scan_includes_the_root_itself() {
    let mut page = Page::new(card("fade-up"));
    let el = page.find(".card");
    let handle = page.scan(el);
    let scope = page.rt.scope(handle).unwrap();
    assert_eq!(scope.declarations().len(), 1);
    assert!(scope.is_wired(el));
    close(page.get(el, Prop::Y), 50.0);
}

#[test]
fn text_root_is_rejected() {
    let mut page = Page::new(card("fade-up"));
    let text = page.doc.append_text(page.top, "loose").unwrap();
    let err = page
        .rt
        .initialize(&mut page.doc, &page.layout, DESKTOP, text)
        .unwrap_err();
    assert!(err.to_string().contains("not an element"));
}

#[test]
fn rescan_is_idempotent_and_picks_up_new_declarations() {
    let mut page = Page::new(card("fade-up"));
    let first = page.scan(page.top);
    let again = page.scan(page.top);
    assert_eq!(first, again);
    assert_eq!(page.rt.handles().len(), 1);
    let scope = page.rt.scope(first).unwrap();
    assert_eq!(scope.declarations().len(), 1);
    assert_eq!(scope.scheduled().len(), 1);

    let late = page.doc.append_element(page.top, "div", "late").unwrap();
    page.doc.set_attr(late, "data-cue", "fade-in").unwrap();
    page.doc.append_text(late, "Later").unwrap();
    page.scan(page.top);
    let scope = page.rt.scope(first).unwrap();
    assert_eq!(scope.declarations().len(), 2);
    assert_eq!(scope.scheduled().len(), 2);
}

#[test]
fn nested_scope_keeps_declarations_of_the_inner_one() {
    let mut page = Page::new(json!({
        "tag": "main",
        "children": [
            { "tag": "section", "class": "inner", "children": [
                { "tag": "div", "class": "a", "attrs": { "data-cue": "fade-up" }, "children": ["A"] }
            ]},
            { "tag": "div", "class": "b", "attrs": { "data-cue": "fade-left" }, "children": ["B"] }
        ]
    }));
    let inner = page.scan(page.find(".inner"));
    let outer = page.scan(page.top);
    assert_ne!(inner, outer);
    let outer_nodes: Vec<NodeId> = page
        .rt
        .scope(outer)
        .unwrap()
        .declarations()
        .iter()
        .map(|d| d.node)
        .collect();
    assert_eq!(outer_nodes, vec![page.find(".b")]);

    assert!(page.rt.teardown(outer, &mut page.doc));
    close(page.get(page.find(".a"), Prop::Y), 50.0);
    assert!(page.doc.style(page.find(".b")).unwrap().is_empty());
}

#[test]
fn sibling_scope_keeps_running_after_its_neighbour_is_torn_down() {
    let mut page = Page::new(json!({
        "tag": "main",
        "children": [
            { "tag": "section", "class": "left", "children": [
                { "tag": "div", "class": "a", "attrs": { "data-cue": "fade-up" },
                  "rect": [0, 1000, 400, 200], "children": ["A"] }
            ]},
            { "tag": "section", "class": "right", "children": [
                { "tag": "div", "class": "b", "attrs": { "data-cue": "fade-up" },
                  "rect": [600, 1000, 400, 200], "children": ["B"] }
            ]}
        ]
    }));
    let (a, b) = (page.find(".a"), page.find(".b"));
    let left = page.scan(page.find(".left"));
    let right = page.scan(page.find(".right"));
    assert_ne!(left, right);
    assert_eq!(page.rt.handles().len(), 2);

    assert!(page.rt.teardown(left, &mut page.doc));
    assert!(page.doc.style(a).unwrap().is_empty());
    close(page.get(b, Prop::Y), 50.0);

    page.frame(400.0, 0.0);
    page.frame(400.0, 2.0);
    close(page.get(b, Prop::Y), 0.0);
    close(page.get(b, Prop::Opacity), 1.0);
    assert!(page.rt.scope(right).unwrap().is_revealed(b));
    assert!(page.doc.style(a).unwrap().is_empty());
    assert!(page.rt.scope(left).is_none());
}

#[test]
fn teardown_restores_the_document() {
    let mut page = Page::new(json!({
        "tag": "main",
        "children": [
            { "tag": "h1", "attrs": { "data-cue": "chars" }, "rect": [0, 900, 800, 80], "children": ["Home"] },
            { "tag": "div", "attrs": { "data-cue": "fade-up", "data-cue-stagger": "0.1" }, "children": [
                { "tag": "p", "children": ["one"] },
                { "tag": "p", "children": ["two"] }
            ]}
        ]
    }));
    let before = Markup::from_document(&page.doc, page.top).unwrap();
    let handle = page.scan(page.top);
    assert_ne!(Markup::from_document(&page.doc, page.top).unwrap(), before);
    page.frame(2000.0, 0.5);

    assert!(page.rt.teardown(handle, &mut page.doc));
    assert_eq!(Markup::from_document(&page.doc, page.top).unwrap(), before);
    for node in page.doc.descendants(page.top) {
        if let Some(style) = page.doc.style(node) {
            assert!(style.is_empty(), "node {} kept a style", node.0);
        }
    }
    assert!(!page.rt.teardown(handle, &mut page.doc));
    assert!(page.rt.handles().is_empty());
}

#[test]
fn once_reveal_plays_and_freezes() {
    let mut page = Page::new(card("fade-up"));
    let el = page.find(".card");
    let handle = page.scan(page.top);

    // Start sits at 1000 - 0.8 * 800.
    page.frame(300.0, 0.1);
    close(page.get(el, Prop::Opacity), 0.0);
    assert!(!page.rt.scope(handle).unwrap().scheduled()[0].playback.is_complete());

    page.frame(400.0, 0.0);
    page.frame(400.0, 2.0);
    close(page.get(el, Prop::Y), 0.0);
    close(page.get(el, Prop::Opacity), 1.0);
    assert!(page.rt.scope(handle).unwrap().is_revealed(el));

    page.frame(0.0, 1.0);
    close(page.get(el, Prop::Opacity), 1.0);
}

#[test]
fn page_loaded_past_a_reveal_still_plays_it() {
    let mut page = Page::new(card("fade-up"));
    let el = page.find(".card");
    page.scan(page.top);
    page.frame(5000.0, 0.0);
    page.frame(5000.0, 2.0);
    close(page.get(el, Prop::Opacity), 1.0);
}

#[test]
fn toggle_reverses_when_scrolling_back_above_the_start() {
    let mut page = Page::new(card("toggle-fade"));
    page.rt
        .register(Choreography::new("toggle-fade", toggle_fade));
    let el = page.find(".card");
    let handle = page.scan(page.top);

    page.frame(400.0, 0.0);
    page.frame(400.0, 1.5);
    close(page.get(el, Prop::Opacity), 1.0);

    page.frame(0.0, 0.5);
    close(page.get(el, Prop::Opacity), 0.5);
    page.frame(0.0, 1.0);
    close(page.get(el, Prop::Opacity), 0.0);

    page.frame(400.0, 0.25);
    close(page.get(el, Prop::Opacity), 0.25);
    assert!(!page.rt.scope(handle).unwrap().is_revealed(el));
}

#[test]
fn scrub_follows_the_scroll_position() {
    let mut page = Page::new(json!({
        "tag": "main",
        "children": [
            { "tag": "div", "attrs": { "data-cue": "parallax-bg" }, "rect": [0, 1000, 1280, 400],
              "children": [{ "tag": "img" }] }
        ]
    }));
    let img = page.find("img");
    page.scan(page.top);
    close(page.get(img, Prop::YPercent), -15.0);

    // Range runs from 1000 - 800 to 1400.
    page.frame(500.0, 0.016);
    close(page.get(img, Prop::YPercent), -7.5);
    page.frame(1400.0, 0.016);
    close(page.get(img, Prop::YPercent), 15.0);
    page.frame(200.0, 0.016);
    close(page.get(img, Prop::YPercent), -15.0);
}

#[test]
fn autoplay_waits_for_the_loaded_class() {
    let mut page = Page::new(json!({
        "tag": "div", "attrs": { "data-cue": "marquee", "data-cue-wait-loaded": "" },
        "children": [{ "tag": "span", "children": ["News"] }]
    }));
    let item = page.find("span");
    page.scan(page.top);

    page.frame(0.0, 5.0);
    close(page.get(item, Prop::XPercent), 0.0);

    let root = page.doc.root();
    page.doc.add_class(root, LOADED_CLASS).unwrap();
    page.frame(0.0, 0.0);
    page.frame(0.0, 5.0);
    close(page.get(item, Prop::XPercent), -25.0);
}

#[test]
fn reinitialize_restages_for_the_new_viewport() {
    let mut page = Page::new(json!({
        "tag": "main",
        "children": [
            { "tag": "div", "class": "card",
              "attrs": { "data-cue": "fade-up", "data-cue-mobile": "fade-in" },
              "children": ["Card"] }
        ]
    }));
    let el = page.find(".card");
    let desktop = page.scan(page.top);
    assert_eq!(
        page.rt.scope(desktop).unwrap().declarations()[0].config.name,
        "fade-up"
    );

    let phone = page
        .rt
        .reinitialize(desktop, &mut page.doc, &page.layout, PHONE)
        .unwrap();
    assert!(page.rt.scope(desktop).is_none());
    let scope = page.rt.scope(phone).unwrap();
    assert_eq!(scope.declarations()[0].config.name, "fade-in");
    assert_eq!(scope.viewport, PHONE);
    close(page.get(el, Prop::Y), 0.0);
    close(page.get(el, Prop::Opacity), 0.0);
}

#[test]
fn unknown_variant_does_not_stop_the_scan() {
    let mut page = Page::new(json!({
        "tag": "main",
        "children": [
            { "tag": "div", "class": "odd", "attrs": { "data-cue": "wobble" } },
            { "tag": "div", "class": "fine", "attrs": { "data-cue": "fade-up" }, "children": ["ok"] }
        ]
    }));
    let handle = page.scan(page.top);
    let scope = page.rt.scope(handle).unwrap();
    assert_eq!(scope.diagnostics().len(), 1);
    assert_eq!(scope.diagnostics()[0].kind, DiagnosticKind::UnknownVariant);
    assert_eq!(scope.scheduled().len(), 1);
    assert!(scope.declarations()[0].handle.is_empty());
}

#[test]
fn reinitialize_of_unknown_scope_fails() {
    let mut page = Page::new(card("fade-up"));
    let handle = page.scan(page.top);
    page.rt.teardown(handle, &mut page.doc);
    assert!(
        page.rt
            .reinitialize(handle, &mut page.doc, &page.layout, DESKTOP)
            .is_err()
    );
}
