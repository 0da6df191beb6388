use super::*;
use crate::{
    animation::{ease::Ease, props::Prop},
    document::layout::FixedMetricsLayout,
    timeline::builder::{Position, TimelineBuilder, Timing},
    timeline::trigger::TriggerPoint,
};

fn fixture() -> (Document, NodeId, ScopeState, RuntimeConfig) {
    let mut doc = Document::new();
    let root = doc.root();
    let el = doc.append_element(root, "div", "box").unwrap();
    let scope = ScopeState::new(root, Viewport::new(1280.0, 800.0), 1.0);
    (doc, el, scope, RuntimeConfig::default())
}

#[test]
fn schedule_applies_initial_state_and_journals_it() {
    let (mut doc, el, mut scope, settings) = fixture();
    let layout = FixedMetricsLayout::new(1280.0);
    {
        let mut cx = ApplyCx::new(&mut doc, &layout, &settings, &mut scope, el, "fade-up");
        let mut b = TimelineBuilder::new();
        b.from_to(
            &[el],
            &Props::new().y(50.0).auto_alpha(0.0),
            Props::new().y(0.0).auto_alpha(1.0),
            Timing::new(1.0, Ease::OutCubic),
            Position::At(0.0),
        );
        let def = b.build(cx.doc).unwrap();
        let id = cx.schedule(def, TriggerSpec::scroll(el, TriggerPoint::top(80.0)));
        assert_eq!(id, TimelineId(0));
        assert_eq!(cx.handle().timelines, vec![id]);
    }
    let style = doc.style(el).unwrap();
    assert_eq!(style.get(Prop::Y), 50.0);
    assert!(!style.is_visible());

    scope.journal.revert(&mut doc);
    assert!(doc.style(el).unwrap().is_empty());
}

#[test]
fn segment_is_journaled_once() {
    let (mut doc, el, mut scope, settings) = fixture();
    doc.append_text(el, "Home").unwrap();
    let layout = FixedMetricsLayout::new(1280.0);
    {
        let mut cx = ApplyCx::new(&mut doc, &layout, &settings, &mut scope, el, "chars");
        let first = cx.segment(el, Granularity::Char).unwrap();
        let again = cx.segment(el, Granularity::Char).unwrap();
        assert_eq!(first, again);
        assert_eq!(first.chars.len(), 4);
    }
    assert_eq!(doc.attr(el, "aria-label"), Some("Home"));
    scope.journal.revert(&mut doc);
    assert_eq!(doc.text_content(el), "Home");
    assert_eq!(doc.attr(el, "aria-label"), None);
}

#[test]
fn wrap_inserts_wrapper_in_place() {
    let (mut doc, el, mut scope, settings) = fixture();
    let root = doc.root();
    let after = doc.append_element(root, "div", "after").unwrap();
    let layout = FixedMetricsLayout::new(1280.0);
    let wrapper = {
        let mut cx = ApplyCx::new(&mut doc, &layout, &settings, &mut scope, el, "tilt-card");
        cx.wrap(el, "div").unwrap()
    };
    assert_eq!(doc.children(root), &[wrapper, after]);
    assert_eq!(doc.parent(el), Some(wrapper));
    scope.journal.revert(&mut doc);
    assert_eq!(doc.children(root), &[el, after]);
    assert_eq!(doc.parent(el), Some(root));
}

#[test]
fn missing_reports_once_per_call() {
    let (mut doc, el, mut scope, settings) = fixture();
    let layout = FixedMetricsLayout::new(1280.0);
    {
        let mut cx = ApplyCx::new(&mut doc, &layout, &settings, &mut scope, el, "hero-home");
        assert!(cx.query(el, ".hero__slider").unwrap().is_none());
        cx.missing(".hero__slider");
        assert!(cx.flag(el, "init"));
        assert!(!cx.flag(el, "init"));
    }
    assert_eq!(scope.diagnostics().len(), 1);
    assert_eq!(scope.diagnostics()[0].kind, DiagnosticKind::MissingTarget);
}
