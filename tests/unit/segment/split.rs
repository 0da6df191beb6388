use super::*;
use crate::document::layout::FixedMetricsLayout;
use crate::document::node::accessible_text;

fn heading(text: &str) -> (Document, NodeId, FixedMetricsLayout) {
    let mut doc = Document::new();
    let root = doc.root();
    let h = doc.append_element(root, "h2", "").unwrap();
    doc.append_text(h, text).unwrap();
    let mut layout = FixedMetricsLayout::new(1280.0);
    layout.set_rect(h, Rect::new(0.0, 500.0, 100.0, 600.0));
    (doc, h, layout)
}

#[test]
fn chars_are_wrapped_per_word() {
    let (mut doc, h, layout) = heading("  Hi \n there ");
    let mut seg = Segmenter::default();
    let out = seg.segment(&mut doc, &layout, h, Granularity::Char).unwrap();

    assert_eq!(out.words.len(), 2);
    assert_eq!(out.chars.len(), 7);
    assert_eq!(out.units(), out.chars.as_slice());
    assert_eq!(doc.text_content(h), "Hi there");
    for c in &out.chars {
        assert!(doc.has_class(*c, CHAR_CLASS));
        assert_eq!(doc.attr(*c, "aria-hidden"), Some("true"));
    }
    // The separator between words is a plain text node.
    assert_eq!(doc.children(h).len(), 3);
    assert!(doc.element(doc.children(h)[1]).is_none());
}

#[test]
fn graphemes_are_never_split() {
    let (mut doc, h, layout) = heading("ne\u{301}e \u{1F469}\u{200D}\u{1F4BB}");
    let out = Segmenter::default()
        .segment(&mut doc, &layout, h, Granularity::Char)
        .unwrap();
    assert_eq!(out.chars.len(), 4);
    assert_eq!(doc.text_content(out.chars[1]), "e\u{301}");
}

#[test]
fn container_keeps_accessible_text() {
    let (mut doc, h, layout) = heading("Home");
    Segmenter::default()
        .segment(&mut doc, &layout, h, Granularity::Char)
        .unwrap();
    assert_eq!(doc.attr(h, "aria-label"), Some("Home"));
    assert_eq!(doc.attr(h, "role"), Some("text"));
    assert_eq!(accessible_text(&doc, h), "Home");
}

#[test]
fn repeat_calls_reuse_the_record() {
    let (mut doc, h, layout) = heading("one two");
    let mut seg = Segmenter::default();
    let first = seg.segment(&mut doc, &layout, h, Granularity::Word).unwrap();
    let nodes = doc.len();

    let again = seg.segment(&mut doc, &layout, h, Granularity::Word).unwrap();
    assert_eq!(first, again);
    let other = seg.segment(&mut doc, &layout, h, Granularity::Char).unwrap();
    assert_eq!(other.granularity, Granularity::Word);
    assert!(other.chars.is_empty());
    assert_eq!(doc.len(), nodes);
}

#[test]
fn empty_text_is_not_recorded() {
    let (mut doc, h, layout) = heading("   ");
    let mut seg = Segmenter::default();
    let out = seg.segment(&mut doc, &layout, h, Granularity::Char).unwrap();
    assert!(out.is_empty());
    assert!(seg.record(h).is_none());
    assert!(!doc.has_attr(h, "aria-label"));
}

#[test]
fn lines_follow_layout_wrapping() {
    // 120 px wide at 10 px per char: "alpha beta" ends at 100 px, "gamma" wraps.
    let (mut doc, h, mut layout) = heading("alpha beta gamma delta");
    layout.set_rect(h, Rect::new(0.0, 500.0, 120.0, 600.0));
    let out = Segmenter::default()
        .segment(&mut doc, &layout, h, Granularity::Line)
        .unwrap();

    assert_eq!(out.lines.len(), 2);
    assert_eq!(doc.text_content(out.lines[0]), "alpha beta");
    assert_eq!(doc.text_content(out.lines[1]), "gamma delta");
    let children = doc.children(h);
    assert_eq!(children.len(), 3);
    assert_eq!([children[0], children[2]], [out.lines[0], out.lines[1]]);
    for l in &out.lines {
        assert!(doc.has_class(*l, LINE_CLASS));
    }
    assert_eq!(accessible_text(&doc, h), "alpha beta gamma delta");
    assert_eq!(doc.text_content(h), "alpha beta gamma delta");
}

#[test]
fn script_preparation_is_idempotent() {
    let (mut doc, h, _) = heading(" Our  story ");
    let mut seg = Segmenter::default();
    let span = seg.prepare_script(&mut doc, h).unwrap().unwrap();
    assert_eq!(doc.text_content(span), "Our story");
    assert!(doc.has_class(span, SCRIPT_CLASS));
    assert_eq!(seg.prepare_script(&mut doc, h).unwrap(), Some(span));
    assert_eq!(doc.children(h), &[span]);
    assert!(seg.is_touched(h));

    seg.clear();
    assert!(!seg.is_touched(h));
}

#[test]
fn wrap_text_reuses_existing_span() {
    let mut doc = Document::new();
    let root = doc.root();
    let btn = doc.append_element(root, "a", "btn").unwrap();
    doc.append_text(btn, "  Enquire now ").unwrap();

    let span = wrap_text(&mut doc, btn).unwrap().unwrap();
    assert_eq!(doc.text_content(span), "Enquire now");
    assert_eq!(wrap_text(&mut doc, btn).unwrap(), Some(span));

    let empty = doc.append_element(root, "button", "").unwrap();
    assert_eq!(wrap_text(&mut doc, empty).unwrap(), None);
}
