use super::*;
use crate::animation::props::Prop;

#[test]
fn revert_restores_first_snapshot() {
    let mut doc = Document::new();
    let root = doc.root();
    let el = doc.append_element(root, "p", "").unwrap();
    doc.style_mut(el).unwrap().set(Prop::Opacity, 0.5);

    let mut journal = Journal::default();
    journal.snapshot_style(&doc, el);
    doc.style_mut(el).unwrap().set(Prop::Opacity, 0.0);
    journal.snapshot_style(&doc, el);
    doc.style_mut(el).unwrap().set(Prop::Y, 30.0);
    assert_eq!(journal.len(), 1);

    journal.revert(&mut doc);
    let style = doc.style(el).unwrap();
    assert_eq!(style.explicit(Prop::Opacity), Some(0.5));
    assert_eq!(style.explicit(Prop::Y), None);
    assert!(journal.is_empty());
}

#[test]
fn revert_restores_children_attrs_and_classes() {
    let mut doc = Document::new();
    let root = doc.root();
    let el = doc.append_element(root, "h2", "title").unwrap();
    let text = doc.append_text(el, "Home").unwrap();
    doc.set_attr(el, "role", "heading").unwrap();

    let mut journal = Journal::default();
    journal.snapshot_children(&doc, el);
    journal.snapshot_attr(&doc, el, "role");
    journal.snapshot_attr(&doc, el, "aria-label");
    let span = doc.create_element("span");
    doc.replace_children(el, vec![span]).unwrap();
    doc.set_attr(el, "role", "text").unwrap();
    doc.set_attr(el, "aria-label", "Home").unwrap();
    doc.add_class(el, "cue-done").unwrap();
    journal.record_class(el, "cue-done");

    journal.revert(&mut doc);
    assert_eq!(doc.children(el), &[text]);
    assert_eq!(doc.attr(el, "role"), Some("heading"));
    assert_eq!(doc.attr(el, "aria-label"), None);
    assert!(!doc.has_class(el, "cue-done"));
    assert!(doc.has_class(el, "title"));
    assert!(!doc.is_attached(span));
}
