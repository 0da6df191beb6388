use super::*;

#[test]
fn span_rejects_inverted_bounds() {
    assert!(TimeSpan::new(2.0, 1.0).is_err());
    assert!(TimeSpan::new(0.0, f64::NAN).is_err());
    assert!(TimeSpan::new(1.0, 1.0).is_ok());
}

#[test]
fn fraction_and_progress_agree() {
    let span = TimeSpan::at(1.0, 2.0);
    assert_eq!(span.at_fraction(0.5), 2.0);
    assert_eq!(span.progress(2.0), 0.5);
    assert_eq!(span.progress(-4.0), 0.0);
    assert_eq!(span.progress(9.0), 1.0);
}

#[test]
fn empty_span_steps_at_start() {
    let span = TimeSpan::at(0.5, 0.0);
    assert!(span.is_empty());
    assert_eq!(span.progress(0.49), 0.0);
    assert_eq!(span.progress(0.5), 1.0);
}

#[test]
fn union_covers_both() {
    let a = TimeSpan::at(0.0, 1.0);
    let b = TimeSpan::at(2.0, 0.5);
    assert_eq!(a.union(b), TimeSpan { start: 0.0, end: 2.5 });
    assert_eq!(b.shift(-2.0).start, 0.0);
}

#[test]
fn parse_finite_filters_garbage() {
    assert_eq!(parse_finite(" 0.25 "), Some(0.25));
    assert_eq!(parse_finite("abc"), None);
    assert_eq!(parse_finite("inf"), None);
    assert_eq!(parse_finite(""), None);
}
