use super::*;

const ALL: [Ease; 25] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InQuart,
    Ease::OutQuart,
    Ease::InOutQuart,
    Ease::InQuint,
    Ease::OutQuint,
    Ease::InOutQuint,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
    Ease::InExpo,
    Ease::OutExpo,
    Ease::InOutExpo,
    Ease::InCirc,
    Ease::OutCirc,
    Ease::InOutCirc,
    Ease::InBack(DEFAULT_BACK_OVERSHOOT),
    Ease::OutBack(1.7),
    Ease::InOutBack(2.7),
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        if matches!(ease, Ease::InBack(_) | Ease::OutBack(_) | Ease::InOutBack(_)) {
            continue;
        }
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn back_out_overshoots() {
    let peak = (1..100)
        .map(|i| Ease::OutBack(1.7).apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn parses_authored_ids() {
    assert_eq!(Ease::parse("none"), Some(Ease::Linear));
    assert_eq!(Ease::parse("power2.out"), Some(Ease::OutCubic));
    assert_eq!(Ease::parse("power3.out"), Some(Ease::OutQuart));
    assert_eq!(Ease::parse("power1.out"), Some(Ease::OutQuad));
    assert_eq!(Ease::parse("expo.out"), Some(Ease::OutExpo));
    assert_eq!(Ease::parse("circ.inOut"), Some(Ease::InOutCirc));
    assert_eq!(Ease::parse("back.out(1.7)"), Some(Ease::OutBack(1.7)));
    assert_eq!(Ease::parse("back.inOut(2.7)"), Some(Ease::InOutBack(2.7)));
    assert_eq!(
        Ease::parse("back.out"),
        Some(Ease::OutBack(DEFAULT_BACK_OVERSHOOT))
    );
    assert_eq!(Ease::parse("power4"), Some(Ease::OutQuint));
}

#[test]
fn rejects_malformed_ids() {
    for bad in ["", "wobble.out", "power2.sideways", "back.out(x)", "back.out)1("] {
        assert_eq!(Ease::parse(bad), None, "{bad}");
    }
    assert!("elastic".parse::<Ease>().is_err());
}
