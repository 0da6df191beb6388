use super::*;

#[test]
fn mobile_breakpoint_is_inclusive() {
    let bp = Breakpoints::default();
    assert!(Viewport::new(991.0, 800.0).is_mobile(&bp));
    assert!(!Viewport::new(992.0, 800.0).is_mobile(&bp));
}

#[test]
fn wide_includes_coarse_pointers() {
    let bp = Breakpoints::default();
    assert!(Viewport::new(1024.0, 800.0).is_wide(&bp));
    assert!(!Viewport::new(1440.0, 900.0).is_wide(&bp));
    assert!(Viewport::new(1440.0, 900.0).with_coarse_pointer(true).is_wide(&bp));
}

#[test]
fn device_classes() {
    let bp = Breakpoints::default();
    assert_eq!(Viewport::new(390.0, 844.0).device_class(&bp), DeviceClass::Mobile);
    assert_eq!(Viewport::new(1000.0, 800.0).device_class(&bp), DeviceClass::Tablet);
    assert_eq!(Viewport::new(1920.0, 1080.0).device_class(&bp), DeviceClass::Desktop);
}

#[test]
fn breakpoints_deserialize_partially() {
    let bp: Breakpoints = serde_json::from_str(r#"{ "mobile_max": 767 }"#).unwrap();
    assert_eq!(bp.mobile_max, 767.0);
    assert_eq!(bp.wide_max, 1024.0);
}
