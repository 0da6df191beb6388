use super::*;

#[test]
fn forward_play_completes_at_duration() {
    let mut p = Playback::new(1.0, Repeat::Once);
    p.play();
    p.advance(0.4);
    assert_eq!(p.time(), 0.4);
    assert!(p.take_dirty());
    assert!(!p.take_dirty());
    p.advance(1.0);
    assert!(p.is_complete());
    assert_eq!(p.state(), PlayState::Idle);
    assert_eq!(p.sample_time(), f64::INFINITY);
    assert_eq!(p.progress(), 1.0);
}

#[test]
fn infinite_repeat_wraps() {
    let mut p = Playback::new(2.0, Repeat::Infinite);
    p.play();
    p.advance(2.5);
    assert_eq!(p.time(), 0.5);
    assert!(!p.is_complete());
}

#[test]
fn reverse_clamps_at_zero() {
    let mut p = Playback::new(1.0, Repeat::Once);
    p.play();
    p.advance(5.0);
    p.reverse();
    assert!(!p.is_complete());
    p.advance(0.25);
    assert_eq!(p.time(), 0.75);
    p.advance(3.0);
    assert_eq!(p.time(), 0.0);
    assert_eq!(p.state(), PlayState::Idle);
}

#[test]
fn unsmoothed_scrub_jumps() {
    let mut p = Playback::new(4.0, Repeat::Once);
    p.scrub_to(0.25, 0.0);
    assert_eq!(p.time(), 1.0);
    p.scrub_to(1.0, 0.0);
    assert!(p.is_complete());
    p.scrub_to(0.5, 0.0);
    assert!(!p.is_complete());
}

#[test]
fn smoothed_scrub_catches_up_then_snaps() {
    let mut p = Playback::new(1.0, Repeat::Once);
    p.scrub_to(1.0, 1.0);
    p.advance(1.0);
    let t = p.time();
    assert!(t > 0.6 && t < 0.7, "one time constant covers ~63%: {t}");
    assert!(p.is_settling());
    for _ in 0..20 {
        p.advance(1.0);
    }
    assert_eq!(p.time(), 1.0);
    assert!(p.is_complete());
    assert!(!p.is_settling());
}

#[test]
fn idle_play_head_stays_clean() {
    let mut p = Playback::new(1.0, Repeat::Once);
    p.advance(1.0);
    assert!(!p.take_dirty());
    p.finish();
    assert!(p.take_dirty());
    assert!(p.is_complete());
}
