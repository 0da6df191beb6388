//! Single-tween directional reveals.

use crate::{
    animation::{ease::Ease, props::Props},
    config::resolve::Config,
    document::node::NodeId,
    foundation::error::ScrollCueResult,
    scope::{Handle, cx::ApplyCx},
    timeline::builder::{Position, TimelineBuilder, Timing},
    variants::{
        Variant,
        common::{commit, once_on, rise, stagger_targets},
    },
};

/// A reveal that animates its targets from a fixed offset back to rest.
#[derive(Clone, Copy)]
pub struct Reveal {
    name: &'static str,
    from: fn() -> Props,
    ease: Ease,
    duration: Option<f64>,
}

impl Reveal {
    const fn new(name: &'static str, from: fn() -> Props, ease: Ease) -> Self {
        Self {
            name,
            from,
            ease,
            duration: None,
        }
    }

    /// Own duration, used unless one is authored.
    const fn lasting(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Starting state.
    pub fn from(&self) -> Props {
        (self.from)()
    }
}

impl Variant for Reveal {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<Handle> {
        let targets = stagger_targets(cx, el, cfg);
        let duration = match self.duration {
            Some(own) => cfg.duration.or(own),
            None => cfg.duration.get(),
        };
        let mut timing = Timing::new(duration, cfg.ease.or(self.ease));
        if targets != [el] {
            timing = timing.each(cfg.stagger.get());
        }

        let mut b = TimelineBuilder::new().delay(cfg.delay.get());
        rise(&mut b, &targets, self.from(), timing, Position::At(0.0));
        commit(cx, b, once_on(el, cfg))?;
        Ok(cx.handle())
    }
}

fn fade_up() -> Props {
    Props::new().y(50.0).auto_alpha(0.0)
}
fn fade_down() -> Props {
    Props::new().y(-50.0).auto_alpha(0.0)
}
fn fade_left() -> Props {
    Props::new().x(-50.0).auto_alpha(0.0)
}
fn fade_right() -> Props {
    Props::new().x(50.0).auto_alpha(0.0)
}
fn fade_in() -> Props {
    Props::new().auto_alpha(0.0)
}
fn zoom_in() -> Props {
    Props::new().scale(0.7).auto_alpha(0.0)
}
fn zoom_out() -> Props {
    Props::new().scale(1.3)
}
fn slide_left() -> Props {
    Props::new().x(-300.0).auto_alpha(0.0)
}
fn slide_right() -> Props {
    Props::new().x(300.0).auto_alpha(0.0)
}
fn slide_up() -> Props {
    Props::new().y(100.0).auto_alpha(0.0)
}
fn slide_down() -> Props {
    Props::new().y(-100.0).auto_alpha(0.0)
}
fn scale_up() -> Props {
    Props::new().scale(0.0)
}

pub(crate) const REVEALS: &[Reveal] = &[
    Reveal::new("fade-up", fade_up, Ease::OutCubic),
    Reveal::new("fade-down", fade_down, Ease::OutCubic),
    Reveal::new("fade-left", fade_left, Ease::OutCubic),
    Reveal::new("fade-right", fade_right, Ease::OutCubic),
    Reveal::new("fade-in", fade_in, Ease::OutCubic).lasting(2.0),
    Reveal::new("zoom-in", zoom_in, Ease::OutBack(1.05)).lasting(1.9),
    Reveal::new("zoom-out", zoom_out, Ease::OutCubic),
    Reveal::new("slide-left", slide_left, Ease::OutCubic),
    Reveal::new("slide-right", slide_right, Ease::OutCubic),
    Reveal::new("slide-up", slide_up, Ease::OutCubic),
    Reveal::new("slide-down", slide_down, Ease::OutCubic),
    Reveal::new("scale-up", scale_up, Ease::OutCubic),
];

#[cfg(test)]
#[path = "../../tests/unit/variants/reveal.rs"]
mod tests;
