//! Continuous motion: looping tickers and scroll-bound parallax.

use crate::{
    animation::{ease::Ease, props::Props},
    config::resolve::Config,
    document::node::NodeId,
    foundation::error::ScrollCueResult,
    scope::cx::ApplyCx,
    timeline::{
        builder::{Position, TimelineBuilder, Timing},
        model::Repeat,
        trigger::{ReplayPolicy, TriggerPoint, TriggerSpec},
    },
    variants::{Choreography, common::commit},
};

pub(crate) const VARIANTS: &[Choreography] = &[
    Choreography::new("marquee", marquee),
    Choreography::new("parallax-bg", parallax_bg),
];

/// Default parallax travel, percent of the element's own height.
const PARALLAX_AMOUNT: f64 = 15.0;

/// Children scroll left by their own width, forever.
///
/// Expects the track to hold its content twice so the wrap is seamless.
fn marquee(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let items = cx.children(el);
    if items.is_empty() {
        cx.missing("marquee items");
        return Ok(());
    }
    if cx.reduced_motion() {
        return Ok(());
    }
    let mut b = TimelineBuilder::new()
        .delay(cfg.delay.get())
        .repeat(Repeat::Infinite);
    b.from_to(
        &items,
        &Props::new().x_percent(0.0),
        Props::new().x_percent(-100.0),
        Timing::new(cfg.duration.or(20.0), Ease::Linear),
        Position::At(0.0),
    );
    commit(cx, b, TriggerSpec::autoplay(cfg.wait_loaded))?;
    Ok(())
}

fn parallax_bg(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let target = cx.query(el, "img")?.unwrap_or(el);
    let amount = cfg.extra_f64("amount").unwrap_or(PARALLAX_AMOUNT);
    let mut b = TimelineBuilder::new();
    b.from_to(
        &[target],
        &Props::new().y_percent(-amount),
        Props::new().y_percent(amount),
        Timing::new(1.0, Ease::Linear),
        Position::At(0.0),
    );
    let trigger = TriggerSpec::scroll(el, TriggerPoint::top(100.0))
        .end(TriggerPoint::bottom(0.0))
        .policy(ReplayPolicy::Scrub {
            smoothing: 0.0,
            once: false,
        });
    commit(cx, b, trigger)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/variants/motion.rs"]
mod tests;
