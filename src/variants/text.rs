//! Text choreographies built on segmentation.

use crate::{
    animation::{ease::Ease, props::Props},
    config::resolve::Config,
    document::node::NodeId,
    foundation::error::ScrollCueResult,
    scope::cx::ApplyCx,
    segment::split::Granularity,
    timeline::{
        builder::{Position, TimelineBuilder, Timing},
        trigger::{ReplayPolicy, TriggerPoint, TriggerSpec},
    },
    variants::{
        Choreography,
        common::{BOLD_PART, SCRIPT_PART, char_rise, commit, once_on, rise, script_write, settle},
    },
};

pub(crate) const VARIANTS: &[Choreography] = &[
    Choreography::new("chars", chars),
    Choreography::new("lines", lines),
    Choreography::new("scroll-lines", scroll_lines),
    Choreography::new("scroll-text-reveal", scroll_text_reveal),
    Choreography::new("stagger-content", stagger_content),
    Choreography::new("section-title", section_title),
    Choreography::new("hero-wellbeing", hero_wellbeing),
];

/// Starting state of a character that rises and tips upright.
pub(crate) fn tipped_char() -> Props {
    Props::new().opacity(0.0).y_percent(90.0).rotation_x(70.0)
}

/// Characters tip up into place, scrubbed by scroll until the title is half way up.
fn chars(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let segs = cx.segment(el, Granularity::Char)?;
    if segs.is_empty() {
        return Ok(());
    }
    let timing = Timing::new(cfg.duration.or(0.9), cfg.ease.or(Ease::OutExpo))
        .each(cfg.stagger.or(0.02));
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    rise(&mut b, segs.units(), tipped_char(), timing, Position::At(0.0));

    let trigger = TriggerSpec::scroll(el, cfg.start.or(TriggerPoint::top(75.0)))
        .end(TriggerPoint::bottom(50.0))
        .policy(ReplayPolicy::Scrub {
            smoothing: 1.0,
            once: true,
        });
    commit(cx, b, trigger)?;
    Ok(())
}

fn lines(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let segs = cx.segment(el, Granularity::Line)?;
    if segs.lines.is_empty() {
        return Ok(());
    }
    let timing = Timing::new(cfg.duration.get(), cfg.ease.or(Ease::OutCubic))
        .each(cfg.stagger.or(0.15));
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    rise(
        &mut b,
        &segs.lines,
        Props::new().y(30.0).auto_alpha(0.0),
        timing,
        Position::At(0.0),
    );
    commit(cx, b, once_on(el, cfg))?;
    Ok(())
}

fn paragraphs(cx: &ApplyCx<'_>, el: NodeId) -> ScrollCueResult<Vec<NodeId>> {
    if cx.doc.tag(el) == Some("p") {
        return Ok(vec![el]);
    }
    cx.query_all(el, "p")
}

/// Each line owns an equal slice of the scroll range.
fn scroll_lines(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let mut all = Vec::new();
    for p in paragraphs(cx, el)? {
        all.extend(cx.segment(p, Granularity::Line)?.lines);
    }
    if all.is_empty() {
        return Ok(());
    }

    let n = all.len() as f64;
    let from = Props::new().opacity(0.0).y(25.0);
    let mut b = TimelineBuilder::new();
    b.set(&all, &from);
    for (i, line) in all.iter().enumerate() {
        b.to(
            &[*line],
            Props::new().opacity(1.0).y(0.0),
            Timing::new(1.0 / n, Ease::Linear),
            Position::At(i as f64 / n),
        );
    }
    let trigger = once_on(el, cfg)
        .end(TriggerPoint::bottom(60.0))
        .policy(ReplayPolicy::Scrub {
            smoothing: 1.0,
            once: true,
        });
    commit(cx, b, trigger)?;
    Ok(())
}

fn scroll_text_reveal(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let segs = cx.segment(el, Granularity::Word)?;
    if segs.words.is_empty() {
        return Ok(());
    }
    let mut b = TimelineBuilder::new();
    rise(
        &mut b,
        &segs.words,
        Props::new().opacity(0.0),
        Timing::new(0.5, Ease::Linear).each(0.5),
        Position::At(0.0),
    );
    let trigger = once_on(el, cfg)
        .end(TriggerPoint::bottom(20.0))
        .policy(ReplayPolicy::Scrub {
            smoothing: 0.0,
            once: false,
        });
    commit(cx, b, trigger)?;
    Ok(())
}

fn stagger_content(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let paras = cx.query_all(el, "p")?;
    if paras.is_empty() {
        cx.missing("p");
        return Ok(());
    }
    let timing = Timing::new(cfg.duration.or(0.8), Ease::OutCubic).each(cfg.stagger.or(0.15));
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    rise(
        &mut b,
        &paras,
        Props::new().opacity(0.0).y(30.0),
        timing,
        Position::At(0.0),
    );
    commit(cx, b, once_on(el, cfg))?;
    Ok(())
}

/// Script line writes itself in, then the bold line rises at 90% of the script stage.
fn section_title(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let script = cx.query(el, SCRIPT_PART)?;
    let bold = cx.query(el, BOLD_PART)?;
    if script.is_none() && bold.is_none() {
        cx.missing(SCRIPT_PART);
        return Ok(());
    }

    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    let mut wrote = None;
    if let Some(script) = script {
        wrote = script_write(
            cx,
            &mut b,
            script,
            Props::new(),
            Timing::new(1.1, Ease::OutCubic),
            Position::At(0.0),
        )?;
    }
    if let Some(bold) = bold {
        let at = match wrote {
            Some(stage) => Position::Stage {
                stage,
                fraction: 0.9,
            },
            None => Position::At(0.0),
        };
        char_rise(
            cx,
            &mut b,
            bold,
            tipped_char(),
            Timing::new(1.2, Ease::OutExpo).each(0.02),
            at,
        )?;
    }
    commit(cx, b, once_on(el, cfg))?;
    Ok(())
}

/// Characters fade up on enter and fade back out whenever the block leaves.
fn hero_wellbeing(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let blocks = cx.query_all(el, ".wellbeing-hero-text")?;
    if blocks.is_empty() {
        cx.missing(".wellbeing-hero-text");
        return Ok(());
    }
    let mut all = Vec::new();
    for block in blocks {
        all.extend(cx.segment(block, Granularity::Char)?.chars);
        cx.set(block, &Props::new().opacity(1.0))?;
    }
    if all.is_empty() {
        return Ok(());
    }

    let from = Props::new().opacity(0.0).y(20.0);
    if cx.reduced_motion() {
        return settle(cx, &all, &from);
    }
    let timing = Timing::new(cfg.duration.or(0.6), cfg.ease.or(Ease::OutCubic))
        .each(cfg.stagger.or(0.05));
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    rise(&mut b, &all, from, timing, Position::At(0.0));
    let trigger = TriggerSpec::scroll(el, cfg.start.or(TriggerPoint::top(80.0))).policy(
        ReplayPolicy::Toggle {
            reverse_on_leave: true,
        },
    );
    commit(cx, b, trigger)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/variants/text.rs"]
mod tests;
