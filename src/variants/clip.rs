//! Clip-path reveals: images, handwriting, buttons and card grids.

use crate::{
    animation::{
        ease::Ease,
        props::{Prop, Props},
    },
    config::resolve::{Config, TargetMode},
    document::node::NodeId,
    foundation::{core::Rect, error::ScrollCueResult},
    scope::cx::ApplyCx,
    segment::lines::{LineGrouper, TopAligned},
    timeline::{
        builder::{Position, TimelineBuilder, Timing},
        trigger::{TriggerPoint, TriggerSpec},
    },
    variants::{
        Choreography,
        common::{commit, once_on, rise, script_write, settle, stagger_targets},
    },
};

pub(crate) const VARIANTS: &[Choreography] = &[
    Choreography::new("clip-reveal", clip_reveal),
    Choreography::new("clip-reveal-center", clip_reveal_center),
    Choreography::new("clip-reveal-rtl", clip_reveal_rtl),
    Choreography::new("clip-reveal-ltr", clip_reveal_ltr),
    Choreography::new("writing-text", writing_text),
    Choreography::new("btn-clip-reveal", btn_clip_reveal),
    Choreography::new("btn-clip-bottom", btn_clip_bottom),
    Choreography::new("news-cards-clip", news_cards_clip),
    Choreography::new("news-card", news_card),
];

/// Class added to every element a `clip-reveal` animates.
pub const CLIP_REVEAL_CLASS: &str = "cue-clip-reveal";

/// Row tolerance for card grids, px.
const ROW_TOLERANCE: f64 = 10.0;

const CAMPUS_IMAGES: &str = ".three-campuses-section__card-image-wrapper img, \
     .three-campuses-section .masked-image-content-block-wrap .image-wrap img";

fn clip_reveal(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let targets = stagger_targets(cx, el, cfg);
    for &t in &targets {
        cx.add_class(t, CLIP_REVEAL_CLASS)?;
    }
    let mut timing = Timing::new(cfg.duration.get(), cfg.ease.or(Ease::OutQuart));
    if targets != [el] {
        timing = timing.each(cfg.stagger.get());
    }
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    rise(
        &mut b,
        &targets,
        Props::new().with(Prop::ClipTop, 100.0),
        timing,
        Position::At(0.0),
    );
    commit(cx, b, once_on(el, cfg))?;
    Ok(())
}

/// Opens each image from its horizontal center line outwards, one trigger per image.
fn clip_reveal_center(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let mut images = cx.query_all(el, CAMPUS_IMAGES)?;
    if images.is_empty() && cx.doc.tag(el) != Some("img") {
        images = cx.query_all(el, "img")?;
    }
    if images.is_empty() {
        images.push(el);
    }

    let start = cfg.start.or(TriggerPoint::top(55.0));
    let timing = Timing::new(cfg.duration.or(0.9), cfg.ease.or(Ease::Linear));
    let from = Props::new()
        .with(Prop::ClipTop, 50.0)
        .with(Prop::ClipBottom, 50.0)
        .y(30.0)
        .opacity(1.0);

    for img in images {
        if !cx.flag(img, "clip-center") {
            continue;
        }
        let trigger = first_of_closest(
            cx,
            img,
            &[".three-campuses-section__card", ".col-lg-4"],
        )?
        .unwrap_or(el);
        let mut b = TimelineBuilder::new().delay(cfg.delay.get());
        rise(&mut b, &[img], from.clone(), timing, Position::At(0.0));
        commit(cx, b, TriggerSpec::scroll(trigger, start))?;
    }
    Ok(())
}

fn first_of_closest(
    cx: &ApplyCx<'_>,
    node: NodeId,
    selectors: &[&str],
) -> ScrollCueResult<Option<NodeId>> {
    for sel in selectors {
        if let Some(n) = cx.closest(node, sel)? {
            return Ok(Some(n));
        }
    }
    Ok(None)
}

/// Grows each target's width from zero, so the image uncovers from its leading edge.
fn clip_reveal_rtl(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let images = if cx.doc.tag(el) == Some("img") {
        Vec::new()
    } else {
        cx.query_all(el, "img")?
    };
    let targets = match cfg.target_mode {
        Some(TargetMode::SelfElement) => {
            vec![cx.query(el, ".essence-image-mask")?.unwrap_or(el)]
        }
        Some(TargetMode::Images) => images,
        None if images.is_empty() => vec![el],
        None => images,
    };

    let start = cfg.start.or(TriggerPoint::top(65.0));
    let timing = Timing::new(cfg.duration.or(1.1), cfg.ease.or(Ease::OutQuart));
    let from = Props::new().width_percent(0.0).opacity(1.0);

    for t in targets {
        if !cx.flag(t, "clip-rtl") {
            continue;
        }
        if cx.reduced_motion() {
            settle(cx, &[t], &from)?;
            continue;
        }
        let mut b = TimelineBuilder::new().delay(cfg.delay.get());
        rise(&mut b, &[t], from.clone(), timing, Position::At(0.0));
        commit(cx, b, TriggerSpec::scroll(el, start))?;
    }
    Ok(())
}

fn clip_reveal_ltr(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let timing = Timing::new(cfg.duration.get(), cfg.ease.or(Ease::OutQuart));
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    rise(
        &mut b,
        &[el],
        Props::new().with(Prop::ClipRight, 100.0),
        timing,
        Position::At(0.0),
    );
    commit(cx, b, once_on(el, cfg))?;
    Ok(())
}

fn writing_text(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    if cx.reduced_motion() {
        if let Some(span) = cx.prepare_script(el)? {
            cx.set(span, &Props::new().with(Prop::ClipRight, 0.0).opacity(1.0).y(0.0))?;
        }
        return Ok(());
    }
    let timing = Timing::new(cfg.duration.or(1.6), cfg.ease.or(Ease::OutCubic));
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    let staged = script_write(
        cx,
        &mut b,
        el,
        Props::new().y(6.0),
        timing,
        Position::At(0.0),
    )?;
    if staged.is_some() {
        commit(cx, b, once_on(el, cfg))?;
    }
    Ok(())
}

fn button_of(cx: &ApplyCx<'_>, el: NodeId) -> ScrollCueResult<Option<NodeId>> {
    if matches!(cx.doc.tag(el), Some("a" | "button")) {
        return Ok(Some(el));
    }
    cx.query(el, "a, button")
}

/// Fill sweeps in from the left, then the label uncovers on top of it.
fn btn_clip_reveal(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let Some(btn) = button_of(cx, el)? else {
        cx.missing("a, button");
        return Ok(());
    };
    let label = cx.wrap_text(btn)?;
    let hidden = Props::new().with(Prop::ClipRight, 100.0);

    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    cx.set(btn, &Props::new().auto_alpha(1.0))?;
    rise(
        &mut b,
        &[btn],
        hidden.clone(),
        Timing::new(0.6, Ease::Linear),
        Position::At(0.0),
    );
    if let Some(label) = label {
        rise(
            &mut b,
            &[label],
            hidden,
            Timing::new(0.9, Ease::Linear),
            Position::At(0.65),
        );
    }
    let start = cfg.start.or(TriggerPoint::top(80.0));
    commit(cx, b, TriggerSpec::scroll(btn, start))?;
    Ok(())
}

fn btn_clip_bottom(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let Some(btn) = button_of(cx, el)? else {
        cx.missing("a, button");
        return Ok(());
    };
    let timing = Timing::new(cfg.duration.or(1.2), cfg.ease.or(Ease::OutCubic));
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    rise(
        &mut b,
        &[btn],
        Props::new().with(Prop::ClipTop, 100.0).opacity(0.0).y(10.0),
        timing,
        Position::At(0.0),
    );
    let start = cfg.start.or(TriggerPoint::top(105.0));
    commit(cx, b, TriggerSpec::scroll(btn, start))?;
    Ok(())
}

fn card_hidden() -> Props {
    Props::new().with(Prop::ClipBottom, 100.0).y(30.0)
}

fn card_timing() -> Timing {
    Timing::new(0.5, Ease::Linear).each(0.2)
}

/// Splits `items` into visual rows by the top edge of their boxes.
fn rows(cx: &ApplyCx<'_>, items: &[NodeId]) -> Vec<Vec<NodeId>> {
    let mut last = Rect::ZERO;
    let boxes: Vec<Rect> = items
        .iter()
        .map(|n| {
            if let Some(r) = cx.rect(*n) {
                last = r;
            }
            last
        })
        .collect();
    TopAligned::new(ROW_TOLERANCE)
        .group(&boxes)
        .into_iter()
        .map(|range| items[range].to_vec())
        .collect()
}

/// Reveals cards top-down, one trigger per visual row, staggered within the row.
///
/// Handles three layouts: a bare image wrapper, CTA image frames, and news grid items
/// whose inner card (when present) is what animates.
fn news_cards_clip(cx: &mut ApplyCx<'_>, el: NodeId, _cfg: &Config) -> ScrollCueResult<()> {
    let start = TriggerPoint::top(60.0);
    let items = cx.query_all(el, ".latest-news-item")?;
    let frames = cx.query_all(el, ".image-frame")?;

    if cx.doc.has_class(el, "news-detail-content-section__image-wrapper")
        && items.is_empty()
        && frames.is_empty()
    {
        let mut b = TimelineBuilder::new();
        rise(&mut b, &[el], card_hidden(), card_timing(), Position::At(0.0));
        commit(cx, b, TriggerSpec::scroll(el, start))?;
        return Ok(());
    }

    if !frames.is_empty() && items.is_empty() {
        for row in rows(cx, &frames) {
            let mut b = TimelineBuilder::new();
            rise(&mut b, &row, card_hidden(), card_timing(), Position::At(0.0));
            commit(cx, b, TriggerSpec::scroll(row[0], start))?;
        }
        return Ok(());
    }

    if items.is_empty() {
        cx.missing(".latest-news-item");
        return Ok(());
    }
    for row in rows(cx, &items) {
        let mut cards = Vec::with_capacity(row.len());
        for &item in &row {
            cards.push(
                cx.query(item, ".latest-news-grid-section__card")?
                    .unwrap_or(item),
            );
        }
        let mut b = TimelineBuilder::new();
        rise(&mut b, &cards, card_hidden(), card_timing(), Position::At(0.0));
        commit(cx, b, TriggerSpec::scroll(row[0], start))?;
    }
    Ok(())
}

fn news_card(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let target = cx
        .query(el, ".latest-news-grid-section__card")?
        .unwrap_or(el);
    let timing = Timing::new(cfg.duration.or(0.5), cfg.ease.or(Ease::Linear));
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    rise(&mut b, &[target], card_hidden(), timing, Position::At(0.0));
    let start = cfg.start.or(TriggerPoint::top(60.0));
    commit(cx, b, TriggerSpec::scroll(el, start))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/variants/clip.rs"]
mod tests;
