//! Page-load hero choreographies.
//!
//! Heroes play once on the first frame instead of waiting for scroll, optionally
//! held back until the host marks the page `loaded`.

use crate::{
    animation::{ease::Ease, props::Props},
    config::resolve::Config,
    document::node::NodeId,
    foundation::error::ScrollCueResult,
    scope::cx::ApplyCx,
    timeline::{
        builder::{Position, TimelineBuilder, Timing},
        trigger::TriggerSpec,
    },
    variants::{
        Choreography,
        common::{char_rise, commit, finish, first_of, rise, script_write},
    },
};

pub(crate) const VARIANTS: &[Choreography] = &[
    Choreography::new("hero-about", hero_about),
    Choreography::new("hero-home", hero_home),
    Choreography::new("animate-hero", animate_hero),
    Choreography::new("hero-learning", hero_learning),
    Choreography::new("hero-preschool", hero_preschool),
];

const SCRIPT_SECONDS: f64 = 1.9;

fn autoplay(cfg: &Config) -> TriggerSpec {
    TriggerSpec::autoplay(cfg.wait_loaded)
}

/// Active slide of the hero slider, or its first slide.
fn active_slide(cx: &mut ApplyCx<'_>, el: NodeId) -> ScrollCueResult<Option<NodeId>> {
    let Some(slider) = cx.query(el, ".hero__slider")? else {
        cx.missing(".hero__slider");
        return Ok(None);
    };
    let slide = first_of(cx, slider, &[".swiper-slide-active", ".swiper-slide"])?;
    if slide.is_none() {
        cx.missing(".swiper-slide");
    }
    Ok(slide)
}

fn hero_about(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    const OFFSETS: [f64; 3] = [-100.0, 100.0, -100.0];
    let mut lines = Vec::new();
    for sel in [
        ".about-hero__line--handwritten",
        ".about-hero__line--creative",
        ".about-hero__line--individuals",
    ] {
        lines.extend(cx.query(el, sel)?);
    }
    if lines.is_empty() {
        cx.missing(".about-hero__line--handwritten");
        return Ok(());
    }

    let timing = Timing::new(cfg.duration.or(0.8), cfg.ease.or(Ease::InOutCirc));
    let gap = cfg.stagger.or(0.55);
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    for (i, line) in lines.iter().enumerate() {
        let from = Props::new()
            .opacity(0.0)
            .x_percent(OFFSETS[i % OFFSETS.len()]);
        rise(&mut b, &[*line], from, timing, Position::At(i as f64 * gap));
    }
    commit(cx, b, autoplay(cfg))?;
    Ok(())
}

/// Script title writes in, main title characters bounce up at 80% of it.
///
/// Parents are shown only after their children were hidden.
fn hero_title(
    cx: &mut ApplyCx<'_>,
    b: &mut TimelineBuilder,
    slide: NodeId,
) -> ScrollCueResult<()> {
    let script = cx.query(slide, ".hero__title-script")?;
    let main = cx.query(slide, ".hero__title-main")?;
    if let Some(script) = script {
        script_write(
            cx,
            b,
            script,
            Props::new(),
            Timing::new(SCRIPT_SECONDS, Ease::OutCubic),
            Position::At(0.0),
        )?;
    }
    if let Some(main) = main {
        char_rise(
            cx,
            b,
            main,
            Props::new().y_percent(100.0).opacity(0.0),
            Timing::new(1.1, Ease::OutBack(1.7)).each(0.07),
            Position::At(SCRIPT_SECONDS * 0.8),
        )?;
    }
    for parent in script.into_iter().chain(main) {
        cx.set(parent, &Props::new().opacity(1.0))?;
    }
    Ok(())
}

fn hero_home(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let Some(slide) = active_slide(cx, el)? else {
        return Ok(());
    };
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    hero_title(cx, &mut b, slide)?;
    commit(cx, b, autoplay(cfg))?;
    Ok(())
}

/// Hero title, then the secondary controls.
///
/// Desktop brings description, action button and arrows in together at one label just
/// before the title ends. Mobile brings the description in, then the mobile actions.
fn animate_hero(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let Some(slide) = active_slide(cx, el)? else {
        return Ok(());
    };
    let description = cx.query(slide, ".hero__description")?;
    let desc_from = Props::new().y(50.0).auto_alpha(0.0);
    let desc_timing = Timing::new(0.8, Ease::Linear);

    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    hero_title(cx, &mut b, slide)?;

    if cx.is_mobile() {
        if let Some(d) = description {
            rise(&mut b, &[d], desc_from, desc_timing, Position::End(-0.3));
        }
        if let Some(actions) = cx.query(el, ".hero__mobile-actions")? {
            let children = cx.children(actions);
            rise(
                &mut b,
                &[actions],
                Props::new().auto_alpha(0.0),
                Timing::new(0.01, Ease::Linear),
                Position::After(0.1),
            );
            rise(
                &mut b,
                &children,
                Props::new().y(50.0).auto_alpha(0.0),
                Timing::new(0.8, Ease::OutQuad).each(0.3),
                Position::With(0.0),
            );
        }
    } else {
        b.label("secondary", Position::End(-0.3));
        let at = || Position::Label("secondary".to_owned(), 0.0);
        if let Some(d) = description {
            rise(&mut b, &[d], desc_from, desc_timing, at());
        }
        if let Some(button) = first_of(cx, el, &[".play-button", ".audio-btn"])? {
            rise(
                &mut b,
                &[button],
                Props::new().scale(0.7).opacity(0.0),
                Timing::new(0.8, Ease::OutBack(1.3)),
                at(),
            );
        }
        if let Some(nav) = cx.query(el, ".arrow-navigation")? {
            let arrows = cx.query_all(nav, ".arrow-navigation__arrow")?;
            if !arrows.is_empty() {
                rise(
                    &mut b,
                    &[nav],
                    Props::new().opacity(0.0),
                    Timing::new(0.01, Ease::Linear),
                    at(),
                );
                rise(
                    &mut b,
                    &arrows,
                    Props::new().x(50.0).opacity(0.0),
                    Timing::new(1.1, Ease::OutBack(1.3)).each(0.2),
                    at(),
                );
            }
        }
    }
    commit(cx, b, autoplay(cfg))?;
    Ok(())
}

fn hero_learning(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let Some(slide) = active_slide(cx, el)? else {
        return Ok(());
    };
    if let Some(title) = cx.query(slide, ".hero__title-line")? {
        cx.set(title, &Props::new().opacity(1.0))?;
    }
    let script = cx.query(slide, ".hero__title-script")?;
    let main = cx.query(slide, ".hero__title-main")?;
    let description = cx.query(slide, ".hero__description")?;

    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    let mut wrote = None;
    if let Some(script) = script {
        wrote = script_write(
            cx,
            &mut b,
            script,
            Props::new().y(6.0),
            Timing::new(1.1, Ease::OutCubic),
            Position::At(0.0),
        )?;
    }
    // Script plus a short breath.
    let script_end = if wrote.is_some() { 1.3 } else { 0.0 };
    let mut rose = None;
    if let Some(main) = main {
        rose = char_rise(
            cx,
            &mut b,
            main,
            Props::new().y_percent(100.0).opacity(0.0),
            Timing::new(1.2, Ease::OutQuint).each(0.1),
            Position::At(script_end),
        )?;
    }
    if let Some(d) = description {
        let at = if wrote.is_some() { script_end + 0.25 } else { 0.2 };
        rise(
            &mut b,
            &[d],
            Props::new().opacity(0.0).y(14.0).scale(0.98),
            Timing::new(0.9, Ease::OutCubic),
            Position::At(at),
        );
    }
    if wrote.is_none() && rose.is_none() && description.is_none() {
        cx.missing(".hero__title-script");
        return Ok(());
    }

    if cx.reduced_motion() {
        return finish(cx, b);
    }
    commit(cx, b, autoplay(cfg))?;
    Ok(())
}

fn preschool_line(cx: &ApplyCx<'_>, parent: Option<NodeId>) -> ScrollCueResult<Option<NodeId>> {
    match parent {
        Some(p) => Ok(Some(cx.query(p, ".preschool-hero-line")?.unwrap_or(p))),
        None => Ok(None),
    }
}

/// Script line tightens its tracking while fading in, then the main line bounces up.
fn hero_preschool(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let Some(slide) = active_slide(cx, el)? else {
        return Ok(());
    };
    let script = cx.query(slide, ".hero__title-script")?;
    let main = cx.query(slide, ".hero__title-main")?;
    let script_target = preschool_line(cx, script)?;
    let main_target = preschool_line(cx, main)?;
    let description = cx.query(slide, ".hero__description")?;
    let button = cx.query(el, ".play-button")?;

    if let Some(s) = script.filter(|s| script_target != Some(*s)) {
        cx.set(s, &Props::new().opacity(1.0))?;
    }
    if let Some(m) = main {
        cx.set(m, &Props::new().opacity(1.0))?;
    }

    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    if let Some(t) = script_target {
        b.from_to(
            &[t],
            &Props::new().opacity(0.0).letter_spacing(0.22),
            Props::new().opacity(1.0).letter_spacing(-0.009),
            Timing::new(1.4, Ease::OutQuart),
            Position::At(0.0),
        );
    }
    let mut rose = None;
    if let Some(t) = main_target {
        let at = if script_target.is_some() { 1.4 * 0.5 } else { 0.0 };
        rose = char_rise(
            cx,
            &mut b,
            t,
            Props::new().y_percent(100.0).opacity(0.0),
            Timing::new(0.9, Ease::InOutBack(2.7)).each(0.06),
            Position::At(at),
        )?;
    }
    if let Some(d) = description {
        rise(
            &mut b,
            &[d],
            Props::new().opacity(0.0).y(34.0),
            Timing::new(0.8, Ease::OutQuart),
            Position::End(-0.3),
        );
    }
    if let Some(p) = button {
        rise(
            &mut b,
            &[p],
            Props::new().opacity(0.0).scale(0.08),
            Timing::new(0.7, Ease::OutCubic),
            Position::After(0.1),
        );
    }
    if script_target.is_none() && rose.is_none() && description.is_none() && button.is_none() {
        cx.missing(".hero__title-script");
        return Ok(());
    }

    if cx.reduced_motion() {
        return finish(cx, b);
    }
    commit(cx, b, autoplay(cfg))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/variants/hero.rs"]
mod tests;
