//! Section choreographies spanning several sub-elements, with distinct mobile and
//! desktop staging.

use crate::{
    animation::{
        ease::Ease,
        props::{Prop, Props},
    },
    config::{attrs::AttrNames, resolve::Config},
    document::node::NodeId,
    foundation::{core::parse_finite, error::ScrollCueResult},
    scope::cx::ApplyCx,
    timeline::{
        builder::{Position, TimelineBuilder, Timing},
        trigger::{TriggerPoint, TriggerSpec},
    },
    variants::{
        Choreography,
        common::{
            BOLD_PART, SCRIPT_PART, char_rise, commit, first_of, noted, once_on, require,
            rise, script_write,
        },
        text::tipped_char,
    },
};

pub(crate) const VARIANTS: &[Choreography] = &[
    Choreography::new("what-we-do-header", what_we_do_header),
    Choreography::new("what-we-do-cards", what_we_do_cards),
    Choreography::new("core-values", core_values),
    Choreography::new("core-values-timeline", core_values_timeline),
    Choreography::new("wellbeing-timeline", wellbeing_timeline),
    Choreography::new("three-stages-timeline", three_stages_timeline),
    Choreography::new("masked-image-content", masked_image_content),
    Choreography::new("three-campuses", three_campuses),
    Choreography::new("tilt-card", tilt_card),
];

fn fade_up() -> Props {
    Props::new().y(50.0).auto_alpha(0.0)
}

fn zoomed_out(scale: f64) -> Props {
    Props::new().scale(scale).auto_alpha(0.0)
}

/// Which parts of a script/bold heading were staged.
#[derive(Clone, Copy, Debug, Default)]
struct Heading {
    script: bool,
    bold: bool,
}

/// Script part of `group` writes in at `at`; its bold part rises at `bold_at`, or at
/// 90% of the script stage when unset.
fn heading(
    cx: &mut ApplyCx<'_>,
    b: &mut TimelineBuilder,
    group: NodeId,
    at: f64,
    script_secs: f64,
    bold_secs: f64,
    bold_at: Option<f64>,
) -> ScrollCueResult<Heading> {
    let script = cx.query(group, SCRIPT_PART)?;
    let bold = cx.query(group, BOLD_PART)?;
    let mut out = Heading::default();
    if let Some(s) = script {
        out.script = script_write(
            cx,
            b,
            s,
            Props::new(),
            Timing::new(script_secs, Ease::OutCubic),
            Position::At(at),
        )?
        .is_some();
    }
    if let Some(bold) = bold {
        let t = bold_at.unwrap_or(if out.script {
            at + script_secs * 0.9
        } else {
            at
        });
        out.bold = char_rise(
            cx,
            b,
            bold,
            tipped_char(),
            Timing::new(bold_secs, Ease::OutExpo).each(0.02),
            Position::At(t),
        )?
        .is_some();
    }
    Ok(out)
}

/// Side titles slide in around a logo that grows past full size.
fn what_we_do_header(cx: &mut ApplyCx<'_>, el: NodeId, _cfg: &Config) -> ScrollCueResult<()> {
    let left = require(cx, el, ".section-title-left")?;
    let right = require(cx, el, ".section-title-right")?;
    let logo = require(cx, el, ".masked-logo-group img")?;
    let (Some(left), Some(right), Some(logo)) = (left, right, logo) else {
        return Ok(());
    };

    let timing = Timing::new(0.7, Ease::OutCubic);
    let mut b = TimelineBuilder::new();
    rise(
        &mut b,
        &[left],
        Props::new().x(-100.0).opacity(0.0),
        timing,
        Position::At(0.6),
    );
    b.from_to(
        &[right],
        &Props::new().x(100.0).opacity(0.0),
        Props::new().x(0.0).opacity(0.5),
        timing,
        Position::At(1.0),
    );
    b.from_to(
        &[logo],
        &Props::new().scale(0.7).opacity(0.0),
        Props::new().scale(1.2).opacity(1.0),
        Timing::new(0.7, Ease::Linear),
        Position::At(0.0),
    );
    let trigger =
        TriggerSpec::scroll(el, TriggerPoint::top(60.0)).end(TriggerPoint::bottom(40.0));
    commit(cx, b, trigger)?;
    Ok(())
}

fn what_we_do_cards(cx: &mut ApplyCx<'_>, el: NodeId, _cfg: &Config) -> ScrollCueResult<()> {
    let cards = if cx.doc.has_class(el, "feature-card") {
        vec![el]
    } else {
        cx.query_all(el, ".feature-card")?
    };
    if cards.is_empty() {
        cx.missing(".feature-card");
        return Ok(());
    }

    for (i, card) in cards.into_iter().enumerate() {
        let lag = i as f64 * 0.15;
        let trigger = TriggerSpec::scroll(card, TriggerPoint::top(70.0));
        let outer = cx.query(card, ".five-as-section__image-outer-circle img")?;
        let inner = cx.query(card, ".five-as-section__image-inner-circle img")?;
        if let (Some(outer), Some(inner)) = (outer, inner) {
            let mut b = TimelineBuilder::new().delay(lag);
            rise(
                &mut b,
                &[outer, inner],
                Props::new().scale(0.4).opacity(0.0),
                Timing::new(1.2, Ease::OutBack(1.7)),
                Position::At(0.0),
            );
            commit(cx, b, trigger)?;
        }
        let content = cx.query_all(card, ".feature-card-title, .feature-card-description")?;
        if !content.is_empty() {
            let mut b = TimelineBuilder::new().delay(lag + 0.3);
            rise(
                &mut b,
                &content,
                Props::new().y(20.0).auto_alpha(0.0),
                Timing::new(1.25, Ease::OutCubic).each(0.1),
                Position::At(0.0),
            );
            commit(cx, b, trigger)?;
        }
    }
    Ok(())
}

/// Each value's icon pops in with its text just behind it, one value after another.
fn core_values(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let items = cx.query_all(el, ".core-value-item")?;
    if items.is_empty() {
        cx.missing(".core-value-item");
        return Ok(());
    }
    let gap = cfg.stagger.or(0.2);
    let duration = cfg.duration.get();
    let icon_timing = Timing::new(duration, cfg.ease.or(Ease::OutBack(1.05)));
    let text_timing = Timing::new(duration, cfg.ease.or(Ease::OutCubic));

    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    for (i, item) in items.into_iter().enumerate() {
        let start = i as f64 * gap;
        if let Some(icon) = cx.query(item, ".core-value-icon-wrapper")? {
            rise(
                &mut b,
                &[icon],
                zoomed_out(0.4),
                icon_timing,
                Position::At(start),
            );
        }
        if let Some(text) = cx.query(item, ".core-value-text")? {
            rise(
                &mut b,
                &[text],
                Props::new().y(30.0).auto_alpha(0.0),
                text_timing,
                Position::At(start + 0.05),
            );
        }
    }
    commit(cx, b, once_on(el, cfg))?;
    Ok(())
}

struct ValueParts {
    icon: Option<NodeId>,
    title: Option<NodeId>,
    desc: Option<NodeId>,
}

fn value_parts(cx: &ApplyCx<'_>, item: NodeId) -> ScrollCueResult<ValueParts> {
    Ok(ValueParts {
        icon: cx.query(item, ".core-value-icon-wrapper")?,
        title: cx.query(item, ".core-value-title")?,
        desc: cx.query(item, ".core-value-description")?,
    })
}

/// Title column and value list.
///
/// Desktop runs two timelines: the title block on the section, then the image and the
/// values on the list. Mobile splits into the image, the title block and one timeline
/// per value.
fn core_values_timeline(cx: &mut ApplyCx<'_>, el: NodeId, _cfg: &Config) -> ScrollCueResult<()> {
    let script = cx.query(el, ".core-values-title-script")?;
    let bold = cx.query(el, ".core-values-title-bold")?;
    let subtitle = cx.query(el, ".core-values-subtitle")?;
    let description = cx.query(el, ".core-values-description")?;
    let items = cx.query_all(el, ".core-value-item")?;
    let image = cx.query(el, ".masked-image-content-block")?;
    let mobile = cx.is_mobile();

    let script_from = Props::new().opacity(0.0).y(50.0).rotation_x(15.0);
    let bold_from = Props::new().opacity(0.0).y(60.0).rotation_x(15.0);
    let image_from = Props::new().scale(0.7).opacity(0.0);
    let item_from = Props::new().opacity(0.0).y(50.0);

    let mut title = TimelineBuilder::new();
    let steps: [(Option<NodeId>, Props, Timing, f64, f64); 4] = [
        (script, script_from, Timing::new(0.8, Ease::OutQuart), 0.0, 0.0),
        (bold, bold_from, Timing::new(0.8, Ease::OutQuart), 0.1, 0.02),
        (
            subtitle,
            Props::new().opacity(0.0).y(30.0),
            Timing::new(0.7, Ease::OutCubic),
            0.25,
            0.3,
        ),
        (
            description,
            Props::new().opacity(0.0).y(25.0),
            Timing::new(0.7, Ease::OutCubic),
            0.4,
            0.45,
        ),
    ];
    for (node, from, timing, at_mobile, at_desktop) in steps {
        if let Some(n) = node {
            let at = if mobile { at_mobile } else { at_desktop };
            rise(&mut title, &[n], from, timing, Position::At(at));
        }
    }

    if mobile {
        if let Some(image) = image {
            let mut b = TimelineBuilder::new();
            rise(
                &mut b,
                &[image],
                image_from.clone(),
                Timing::new(1.0, Ease::OutQuart),
                Position::At(0.0),
            );
            commit(cx, b, TriggerSpec::scroll(el, TriggerPoint::top(75.0)))?;
        }
        let group = cx.query(el, ".core-values-title-group")?.unwrap_or(el);
        commit(cx, title, TriggerSpec::scroll(group, TriggerPoint::top(80.0)))?;

        for item in items {
            let parts = value_parts(cx, item)?;
            let mut b = TimelineBuilder::new();
            if let Some(icon) = parts.icon {
                rise(
                    &mut b,
                    &[icon],
                    image_from.clone(),
                    Timing::new(0.6, Ease::OutBack(1.4)),
                    Position::At(0.0),
                );
            }
            if let Some(t) = parts.title {
                rise(
                    &mut b,
                    &[t],
                    item_from.clone(),
                    Timing::new(0.5, Ease::OutQuart),
                    Position::At(0.0),
                );
            }
            if let Some(d) = parts.desc {
                rise(
                    &mut b,
                    &[d],
                    item_from.clone(),
                    Timing::new(0.5, Ease::OutCubic),
                    Position::At(0.05),
                );
            }
            commit(cx, b, TriggerSpec::scroll(item, TriggerPoint::top(85.0)))?;
        }
        return Ok(());
    }

    commit(cx, title, TriggerSpec::scroll(el, TriggerPoint::top(55.0)))?;

    let mut b = TimelineBuilder::new();
    if let Some(image) = image {
        rise(
            &mut b,
            &[image],
            image_from.clone(),
            Timing::new(1.2, Ease::OutBack(0.5)),
            Position::At(0.0),
        );
    }
    for (i, item) in items.into_iter().enumerate() {
        let at = Position::At(0.2 + i as f64 * 0.25);
        let parts = value_parts(cx, item)?;
        if let Some(icon) = parts.icon {
            rise(
                &mut b,
                &[icon],
                image_from.clone(),
                Timing::new(0.7, Ease::OutBack(1.4)),
                at.clone(),
            );
        }
        if let Some(t) = parts.title {
            rise(
                &mut b,
                &[t],
                item_from.clone(),
                Timing::new(0.6, Ease::OutQuart),
                at.clone(),
            );
        }
        if let Some(d) = parts.desc {
            rise(
                &mut b,
                &[d],
                item_from.clone(),
                Timing::new(0.6, Ease::OutCubic),
                at,
            );
        }
    }
    let list = cx.query(el, ".core-values-list")?.unwrap_or(el);
    commit(cx, b, TriggerSpec::scroll(list, TriggerPoint::top(85.0)))?;
    Ok(())
}

/// `.wellbeing-text-heading` elements, then the paragraphs of every `.wellbeing-text-body`.
fn wellbeing_fades(cx: &ApplyCx<'_>, content: Option<NodeId>) -> ScrollCueResult<Vec<NodeId>> {
    let Some(content) = content else {
        return Ok(Vec::new());
    };
    let mut out = cx.query_all(content, ".wellbeing-text-heading")?;
    for body in cx.query_all(content, ".wellbeing-text-body")? {
        if cx.doc.tag(body) == Some("p") {
            out.push(body);
        } else {
            out.extend(
                cx.children(body)
                    .into_iter()
                    .filter(|c| cx.doc.tag(*c) == Some("p")),
            );
        }
    }
    Ok(out)
}

/// Image zoom, section heading and text fade-ups.
///
/// Mobile plays them one after another; desktop starts image and heading together.
fn wellbeing_timeline(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    const ZOOM: f64 = 1.9;
    const SCRIPT: f64 = 1.1;
    const BOLD: f64 = 1.2;

    let section = cx.closest(el, ".wellbeing-section")?;
    let container = cx.closest(el, ".container-fluid")?.or(section);
    let find = |cx: &ApplyCx<'_>, sel: &str| -> ScrollCueResult<Option<NodeId>> {
        match cx.query(el, sel)? {
            Some(n) => Ok(Some(n)),
            None => match container {
                Some(c) => cx.query(c, sel),
                None => Ok(None),
            },
        }
    };
    let part = |cx: &mut ApplyCx<'_>, sel: &str| -> ScrollCueResult<Option<NodeId>> {
        let found = find(&*cx, sel)?;
        Ok(noted(cx, found, sel))
    };
    let image = part(cx, ".five-as-section__image-wrapper")?;
    let group = part(cx, ".wellbeing-title-group")?;
    let content = part(cx, ".wellbeing-content")?;
    let fades = wellbeing_fades(cx, content)?;
    if content.is_some() && fades.is_empty() {
        cx.missing(".wellbeing-text-heading, .wellbeing-text-body p");
    }
    if image.is_none() && group.is_none() && fades.is_empty() {
        return Ok(());
    }
    let trigger = section
        .filter(|s| cx.rect(*s).is_some_and(|r| r.height() > 100.0))
        .unwrap_or(el);

    let mobile = cx.is_mobile();
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    if let Some(image) = image {
        rise(
            &mut b,
            &[image],
            zoomed_out(0.7),
            Timing::new(ZOOM, Ease::OutBack(1.05)),
            Position::At(0.0),
        );
    }
    let image_half = if image.is_some() { ZOOM * 0.5 } else { 0.0 };
    let title_at = if mobile { image_half } else { 0.0 };
    let mut head = Heading::default();
    if let Some(group) = group {
        head = heading(cx, &mut b, group, title_at, SCRIPT, BOLD, None)?;
    }
    if !fades.is_empty() {
        let title_span = match (group.is_some(), head.script) {
            (false, _) => None,
            (true, true) => Some(SCRIPT * 0.9 + BOLD * 0.5),
            (true, false) => Some(SCRIPT * 0.5),
        };
        let at = if mobile {
            match title_span {
                Some(span) => ZOOM * 0.5 + span,
                None => image_half,
            }
        } else {
            image_half.max(title_span.unwrap_or(0.0))
        };
        rise(
            &mut b,
            &fades,
            fade_up(),
            Timing::new(1.25, Ease::OutCubic).each(0.1),
            Position::At(at),
        );
    }

    let start = cfg
        .start
        .or(TriggerPoint::top(if mobile { 80.0 } else { 60.0 }));
    commit(cx, b, TriggerSpec::scroll(trigger, start))?;
    Ok(())
}

/// Section heading, then the description paragraphs and the stage list.
fn three_stages_timeline(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    const SCRIPT: f64 = 1.1;
    const BOLD: f64 = 1.2;

    let title = require(cx, el, ".title")?;
    let content = require(cx, el, ".three-stages-content")?;
    let mut fades = Vec::new();
    let mut list = None;
    if let Some(content) = content {
        fades = cx.query_all(content, ".three-stages-description p")?;
        if fades.is_empty() {
            cx.missing(".three-stages-description p");
        }
        list = require(cx, content, ".three-stages-list")?;
        fades.extend(list);
    }
    if title.is_none() && fades.is_empty() {
        return Ok(());
    }

    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    let mut head = Heading::default();
    if let Some(title) = title {
        head = heading(cx, &mut b, title, 0.0, SCRIPT, BOLD, None)?;
    }
    if !fades.is_empty() {
        let at = match (title.is_some(), head.script) {
            (false, _) => 0.0,
            (true, true) => SCRIPT * 0.9 + BOLD * 0.5,
            (true, false) => SCRIPT * 0.5,
        };
        let names = AttrNames::new(&cx.settings.attr_prefix);
        let gap = list
            .and_then(|l| cx.doc.attr(l, &names.stagger()))
            .and_then(parse_finite)
            .filter(|g| *g >= 0.0)
            .unwrap_or(0.1);
        rise(
            &mut b,
            &fades,
            fade_up(),
            Timing::new(1.25, Ease::OutCubic).each(gap),
            Position::At(at),
        );
    }
    commit(cx, b, once_on(el, cfg))?;
    Ok(())
}

struct MaskedParts {
    image: Option<NodeId>,
    content: Option<NodeId>,
    texts: [Option<NodeId>; 3],
    cta: Option<NodeId>,
    cta_label: Option<NodeId>,
}

/// CTA fill at `at`, label following 0.65 s later.
fn cta_fill(b: &mut TimelineBuilder, parts: &MaskedParts, at: f64) {
    let hidden = Props::new().with(Prop::ClipRight, 100.0);
    if let Some(cta) = parts.cta {
        rise(
            b,
            &[cta],
            hidden.clone(),
            Timing::new(0.6, Ease::Linear),
            Position::At(at),
        );
    }
    if let Some(label) = parts.cta_label {
        rise(
            b,
            &[label],
            hidden,
            Timing::new(0.9, Ease::Linear),
            Position::At(at + 0.65),
        );
    }
}

/// Masked image zooms in; title, description and CTA follow.
///
/// Wide and touch viewports give the image and the text block separate triggers.
fn masked_image_content(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let cta = cx.query(el, ".masked-image-content-block__cta")?;
    let cta_label = match cta {
        Some(c) => {
            cx.set(c, &Props::new().auto_alpha(1.0))?;
            cx.wrap_text(c)?
        }
        None => None,
    };
    let cta = noted(cx, cta, ".masked-image-content-block__cta");
    let parts = MaskedParts {
        image: require(cx, el, ".masked-image-content-block-wrap")?,
        content: require(cx, el, ".masked-image-content-block__content")?,
        texts: [
            require(cx, el, ".masked-image-content-block__title-script")?,
            require(cx, el, ".masked-image-content-block__title-bold")?,
            require(cx, el, ".masked-image-content-block__description")?,
        ],
        cta,
        cta_label,
    };
    let text_timing = Timing::new(1.0, Ease::OutCubic);
    let image_timing = Timing::new(1.3, Ease::OutBack(1.1));
    let delay = cfg.delay.get();

    if cx.is_wide() {
        let start = TriggerPoint::top(80.0);
        if let Some(image) = parts.image {
            let mut b = TimelineBuilder::new().delay(delay);
            rise(&mut b, &[image], zoomed_out(0.7), image_timing, Position::At(0.0));
            commit(cx, b, TriggerSpec::scroll(image, start))?;
        }
        if let Some(content) = parts.content {
            let mut b = TimelineBuilder::new().delay(delay);
            for (i, text) in parts.texts.iter().enumerate() {
                if let Some(t) = text {
                    rise(&mut b, &[*t], fade_up(), text_timing, Position::At(i as f64 * 0.2));
                }
            }
            cta_fill(&mut b, &parts, 0.6);
            commit(cx, b, TriggerSpec::scroll(content, start))?;
        }
        return Ok(());
    }

    let mut b = TimelineBuilder::new().delay(delay);
    if let Some(image) = parts.image {
        rise(&mut b, &[image], zoomed_out(0.7), image_timing, Position::At(0.0));
    }
    let first = 1.3 * 0.3;
    for (i, text) in parts.texts.iter().enumerate() {
        if let Some(t) = text {
            rise(
                &mut b,
                &[*t],
                fade_up(),
                text_timing,
                Position::At(first + i as f64 * 0.3),
            );
        }
    }
    cta_fill(&mut b, &parts, first + 0.9);
    commit(cx, b, TriggerSpec::scroll(el, TriggerPoint::top(50.0)))?;
    Ok(())
}

/// Heading and description, then campus cards flying in.
///
/// Desktop chains all cards on one timeline; wide and touch viewports give every card
/// its own trigger and alternate the fly-in side.
fn three_campuses(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    let wrapper = require(cx, el, ".three-campuses-section__title-wrapper")?;
    let description = match wrapper {
        Some(w) => cx.query(w, ".lead")?,
        None => None,
    };
    let description = match description {
        Some(d) => Some(d),
        None => require(cx, el, ".lead, .three-campuses-section__description")?,
    };
    let cards = cx.query_all(el, ".three-campuses-section__card")?;
    if cards.is_empty() {
        cx.missing(".three-campuses-section__card");
    }

    let mut title = TimelineBuilder::new().delay(cfg.delay.get());
    if let Some(w) = wrapper {
        heading(cx, &mut title, w, 0.0, 0.7, 0.9, Some(0.3))?;
    }
    if let Some(d) = description {
        rise(
            &mut title,
            &[d],
            fade_up(),
            Timing::new(0.8, Ease::OutCubic),
            Position::At(1.2),
        );
    }
    let title_start = cfg.start.or(TriggerPoint::top(55.0));
    commit(cx, title, TriggerSpec::scroll(el, title_start))?;

    if cards.is_empty() {
        return Ok(());
    }
    let card_timing = |d| Timing::new(d, Ease::OutQuart);
    let content_timing = Timing::new(0.5, Ease::OutCubic);

    if cx.is_wide() {
        let start = cfg.mobile_cards_start.unwrap_or(TriggerPoint::top(45.0));
        for (i, card) in cards.into_iter().enumerate() {
            let side = if i % 2 == 0 { 1.0 } else { -1.0 };
            let mut b = TimelineBuilder::new();
            rise(
                &mut b,
                &[card],
                Props::new()
                    .x(400.0 * side)
                    .y(-200.0)
                    .rotation(45.0 * side)
                    .auto_alpha(0.0),
                card_timing(1.1),
                Position::At(0.0),
            );
            if let Some(content) = cx.query(card, ".three-campuses-section__card-content")? {
                rise(
                    &mut b,
                    &[content],
                    zoomed_out(0.2),
                    content_timing,
                    Position::After(-0.25),
                );
            }
            commit(cx, b, TriggerSpec::scroll(card, start))?;
        }
        return Ok(());
    }

    let trigger = first_of(cx, el, &[".image-cards-row"])?.unwrap_or(cards[0]);
    let start = cfg.cards_start.unwrap_or(TriggerPoint::top(55.0));
    let mut b = TimelineBuilder::new();
    let mut t = 0.0;
    for card in cards {
        rise(
            &mut b,
            &[card],
            Props::new()
                .x(700.0)
                .y(-300.0)
                .rotation(85.0)
                .auto_alpha(0.0),
            card_timing(2.0),
            Position::At(t),
        );
        t += 0.7;
        if let Some(content) = cx.query(card, ".three-campuses-section__card-content")? {
            rise(&mut b, &[content], zoomed_out(0.5), content_timing, Position::At(t));
            t += 0.3;
        }
    }
    commit(cx, b, TriggerSpec::scroll(trigger, start))?;
    Ok(())
}

/// Cards stacked from the top right on desktop; on mobile each card uncovers from
/// alternating sides inside a fresh wrapper.
fn tilt_card(cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<()> {
    const CONTENT: &str = r#"[class*="content"]"#;
    let cards = cx.children(el);
    if cards.is_empty() {
        cx.missing("card children");
        return Ok(());
    }

    if cx.is_mobile() {
        for (i, card) in cards.into_iter().enumerate() {
            cx.wrap(card, "div")?;
            let edge = if i % 2 == 0 {
                Prop::ClipLeft
            } else {
                Prop::ClipRight
            };
            cx.set(card, &Props::new().auto_alpha(1.0))?;
            let mut b = TimelineBuilder::new();
            rise(
                &mut b,
                &[card],
                Props::new().with(edge, 100.0).scale(1.02),
                Timing::new(1.1, Ease::OutQuart),
                Position::At(0.0),
            );
            if let Some(content) = cx.query(card, CONTENT)? {
                rise(
                    &mut b,
                    &[content],
                    Props::new().y(30.0).auto_alpha(0.0),
                    Timing::new(0.5, Ease::OutCubic),
                    Position::At(0.15),
                );
            }
            commit(cx, b, TriggerSpec::scroll(card, TriggerPoint::top(55.0)))?;
        }
        return Ok(());
    }

    const FLY: f64 = 2.7;
    let n = cards.len();
    let content_start = (n - 1) as f64 + FLY * 0.6;
    let mut b = TimelineBuilder::new().delay(cfg.delay.get());
    for (i, card) in cards.into_iter().enumerate() {
        rise(
            &mut b,
            &[card],
            Props::new()
                .x(700.0)
                .y(-300.0)
                .rotation(85.0)
                .auto_alpha(0.0),
            Timing::new(FLY, Ease::OutQuart),
            Position::At(i as f64),
        );
        if let Some(content) = cx.query(card, CONTENT)? {
            rise(
                &mut b,
                &[content],
                Props::new().y(40.0).auto_alpha(0.0),
                Timing::new(0.4, Ease::OutCubic),
                Position::At(content_start + i as f64 * 0.15),
            );
        }
    }
    let start = cfg.start.or(TriggerPoint::top(40.0));
    commit(cx, b, TriggerSpec::scroll(el, start))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/variants/composite.rs"]
mod tests;
