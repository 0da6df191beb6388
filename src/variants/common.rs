use crate::{
    animation::props::{Prop, Props},
    config::resolve::Config,
    document::node::NodeId,
    foundation::error::ScrollCueResult,
    scope::{TimelineId, cx::ApplyCx},
    segment::split::Granularity,
    timeline::{
        builder::{Position, StageId, TimelineBuilder, Timing},
        trigger::TriggerSpec,
    },
};

/// Selector matching script-styled title parts.
pub(crate) const SCRIPT_PART: &str = r#"[class*="script"]"#;
/// Selector matching bold title parts.
pub(crate) const BOLD_PART: &str = r#"[class*="bold"]"#;

/// Resting values for every property in `from`.
pub(crate) fn rest(from: &Props) -> Props {
    from.iter()
        .fold(Props::new(), |acc, (p, _)| acc.with(p, p.default_value()))
}

/// Children of `el` when a positive stagger was authored and it has any, else `el`.
pub(crate) fn stagger_targets(cx: &ApplyCx<'_>, el: NodeId, cfg: &Config) -> Vec<NodeId> {
    let children = cx.children(el);
    if cfg.stagger.is_explicit() && cfg.stagger.get() > 0.0 && !children.is_empty() {
        children
    } else {
        vec![el]
    }
}

/// Play-once trigger on `el` at the declared start.
pub(crate) fn once_on(el: NodeId, cfg: &Config) -> TriggerSpec {
    TriggerSpec::scroll(el, cfg.start.get())
}

/// Build `b` and schedule it; an empty timeline schedules nothing.
pub(crate) fn commit(
    cx: &mut ApplyCx<'_>,
    b: TimelineBuilder,
    trigger: TriggerSpec,
) -> ScrollCueResult<Option<TimelineId>> {
    let def = b.build(cx.doc)?;
    if def.is_empty() {
        return Ok(None);
    }
    Ok(Some(cx.schedule(def, trigger)))
}

/// First match of the first selector in `selectors` that matches anything.
pub(crate) fn first_of(
    cx: &ApplyCx<'_>,
    scope: NodeId,
    selectors: &[&str],
) -> ScrollCueResult<Option<NodeId>> {
    for sel in selectors {
        if let Some(n) = cx.query(scope, sel)? {
            return Ok(Some(n));
        }
    }
    Ok(None)
}

/// Like [`ApplyCx::query`], reporting a miss.
pub(crate) fn require(
    cx: &mut ApplyCx<'_>,
    scope: NodeId,
    selector: &str,
) -> ScrollCueResult<Option<NodeId>> {
    let found = cx.query(scope, selector)?;
    Ok(noted(cx, found, selector))
}

/// Pass `found` through, reporting `selector` as missing when it is `None`.
pub(crate) fn noted(cx: &mut ApplyCx<'_>, found: Option<NodeId>, selector: &str) -> Option<NodeId> {
    if found.is_none() {
        cx.missing(selector);
    }
    found
}

/// Fade-from-offset stage: `from` is applied at schedule time and animated to rest.
pub(crate) fn rise(
    b: &mut TimelineBuilder,
    targets: &[NodeId],
    from: Props,
    timing: Timing,
    at: Position,
) -> StageId {
    let to = rest(&from);
    b.from_to(targets, &from, to, timing, at)
}

/// Handwriting reveal of `node`: its text becomes one script span clipped from the right.
///
/// `extra` joins the clip and opacity in the starting state. Returns `None` when
/// `node` has no text.
pub(crate) fn script_write(
    cx: &mut ApplyCx<'_>,
    b: &mut TimelineBuilder,
    node: NodeId,
    extra: Props,
    timing: Timing,
    at: Position,
) -> ScrollCueResult<Option<StageId>> {
    let Some(span) = cx.prepare_script(node)? else {
        return Ok(None);
    };
    let from = extra
        .iter()
        .fold(Props::new().with(Prop::ClipRight, 100.0).opacity(0.0), |acc, (p, v)| {
            acc.with(p, v)
        });
    Ok(Some(rise(b, &[span], from, timing, at)))
}

/// Character rise of `node`. Returns `None` when it has no text.
pub(crate) fn char_rise(
    cx: &mut ApplyCx<'_>,
    b: &mut TimelineBuilder,
    node: NodeId,
    from: Props,
    timing: Timing,
    at: Position,
) -> ScrollCueResult<Option<StageId>> {
    let segs = cx.segment(node, Granularity::Char)?;
    let chars = segs.units();
    if chars.is_empty() {
        return Ok(None);
    }
    Ok(Some(rise(b, chars, from, timing, at)))
}

/// Jump every target of `b` straight to its end state and schedule nothing.
pub(crate) fn finish(cx: &mut ApplyCx<'_>, b: TimelineBuilder) -> ScrollCueResult<()> {
    let def = b.build(cx.doc)?;
    for (node, props) in def.initial_state() {
        cx.set(node, &props)?;
    }
    for (node, props) in def.sample(f64::INFINITY) {
        cx.set(node, &props)?;
    }
    Ok(())
}

/// Set the resting state of `from` on `targets` without animating.
pub(crate) fn settle(cx: &mut ApplyCx<'_>, targets: &[NodeId], from: &Props) -> ScrollCueResult<()> {
    cx.set_all(targets, &rest(from))
}
