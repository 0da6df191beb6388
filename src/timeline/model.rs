use std::collections::{BTreeMap, BTreeSet, HashSet};

use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    animation::props::{Lerp, Prop, Props},
    document::node::NodeId,
    foundation::core::TimeSpan,
};

/// One property moving between two resolved values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropChange {
    /// Property.
    pub prop: Prop,
    /// Value at tween start.
    pub from: f64,
    /// Value at tween end.
    pub to: f64,
}

/// Single-target tween with absolute timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Animated element.
    pub target: NodeId,
    /// Absolute span on the timeline.
    pub span: TimeSpan,
    /// Progress mapping.
    pub ease: Ease,
    /// Property changes.
    pub changes: SmallVec<[PropChange; 4]>,
}

impl Tween {
    /// Whether the play head at `t` has reached this tween.
    ///
    /// Empty tweens fire only once the play head is strictly past their start, so a
    /// zero-length tween at time zero does not show its end state before playing.
    pub fn has_started(&self, t: f64) -> bool {
        t > self.span.start || (t >= self.span.start && !self.span.is_empty())
    }
}

/// Whether a timeline stops at its end or loops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    /// Play once.
    #[default]
    Once,
    /// Wrap around forever.
    Infinite,
}

/// Immutable, fully resolved timeline description.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineDef {
    /// Values applied when the timeline is scheduled, before any trigger fires.
    pub sets: Vec<(NodeId, Props)>,
    /// Tweens ordered by start time.
    pub tweens: Vec<Tween>,
    /// Named positions in seconds.
    pub labels: BTreeMap<String, f64>,
    /// Total length in seconds.
    pub duration: f64,
    /// Looping behavior.
    pub repeat: Repeat,
}

impl TimelineDef {
    /// Every element this timeline writes to.
    pub fn targets(&self) -> BTreeSet<NodeId> {
        self.sets
            .iter()
            .map(|(n, _)| *n)
            .chain(self.tweens.iter().map(|t| t.target))
            .collect()
    }

    /// Return `true` when there is nothing to animate.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Tweens animating `target`, in start order.
    pub fn tweens_of(&self, target: NodeId) -> impl Iterator<Item = &Tween> + '_ {
        self.tweens.iter().filter(move |t| t.target == target)
    }

    /// Render the play head at `t` into `out`.
    ///
    /// Started tweens write their eased value; a tween that has not started writes its
    /// `from` value only when no earlier tween wrote that property. Forward play, reverse
    /// play and scrubbing all go through this one function.
    pub fn sample_into(&self, t: f64, out: &mut BTreeMap<NodeId, Props>) {
        let mut written: HashSet<(NodeId, Prop)> = HashSet::new();
        for tween in &self.tweens {
            let started = tween.has_started(t);
            let k = if started {
                tween.ease.apply(tween.span.progress(t))
            } else {
                0.0
            };
            let entry = out.entry(tween.target).or_default();
            for c in &tween.changes {
                let first = written.insert((tween.target, c.prop));
                if started {
                    entry.insert(c.prop, f64::lerp(&c.from, &c.to, k));
                } else if first {
                    entry.insert(c.prop, c.from);
                }
            }
        }
    }

    /// Rendered values at `t`.
    pub fn sample(&self, t: f64) -> BTreeMap<NodeId, Props> {
        let mut out = BTreeMap::new();
        self.sample_into(t, &mut out);
        out
    }

    /// Pre-play state: the scheduled sets followed by the first `from` of every
    /// animated property.
    pub fn initial_state(&self) -> BTreeMap<NodeId, Props> {
        let mut out: BTreeMap<NodeId, Props> = BTreeMap::new();
        for (node, props) in &self.sets {
            let entry = out.entry(*node).or_default();
            for (p, v) in props.iter() {
                entry.insert(p, v);
            }
        }
        self.sample_into(f64::NEG_INFINITY, &mut out);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
