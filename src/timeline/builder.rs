use std::collections::{BTreeMap, HashMap};

use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    animation::props::{Prop, Props},
    document::node::{Document, NodeId},
    foundation::core::TimeSpan,
    foundation::error::{ScrollCueError, ScrollCueResult},
    timeline::model::{PropChange, Repeat, TimelineDef, Tween},
    timeline::stagger::Stagger,
};

/// Handle to a stage added to a [`TimelineBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StageId(usize);

/// Where a stage starts.
#[derive(Clone, Debug, PartialEq)]
pub enum Position {
    /// Absolute time in seconds.
    At(f64),
    /// A fraction of the way through an earlier stage.
    Stage {
        /// Referenced stage.
        stage: StageId,
        /// `0.0` = its start, `1.0` = its end.
        fraction: f64,
    },
    /// Offset from the end of an earlier stage.
    StageEnd {
        /// Referenced stage.
        stage: StageId,
        /// Seconds after its end.
        offset: f64,
    },
    /// Offset from the end of the previous stage.
    After(f64),
    /// Offset from the start of the previous stage.
    With(f64),
    /// Offset from a label.
    Label(String, f64),
    /// Offset from the current end of the timeline.
    End(f64),
}

/// Duration, easing and stagger of one stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Per-target duration in seconds.
    pub duration: f64,
    /// Ease applied to every target.
    pub ease: Ease,
    /// Spread of start times across targets.
    pub stagger: Option<Stagger>,
}

impl Timing {
    /// Timing without stagger.
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            stagger: None,
        }
    }

    /// Add a stagger.
    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Shorthand for [`Stagger::Each`].
    pub fn each(self, gap: f64) -> Self {
        self.stagger(Stagger::Each(gap))
    }
}

#[derive(Clone, Debug)]
struct Pending {
    target: NodeId,
    start: f64,
    duration: f64,
    ease: Ease,
    props: Props,
}

/// Collects stages and resolves them into an immutable [`TimelineDef`].
///
/// Positions resolve as stages are added, in insertion order, so `After`/`With`/`End`
/// always refer to what was added before. `from` values resolve in [`build`](Self::build)
/// against earlier stages, then the scheduled sets, then the element's current style.
#[derive(Clone, Debug, Default)]
pub struct TimelineBuilder {
    delay: f64,
    repeat: Repeat,
    sets: Vec<(NodeId, Props)>,
    pending: Vec<Pending>,
    stages: Vec<TimeSpan>,
    labels: BTreeMap<String, f64>,
    end: f64,
    last: Option<TimeSpan>,
    error: Option<String>,
}

impl TimelineBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every stage by `seconds`.
    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = if seconds.is_finite() {
            seconds.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Looping behavior.
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Values applied at schedule time.
    pub fn set(&mut self, targets: &[NodeId], props: &Props) {
        for t in targets {
            self.sets.push((*t, props.clone()));
        }
    }

    /// Animate `targets` to `props`. An empty target list adds a zero-length stage that
    /// moves neither the end nor the previous-stage reference.
    pub fn to(
        &mut self,
        targets: &[NodeId],
        props: Props,
        timing: Timing,
        at: Position,
    ) -> StageId {
        let id = StageId(self.stages.len());
        let start = match self.resolve(&at) {
            Ok(t) => t,
            Err(msg) => {
                self.fail(msg);
                self.stages.push(TimeSpan::at(0.0, 0.0));
                return id;
            }
        };
        if !timing.duration.is_finite() || timing.duration < 0.0 {
            self.fail(format!("stage duration must be finite and >= 0, got {}", timing.duration));
            self.stages.push(TimeSpan::at(start, 0.0));
            return id;
        }
        if targets.is_empty() {
            self.stages.push(TimeSpan::at(start, 0.0));
            return id;
        }

        let n = targets.len();
        for (i, target) in targets.iter().enumerate() {
            let offset = timing.stagger.map_or(0.0, |s| s.offset(i, n));
            self.pending.push(Pending {
                target: *target,
                start: start + offset,
                duration: timing.duration,
                ease: timing.ease,
                props: props.clone(),
            });
        }
        let spread = timing.stagger.map_or(0.0, |s| s.spread(n));
        let span = TimeSpan::at(start, spread + timing.duration);
        self.end = self.end.max(span.end);
        self.last = Some(span);
        self.stages.push(span);
        id
    }

    /// Apply `from` now, then animate to `to`.
    pub fn from_to(
        &mut self,
        targets: &[NodeId],
        from: &Props,
        to: Props,
        timing: Timing,
        at: Position,
    ) -> StageId {
        self.set(targets, from);
        self.to(targets, to, timing, at)
    }

    /// Name a position for later [`Position::Label`] references.
    pub fn label(&mut self, name: &str, at: Position) {
        match self.resolve(&at) {
            Ok(t) => {
                self.labels.insert(name.to_owned(), t);
            }
            Err(msg) => self.fail(msg),
        }
    }

    /// Resolved span of a stage, without the timeline delay.
    pub fn stage_span(&self, stage: StageId) -> Option<TimeSpan> {
        self.stages.get(stage.0).copied()
    }

    /// Current end, without the timeline delay.
    pub fn end(&self) -> f64 {
        self.end
    }

    fn fail(&mut self, msg: String) {
        self.error.get_or_insert(msg);
    }

    fn resolve(&self, at: &Position) -> Result<f64, String> {
        let stage = |id: &StageId| {
            self.stages
                .get(id.0)
                .copied()
                .ok_or_else(|| format!("unknown stage {}", id.0))
        };
        let t = match at {
            Position::At(t) => *t,
            Position::Stage { stage: id, fraction } => stage(id)?.at_fraction(*fraction),
            Position::StageEnd { stage: id, offset } => stage(id)?.end + offset,
            Position::After(offset) => self.last.map_or(self.end, |s| s.end) + offset,
            Position::With(offset) => self.last.map_or(0.0, |s| s.start) + offset,
            Position::Label(name, offset) => {
                self.labels
                    .get(name)
                    .copied()
                    .ok_or_else(|| format!("unknown label '{name}'"))?
                    + offset
            }
            Position::End(offset) => self.end + offset,
        };
        if !t.is_finite() {
            return Err(format!("position {at:?} resolved to a non-finite time"));
        }
        Ok(t.max(0.0))
    }

    /// Resolve `from` values and produce the timeline description.
    pub fn build(self, doc: &Document) -> ScrollCueResult<TimelineDef> {
        if let Some(msg) = self.error {
            return Err(ScrollCueError::timeline(msg));
        }

        let mut shadow: HashMap<(NodeId, Prop), f64> = HashMap::new();
        for (node, props) in &self.sets {
            for (p, v) in props.iter() {
                shadow.insert((*node, p), v);
            }
        }

        let mut tweens = Vec::with_capacity(self.pending.len());
        for p in self.pending {
            let changes: SmallVec<[PropChange; 4]> = p
                .props
                .iter()
                .map(|(prop, to)| {
                    let from = shadow.get(&(p.target, prop)).copied().unwrap_or_else(|| {
                        doc.style(p.target)
                            .map_or(prop.default_value(), |s| s.get(prop))
                    });
                    shadow.insert((p.target, prop), to);
                    PropChange { prop, from, to }
                })
                .collect();
            tweens.push(Tween {
                target: p.target,
                span: TimeSpan::at(p.start + self.delay, p.duration),
                ease: p.ease,
                changes,
            });
        }
        tweens.sort_by(|a, b| a.span.start.total_cmp(&b.span.start));

        let delay = self.delay;
        Ok(TimelineDef {
            sets: self.sets,
            tweens,
            labels: self
                .labels
                .into_iter()
                .map(|(k, v)| (k, v + delay))
                .collect(),
            duration: delay + self.end,
            repeat: self.repeat,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
