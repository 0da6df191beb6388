use std::{fmt, str::FromStr};

use smallvec::{SmallVec, smallvec};

use crate::{
    document::node::NodeId,
    foundation::core::{Rect, parse_finite},
    foundation::error::{ScrollCueError, ScrollCueResult},
};

/// One side of a trigger point: a distance from the top of a box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Anchor {
    /// Percentage of the box height (`top` = 0, `center` = 50, `bottom` = 100).
    Percent(f64),
    /// Absolute px.
    Px(f64),
}

impl Anchor {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "top" => return Some(Self::Percent(0.0)),
            "center" => return Some(Self::Percent(50.0)),
            "bottom" => return Some(Self::Percent(100.0)),
            _ => {}
        }
        if let Some(pct) = token.strip_suffix('%') {
            return parse_finite(pct).map(Self::Percent);
        }
        parse_finite(token.strip_suffix("px").unwrap_or(token)).map(Self::Px)
    }

    /// Distance in px from the top of a box of height `extent`.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Percent(p) => extent * p / 100.0,
            Self::Px(px) => px,
        }
    }
}

/// `"<element edge> <viewport position>"`, e.g. `top 80%`: fires when the element's top
/// reaches 80% of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TriggerPoint {
    /// Point on the trigger element.
    pub element: Anchor,
    /// Point on the viewport.
    pub viewport: Anchor,
}

impl TriggerPoint {
    /// Build from two anchors.
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Element top against `pct` of the viewport.
    pub const fn top(pct: f64) -> Self {
        Self::new(Anchor::Percent(0.0), Anchor::Percent(pct))
    }

    /// Element bottom against `pct` of the viewport.
    pub const fn bottom(pct: f64) -> Self {
        Self::new(Anchor::Percent(100.0), Anchor::Percent(pct))
    }

    /// Parse `"edge position"`; `None` for anything else.
    pub fn parse(src: &str) -> Option<Self> {
        let mut tokens = src.split_whitespace();
        let element = Anchor::parse(tokens.next()?)?;
        let viewport = Anchor::parse(tokens.next()?)?;
        if tokens.next().is_some() {
            return None;
        }
        Some(Self { element, viewport })
    }

    /// Scroll offset at which this point is reached for an element box `rect`
    /// (document space) in a viewport `viewport_height` px tall.
    pub fn scroll_offset(&self, rect: Rect, viewport_height: f64) -> f64 {
        rect.y0 + self.element.resolve(rect.height()) - self.viewport.resolve(viewport_height)
    }
}

impl fmt::Display for TriggerPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element {
            Anchor::Percent(p) if p == 0.0 => f.write_str("top")?,
            Anchor::Percent(p) if p == 50.0 => f.write_str("center")?,
            Anchor::Percent(p) if p == 100.0 => f.write_str("bottom")?,
            Anchor::Percent(p) => write!(f, "{p}%")?,
            Anchor::Px(px) => write!(f, "{px}px")?,
        }
        match self.viewport {
            Anchor::Percent(p) => write!(f, " {p}%"),
            Anchor::Px(px) => write!(f, " {px}px"),
        }
    }
}

impl FromStr for TriggerPoint {
    type Err = ScrollCueError;

    fn from_str(s: &str) -> ScrollCueResult<Self> {
        Self::parse(s).ok_or_else(|| ScrollCueError::validation(format!("invalid trigger point '{s}'")))
    }
}

impl TryFrom<String> for TriggerPoint {
    type Error = ScrollCueError;

    fn try_from(value: String) -> ScrollCueResult<Self> {
        value.parse()
    }
}

impl From<TriggerPoint> for String {
    fn from(value: TriggerPoint) -> Self {
        value.to_string()
    }
}

/// What a trigger does as the scroll position crosses its range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReplayPolicy {
    /// Play forward on first entry and never again.
    Once,
    /// Play on enter and enter-back, reverse on leave-back; also reverse on leave when
    /// `reverse_on_leave` is set.
    Toggle {
        /// Reverse when scrolling past the end.
        reverse_on_leave: bool,
    },
    /// Bind progress to the scroll position inside the range.
    Scrub {
        /// Catch-up time constant in seconds; `0` binds 1:1.
        smoothing: f64,
        /// Freeze once progress reaches the end.
        once: bool,
    },
}

/// How a scheduled timeline gets started.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Activation {
    /// Scroll-linked range on a trigger element.
    Scroll {
        /// Element whose box defines the range.
        trigger: NodeId,
        /// Range start.
        start: TriggerPoint,
        /// Range end.
        end: TriggerPoint,
    },
    /// Starts on the first frame, optionally after the host root gains class `loaded`.
    Autoplay {
        /// Hold until the root has class `loaded`.
        wait_loaded: bool,
    },
}

/// Trigger description attached to a scheduled timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerSpec {
    /// Start condition.
    pub activation: Activation,
    /// Replay behavior.
    pub policy: ReplayPolicy,
}

impl TriggerSpec {
    /// Play-once trigger on `trigger` starting at `start`, ending at `bottom 0%`.
    pub fn scroll(trigger: NodeId, start: TriggerPoint) -> Self {
        Self {
            activation: Activation::Scroll {
                trigger,
                start,
                end: TriggerPoint::bottom(0.0),
            },
            policy: ReplayPolicy::Once,
        }
    }

    /// Autoplay trigger.
    pub fn autoplay(wait_loaded: bool) -> Self {
        Self {
            activation: Activation::Autoplay { wait_loaded },
            policy: ReplayPolicy::Once,
        }
    }

    /// Replace the range end of a scroll trigger.
    pub fn end(mut self, point: TriggerPoint) -> Self {
        if let Activation::Scroll { end, .. } = &mut self.activation {
            *end = point;
        }
        self
    }

    /// Replace the replay policy.
    pub fn policy(mut self, policy: ReplayPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Where the scroll position sits relative to a trigger range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Above the start.
    #[default]
    Before,
    /// Between start and end.
    Active,
    /// Past the end.
    After,
}

/// Crossing reported when the zone changes between two frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Scrolled down past the start.
    Enter,
    /// Scrolled down past the end.
    Leave,
    /// Scrolled up past the end.
    EnterBack,
    /// Scrolled up past the start.
    LeaveBack,
}

/// Resolved scroll range in px.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollRange {
    /// Scroll offset of the start point.
    pub start: f64,
    /// Scroll offset of the end point, never below `start`.
    pub end: f64,
}

impl ScrollRange {
    /// Resolve both points for an element box.
    pub fn resolve(rect: Rect, start: TriggerPoint, end: TriggerPoint, viewport_height: f64) -> Self {
        let s = start.scroll_offset(rect, viewport_height);
        let e = end.scroll_offset(rect, viewport_height);
        Self {
            start: s,
            end: e.max(s),
        }
    }

    /// Zone of `scroll_y`.
    pub fn zone(&self, scroll_y: f64) -> Zone {
        if scroll_y < self.start {
            Zone::Before
        } else if scroll_y > self.end {
            Zone::After
        } else {
            Zone::Active
        }
    }

    /// Scrub progress of `scroll_y` in `[0, 1]`.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let len = self.end - self.start;
        if len <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / len).clamp(0.0, 1.0)
    }
}

/// Crossings between two zones, in the order they happen.
pub fn crossings(from: Zone, to: Zone) -> SmallVec<[TriggerEvent; 2]> {
    use TriggerEvent::*;
    match (from, to) {
        (Zone::Before, Zone::Active) => smallvec![Enter],
        (Zone::Before, Zone::After) => smallvec![Enter, Leave],
        (Zone::Active, Zone::After) => smallvec![Leave],
        (Zone::After, Zone::Active) => smallvec![EnterBack],
        (Zone::After, Zone::Before) => smallvec![EnterBack, LeaveBack],
        (Zone::Active, Zone::Before) => smallvec![LeaveBack],
        _ => SmallVec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/trigger.rs"]
mod tests;
