use crate::foundation::error::{ScrollCueError, ScrollCueResult};

pub use kurbo::{Point, Rect, Vec2};

/// Tolerance used when comparing resolved timeline offsets.
pub const TIME_EPSILON: f64 = 1e-9;

/// Half-open time span `[start, end)` in seconds on a timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeSpan {
    /// Inclusive span start.
    pub start: f64,
    /// Exclusive span end.
    pub end: f64,
}

impl TimeSpan {
    /// Create a validated span with finite bounds and `start <= end`.
    pub fn new(start: f64, end: f64) -> ScrollCueResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollCueError::timeline("TimeSpan bounds must be finite"));
        }
        if start > end {
            return Err(ScrollCueError::timeline("TimeSpan start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Span that starts at `start` and lasts `duration` seconds.
    pub fn at(start: f64, duration: f64) -> Self {
        Self {
            start,
            end: start + duration.max(0.0),
        }
    }

    /// Length of the span in seconds.
    pub fn len(self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Return `true` when the span has zero length.
    pub fn is_empty(self) -> bool {
        self.len() <= TIME_EPSILON
    }

    /// Time at `fraction` of the way through the span.
    pub fn at_fraction(self, fraction: f64) -> f64 {
        self.start + self.len() * fraction
    }

    /// Smallest span covering both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Shift both bounds by `delta` seconds.
    pub fn shift(self, delta: f64) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }

    /// Normalized progress of `t` through the span, clamped to `[0, 1]`.
    ///
    /// Empty spans jump straight from 0 to 1 at `start`.
    pub fn progress(self, t: f64) -> f64 {
        if self.is_empty() {
            return if t >= self.start { 1.0 } else { 0.0 };
        }
        ((t - self.start) / self.len()).clamp(0.0, 1.0)
    }
}

/// Parse a finite `f64`, rejecting blanks, NaN and infinities.
pub(crate) fn parse_finite(raw: &str) -> Option<f64> {
    let v: f64 = raw.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
