//! Runtime settings and per-element declaration resolution.

pub(crate) mod attrs;
pub(crate) mod resolve;

use crate::{
    foundation::error::{ScrollCueError, ScrollCueResult},
    responsive::Breakpoints,
    segment::lines::DEFAULT_LINE_TOLERANCE,
    timeline::trigger::TriggerPoint,
};

/// Fallback timings used when a declaration does not author its own.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Tween duration in seconds.
    pub duration: f64,
    /// Trigger start point.
    pub start: TriggerPoint,
    /// Delay in seconds.
    pub delay: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            duration: 1.25,
            start: TriggerPoint::top(80.0),
            delay: 0.0,
        }
    }
}

/// Host-level settings shared by every scope of a [`Runtime`](crate::Runtime).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Declaration attribute prefix.
    pub attr_prefix: String,
    /// Responsive breakpoints.
    pub breakpoints: Breakpoints,
    /// Fallback timings.
    pub defaults: Defaults,
    /// Pixel tolerance for grouping word boxes into lines.
    pub line_tolerance: f64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            attr_prefix: attrs::DEFAULT_PREFIX.to_owned(),
            breakpoints: Breakpoints::default(),
            defaults: Defaults::default(),
            line_tolerance: DEFAULT_LINE_TOLERANCE,
        }
    }
}

impl RuntimeConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(src: &str) -> ScrollCueResult<Self> {
        let cfg: Self = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings no scan could work with.
    pub fn validate(&self) -> ScrollCueResult<()> {
        if self.attr_prefix.trim().is_empty() {
            return Err(ScrollCueError::validation("attr_prefix must not be empty"));
        }
        if !(self.defaults.duration.is_finite() && self.defaults.duration > 0.0) {
            return Err(ScrollCueError::validation(
                "defaults.duration must be finite and > 0",
            ));
        }
        if !(self.defaults.delay.is_finite() && self.defaults.delay >= 0.0) {
            return Err(ScrollCueError::validation(
                "defaults.delay must be finite and >= 0",
            ));
        }
        if !(self.line_tolerance.is_finite() && self.line_tolerance >= 0.0) {
            return Err(ScrollCueError::validation(
                "line_tolerance must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/mod.rs"]
mod tests;
