use std::str::FromStr;

use crate::foundation::error::{ScrollCueError, ScrollCueResult};

/// Overshoot used by `back` eases when the id carries no explicit amount.
pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.70158;

/// Easing functions used to map normalized tween progress.
///
/// Authored ease ids follow the common `family.direction(param)` shape, e.g.
/// `power2.out`, `expo.out`, `back.out(1.7)`, `circ.inOut`, `none`. See [`Ease::parse`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation (`none`, `linear`, `power0`).
    Linear,
    /// Quadratic ease-in (`power1.in`).
    InQuad,
    /// Quadratic ease-out (`power1.out`).
    OutQuad,
    /// Quadratic ease-in/out (`power1.inOut`).
    InOutQuad,
    /// Cubic ease-in (`power2.in`).
    InCubic,
    /// Cubic ease-out (`power2.out`).
    OutCubic,
    /// Cubic ease-in/out (`power2.inOut`).
    InOutCubic,
    /// Quartic ease-in (`power3.in`).
    InQuart,
    /// Quartic ease-out (`power3.out`).
    OutQuart,
    /// Quartic ease-in/out (`power3.inOut`).
    InOutQuart,
    /// Quintic ease-in (`power4.in`).
    InQuint,
    /// Quintic ease-out (`power4.out`).
    OutQuint,
    /// Quintic ease-in/out (`power4.inOut`).
    InOutQuint,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in/out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in/out.
    InOutExpo,
    /// Circular ease-in.
    InCirc,
    /// Circular ease-out.
    OutCirc,
    /// Circular ease-in/out.
    InOutCirc,
    /// Back ease-in with overshoot amount.
    InBack(f64),
    /// Back ease-out with overshoot amount.
    OutBack(f64),
    /// Back ease-in/out with overshoot amount.
    InOutBack(f64),
}

#[derive(Clone, Copy)]
enum Dir {
    In,
    Out,
    InOut,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// Endpoints are exact: `apply(0) == 0` and `apply(1) == 1` for every variant.
    /// Back eases overshoot in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(5) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
            Self::OutSine => (t * std::f64::consts::FRAC_PI_2).sin(),
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => 2f64.powf(10.0 * t - 10.0),
            Self::OutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Self::InOutExpo => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Self::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Self::InBack(s) => (s + 1.0) * t * t * t - s * t * t,
            Self::OutBack(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
            Self::InOutBack(s) => {
                let s = s * 1.525;
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((s + 1.0) * 2.0 * t - s)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((s + 1.0) * (2.0 * t - 2.0) + s) + 2.0) / 2.0
                }
            }
        }
    }

    /// Parse an authored ease id. Returns `None` for anything unrecognized.
    ///
    /// A family without a direction defaults to `out`.
    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        let (head, param) = match id.find('(') {
            Some(open) => {
                let close = id.rfind(')')?;
                if close < open {
                    return None;
                }
                let inner = id[open + 1..close].trim();
                let param = if inner.is_empty() {
                    None
                } else {
                    Some(crate::foundation::core::parse_finite(inner)?)
                };
                (&id[..open], param)
            }
            None => (id, None),
        };

        let (family, dir) = match head.split_once('.') {
            Some((family, dir)) => (family, dir),
            None => (head, "out"),
        };
        let dir = match dir {
            "in" => Dir::In,
            "out" => Dir::Out,
            "inOut" | "inout" => Dir::InOut,
            _ => return None,
        };

        let pick = |i: Self, o: Self, io: Self| match dir {
            Dir::In => i,
            Dir::Out => o,
            Dir::InOut => io,
        };

        let ease = match family {
            "none" | "linear" | "power0" => Self::Linear,
            "power1" | "quad" => pick(Self::InQuad, Self::OutQuad, Self::InOutQuad),
            "power2" | "cubic" => pick(Self::InCubic, Self::OutCubic, Self::InOutCubic),
            "power3" | "quart" => pick(Self::InQuart, Self::OutQuart, Self::InOutQuart),
            "power4" | "quint" | "strong" => pick(Self::InQuint, Self::OutQuint, Self::InOutQuint),
            "sine" => pick(Self::InSine, Self::OutSine, Self::InOutSine),
            "expo" => pick(Self::InExpo, Self::OutExpo, Self::InOutExpo),
            "circ" => pick(Self::InCirc, Self::OutCirc, Self::InOutCirc),
            "back" => {
                let s = param.unwrap_or(DEFAULT_BACK_OVERSHOOT);
                pick(Self::InBack(s), Self::OutBack(s), Self::InOutBack(s))
            }
            _ => return None,
        };
        Some(ease)
    }
}

impl FromStr for Ease {
    type Err = ScrollCueError;

    fn from_str(s: &str) -> ScrollCueResult<Self> {
        Self::parse(s).ok_or_else(|| ScrollCueError::validation(format!("unknown ease '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
