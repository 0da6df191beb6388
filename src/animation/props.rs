use std::collections::BTreeMap;

use smallvec::SmallVec;

/// Interpolation contract for animated values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    // Weighted form so both endpoints come out exact.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }
}

impl Lerp for crate::foundation::core::Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self::new(f64::lerp(&a.x, &b.x, t), f64::lerp(&a.y, &b.y, t))
    }
}

/// Inline visual property the runtime is allowed to write.
///
/// Clip insets are percentages of the element box measured from each edge, so
/// `ClipTop = 100` hides everything and `0` on all four sides shows everything.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Prop {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Visibility flag, `> 0` means visible.
    Visibility,
    /// Horizontal translation in px.
    X,
    /// Vertical translation in px.
    Y,
    /// Horizontal translation in percent of the element width.
    XPercent,
    /// Vertical translation in percent of the element height.
    YPercent,
    /// 2-D rotation in degrees.
    Rotation,
    /// Rotation around the X axis in degrees.
    RotationX,
    /// Uniform scale.
    Scale,
    /// Clip inset from the top edge, percent.
    ClipTop,
    /// Clip inset from the right edge, percent.
    ClipRight,
    /// Clip inset from the bottom edge, percent.
    ClipBottom,
    /// Clip inset from the left edge, percent.
    ClipLeft,
    /// Letter spacing in em.
    LetterSpacing,
    /// Width as a percentage of the natural width.
    WidthPercent,
}

impl Prop {
    /// Value an element has when the property was never written.
    pub fn default_value(self) -> f64 {
        match self {
            Self::Opacity | Self::Visibility | Self::Scale => 1.0,
            Self::WidthPercent => 100.0,
            _ => 0.0,
        }
    }
}

/// Small ordered set of property values used for `set` and tween targets.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Props(SmallVec<[(Prop, f64); 6]>);

impl Props {
    /// Empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one property.
    pub fn with(mut self, prop: Prop, value: f64) -> Self {
        self.insert(prop, value);
        self
    }

    /// Insert or replace one property in place.
    pub fn insert(&mut self, prop: Prop, value: f64) {
        match self.0.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.0.push((prop, value)),
        }
    }

    /// Look up a property value.
    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.0.iter().find(|(p, _)| *p == prop).map(|(_, v)| *v)
    }

    /// Iterate `(prop, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        self.0.iter().copied()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when no property is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Opacity.
    pub fn opacity(self, v: f64) -> Self {
        self.with(Prop::Opacity, v)
    }

    /// Opacity plus visibility: hidden exactly when `v == 0`.
    pub fn auto_alpha(self, v: f64) -> Self {
        self.with(Prop::Opacity, v)
            .with(Prop::Visibility, if v > 0.0 { 1.0 } else { 0.0 })
    }

    /// Horizontal offset in px.
    pub fn x(self, v: f64) -> Self {
        self.with(Prop::X, v)
    }

    /// Vertical offset in px.
    pub fn y(self, v: f64) -> Self {
        self.with(Prop::Y, v)
    }

    /// Horizontal offset in percent.
    pub fn x_percent(self, v: f64) -> Self {
        self.with(Prop::XPercent, v)
    }

    /// Vertical offset in percent.
    pub fn y_percent(self, v: f64) -> Self {
        self.with(Prop::YPercent, v)
    }

    /// Rotation in degrees.
    pub fn rotation(self, v: f64) -> Self {
        self.with(Prop::Rotation, v)
    }

    /// X-axis rotation in degrees.
    pub fn rotation_x(self, v: f64) -> Self {
        self.with(Prop::RotationX, v)
    }

    /// Uniform scale.
    pub fn scale(self, v: f64) -> Self {
        self.with(Prop::Scale, v)
    }

    /// All four clip insets at once (top, right, bottom, left).
    pub fn clip(self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.with(Prop::ClipTop, top)
            .with(Prop::ClipRight, right)
            .with(Prop::ClipBottom, bottom)
            .with(Prop::ClipLeft, left)
    }

    /// Letter spacing in em.
    pub fn letter_spacing(self, v: f64) -> Self {
        self.with(Prop::LetterSpacing, v)
    }

    /// Width in percent.
    pub fn width_percent(self, v: f64) -> Self {
        self.with(Prop::WidthPercent, v)
    }
}

/// Inline visual style of one element: only properties that were written.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<Prop, f64>);

impl Style {
    /// Current value, falling back to [`Prop::default_value`].
    pub fn get(&self, prop: Prop) -> f64 {
        self.0
            .get(&prop)
            .copied()
            .unwrap_or_else(|| prop.default_value())
    }

    /// Value only if it was written.
    pub fn explicit(&self, prop: Prop) -> Option<f64> {
        self.0.get(&prop).copied()
    }

    /// Write one property.
    pub fn set(&mut self, prop: Prop, value: f64) {
        self.0.insert(prop, value);
    }

    /// Write every property of `props`.
    pub fn apply(&mut self, props: &Props) {
        for (prop, value) in props.iter() {
            self.set(prop, value);
        }
    }

    /// `true` when the element would paint: visible and not fully transparent.
    pub fn is_visible(&self) -> bool {
        self.get(Prop::Visibility) > 0.0 && self.get(Prop::Opacity) > 0.0
    }

    /// Iterate written properties.
    pub fn iter(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        self.0.iter().map(|(p, v)| (*p, *v))
    }

    /// Return `true` when nothing was written.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/props.rs"]
mod tests;
