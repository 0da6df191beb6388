/// Width thresholds, in CSS px, that pick a device staging.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Largest viewport width still treated as mobile.
    pub mobile_max: f64,
    /// Largest viewport width still treated as a touch-sized "wide" layout.
    pub wide_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 991.0,
            wide_max: 1024.0,
        }
    }
}

/// Coarse device class derived from a [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// At most [`Breakpoints::mobile_max`] wide.
    Mobile,
    /// At most [`Breakpoints::wide_max`] wide.
    Tablet,
    /// Anything larger.
    Desktop,
}

/// Host viewport as seen at scan time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS px.
    pub width: f64,
    /// Height in CSS px.
    pub height: f64,
    /// Primary pointer is coarse (touch).
    #[serde(default)]
    pub pointer_coarse: bool,
    /// User asked for reduced motion.
    #[serde(default)]
    pub prefers_reduced_motion: bool,
}

impl Viewport {
    /// Fine-pointer viewport without motion preferences.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pointer_coarse: false,
            prefers_reduced_motion: false,
        }
    }

    /// Set the coarse pointer flag.
    pub fn with_coarse_pointer(mut self, coarse: bool) -> Self {
        self.pointer_coarse = coarse;
        self
    }

    /// Set the reduced motion flag.
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.prefers_reduced_motion = reduced;
        self
    }

    /// `max-width: mobile_max` media query.
    pub fn is_mobile(&self, bp: &Breakpoints) -> bool {
        self.width <= bp.mobile_max
    }

    /// `max-width: wide_max` or a coarse pointer.
    pub fn is_wide(&self, bp: &Breakpoints) -> bool {
        self.width <= bp.wide_max || self.pointer_coarse
    }

    /// Device class for this width.
    pub fn device_class(&self, bp: &Breakpoints) -> DeviceClass {
        if self.is_mobile(bp) {
            DeviceClass::Mobile
        } else if self.width <= bp.wide_max {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/responsive.rs"]
mod tests;
