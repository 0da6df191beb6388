/// Attribute prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "data-cue";

/// Attribute names derived from one prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttrNames {
    prefix: String,
}

impl Default for AttrNames {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl AttrNames {
    /// Names under `prefix`.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim().to_owned(),
        }
    }

    fn with(&self, suffix: &str) -> String {
        format!("{}-{suffix}", self.prefix)
    }

    /// The declaration itself; carries the variant name.
    pub fn name(&self) -> &str {
        &self.prefix
    }

    /// Variant name used below the mobile breakpoint.
    pub fn mobile(&self) -> String {
        self.with("mobile")
    }

    /// Delay in seconds.
    pub fn delay(&self) -> String {
        self.with("delay")
    }

    /// Duration in seconds.
    pub fn duration(&self) -> String {
        self.with("duration")
    }

    /// Stagger in seconds.
    pub fn stagger(&self) -> String {
        self.with("stagger")
    }

    /// Trigger start point.
    pub fn start(&self) -> String {
        self.with("start")
    }

    /// Easing id.
    pub fn ease(&self) -> String {
        self.with("ease")
    }

    /// Secondary trigger start.
    pub fn cards_start(&self) -> String {
        self.with("cards-start")
    }

    /// Secondary trigger start below the mobile breakpoint.
    pub fn mobile_cards_start(&self) -> String {
        self.with("mobile-cards-start")
    }

    /// Target mode.
    pub fn target(&self) -> String {
        self.with("target")
    }

    /// Autoplay gate flag.
    pub fn wait_loaded(&self) -> String {
        self.with("wait-loaded")
    }

    /// Prefix of free-form extras, including the trailing dash.
    pub fn extras_prefix(&self) -> String {
        self.with("x-")
    }
}
