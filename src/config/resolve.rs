use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    config::{RuntimeConfig, attrs::AttrNames},
    document::node::{Document, NodeId},
    foundation::core::parse_finite,
    responsive::Viewport,
    timeline::trigger::TriggerPoint,
};

/// A resolved parameter that remembers whether it was validly authored.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Param<T> {
    value: T,
    explicit: bool,
}

impl<T: Copy> Param<T> {
    fn authored(value: T) -> Self {
        Self {
            value,
            explicit: true,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            explicit: false,
        }
    }

    fn parse(raw: Option<&str>, parse: impl FnOnce(&str) -> Option<T>, default: T) -> Self {
        raw.and_then(parse)
            .map_or(Self::fallback(default), Self::authored)
    }

    /// Value, authored or global default.
    pub fn get(&self) -> T {
        self.value
    }

    /// Authored value, or the variant's own `fallback`.
    pub fn or(&self, fallback: T) -> T {
        if self.explicit { self.value } else { fallback }
    }

    /// Whether the declaration authored a valid value.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }
}

/// Which elements a clip reveal animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TargetMode {
    /// The declaring element (or its mask child).
    #[serde(rename = "self")]
    SelfElement,
    /// Descendant images only.
    #[serde(rename = "img")]
    Images,
}

impl TargetMode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "self" => Some(Self::SelfElement),
            "img" => Some(Self::Images),
            _ => None,
        }
    }
}

/// One behavior declaration, resolved against defaults and the current viewport.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Config {
    /// Variant name after the mobile override was applied.
    pub name: String,
    /// Delay in seconds.
    pub delay: Param<f64>,
    /// Duration in seconds.
    pub duration: Param<f64>,
    /// Stagger in seconds; `0` when unset.
    pub stagger: Param<f64>,
    /// Trigger start.
    pub start: Param<TriggerPoint>,
    /// Easing; `Linear` when unset.
    pub ease: Param<Ease>,
    /// Secondary trigger start.
    pub cards_start: Option<TriggerPoint>,
    /// Secondary trigger start below the mobile breakpoint.
    pub mobile_cards_start: Option<TriggerPoint>,
    /// Target mode.
    pub target_mode: Option<TargetMode>,
    /// Hold autoplay until the host root has class `loaded`.
    pub wait_loaded: bool,
    /// Free-form `-x-*` values keyed by the part after the prefix.
    pub extras: BTreeMap<String, String>,
}

impl Config {
    /// Numeric extra.
    pub fn extra_f64(&self, key: &str) -> Option<f64> {
        self.extras.get(key).and_then(|v| parse_finite(v))
    }
}

fn non_negative(raw: &str) -> Option<f64> {
    parse_finite(raw).filter(|v| *v >= 0.0)
}

fn positive(raw: &str) -> Option<f64> {
    parse_finite(raw).filter(|v| *v > 0.0)
}

/// Resolve the declaration on `el`, or `None` when it carries no variant name.
///
/// Malformed values fall back to defaults without logging.
pub fn resolve(
    doc: &Document,
    el: NodeId,
    names: &AttrNames,
    settings: &RuntimeConfig,
    viewport: &Viewport,
) -> Option<Config> {
    let attr = |name: &str| doc.attr(el, name);
    let desktop = attr(names.name())
        .map(str::trim)
        .filter(|n| !n.is_empty())?;
    let mobile = attr(&names.mobile())
        .map(str::trim)
        .filter(|n| !n.is_empty());
    let name = match mobile {
        Some(m) if viewport.is_mobile(&settings.breakpoints) => m,
        _ => desktop,
    };

    let defaults = &settings.defaults;
    let extras_prefix = names.extras_prefix();
    let extras = doc
        .element(el)
        .map(|e| {
            e.attrs
                .iter()
                .filter_map(|(k, v)| {
                    k.strip_prefix(extras_prefix.as_str())
                        .filter(|rest| !rest.is_empty())
                        .map(|rest| (rest.to_owned(), v.clone()))
                })
                .collect()
        })
        .unwrap_or_default();

    Some(Config {
        name: name.to_owned(),
        delay: Param::parse(attr(&names.delay()), non_negative, defaults.delay),
        duration: Param::parse(attr(&names.duration()), positive, defaults.duration),
        stagger: Param::parse(attr(&names.stagger()), non_negative, 0.0),
        start: Param::parse(attr(&names.start()), TriggerPoint::parse, defaults.start),
        ease: Param::parse(attr(&names.ease()), Ease::parse, Ease::Linear),
        cards_start: attr(&names.cards_start()).and_then(TriggerPoint::parse),
        mobile_cards_start: attr(&names.mobile_cards_start()).and_then(TriggerPoint::parse),
        target_mode: attr(&names.target()).and_then(TargetMode::parse),
        wait_loaded: attr(&names.wait_loaded()).is_some_and(|v| v.trim() != "false"),
        extras,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/resolve.rs"]
mod tests;
