//! Named choreographies and the registry that dispatches declarations to them.
//!
//! Each handler sets its pre-animation state synchronously, schedules one timeline per
//! logical trigger group, and does nothing when none of the sub-elements it looks for
//! exist.

pub(crate) mod clip;
pub(crate) mod common;
pub(crate) mod composite;
pub(crate) mod hero;
pub(crate) mod motion;
pub(crate) mod reveal;
pub(crate) mod text;

use std::collections::HashMap;

use crate::{
    config::resolve::Config,
    document::node::NodeId,
    foundation::error::ScrollCueResult,
    scope::{DiagnosticKind, Handle, cx::ApplyCx},
};

/// One named choreography.
pub trait Variant {
    /// Declared name, e.g. `fade-up`.
    fn name(&self) -> &str;

    /// Stage the declaration on `el`.
    fn apply(&self, cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<Handle>;
}

/// Variant implemented by a plain function.
#[derive(Clone, Copy)]
pub struct Choreography {
    name: &'static str,
    run: fn(&mut ApplyCx<'_>, NodeId, &Config) -> ScrollCueResult<()>,
}

impl Choreography {
    /// Wrap `run` under `name`.
    pub const fn new(
        name: &'static str,
        run: fn(&mut ApplyCx<'_>, NodeId, &Config) -> ScrollCueResult<()>,
    ) -> Self {
        Self { name, run }
    }
}

impl Variant for Choreography {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, cx: &mut ApplyCx<'_>, el: NodeId, cfg: &Config) -> ScrollCueResult<Handle> {
        (self.run)(cx, el, cfg)?;
        Ok(cx.handle())
    }
}

/// Closed set of named variants.
#[derive(Default)]
pub struct Registry {
    variants: HashMap<String, Box<dyn Variant>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.variants.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("variants", &names).finish()
    }
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in variant.
    pub fn with_builtin() -> Self {
        let mut reg = Self::new();
        for v in reveal::REVEALS {
            reg.register(*v);
        }
        for c in clip::VARIANTS
            .iter()
            .chain(text::VARIANTS)
            .chain(hero::VARIANTS)
            .chain(composite::VARIANTS)
            .chain(motion::VARIANTS)
        {
            reg.register(*c);
        }
        reg
    }

    /// Add or replace a variant under its own name.
    pub fn register(&mut self, variant: impl Variant + 'static) {
        self.variants
            .insert(variant.name().to_owned(), Box::new(variant));
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variants.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run the variant `name` on `el`.
    ///
    /// Unknown names and handler errors become diagnostics on the scope and yield `None`.
    pub fn dispatch(
        &self,
        name: &str,
        cx: &mut ApplyCx<'_>,
        el: NodeId,
        cfg: &Config,
    ) -> Option<Handle> {
        let Some(variant) = self.variants.get(name) else {
            cx.report(
                DiagnosticKind::UnknownVariant,
                format!("unknown variant '{name}'"),
            );
            return None;
        };
        match variant.apply(cx, el, cfg) {
            Ok(handle) => Some(handle),
            Err(err) => {
                cx.report(DiagnosticKind::Failed, err.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/variants/harness.rs"]
pub(crate) mod harness;

#[cfg(test)]
#[path = "../../tests/unit/variants/registry.rs"]
mod tests;
