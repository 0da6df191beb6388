use std::str::FromStr;

use crate::{
    document::node::{Document, NodeId},
    foundation::error::{ScrollCueError, ScrollCueResult},
};

/// Attribute condition inside a compound selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrMatch {
    /// `[name]`
    Exists(String),
    /// `[name="value"]`
    Equals(String, String),
    /// `[name*="value"]`; for `class` the test runs against the joined class list.
    Contains(String, String),
}

/// `tag.class[attr]` without combinators.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, doc: &Document, id: NodeId) -> bool {
        let Some(el) = doc.element(id) else {
            return false;
        };
        if let Some(tag) = &self.tag
            && *tag != el.tag
        {
            return false;
        }
        if !self.classes.iter().all(|c| el.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match a {
            AttrMatch::Exists(name) if name == "class" => !el.classes.is_empty(),
            AttrMatch::Exists(name) => el.attrs.contains_key(name),
            AttrMatch::Equals(name, v) if name == "class" => el.classes.join(" ") == *v,
            AttrMatch::Equals(name, v) => el.attrs.get(name) == Some(v),
            AttrMatch::Contains(name, v) if name == "class" => el.classes.join(" ").contains(v),
            AttrMatch::Contains(name, v) => el.attrs.get(name).is_some_and(|a| a.contains(v)),
        })
    }
}

/// Small CSS selector subset: compounds, descendant combinators and `,` lists.
///
/// Enough for the structural lookups variants make (`.card img`, `[class*="script"]`,
/// `a, button`). Matching of ancestors is not limited to the query scope, same as the
/// host's `querySelectorAll`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Vec<Compound>>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(src: &str) -> ScrollCueResult<Self> {
        let mut alternatives = Vec::new();
        for part in split_outside(src, |c| c == ',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(ScrollCueError::validation(format!(
                    "empty selector in '{src}'"
                )));
            }
            let chain = split_outside(part, char::is_whitespace)
                .into_iter()
                .filter(|c| !c.is_empty())
                .map(parse_compound)
                .collect::<ScrollCueResult<Vec<_>>>()?;
            alternatives.push(chain);
        }
        if alternatives.is_empty() {
            return Err(ScrollCueError::validation("empty selector"));
        }
        Ok(Self { alternatives })
    }

    /// `true` when `id` matches any alternative.
    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        self.alternatives
            .iter()
            .any(|chain| chain_matches(doc, id, chain))
    }
}

impl FromStr for Selector {
    type Err = ScrollCueError;

    fn from_str(s: &str) -> ScrollCueResult<Self> {
        Self::parse(s)
    }
}

fn chain_matches(doc: &Document, id: NodeId, chain: &[Compound]) -> bool {
    let Some((last, rest)) = chain.split_last() else {
        return false;
    };
    if !last.matches(doc, id) {
        return false;
    }
    let mut cursor = doc.parent(id);
    for compound in rest.iter().rev() {
        loop {
            let Some(p) = cursor else {
                return false;
            };
            cursor = doc.parent(p);
            if compound.matches(doc, p) {
                break;
            }
        }
    }
    true
}

/// Tracks `[...]` nesting and quoted strings while scanning selector text.
#[derive(Default)]
struct Scan {
    depth: u32,
    quote: Option<char>,
}

impl Scan {
    /// Feed `c`; returns `true` when it sits outside brackets and quotes.
    fn step(&mut self, c: char) -> bool {
        match (self.quote, c) {
            (Some(q), c) if c == q => self.quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') if self.depth > 0 => self.quote = Some(c),
            (None, '[') => self.depth += 1,
            (None, ']') => self.depth = self.depth.saturating_sub(1),
            (None, _) => return self.depth == 0,
        }
        false
    }
}

/// Split `src` at separator characters that are not inside brackets or quotes.
fn split_outside(src: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut scan = Scan::default();
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in src.char_indices() {
        if scan.step(c) && is_sep(c) {
            out.push(&src[start..i]);
            start = i + c.len_utf8();
        }
    }
    out.push(&src[start..]);
    out
}

/// Byte offset of the `]` closing an attribute body that starts just after `[`.
fn closing_bracket(body: &str) -> Option<usize> {
    let mut scan = Scan {
        depth: 1,
        quote: None,
    };
    body.char_indices()
        .find(|&(_, c)| {
            scan.step(c);
            scan.depth == 0
        })
        .map(|(i, _)| i)
}

fn parse_compound(src: &str) -> ScrollCueResult<Compound> {
    let bad = || ScrollCueError::validation(format!("unsupported selector '{src}'"));
    let mut out = Compound::default();
    let mut rest = src;

    let tag_len = rest
        .find(|c: char| c == '.' || c == '[')
        .unwrap_or(rest.len());
    if tag_len > 0 {
        let tag = &rest[..tag_len];
        if !tag.chars().all(is_ident_char) {
            return Err(bad());
        }
        out.tag = Some(tag.to_ascii_lowercase());
        rest = &rest[tag_len..];
    }

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('.') {
            let len = after
                .find(|c: char| c == '.' || c == '[')
                .unwrap_or(after.len());
            let class = &after[..len];
            if class.is_empty() || !class.chars().all(is_ident_char) {
                return Err(bad());
            }
            out.classes.push(class.to_owned());
            rest = &after[len..];
        } else if let Some(after) = rest.strip_prefix('[') {
            let close = closing_bracket(after).ok_or_else(bad)?;
            out.attrs.push(parse_attr(&after[..close]).ok_or_else(bad)?);
            rest = &after[close + 1..];
        } else {
            return Err(bad());
        }
    }

    if out.tag.is_none() && out.classes.is_empty() && out.attrs.is_empty() {
        return Err(bad());
    }
    Ok(out)
}

fn parse_attr(body: &str) -> Option<AttrMatch> {
    let unquote = |v: &str| {
        let v = v.trim();
        v.strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| v.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(v)
            .to_owned()
    };
    if let Some((name, value)) = body.split_once('=') {
        return Some(match name.strip_suffix('*') {
            Some(name) => AttrMatch::Contains(name.trim().to_owned(), unquote(value)),
            None => AttrMatch::Equals(name.trim().to_owned(), unquote(value)),
        });
    }
    let name = body.trim();
    (!name.is_empty() && name.chars().all(is_ident_char)).then(|| AttrMatch::Exists(name.to_owned()))
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
#[path = "../../tests/unit/document/selector.rs"]
mod tests;
