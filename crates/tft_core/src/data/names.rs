//! Opaque id → display name resolution.
//!
//! The game client reports units and items as set-prefixed ids
//! (`TFT9_Ahri`, `TFT_Item_JeweledGauntlet`). Assembled output never
//! surfaces these raw ids: every identifier goes through a [`NameResolver`].
//! The resolver is injected by the caller and populated once at process
//! start; the pipeline itself stays a pure function of its inputs.

use std::collections::HashMap;

/// Which lookup table an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Champion,
    Item,
}

/// Pure lookup collaborator mapping opaque ids to display names.
pub trait NameResolver {
    fn resolve(&self, kind: NameKind, id: &str) -> String;
}

/// Table-backed resolver. Ids missing from the tables fall back to
/// [`fallback_display_name`], so resolution is total and deterministic.
#[derive(Debug, Clone, Default)]
pub struct StaticNameResolver {
    champions: HashMap<String, String>,
    items: HashMap<String, String>,
}

impl StaticNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_champions<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.champions.extend(pairs);
        self
    }

    pub fn with_items<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.items.extend(pairs);
        self
    }
}

impl NameResolver for StaticNameResolver {
    fn resolve(&self, kind: NameKind, id: &str) -> String {
        let table = match kind {
            NameKind::Champion => &self.champions,
            NameKind::Item => &self.items,
        };
        table.get(id).cloned().unwrap_or_else(|| fallback_display_name(id))
    }
}

/// Deterministic fallback for ids missing from the tables.
///
/// Strips the known prefix patterns (`TFT_Item_`, `TFT<digits>_`) and splits
/// the remaining camel-case word run, so `TFT9_JeweledGauntlet` still reads
/// as "Jeweled Gauntlet" when a patch ships ids faster than the tables
/// update.
pub fn fallback_display_name(id: &str) -> String {
    let mut name = id;
    if let Some(rest) = name.strip_prefix("TFT_Item_") {
        name = rest;
    } else if let Some(rest) = strip_set_prefix(name) {
        name = rest;
    }
    split_camel_case(name)
}

/// `TFT9_Ahri` → `Ahri`; also accepts the un-numbered `TFT_` form.
fn strip_set_prefix(id: &str) -> Option<&str> {
    let rest = id.strip_prefix("TFT")?;
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.strip_prefix('_')
}

fn split_camel_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 4);
    let mut prev_lower = false;
    for ch in id.chars() {
        if ch == '_' {
            out.push(' ');
            prev_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && prev_lower {
            out.push(' ');
        }
        out.push(ch);
        prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    }
    out
}
