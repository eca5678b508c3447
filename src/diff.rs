//! The catalog differ: keeps only the entries whose translations are
//! new or changed relative to a comparison catalog.

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::catalog::{Catalog, Entry};

/// Whether two entries for the same msgid differ in translation.
///
/// Untranslated on both sides compares equal, so a `msgstr ""` against
/// a missing translation is not a diff. A translation appearing or
/// disappearing, a plural-form count change, or any element-wise
/// string change is.
pub fn differs(source: &Entry, target: &Entry) -> bool {
    let source_translated = source.is_translated();
    let target_translated = target.is_translated();

    if !source_translated && !target_translated {
        return false;
    }
    if source_translated != target_translated {
        return true;
    }
    if source.msgstr.len() != target.msgstr.len() {
        return true;
    }
    source
        .msgstr
        .iter()
        .zip(&target.msgstr)
        .any(|(s, t)| s != t)
}

/// Reduce `source` to the entries that are absent from `target` or
/// whose translations differ from it.
///
/// One-directional: entries only present in `target` never show up.
/// The result keeps the source's headers verbatim and its entries in
/// first-seen source order; duplicate msgids collapse with the last
/// occurrence winning.
pub fn diff(source: &Catalog, target: &Catalog) -> Catalog {
    // Empty msgids are header/metadata entries, never part of the diff.
    let target_by_id: HashMap<&str, &Entry> = target
        .entries
        .iter()
        .filter(|entry| !entry.msgid.is_empty())
        .map(|entry| (entry.msgid.as_str(), entry))
        .collect();

    let mut kept: IndexMap<String, Entry> = IndexMap::new();
    for entry in source.entries.iter().filter(|e| !e.msgid.is_empty()) {
        let changed = match target_by_id.get(entry.msgid.as_str()) {
            None => true,
            Some(target_entry) => differs(entry, target_entry),
        };
        if changed {
            kept.insert(entry.msgid.clone(), entry.clone());
        }
    }

    Catalog {
        headers: source.headers.clone(),
        entries: kept.into_values().collect(),
    }
}
