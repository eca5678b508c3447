//! Gettext message catalog data model.
//!
//! A [`Catalog`] is the in-memory form of one `.po` file: the header
//! metadata from the empty-msgid header entry, plus the translatable
//! entries in file order. Parsing and serialization live in the
//! `parse` and `serialize` submodules.

mod parse;
mod serialize;

pub use parse::parse;
pub use serialize::serialize;

/// One translatable message from a `.po` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Source-language text; the unique key within a catalog.
    pub msgid: String,
    /// Plural source text, present only for plural entries.
    pub msgid_plural: Option<String>,
    /// Translations: one element for singular entries, one per plural
    /// form otherwise. Untranslated entries hold empty strings or no
    /// elements at all.
    pub msgstr: Vec<String>,
}

impl Entry {
    /// True if any translation string is non-empty.
    pub fn is_translated(&self) -> bool {
        self.msgstr.iter().any(|s| !s.is_empty())
    }
}

/// One parsed `.po` file: header metadata plus entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// `Key: value` pairs from the header entry, in file order.
    /// Unknown keys pass through untouched.
    pub headers: Vec<(String, String)>,
    /// Translatable entries in the order they appear in the file.
    /// Entries with an empty msgid never land here; the header is
    /// split into `headers` instead.
    pub entries: Vec<Entry>,
}

impl Catalog {
    /// Look up a header value by key.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
