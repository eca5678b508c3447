//! `.po` serializer: the inverse of `parse` for the fields this tool
//! round-trips (headers, msgid, msgid_plural, msgstr).

use super::{Catalog, Entry};

/// Serialize a [`Catalog`] back to `.po` text.
///
/// The header block comes first, then one block per entry separated by
/// blank lines, in the catalog's entry order. Output ends with a single
/// trailing newline.
pub fn serialize(catalog: &Catalog) -> Vec<u8> {
    let mut out = String::new();

    out.push_str("msgid \"\"\nmsgstr \"\"\n");
    for (key, value) in &catalog.headers {
        out.push_str(&format!("\"{}\"\n", escape(&format!("{key}: {value}\n"))));
    }

    for entry in &catalog.entries {
        out.push('\n');
        write_entry(&mut out, entry);
    }

    out.into_bytes()
}

fn write_entry(out: &mut String, entry: &Entry) {
    out.push_str(&format!("msgid \"{}\"\n", escape(&entry.msgid)));
    if let Some(plural) = &entry.msgid_plural {
        out.push_str(&format!("msgid_plural \"{}\"\n", escape(plural)));
    }

    // Indexed msgstr forms whenever the entry is plural, even with a
    // single translation present; plain msgstr otherwise.
    if entry.msgid_plural.is_some() || entry.msgstr.len() > 1 {
        for (index, value) in entry.msgstr.iter().enumerate() {
            out.push_str(&format!("msgstr[{index}] \"{}\"\n", escape(value)));
        }
    } else {
        let value = entry.msgstr.first().map_or("", String::as_str);
        out.push_str(&format!("msgstr \"{}\"\n", escape(value)));
    }
}

/// Escape a string for a quoted PO payload: backslash, double quote,
/// newline, tab.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            other => result.push(other),
        }
    }
    result
}
