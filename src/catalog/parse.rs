//! Line-based `.po` parser.
//!
//! Handles the subset of the PO format this tool rewrites: the header
//! entry, msgid/msgid_plural/msgstr/msgstr[N] keywords, quoted
//! continuation lines, and backslash escapes. Comments and msgctxt
//! lines are skipped; context is not part of the diff key.

use anyhow::{Result, bail};

use super::{Catalog, Entry};

/// Upper bound on `msgstr[N]` indexes. Gettext plural rules top out at
/// six forms, so anything past this is a malformed or hostile catalog
/// rather than a plural form, and must not size an allocation.
const MAX_PLURAL_FORMS: usize = 32;

/// Which keyword the next continuation line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Msgid,
    MsgidPlural,
    Msgstr(usize),
}

/// Parse `.po` file bytes into a [`Catalog`].
///
/// The first entry with an empty msgid becomes the catalog headers;
/// any later empty-msgid entry is metadata and dropped. Errors carry
/// the 1-based line number of the offending line.
pub fn parse(bytes: &[u8]) -> Result<Catalog> {
    let text = std::str::from_utf8(bytes)?;

    let mut catalog = Catalog::default();
    let mut current: Option<Entry> = None;
    let mut field: Option<Field> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            if let Some(entry) = current.take() {
                push_entry(&mut catalog, entry);
            }
            field = None;
            continue;
        }

        // Comments (#, #., #:, #,, #~ ...) carry no diffable content.
        if line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("msgid_plural") {
            let Some(entry) = current.as_mut() else {
                bail!("line {line_no}: msgid_plural before msgid");
            };
            entry.msgid_plural = Some(parse_string(rest, line_no)?);
            field = Some(Field::MsgidPlural);
        } else if let Some(rest) = line.strip_prefix("msgid") {
            if let Some(entry) = current.take() {
                push_entry(&mut catalog, entry);
            }
            current = Some(Entry {
                msgid: parse_string(rest, line_no)?,
                ..Default::default()
            });
            field = Some(Field::Msgid);
        } else if let Some(rest) = line.strip_prefix("msgstr[") {
            let Some(entry) = current.as_mut() else {
                bail!("line {line_no}: msgstr before msgid");
            };
            let Some(close) = rest.find(']') else {
                bail!("line {line_no}: unterminated msgstr index");
            };
            let index: usize = rest[..close]
                .parse()
                .ok()
                .filter(|index| *index < MAX_PLURAL_FORMS)
                .ok_or_else(|| anyhow::anyhow!("line {line_no}: invalid msgstr index"))?;
            let value = parse_string(&rest[close + 1..], line_no)?;
            if entry.msgstr.len() <= index {
                entry.msgstr.resize(index + 1, String::new());
            }
            entry.msgstr[index] = value;
            field = Some(Field::Msgstr(index));
        } else if let Some(rest) = line.strip_prefix("msgstr") {
            let Some(entry) = current.as_mut() else {
                bail!("line {line_no}: msgstr before msgid");
            };
            entry.msgstr = vec![parse_string(rest, line_no)?];
            field = Some(Field::Msgstr(0));
        } else if line.starts_with('"') {
            let continued = parse_string(line, line_no)?;
            let Some(entry) = current.as_mut() else {
                bail!("line {line_no}: continuation line outside an entry");
            };
            match field {
                Some(Field::Msgid) => entry.msgid.push_str(&continued),
                Some(Field::MsgidPlural) => {
                    if let Some(plural) = entry.msgid_plural.as_mut() {
                        plural.push_str(&continued);
                    }
                }
                Some(Field::Msgstr(index)) => entry.msgstr[index].push_str(&continued),
                None => bail!("line {line_no}: continuation line without a keyword"),
            }
        } else if let Some(rest) = line.strip_prefix("msgctxt") {
            // Context is not modeled; consume the string so continuation
            // lines don't attach to the previous field.
            parse_string(rest, line_no)?;
            field = None;
        } else {
            bail!("line {line_no}: unexpected content: {line}");
        }
    }

    if let Some(entry) = current.take() {
        push_entry(&mut catalog, entry);
    }

    Ok(catalog)
}

/// File the finished entry: the first empty-msgid entry is the header,
/// further empty-msgid entries are dropped, the rest keep file order.
fn push_entry(catalog: &mut Catalog, entry: Entry) {
    if entry.msgid.is_empty() {
        if catalog.headers.is_empty() {
            catalog.headers = parse_headers(entry.msgstr.first().map_or("", String::as_str));
        }
    } else {
        catalog.entries.push(entry);
    }
}

/// Split a header entry's msgstr into ordered `Key: value` pairs.
/// Lines without a colon are kept with an empty value so serialization
/// stays lossless for malformed-but-parseable headers.
fn parse_headers(msgstr: &str) -> Vec<(String, String)> {
    msgstr
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (line.trim().to_string(), String::new()),
        })
        .collect()
}

/// Extract the quoted payload of a keyword line and unescape it.
///
/// The closing quote must be a real terminator: a quote preceded by a
/// backslash is payload, so `"abc\"` is unterminated, not `abc\`.
fn parse_string(rest: &str, line_no: usize) -> Result<String> {
    let rest = rest.trim();
    let Some(body) = rest.strip_prefix('"') else {
        bail!("line {line_no}: expected quoted string, found: {rest}");
    };

    let mut escaped = false;
    let mut close = None;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            close = Some(i);
            break;
        }
    }
    let Some(close) = close else {
        bail!("line {line_no}: unterminated string");
    };
    if !body[close + 1..].trim().is_empty() {
        bail!("line {line_no}: unexpected content after closing quote");
    }

    Ok(unescape(&body[..close]))
}

/// Single-pass unescape so `\\n` stays a literal backslash + n instead
/// of being rewritten twice. Unknown escapes pass through verbatim.
fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}
