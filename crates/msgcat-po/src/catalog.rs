//! Catalog data model and entry assembly.
//!
//! # Invariants
//!
//! 1. Within a single context, each msgid maps to exactly one [`Entry`];
//!    a second translation for the same pair is a parse error.
//! 2. Within the header entry, each header field name appears once; a
//!    duplicate is a parse error.
//! 3. `plurals` preserves `msgstr[i]` source order.
//! 4. The catalog is immutable once parsing completes; only readers
//!    exist at query time.

use std::collections::{BTreeMap, HashMap};

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PoError;

/// A single `(context, msgid)` record.
///
/// Ordinary entries carry a `translation` and/or `plurals`; the reserved
/// header entry (empty context, empty msgid) instead carries the parsed
/// header fields, which serialize inline so the JSON shape is
/// `{"Content-Type": "…", "Plural-Forms": "…"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Translation from a `msgstr` line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,

    /// Plural translations from `msgstr[i]` lines, in source order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plurals: Option<Vec<String>>,

    /// Header fields, non-empty only for the header entry.
    #[serde(flatten)]
    pub headers: BTreeMap<String, String>,
}

/// An in-memory PO catalog: `context → msgid → Entry`.
///
/// The empty-string context is the default; the empty msgid inside it is
/// the header entry. Insertion order is not observable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    contexts: HashMap<String, HashMap<String, Entry>>,
}

impl Catalog {
    /// All msgids of one context, if the context exists.
    #[must_use]
    pub fn context(&self, msgctxt: &str) -> Option<&HashMap<String, Entry>> {
        self.contexts.get(msgctxt)
    }

    /// Look up a single entry.
    #[must_use]
    pub fn entry(&self, msgctxt: &str, msgid: &str) -> Option<&Entry> {
        self.contexts.get(msgctxt)?.get(msgid)
    }

    /// A header field value, if the header entry defines it.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.entry("", "")?.headers.get(name).map(String::as_str)
    }

    /// Iterate over every `(context, msgid, entry)` triple.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Entry)> {
        self.contexts.iter().flat_map(|(ctx, msgids)| {
            msgids
                .iter()
                .map(move |(msgid, entry)| (ctx.as_str(), msgid.as_str(), entry))
        })
    }

    /// Total number of entries across all contexts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.values().map(HashMap::len).sum()
    }

    /// Whether the catalog holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Number of distinct contexts.
    #[must_use]
    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }
}

/// One parsed entry, as accumulated by the line parser.
#[derive(Debug, Default)]
pub(crate) struct RawEntry {
    pub(crate) msgctxt: String,
    pub(crate) msgid: String,
    pub(crate) msgstr: String,
    pub(crate) msgstr_plural: Vec<String>,
}

/// Merges finalized entries into the catalog tree.
pub(crate) struct Assembler {
    header_field: Regex,
    catalog: Catalog,
}

impl Assembler {
    pub(crate) fn new() -> Self {
        Self {
            header_field: Regex::new(r"([A-Za-z0-9-]+)\s*:\s*([^\n]*)")
                .expect("header field regex"),
            catalog: Catalog::default(),
        }
    }

    /// Fold one finalized entry into the catalog.
    ///
    /// The header entry's `msgstr` is re-parsed as `Key: Value` lines.
    /// An entry whose `msgstr` is empty and which has no `msgstr[i]`
    /// blocks is retained as "known msgid, no translation". A repeated
    /// plural block for the same key overwrites the previous one.
    pub(crate) fn finalize(&mut self, raw: RawEntry) -> Result<(), PoError> {
        let entry = self
            .catalog
            .contexts
            .entry(raw.msgctxt)
            .or_default()
            .entry(raw.msgid.clone())
            .or_default();

        if raw.msgid.is_empty() && !raw.msgstr.is_empty() {
            for caps in self.header_field.captures_iter(&raw.msgstr) {
                let key = caps.get(1).map_or("", |m| m.as_str());
                let value = caps.get(2).map_or("", |m| m.as_str());
                if entry.headers.contains_key(key) {
                    return Err(PoError::DuplicateHeaderKey(key.to_string()));
                }
                entry.headers.insert(key.to_string(), value.to_string());
            }
        } else if !raw.msgstr.is_empty() {
            if entry.translation.is_some() {
                return Err(PoError::DuplicateTranslation(raw.msgid));
            }
            entry.translation = Some(raw.msgstr);
        }

        if !raw.msgstr_plural.is_empty() {
            entry.plurals = Some(raw.msgstr_plural);
        }

        Ok(())
    }

    pub(crate) fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
