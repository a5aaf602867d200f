//! The message-catalog façade: load once, query concurrently.
//!
//! # Invariants
//!
//! 1. **Immutability**: catalog and plural rule never change after
//!    construction; [`MessageCatalog`] is `Send + Sync` and queries
//!    take `&self`.
//! 2. **Total lookups**: the silent operations always return a string;
//!    the worst case is the untranslated msgid (or the caller's
//!    singular/plural, chosen by `n == 1`).
//! 3. **One plural rule per catalog**: extracted from the header at
//!    construction, or the `n==1 ? 0 : 1` default.

use std::path::Path;
use std::str::FromStr;

use regex_lite::Regex;
use tracing::debug;

use msgcat_plurals::PluralExpr;
use msgcat_po::Catalog;

use crate::error::{LoadError, LookupError};

/// Plural rule used when the catalog has no usable `Plural-Forms`
/// header: singular for `n == 1`, plural otherwise.
pub const DEFAULT_PLURAL_FORMS: &str = "n==1 ? 0 : 1";

/// Extracts the expression from a `Plural-Forms` header value, e.g.
/// `nplurals=2; plural=(n != 1);`. Only the expression is captured;
/// `nplurals` is not used.
const PLURAL_FORMS_PATTERN: &str =
    r"nplurals\s*=\s*\d+;\s*plural\s*=\s*([n0-9%!=&|?:><+() \-]+);";

/// An immutable gettext catalog answering translation queries.
///
/// # Example
///
/// ```
/// use msgcat::MessageCatalog;
///
/// let po = "msgid \"Log in\"\nmsgstr \"Войти\"\n";
/// let catalog: MessageCatalog = po.parse()?;
///
/// assert_eq!(catalog.gettext("Log in"), "Войти");
/// // Unknown msgids come back untranslated.
/// assert_eq!(catalog.gettext("Log out"), "Log out");
/// # Ok::<(), msgcat::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    catalog: Catalog,
    plural: PluralExpr,
}

/// A `(msgctxt, msgid)` pair produced by [`MessageCatalog::search_msgids`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchMatch {
    pub msgctxt: String,
    pub msgid: String,
}

impl MessageCatalog {
    /// Load a catalog from a PO byte stream.
    ///
    /// # Errors
    ///
    /// [`LoadError`] when the PO input is malformed or the header's
    /// `Plural-Forms` expression does not parse.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        Self::from_catalog(msgcat_po::parse_bytes(bytes)?)
    }

    /// Load a catalog from a PO file on disk.
    ///
    /// # Errors
    ///
    /// As [`Self::from_bytes`], plus [`LoadError::Io`] when the file
    /// cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    fn from_catalog(catalog: Catalog) -> Result<Self, LoadError> {
        let plural = select_plural_rule(&catalog)?;
        debug!(
            entries = catalog.len(),
            rule = plural.source(),
            "message catalog ready"
        );
        Ok(Self { catalog, plural })
    }

    /// Translate `msgid` in the default (empty) context.
    ///
    /// Returns `msgid` itself when no translation exists.
    #[must_use]
    pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.try_gettext(msgid).unwrap_or(msgid)
    }

    /// Like [`Self::gettext`], but surfacing why a lookup missed.
    ///
    /// # Errors
    ///
    /// [`LookupError`] describing the first failing step.
    pub fn try_gettext(&self, msgid: &str) -> Result<&str, LookupError> {
        self.translation("", msgid)
    }

    /// Translate `msgid` within an explicit context.
    ///
    /// Returns `msgid` itself when no translation exists. A msgid that
    /// is only translated in the default context stays untranslated
    /// here: contexts never fall back into one another.
    #[must_use]
    pub fn pgettext<'a>(&'a self, msgctxt: &str, msgid: &'a str) -> &'a str {
        self.try_pgettext(msgctxt, msgid).unwrap_or(msgid)
    }

    /// Like [`Self::pgettext`], but surfacing why a lookup missed.
    ///
    /// # Errors
    ///
    /// [`LookupError`] describing the first failing step.
    pub fn try_pgettext(&self, msgctxt: &str, msgid: &str) -> Result<&str, LookupError> {
        self.translation(msgctxt, msgid)
    }

    /// Translate a count-dependent message in the default context.
    ///
    /// The plural rule maps `n` to an index into the entry's plural
    /// forms, except that `n == 1` resolves to the entry's plain
    /// translation when one is present. On any miss the fallback is
    /// `singular` when `n == 1`, `plural` otherwise.
    #[must_use]
    pub fn ngettext<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> &'a str {
        self.try_ngettext(singular, n)
            .unwrap_or(if n == 1 { singular } else { plural })
    }

    /// Like [`Self::ngettext`], but surfacing why a lookup missed.
    ///
    /// The plural fallback depends only on `n`, so this variant does
    /// not take the caller's plural string; on `Err` the caller picks
    /// `singular`/`plural` by `n == 1` (exactly what [`Self::ngettext`]
    /// does).
    ///
    /// # Errors
    ///
    /// [`LookupError`] describing the first failing step.
    pub fn try_ngettext(&self, singular: &str, n: u64) -> Result<&str, LookupError> {
        self.plural_translation("", singular, n)
    }

    /// Translate a count-dependent message within an explicit context.
    ///
    /// Selection works as in [`Self::ngettext`]: `n == 1` prefers the
    /// entry's plain translation, other counts go through the plural
    /// rule and list.
    #[must_use]
    pub fn npgettext<'a>(
        &'a self,
        msgctxt: &str,
        singular: &'a str,
        plural: &'a str,
        n: u64,
    ) -> &'a str {
        self.try_npgettext(msgctxt, singular, n)
            .unwrap_or(if n == 1 { singular } else { plural })
    }

    /// Like [`Self::npgettext`], but surfacing why a lookup missed.
    ///
    /// # Errors
    ///
    /// [`LookupError`] describing the first failing step.
    pub fn try_npgettext(
        &self,
        msgctxt: &str,
        singular: &str,
        n: u64,
    ) -> Result<&str, LookupError> {
        self.plural_translation(msgctxt, singular, n)
    }

    /// All `(msgctxt, msgid)` pairs whose msgid matches `pattern`,
    /// sorted by context then msgid.
    ///
    /// # Errors
    ///
    /// [`LookupError::InvalidRegex`] when the pattern fails to compile.
    pub fn search_msgids(&self, pattern: &str) -> Result<Vec<SearchMatch>, LookupError> {
        let regex =
            Regex::new(pattern).map_err(|err| LookupError::InvalidRegex(err.to_string()))?;
        let mut matches: Vec<SearchMatch> = self
            .catalog
            .iter()
            .filter(|(_, msgid, _)| regex.is_match(msgid))
            .map(|(msgctxt, msgid, _)| SearchMatch {
                msgctxt: msgctxt.to_string(),
                msgid: msgid.to_string(),
            })
            .collect();
        matches.sort();
        Ok(matches)
    }

    /// A deep copy of the underlying catalog, for export collaborators.
    ///
    /// Mutating the copy has no effect on subsequent lookups.
    #[must_use]
    pub fn messages(&self) -> Catalog {
        self.catalog.clone()
    }

    /// Borrow the underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn translation<'a>(&'a self, msgctxt: &str, msgid: &str) -> Result<&'a str, LookupError> {
        let msgids = self
            .catalog
            .context(msgctxt)
            .ok_or(LookupError::MsgctxtNotFound)?;
        let entry = msgids.get(msgid).ok_or(LookupError::MsgidNotFound)?;
        entry
            .translation
            .as_deref()
            .ok_or(LookupError::TranslationNotFound)
    }

    fn plural_translation<'a>(
        &'a self,
        msgctxt: &str,
        msgid: &str,
        n: u64,
    ) -> Result<&'a str, LookupError> {
        let msgids = self
            .catalog
            .context(msgctxt)
            .ok_or(LookupError::MsgctxtNotFound)?;
        let entry = msgids.get(msgid).ok_or(LookupError::MsgidNotFound)?;

        // An entry may carry both a plain translation and plural forms;
        // `n == 1` resolves to the translation, every other count goes
        // through the plural rule and list.
        if n == 1 {
            if let Some(translation) = entry.translation.as_deref() {
                return Ok(translation);
            }
        }

        let index = usize::try_from(self.plural.evaluate(n)).unwrap_or(usize::MAX);
        let plurals = entry
            .plurals
            .as_deref()
            .ok_or(LookupError::PluralsNotFound)?;
        plurals
            .get(index)
            .map(String::as_str)
            .ok_or(LookupError::PluralIndexOutOfBounds {
                index,
                len: plurals.len(),
            })
    }
}

impl FromStr for MessageCatalog {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_catalog(msgcat_po::parse_str(s)?)
    }
}

/// Pick the catalog's plural rule: the header's `plural=` expression if
/// present and well-formed in shape, the default rule otherwise. An
/// expression that matches the header shape but fails to compile aborts
/// construction.
fn select_plural_rule(catalog: &Catalog) -> Result<PluralExpr, LoadError> {
    let pattern = Regex::new(PLURAL_FORMS_PATTERN).expect("Plural-Forms pattern");
    let expr = catalog
        .header("Plural-Forms")
        .and_then(|value| pattern.captures(value))
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_PLURAL_FORMS, |m| m.as_str());
    Ok(PluralExpr::parse(expr.trim())?)
}
