//! Error types for catalog construction and lookup.

use thiserror::Error;

use msgcat_plurals::PluralsError;
use msgcat_po::PoError;

/// Failure while constructing a [`crate::MessageCatalog`].
///
/// Construction either succeeds completely or returns no catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the source file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PO input itself is malformed.
    #[error(transparent)]
    Po(#[from] PoError),

    /// The header carries a `Plural-Forms` expression that does not
    /// parse.
    #[error("invalid Plural-Forms header: {0}")]
    BadPluralForms(#[from] PluralsError),
}

/// Why a lookup could not produce a translation.
///
/// Only the `try_*` operations surface these; the silent operations
/// discard the error and return the documented fallback string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The requested context does not exist in the catalog.
    #[error("msgctxt not found")]
    MsgctxtNotFound,

    /// The context exists but has no such msgid.
    #[error("msgid not found")]
    MsgidNotFound,

    /// The entry exists but carries no translation.
    #[error("translation not found")]
    TranslationNotFound,

    /// The entry exists but carries no plural forms.
    #[error("plural translations not found")]
    PluralsNotFound,

    /// The plural rule selected an index past the entry's plural list.
    #[error("plural index {index} out of bounds for {len} plural forms")]
    PluralIndexOutOfBounds { index: usize, len: usize },

    /// The pattern given to a msgid search failed to compile.
    #[error("invalid search pattern: {0}")]
    InvalidRegex(String),
}
