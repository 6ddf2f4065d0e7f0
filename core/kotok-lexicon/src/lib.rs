//! Lexical post-filtering for Korean content tokens.

pub mod archive;
pub mod compound;
pub mod error;
pub mod filter;
pub mod numeric;
pub mod stopwords;

pub use compound::CompoundDictionary;
pub use error::ConfigError;
pub use filter::{LexicalFilter, Rejection};
pub use numeric::is_numeric;
pub use stopwords::{StopwordSet, DEFAULT_STOPWORDS};

use kotok_protocol::Lexicon;

/// Folds a user lexicon into the filter and compound dictionary.
/// Stopwords are added to the existing set, never replacing it.
pub fn apply_lexicon(lexicon: &Lexicon, filter: &mut LexicalFilter) -> CompoundDictionary {
    filter.stopwords_mut().extend(&lexicon.stopwords);
    CompoundDictionary::from_entries(&lexicon.compound_nouns)
}
