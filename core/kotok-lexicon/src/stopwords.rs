//! Stopword sets
//!
//! Korean has no letter case, so lookups are exact matches on the trimmed
//! token.

use rustc_hash::FxHashSet;

/// Grammatically functional or semantically empty high-frequency words.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "것", "수", "등", "및", "중", "이", "있", "있다", "되다", "하다", "이다",
];

#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }
}

impl StopwordSet {
    /// Create an empty set (no filtering)
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut set = Self::empty();
        set.extend(words.iter());
        set
    }

    /// Add words; blank entries are ignored.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_string());
            }
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token.trim())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list() {
        let set = StopwordSet::default();
        assert_eq!(set.len(), DEFAULT_STOPWORDS.len());
        assert!(set.contains("있다"));
        assert!(set.contains("하다"));
        assert!(!set.contains("발전"));
    }

    #[test]
    fn test_lookup_trims() {
        let set = StopwordSet::default();
        assert!(set.contains(" 되다 "));
    }

    #[test]
    fn test_extend_skips_blank() {
        let mut set = StopwordSet::empty();
        set.extend(["기자", "  ", "", " 뉴스 "]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("뉴스"));
    }
}
