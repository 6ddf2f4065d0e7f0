use crate::error::ConfigError;
use crate::numeric::is_numeric;
use crate::stopwords::StopwordSet;

/// Why a candidate token was dropped by the lexical filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    Stopword,
    Numeric,
}

/// Post-filters applied to POS-admitted candidates: minimum length,
/// stopwords and numeric literals, in that order.
#[derive(Debug, Clone)]
pub struct LexicalFilter {
    min_len: usize,
    stopwords: StopwordSet,
}

impl Default for LexicalFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LEN, StopwordSet::default())
    }
}

impl LexicalFilter {
    pub const DEFAULT_MIN_LEN: usize = 2;

    pub fn new(min_len: usize, stopwords: StopwordSet) -> Self {
        Self { min_len, stopwords }
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn stopwords_mut(&mut self) -> &mut StopwordSet {
        &mut self.stopwords
    }

    /// Length is counted in Unicode scalar values, so one Hangul syllable is 1.
    pub fn check(&self, token: &str) -> Result<(), Rejection> {
        if token.chars().count() < self.min_len {
            return Err(Rejection::TooShort);
        }
        if self.stopwords.contains(token) {
            return Err(Rejection::Stopword);
        }
        if is_numeric(token) {
            return Err(Rejection::Numeric);
        }
        Ok(())
    }

    pub fn accepts(&self, token: &str) -> bool {
        self.check(token).is_ok()
    }

    /// Parses a minimum-length setting as read from the environment.
    /// An unset variable yields the default.
    pub fn min_len_from_env_value(value: Option<&str>) -> Result<usize, ConfigError> {
        match value {
            None => Ok(Self::DEFAULT_MIN_LEN),
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|source| ConfigError::InvalidMinLength {
                    value: raw.to_string(),
                    source,
                }),
        }
    }
}
