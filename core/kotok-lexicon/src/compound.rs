use rustc_hash::FxHashSet;

/// Longest run of adjacent tokens considered for a single compound.
pub const MAX_COMPOUND_WINDOW: usize = 5;

/// User dictionary of compound nouns, matched against runs of adjacent
/// tokens after filtering.
#[derive(Debug, Clone, Default)]
pub struct CompoundDictionary {
    entries: FxHashSet<String>,
}

impl CompoundDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries are stored with all whitespace removed; blank entries are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| normalize(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Greedy left-to-right merge: at each position the longest window
    /// (2..=MAX_COMPOUND_WINDOW tokens) whose concatenation is an entry
    /// replaces its tokens.
    pub fn merge(&self, tokens: Vec<String>) -> Vec<String> {
        if self.entries.is_empty() || tokens.len() < 2 {
            return tokens;
        }

        let n = tokens.len();
        let mut result = Vec::with_capacity(n);
        let mut i = 0;

        while i < n {
            let take = MAX_COMPOUND_WINDOW.min(n - i);
            let matched = (2..=take).rev().find_map(|len| {
                let candidate = tokens[i..i + len].concat();
                self.entries.contains(&candidate).then_some((candidate, len))
            });

            match matched {
                Some((compound, len)) => {
                    result.push(compound);
                    i += len;
                }
                None => {
                    result.push(tokens[i].clone());
                    i += 1;
                }
            }
        }

        result
    }
}

fn normalize(entry: &str) -> String {
    entry.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_dictionary_is_identity() {
        let dict = CompoundDictionary::new();
        let input = toks(&["인공", "지능", "발전"]);
        assert_eq!(dict.merge(input.clone()), input);
    }

    #[test]
    fn test_entries_are_normalized() {
        let dict = CompoundDictionary::from_entries([" 인공 지능 ", "   ", "반도체\t산업"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("인공지능"));
        assert!(dict.contains("반도체산업"));
    }

    #[test]
    fn test_merges_adjacent_tokens() {
        let dict = CompoundDictionary::from_entries(["인공지능"]);
        let merged = dict.merge(toks(&["생성", "인공", "지능", "발전"]));
        assert_eq!(merged, toks(&["생성", "인공지능", "발전"]));
    }

    #[test]
    fn test_longest_window_wins() {
        let dict = CompoundDictionary::from_entries(["인공지능", "인공지능반도체"]);
        let merged = dict.merge(toks(&["인공", "지능", "반도체", "수출"]));
        assert_eq!(merged, toks(&["인공지능반도체", "수출"]));
    }

    #[test]
    fn test_window_is_bounded() {
        // Six tokens exceed the window, so this entry can never match
        let dict = CompoundDictionary::from_entries(["가나다라마바"]);
        let input = toks(&["가", "나", "다", "라", "마", "바"]);
        assert_eq!(dict.merge(input.clone()), input);

        let dict = CompoundDictionary::from_entries(["가나다라마"]);
        assert_eq!(dict.merge(input), toks(&["가나다라마", "바"]));
    }

    #[test]
    fn test_single_token_entries_do_not_merge() {
        let dict = CompoundDictionary::from_entries(["발전"]);
        let input = toks(&["발전", "속도"]);
        assert_eq!(dict.merge(input.clone()), input);
    }
}
