use std::sync::Arc;

use log::debug;

use kotok_lexicon::{CompoundDictionary, LexicalFilter, Rejection};
use kotok_protocol::{AnalyzedToken, PosPolicy};

use crate::analyzer::Analyzer;
use crate::error::AnalysisError;

/// Read-only tokenizer configuration, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    pub policy: PosPolicy,
    pub lexical: LexicalFilter,
    pub compounds: CompoundDictionary,
}

/// Outcome for one analyzed morpheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Kept,
    /// Tag in the deny set.
    DeniedTag,
    /// Tag outside the allow set (including unknown tags).
    ExcludedTag,
    /// Surface is empty after trimming.
    Blank,
    TooShort,
    Stopword,
    Numeric,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Kept => "kept",
            Verdict::DeniedTag => "denied-tag",
            Verdict::ExcludedTag => "excluded-tag",
            Verdict::Blank => "blank",
            Verdict::TooShort => "too-short",
            Verdict::Stopword => "stopword",
            Verdict::Numeric => "numeric",
        }
    }
}

impl From<Rejection> for Verdict {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::TooShort => Verdict::TooShort,
            Rejection::Stopword => Verdict::Stopword,
            Rejection::Numeric => Verdict::Numeric,
        }
    }
}

impl TokenizerConfig {
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.lexical = self.lexical.with_min_len(min_len);
        self
    }

    /// POS admission first, then the lexical filters on the trimmed surface.
    pub fn classify(&self, token: &AnalyzedToken) -> Verdict {
        if self.policy.deny.contains_tag(token.tag) {
            return Verdict::DeniedTag;
        }
        if !self.policy.admits(token.tag) {
            return Verdict::ExcludedTag;
        }

        let surface = token.surface.trim();
        if surface.is_empty() {
            return Verdict::Blank;
        }

        match self.lexical.check(surface) {
            Ok(()) => Verdict::Kept,
            Err(rejection) => rejection.into(),
        }
    }
}

/// Analyzes `text` and classifies every morpheme, in input order.
///
/// Blank input short-circuits without calling the analyzer.
pub fn explain<A: Analyzer + ?Sized>(
    analyzer: &A,
    config: &TokenizerConfig,
    text: &str,
) -> Result<Vec<(AnalyzedToken, Verdict)>, AnalysisError> {
    if text.trim().is_empty() {
        debug!("tokenize: empty text");
        return Ok(Vec::new());
    }
    debug!("tokenize: input length={}", text.chars().count());

    let analyzed = analyzer.analyze(text)?;
    Ok(analyzed
        .into_iter()
        .map(|token| {
            let verdict = config.classify(&token);
            (token, verdict)
        })
        .collect())
}

/// Text -> content tokens, in appearance order with duplicates preserved.
pub fn tokenize<A: Analyzer + ?Sized>(
    analyzer: &A,
    config: &TokenizerConfig,
    text: &str,
) -> Result<Vec<String>, AnalysisError> {
    let kept: Vec<String> = explain(analyzer, config, text)?
        .into_iter()
        .filter(|(_, verdict)| *verdict == Verdict::Kept)
        .map(|(token, _)| token.surface.trim().to_string())
        .collect();

    Ok(config.compounds.merge(kept))
}

/// An analyzer bundled with its shared configuration.
pub struct Tokenizer<A> {
    analyzer: A,
    config: Arc<TokenizerConfig>,
}

impl<A: Analyzer> Tokenizer<A> {
    pub fn new(analyzer: A, config: impl Into<Arc<TokenizerConfig>>) -> Self {
        Self {
            analyzer,
            config: config.into(),
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<String>, AnalysisError> {
        tokenize(&self.analyzer, &self.config, text)
    }

    pub fn explain(&self, text: &str) -> Result<Vec<(AnalyzedToken, Verdict)>, AnalysisError> {
        explain(&self.analyzer, &self.config, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use kotok_lexicon::{is_numeric, StopwordSet};
    use kotok_protocol::{PosSet, PosTag};
    use proptest::prelude::*;

    /// Returns a fixed analysis and counts invocations.
    struct ScriptedAnalyzer {
        tokens: Vec<AnalyzedToken>,
        calls: AtomicUsize,
    }

    impl ScriptedAnalyzer {
        fn new(tokens: Vec<AnalyzedToken>) -> Self {
            Self {
                tokens,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Analyzer for ScriptedAnalyzer {
        fn analyze(&self, _text: &str) -> Result<Vec<AnalyzedToken>, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.tokens.clone())
        }
    }

    struct FailingAnalyzer;

    impl Analyzer for FailingAnalyzer {
        fn analyze(&self, _text: &str) -> Result<Vec<AnalyzedToken>, AnalysisError> {
            Err(AnalysisError::Backend {
                status: "exit status: 1".to_string(),
                message: "param.cpp(69) [ifs] no such file or directory: dicrc".to_string(),
            })
        }
    }

    fn tok(surface: &str, tag: PosTag) -> AnalyzedToken {
        AnalyzedToken::new(surface, tag)
    }

    /// "인공지능은 빠르게 발전하고 있다."
    fn sentence() -> Vec<AnalyzedToken> {
        vec![
            tok("인공지능", PosTag::Nng),
            tok("은", PosTag::Jx),
            tok("빠르게", PosTag::Mag),
            tok("발전", PosTag::Vv),
            tok("하", PosTag::Xsv),
            tok("고", PosTag::Ec),
            tok("있", PosTag::Vx),
            tok("다", PosTag::Ef),
            tok(".", PosTag::Sf),
        ]
    }

    #[test]
    fn test_sentence_keeps_content_in_order() {
        let analyzer = ScriptedAnalyzer::new(sentence());
        let config = TokenizerConfig::default();

        let tokens = tokenize(&analyzer, &config, "인공지능은 빠르게 발전하고 있다.").unwrap();
        assert_eq!(tokens, vec!["인공지능", "발전"]);
        assert_eq!(analyzer.calls(), 1);
    }

    #[test]
    fn test_blank_input_skips_analyzer() {
        let analyzer = ScriptedAnalyzer::new(sentence());
        let config = TokenizerConfig::default();

        for text in ["", " ", "\t\n  \r\n"] {
            assert!(tokenize(&analyzer, &config, text).unwrap().is_empty());
        }
        assert_eq!(analyzer.calls(), 0);
    }

    #[test]
    fn test_analyzer_failure_propagates() {
        let config = TokenizerConfig::default();
        let err = tokenize(&FailingAnalyzer, &config, "인공지능").unwrap_err();
        assert!(err.to_string().contains("no such file or directory: dicrc"));
    }

    #[test]
    fn test_numeric_mis_tags_are_dropped() {
        let analyzer = ScriptedAnalyzer::new(vec![
            tok("123", PosTag::Nng),
            tok("12.5", PosTag::Nng),
            tok("3,000", PosTag::Nnp),
            tok("50%", PosTag::Nng),
            tok("3.14.15", PosTag::Nng),
        ]);
        let config = TokenizerConfig::default();

        let tokens = tokenize(&analyzer, &config, "숫자").unwrap();
        assert_eq!(tokens, vec!["3.14.15"]);
    }

    #[test]
    fn test_min_length_boundary() {
        let analyzer = ScriptedAnalyzer::new(vec![
            tok("반도체", PosTag::Nng),
            tok("수출", PosTag::Nng),
        ]);
        let config = TokenizerConfig::default().with_min_len(3);

        let tokens = tokenize(&analyzer, &config, "반도체 수출").unwrap();
        assert_eq!(tokens, vec!["반도체"]);
    }

    #[test]
    fn test_surfaces_are_trimmed_and_duplicates_kept() {
        let analyzer = ScriptedAnalyzer::new(vec![
            tok(" 경제 ", PosTag::Nng),
            tok("   ", PosTag::Nng),
            tok("경제", PosTag::Nng),
            tok("있다", PosTag::Vv),
        ]);
        let config = TokenizerConfig::default();

        let explained = explain(&analyzer, &config, "경제 경제").unwrap();
        let verdicts: Vec<Verdict> = explained.iter().map(|(_, v)| *v).collect();
        assert_eq!(
            verdicts,
            vec![Verdict::Kept, Verdict::Blank, Verdict::Kept, Verdict::Stopword]
        );

        let tokens = tokenize(&analyzer, &config, "경제 경제").unwrap();
        assert_eq!(tokens, vec!["경제", "경제"]);
    }

    #[test]
    fn test_verdicts_for_tags() {
        let config = TokenizerConfig::default();
        assert_eq!(config.classify(&tok("에서", PosTag::Jkb)), Verdict::DeniedTag);
        assert_eq!(config.classify(&tok("오늘", PosTag::Mag)), Verdict::DeniedTag);
        assert_eq!(config.classify(&tok("그것", PosTag::Np)), Verdict::ExcludedTag);
        assert_eq!(config.classify(&tok("했다", PosTag::Unknown)), Verdict::ExcludedTag);
        assert_eq!(config.classify(&tok("아니", PosTag::Vcn)), Verdict::Kept);
    }

    #[test]
    fn test_compound_merge_runs_after_filtering() {
        let analyzer = ScriptedAnalyzer::new(vec![
            tok("생성", PosTag::Nng),
            tok("형", PosTag::Xsn),
            tok("인공", PosTag::Nng),
            tok("지능", PosTag::Nng),
            tok("모델", PosTag::Nng),
        ]);
        let config = TokenizerConfig {
            compounds: CompoundDictionary::from_entries(["생성인공지능"]),
            ..TokenizerConfig::default()
        };

        let tokens = tokenize(&analyzer, &config, "생성형 인공지능 모델").unwrap();
        assert_eq!(tokens, vec!["생성인공지능", "모델"]);
    }

    #[test]
    fn test_tokenizer_shares_config() {
        let config = Arc::new(TokenizerConfig::default());
        let tokenizer = Tokenizer::new(ScriptedAnalyzer::new(sentence()), config.clone());

        assert_eq!(tokenizer.tokenize("인공지능은").unwrap(), vec!["인공지능", "발전"]);
        assert_eq!(tokenizer.explain("인공지능은").unwrap().len(), 9);
        assert_eq!(tokenizer.analyzer().calls(), 2);
        assert_eq!(Arc::strong_count(&config), 2);
    }

    fn any_tag() -> impl Strategy<Value = PosTag> {
        let mut tags = PosTag::ALL.to_vec();
        tags.push(PosTag::Unknown);
        proptest::sample::select(tags)
    }

    fn any_token() -> impl Strategy<Value = AnalyzedToken> {
        ("[ 가-힣0-9.,%]{0,5}", any_tag()).prop_map(|(surface, tag)| AnalyzedToken::new(surface, tag))
    }

    fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
        let mut rest = haystack.iter();
        needle.iter().all(|n| rest.any(|h| h == n))
    }

    proptest! {
        #[test]
        fn test_output_satisfies_every_filter(
            tokens in proptest::collection::vec(any_token(), 0..24),
            min_len in 0usize..4,
        ) {
            let analyzer = ScriptedAnalyzer::new(tokens.clone());
            let config = TokenizerConfig::default().with_min_len(min_len);
            let stopwords = StopwordSet::default();

            let output = tokenize(&analyzer, &config, "본문").unwrap();

            // Conjunction of all five conditions, applied independently
            let expected: Vec<String> = tokens
                .iter()
                .filter(|t| PosSet::CONTENT.contains_tag(t.tag) && !PosSet::FUNCTION.contains_tag(t.tag))
                .map(|t| t.surface.trim().to_string())
                .filter(|s| !s.is_empty())
                .filter(|s| s.chars().count() >= min_len)
                .filter(|s| !stopwords.contains(s))
                .filter(|s| !is_numeric(s))
                .collect();
            prop_assert_eq!(&output, &expected);

            // Stability: output is an in-order subsequence of the trimmed surfaces
            let surfaces: Vec<String> = tokens.iter().map(|t| t.surface.trim().to_string()).collect();
            prop_assert!(is_subsequence(&output, &surfaces));
        }

        #[test]
        fn test_tokenize_is_idempotent(tokens in proptest::collection::vec(any_token(), 0..24)) {
            let analyzer = ScriptedAnalyzer::new(tokens);
            let config = TokenizerConfig::default();

            let first = tokenize(&analyzer, &config, "같은 입력").unwrap();
            let second = tokenize(&analyzer, &config, "같은 입력").unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
