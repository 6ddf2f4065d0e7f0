use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer as LinderaTokenizer;

use kotok_protocol::{AnalyzedToken, PosTag};

use crate::analyzer::Analyzer;
use crate::error::AnalysisError;

/// In-process analyzer over the embedded ko-dic dictionary.
pub struct LinderaAnalyzer {
    tokenizer: LinderaTokenizer,
}

impl LinderaAnalyzer {
    pub fn new() -> Result<Self, AnalysisError> {
        let dictionary = load_dictionary("embedded://ko-dic")
            .map_err(|e| AnalysisError::Engine(e.to_string()))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        Ok(Self {
            tokenizer: LinderaTokenizer::new(segmenter),
        })
    }
}

impl Analyzer for LinderaAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalysisError> {
        let tokens = self
            .tokenizer
            .tokenize(text)
            .map_err(|e| AnalysisError::Engine(e.to_string()))?;

        Ok(tokens
            .into_iter()
            .map(|mut token| {
                // Copy surface before the mutable borrow for details()
                let surface = token.surface.as_ref().to_string();
                let tag = token
                    .details()
                    .first()
                    .map(|pos| PosTag::from_tag(pos))
                    .unwrap_or(PosTag::Unknown);
                AnalyzedToken::new(surface, tag)
            })
            .collect())
    }
}
