use std::sync::Arc;

use kotok_protocol::AnalyzedToken;

use crate::error::AnalysisError;

/// A morphological analyzer: text in, ordered `(surface, tag)` spans out.
///
/// The call may block for a long time on large inputs; callers that need a
/// deadline wrap it themselves.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalysisError>;
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalysisError> {
        (**self).analyze(text)
    }
}

impl<A: Analyzer + ?Sized> Analyzer for Arc<A> {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalysisError> {
        (**self).analyze(text)
    }
}
