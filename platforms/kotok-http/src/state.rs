use std::sync::Arc;
use std::time::Duration;

use kotok_analyzer::{Analyzer, Tokenizer};

pub type SharedTokenizer = Arc<Tokenizer<Box<dyn Analyzer>>>;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub tokenizer: SharedTokenizer,
    /// Deadline for one analyzer call; `None` waits indefinitely.
    pub analyzer_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(tokenizer: Tokenizer<Box<dyn Analyzer>>, analyzer_timeout: Option<Duration>) -> Self {
        Self {
            tokenizer: Arc::new(tokenizer),
            analyzer_timeout,
        }
    }
}
