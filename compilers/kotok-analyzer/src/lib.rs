pub mod analyzer;
pub mod error;
pub mod mecab;
pub mod parser;
pub mod pipeline;

#[cfg(feature = "lindera-ko")]
pub mod ko_dic;

pub use analyzer::Analyzer;
pub use error::AnalysisError;
pub use mecab::MecabAnalyzer;
pub use parser::parse_mecab_output;
pub use pipeline::{explain, tokenize, Tokenizer, TokenizerConfig, Verdict};

#[cfg(feature = "lindera-ko")]
pub use ko_dic::LinderaAnalyzer;
