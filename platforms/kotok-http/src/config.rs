use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::info;

use kotok_analyzer::{AnalysisError, Analyzer, MecabAnalyzer, TokenizerConfig};
use kotok_lexicon::{apply_lexicon, archive, CompoundDictionary, ConfigError, LexicalFilter};
use kotok_protocol::PosPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// The `mecab` binary with mecab-ko-dic
    Mecab,
    /// Embedded ko-dic (requires the `lindera-ko` feature)
    Lindera,
}

/// Process configuration, read once at startup from flags or environment.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Korean content-token service")]
pub struct Settings {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3100)]
    pub port: u16,

    /// Tokens shorter than this many characters are dropped
    #[arg(
        long,
        env = "MIN_TOKEN_LEN",
        default_value_t = LexicalFilter::DEFAULT_MIN_LEN,
        value_parser = parse_min_len
    )]
    pub min_token_len: usize,

    #[arg(long, env = "KOTOK_BACKEND", value_enum, default_value_t = Backend::Mecab)]
    pub backend: Backend,

    #[arg(long, env = "MECAB_BIN", default_value = "mecab")]
    pub mecab_bin: PathBuf,

    #[arg(long, env = "MECAB_DICDIR")]
    pub mecab_dicdir: Option<PathBuf>,

    /// Compiled lexicon archive (see `kotok-cli compile`)
    #[arg(long, env = "KOTOK_LEXICON")]
    pub lexicon: Option<PathBuf>,

    #[arg(long, env = "ANALYZER_TIMEOUT_MS")]
    pub analyzer_timeout_ms: Option<u64>,

    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
}

pub fn parse_min_len(raw: &str) -> Result<usize, ConfigError> {
    LexicalFilter::min_len_from_env_value(Some(raw))
}

impl Settings {
    pub fn tokenizer_config(&self) -> Result<TokenizerConfig, ConfigError> {
        let mut lexical = LexicalFilter::default().with_min_len(self.min_token_len);

        let compounds = match &self.lexicon {
            Some(path) => {
                let lexicon = archive::read_archive(path)?;
                info!(
                    "Loaded lexicon v{} from {:?}: {} stopwords, {} compound nouns",
                    lexicon.version,
                    path,
                    lexicon.stopwords.len(),
                    lexicon.compound_nouns.len()
                );
                apply_lexicon(&lexicon, &mut lexical)
            }
            None => CompoundDictionary::default(),
        };

        Ok(TokenizerConfig {
            policy: PosPolicy::default(),
            lexical,
            compounds,
        })
    }

    pub fn analyzer(&self) -> Result<Box<dyn Analyzer>, AnalysisError> {
        match self.backend {
            Backend::Mecab => {
                let mut mecab = MecabAnalyzer::new().with_program(&self.mecab_bin);
                if let Some(dicdir) = &self.mecab_dicdir {
                    mecab = mecab.with_dicdir(dicdir);
                }
                Ok(Box::new(mecab))
            }
            #[cfg(feature = "lindera-ko")]
            Backend::Lindera => Ok(Box::new(kotok_analyzer::LinderaAnalyzer::new()?)),
            #[cfg(not(feature = "lindera-ko"))]
            Backend::Lindera => Err(AnalysisError::Engine(
                "this build does not include the lindera backend (enable the `lindera-ko` feature)".to_string(),
            )),
        }
    }

    pub fn analyzer_timeout(&self) -> Option<Duration> {
        self.analyzer_timeout_ms.map(Duration::from_millis)
    }
}
