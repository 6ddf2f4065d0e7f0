use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use kotok_analyzer::{Analyzer, MecabAnalyzer, Tokenizer, TokenizerConfig};
use kotok_lexicon::{apply_lexicon, archive, CompoundDictionary, LexicalFilter};
use kotok_protocol::{Lexicon, PosTag};

#[derive(Parser)]
#[command(author, version, about = "Korean content-token tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compiles a JSON lexicon to an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Tokenizes text with MeCab and prints the tokens as JSON
    Tokenize {
        /// Text to tokenize; stdin is read when neither --text nor --file is given
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        #[arg(
            long,
            env = "MIN_TOKEN_LEN",
            default_value_t = LexicalFilter::DEFAULT_MIN_LEN,
            value_parser = parse_min_len
        )]
        min_token_len: usize,

        #[arg(long, env = "MECAB_BIN", default_value = "mecab")]
        mecab_bin: PathBuf,

        #[arg(long, env = "MECAB_DICDIR")]
        mecab_dicdir: Option<PathBuf>,

        #[arg(long, env = "KOTOK_LEXICON")]
        lexicon: Option<PathBuf>,

        /// Print every morpheme with its tag and verdict
        #[arg(long)]
        explain: bool,
    },
}

#[derive(Serialize)]
struct TokensOutput {
    tokens: Vec<String>,
}

#[derive(Serialize)]
struct ExplainRow<'a> {
    surface: &'a str,
    tag: PosTag,
    verdict: &'static str,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Compile { input, output } => {
            compile_lexicon(&input, &output)?;
        }
        Command::Tokenize {
            text,
            file,
            min_token_len,
            mecab_bin,
            mecab_dicdir,
            lexicon,
            explain,
        } => {
            let text = read_text(text, file.as_deref())?;

            let mut analyzer = MecabAnalyzer::new().with_program(mecab_bin);
            if let Some(dicdir) = mecab_dicdir {
                analyzer = analyzer.with_dicdir(dicdir);
            }

            let config = build_config(min_token_len, lexicon.as_deref())?;
            let tokenizer = Tokenizer::new(analyzer, config);
            println!("{}", render(&tokenizer, &text, explain)?);
        }
    }

    Ok(())
}

fn parse_min_len(raw: &str) -> Result<usize, kotok_lexicon::ConfigError> {
    LexicalFilter::min_len_from_env_value(Some(raw))
}

fn compile_lexicon(input: &Path, output: &Path) -> anyhow::Result<Lexicon> {
    info!("Reading lexicon JSON from {:?}", input);
    let source = fs::read_to_string(input)?;
    let lexicon = archive::parse_json(&source)?;

    info!(
        "Compiling lexicon v{} with {} stopwords and {} compound nouns",
        lexicon.version,
        lexicon.stopwords.len(),
        lexicon.compound_nouns.len()
    );
    let bytes = archive::compile(&lexicon)?;
    fs::write(output, bytes.as_slice())?;

    info!("Archive written to {:?} ({} bytes)", output, bytes.len());
    Ok(lexicon)
}

fn read_text(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn build_config(min_token_len: usize, lexicon: Option<&Path>) -> anyhow::Result<TokenizerConfig> {
    let mut lexical = LexicalFilter::default().with_min_len(min_token_len);
    let compounds = match lexicon {
        Some(path) => apply_lexicon(&archive::read_archive(path)?, &mut lexical),
        None => CompoundDictionary::default(),
    };

    Ok(TokenizerConfig {
        lexical,
        compounds,
        ..TokenizerConfig::default()
    })
}

fn render<A: Analyzer>(tokenizer: &Tokenizer<A>, text: &str, explain: bool) -> anyhow::Result<String> {
    if explain {
        let explained = tokenizer.explain(text)?;
        let rows: Vec<ExplainRow> = explained
            .iter()
            .map(|(token, verdict)| ExplainRow {
                surface: &token.surface,
                tag: token.tag,
                verdict: verdict.as_str(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    } else {
        let tokens = tokenizer.tokenize(text)?;
        Ok(serde_json::to_string(&TokensOutput { tokens })?)
    }
}
