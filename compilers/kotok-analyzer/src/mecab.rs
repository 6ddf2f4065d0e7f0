use std::borrow::Cow;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use log::{debug, warn};

use kotok_protocol::AnalyzedToken;

use crate::analyzer::Analyzer;
use crate::error::AnalysisError;
use crate::parser::parse_mecab_output;

/// MeCab's default `--input-buffer-size`. Longer lines are split mid-character.
const DEFAULT_INPUT_BUFFER: usize = 8192;

/// Runs the `mecab` binary (with mecab-ko-dic) once per request.
#[derive(Debug, Clone)]
pub struct MecabAnalyzer {
    program: PathBuf,
    dicdir: Option<PathBuf>,
}

impl Default for MecabAnalyzer {
    fn default() -> Self {
        Self {
            program: PathBuf::from("mecab"),
            dicdir: None,
        }
    }
}

impl MecabAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Passed to MeCab as `-d <dicdir>`.
    pub fn with_dicdir(mut self, dicdir: impl Into<PathBuf>) -> Self {
        self.dicdir = Some(dicdir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, input: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(dicdir) = &self.dicdir {
            cmd.arg("-d").arg(dicdir);
        }
        let longest_line = input.lines().map(str::len).max().unwrap_or(0);
        if longest_line >= DEFAULT_INPUT_BUFFER {
            cmd.arg("-b").arg((longest_line + 1).to_string());
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Analyzer for MecabAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalysisError> {
        let mut child = self.command(text).spawn().map_err(|source| AnalysisError::Spawn {
            program: self.program.display().to_string(),
            source,
        })?;

        // MeCab analyzes line by line; make sure the last line is terminated.
        let mut input = text.to_string();
        if !input.ends_with('\n') {
            input.push('\n');
        }

        let mut stdin = child.stdin.take().ok_or_else(|| {
            io::Error::new(io::ErrorKind::BrokenPipe, "analyzer stdin unavailable")
        })?;

        // Feed stdin from a separate thread so a full stdout pipe cannot deadlock us.
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "analyzer stdin writer panicked")));

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                "no diagnostic output".to_string()
            } else {
                stderr
            };
            warn!("mecab failed ({}): {}", output.status, message);
            return Err(AnalysisError::Backend {
                status: output.status.to_string(),
                message,
            });
        }
        written?;

        let tokens = decode_output(&output.stdout)?;
        debug!("mecab produced {} morphemes", tokens.len());
        Ok(tokens)
    }
}

/// Invalid UTF-8 in MeCab's stdout becomes U+FFFD; the surrounding lines still parse.
fn decode_output(stdout: &[u8]) -> Result<Vec<AnalyzedToken>, AnalysisError> {
    let decoded = String::from_utf8_lossy(stdout);
    if let Cow::Owned(_) = decoded {
        warn!("mecab produced invalid UTF-8; decoding lossily");
    }
    parse_mecab_output(&decoded)
}
