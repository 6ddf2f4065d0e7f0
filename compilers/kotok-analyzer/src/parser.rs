use log::debug;
use nom::{
    bytes::complete::{is_not, take_till},
    character::complete::char,
    sequence::separated_pair,
    IResult,
};

use kotok_protocol::{AnalyzedToken, PosTag};

use crate::error::AnalysisError;

/// Sentence terminator emitted by MeCab after every input line.
const EOS: &str = "EOS";

/// `surface \t TAG,feature,feature,...` -> (surface, TAG)
fn morpheme_line(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(is_not("\t"), char('\t'), take_till(|c| c == ','))(input)
}

/// Parses MeCab's default output format into analyzed tokens, in order.
///
/// Blank lines and `EOS` markers are skipped. Any other line without a
/// tab-separated feature column is malformed.
pub fn parse_mecab_output(output: &str) -> Result<Vec<AnalyzedToken>, AnalysisError> {
    let mut tokens = Vec::new();

    for (index, line) in output.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() || line == EOS {
            continue;
        }

        let (_, (surface, raw_tag)) = morpheme_line(line).map_err(|_| AnalysisError::MalformedOutput {
            line: index + 1,
            content: line.to_string(),
        })?;

        let tag = PosTag::from_tag(raw_tag);
        if tag == PosTag::Unknown {
            debug!("unclassified tag {:?} for {:?}", raw_tag, surface);
        }

        tokens.push(AnalyzedToken::new(surface, tag));
    }

    Ok(tokens)
}
