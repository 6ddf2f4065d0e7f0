use rkyv::{Archive, Deserialize, Serialize};
use crate::pos::PosTag;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One analyzer span: the literal surface text and its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct AnalyzedToken {
    pub surface: String,
    pub tag: PosTag,
}

impl AnalyzedToken {
    pub fn new(surface: impl Into<String>, tag: PosTag) -> Self {
        Self {
            surface: surface.into(),
            tag,
        }
    }
}

/// User lexicon compiled ahead of time: extra stopwords and compound nouns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub stopwords: Vec<String>,
    pub compound_nouns: Vec<String>,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_token_json_uses_raw_tag() {
        let token = AnalyzedToken::new("인공지능", PosTag::Nng);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"surface":"인공지능","tag":"NNG"}"#);

        let back: AnalyzedToken = serde_json::from_str(r#"{"surface":"했","tag":"VV+EP"}"#).unwrap();
        assert_eq!(back.tag, PosTag::Unknown);
    }

    #[test]
    fn test_lexicon_json_defaults() {
        let lexicon: Lexicon = serde_json::from_str(r#"{"stopwords":["기자"]}"#).unwrap();
        assert_eq!(lexicon.version, 0);
        assert_eq!(lexicon.stopwords, vec!["기자".to_string()]);
        assert!(lexicon.compound_nouns.is_empty());
    }
}
