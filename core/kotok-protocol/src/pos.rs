use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;

macro_rules! define_pos_tags {
    ($( $variant:ident / $flag:ident = $bit:literal, $tag:literal, $doc:literal; )*) => {
        /// A morphological category as emitted by mecab-ko-dic (Sejong-derived tagset).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum PosTag {
            $( #[doc = $doc] $variant = $bit, )*
            /// Any tag outside the known tagset, including compound
            /// inflection tags such as `VV+EP`.
            Unknown = 63,
        }

        bitflags! {
            /// A set of part-of-speech tags, one bit per [`PosTag`].
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct PosSet: u64 {
                $( #[doc = $doc] const $flag = 1 << $bit; )*
            }
        }

        impl PosTag {
            /// Every known tag, in bit order.
            pub const ALL: &'static [PosTag] = &[ $( PosTag::$variant, )* ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( PosTag::$variant => $tag, )*
                    PosTag::Unknown => "UNKNOWN",
                }
            }

            /// Classifies a raw analyzer tag. Never fails: unrecognized tags
            /// become [`PosTag::Unknown`].
            pub fn from_tag(tag: &str) -> Self {
                match tag {
                    $( $tag => PosTag::$variant, )*
                    _ => PosTag::Unknown,
                }
            }

            /// The singleton set for this tag. `Unknown` maps to the empty set.
            pub fn flag(self) -> PosSet {
                match self {
                    $( PosTag::$variant => PosSet::$flag, )*
                    PosTag::Unknown => PosSet::empty(),
                }
            }
        }
    };
}

define_pos_tags! {
    // Nominals
    Nng / NNG = 0, "NNG", "Common noun.";
    Nnp / NNP = 1, "NNP", "Proper noun.";
    Nnb / NNB = 2, "NNB", "Dependent noun.";
    Nnbc / NNBC = 3, "NNBC", "Unit noun.";
    Nr / NR = 4, "NR", "Numeral.";
    Np / NP = 5, "NP", "Pronoun.";

    // Predicates
    Vv / VV = 6, "VV", "Verb stem.";
    Va / VA = 7, "VA", "Adjective stem.";
    Vx / VX = 8, "VX", "Auxiliary predicate.";
    Vcp / VCP = 9, "VCP", "Positive copula.";
    Vcn / VCN = 10, "VCN", "Negative copula stem.";

    // Modifiers
    Mm / MM = 11, "MM", "Determiner.";
    Mag / MAG = 12, "MAG", "General adverb.";
    Maj / MAJ = 13, "MAJ", "Conjunctive adverb.";
    Ic / IC = 14, "IC", "Interjection.";

    // Particles
    Jks / JKS = 15, "JKS", "Subject case particle.";
    Jkc / JKC = 16, "JKC", "Complement case particle.";
    Jkg / JKG = 17, "JKG", "Possessive case particle.";
    Jko / JKO = 18, "JKO", "Object case particle.";
    Jkb / JKB = 19, "JKB", "Adverbial case particle.";
    Jkv / JKV = 20, "JKV", "Vocative case particle.";
    Jkq / JKQ = 21, "JKQ", "Quotative case particle.";
    Jx / JX = 22, "JX", "Auxiliary particle.";
    Jc / JC = 23, "JC", "Conjunctive particle.";

    // Endings
    Ep / EP = 24, "EP", "Pre-final ending.";
    Ef / EF = 25, "EF", "Final ending.";
    Ec / EC = 26, "EC", "Connective ending.";
    Etn / ETN = 27, "ETN", "Nominalizing ending.";
    Etm / ETM = 28, "ETM", "Adnominalizing ending.";

    // Affixes and roots
    Xpn / XPN = 29, "XPN", "Noun prefix.";
    Xsn / XSN = 30, "XSN", "Noun-derivational suffix.";
    Xsv / XSV = 31, "XSV", "Verb-derivational suffix.";
    Xsa / XSA = 32, "XSA", "Adjective-derivational suffix.";
    Xr / XR = 33, "XR", "Root.";

    // Punctuation and symbols. SP/SS/SW are the Sejong spellings,
    // SSO/SSC/SC/SY the mecab-ko-dic ones.
    Sf / SF = 34, "SF", "Sentence-final punctuation.";
    Sp / SP = 35, "SP", "Comma, colon or slash.";
    Ss / SS = 36, "SS", "Quotation mark or bracket.";
    Sso / SSO = 37, "SSO", "Opening bracket.";
    Ssc / SSC = 38, "SSC", "Closing bracket.";
    Sc / SC = 39, "SC", "Separator.";
    Se / SE = 40, "SE", "Ellipsis.";
    So / SO = 41, "SO", "Hyphen or tilde.";
    Sw / SW = 42, "SW", "Other symbol (Sejong).";
    Sy / SY = 43, "SY", "Other symbol.";

    // Foreign script and numbers
    Sl / SL = 44, "SL", "Foreign word.";
    Sh / SH = 45, "SH", "Chinese characters.";
    Sn / SN = 46, "SN", "Number.";

    // Analyzer guesses
    Na / NA = 47, "NA", "Unanalyzable.";
    Nf / NF = 48, "NF", "Presumed noun.";
    Nv / NV = 49, "NV", "Presumed predicate.";
}

impl PosSet {
    /// Content-bearing categories.
    pub const CONTENT: PosSet = PosSet::NNG
        .union(PosSet::NNP)
        .union(PosSet::VV)
        .union(PosSet::VA)
        .union(PosSet::VCN);

    pub const PARTICLES: PosSet = PosSet::JKS
        .union(PosSet::JKC)
        .union(PosSet::JKG)
        .union(PosSet::JKO)
        .union(PosSet::JKB)
        .union(PosSet::JKV)
        .union(PosSet::JKQ)
        .union(PosSet::JX)
        .union(PosSet::JC);

    pub const SYMBOLS: PosSet = PosSet::SF
        .union(PosSet::SP)
        .union(PosSet::SS)
        .union(PosSet::SSO)
        .union(PosSet::SSC)
        .union(PosSet::SC)
        .union(PosSet::SE)
        .union(PosSet::SO)
        .union(PosSet::SW)
        .union(PosSet::SY);

    /// Particles, adverbs, interjections and all punctuation/symbol tags.
    pub const FUNCTION: PosSet = PosSet::PARTICLES
        .union(PosSet::MAG)
        .union(PosSet::MAJ)
        .union(PosSet::IC)
        .union(PosSet::SYMBOLS);

    pub fn contains_tag(&self, tag: PosTag) -> bool {
        let flag = tag.flag();
        !flag.is_empty() && self.contains(flag)
    }
}

impl FromIterator<PosTag> for PosSet {
    fn from_iter<I: IntoIterator<Item = PosTag>>(iter: I) -> Self {
        iter.into_iter()
            .fold(PosSet::empty(), |set, tag| set.union(tag.flag()))
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PosTag::from_tag(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PosTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PosTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Ok(PosTag::from_tag(&raw))
    }
}

/// Allow/deny policy over part-of-speech tags.
///
/// The two sets are checked independently: a tag must be in `allow` and
/// absent from `deny`. Tags in neither set are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosPolicy {
    pub allow: PosSet,
    pub deny: PosSet,
}

impl PosPolicy {
    pub const fn new(allow: PosSet, deny: PosSet) -> Self {
        Self { allow, deny }
    }

    pub fn admits(&self, tag: PosTag) -> bool {
        let flag = tag.flag();
        !flag.is_empty() && self.allow.contains(flag) && !self.deny.intersects(flag)
    }
}

impl Default for PosPolicy {
    fn default() -> Self {
        Self::new(PosSet::CONTENT, PosSet::FUNCTION)
    }
}
