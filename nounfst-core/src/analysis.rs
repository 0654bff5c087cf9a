//! Classification results

use serde::{Serialize, Serializer};
use std::fmt;

/// Sentinel tag emitted for words no rule accepts
pub const INVALID_WORD: &str = "Invalid Word";

/// Grammatical number marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Number {
    /// Singular form
    #[serde(rename = "SG")]
    Singular,
    /// Plural form
    #[serde(rename = "PL")]
    Plural,
}

impl Number {
    /// Tag marker used in the rendered output
    pub fn marker(&self) -> &'static str {
        match self {
            Number::Singular => "SG",
            Number::Plural => "PL",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Outcome of analysing a single word
///
/// Renders as `root+N+SG`, `root+N+PL` or `Invalid Word`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Analysis {
    /// No rule matched, or the word failed validation
    Invalid,
    /// A noun with its recovered root
    Noun {
        /// Singular base form
        root: String,
        /// Number of the surface form
        number: Number,
    },
}

impl Analysis {
    /// Singular noun whose root is the word itself
    pub fn singular(root: impl Into<String>) -> Self {
        Analysis::Noun {
            root: root.into(),
            number: Number::Singular,
        }
    }

    /// Plural noun with the given root
    pub fn plural(root: impl Into<String>) -> Self {
        Analysis::Noun {
            root: root.into(),
            number: Number::Plural,
        }
    }

    /// Whether a rule accepted the word
    pub fn is_valid(&self) -> bool {
        matches!(self, Analysis::Noun { .. })
    }

    /// Recovered root, if any
    pub fn root(&self) -> Option<&str> {
        match self {
            Analysis::Noun { root, .. } => Some(root),
            Analysis::Invalid => None,
        }
    }

    /// Number marker, if any
    pub fn number(&self) -> Option<Number> {
        match self {
            Analysis::Noun { number, .. } => Some(*number),
            Analysis::Invalid => None,
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::Invalid => f.write_str(INVALID_WORD),
            Analysis::Noun { root, number } => write!(f, "{root}+N+{number}"),
        }
    }
}

impl Serialize for Analysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
