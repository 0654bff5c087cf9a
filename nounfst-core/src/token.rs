//! Token validation
//!
//! A token is a lowercase ASCII word (`^[a-z]+$`), the unit every other
//! part of the analyzer works on.

use crate::error::{CoreError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"^[a-z]+$").expect("token pattern is valid"))
}

/// Check whether `s` already is a well-formed token, without normalization
#[inline]
pub fn is_token(s: &str) -> bool {
    token_pattern().is_match(s)
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A validated lowercase alphabetic word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    /// Normalize and validate raw input
    pub fn parse(raw: &str) -> Result<Self> {
        let word = normalize(raw);
        if word.is_empty() {
            return Err(CoreError::EmptyToken);
        }
        if !is_token(&word) {
            return Err(CoreError::InvalidToken(word));
        }
        Ok(Self(word))
    }

    /// Borrow the word
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Token {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
