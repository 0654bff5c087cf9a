//! Spelling predicates used by the pluralization rules
//!
//! All helpers operate on validated tokens, so byte access is safe.

/// Vowel set for the hard/soft `y` distinction
pub const VOWELS: [u8; 5] = [b'a', b'e', b'i', b'o', b'u'];

/// Whether `b` is one of `a e i o u`
#[inline]
pub fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Whether a stem pluralizes with `-es` (ends in ch, sh, s, z or x)
#[inline]
pub fn takes_es_plural(stem: &str) -> bool {
    stem.ends_with("ch")
        || stem.ends_with("sh")
        || matches!(stem.as_bytes().last(), Some(b's' | b'z' | b'x'))
}

/// Last byte of `s`
#[inline]
pub(crate) fn last_byte(s: &str) -> Option<u8> {
    s.as_bytes().last().copied()
}

/// Byte before the last one
#[inline]
pub(crate) fn penultimate_byte(s: &str) -> Option<u8> {
    let bytes = s.as_bytes();
    bytes.len().checked_sub(2).map(|i| bytes[i])
}
