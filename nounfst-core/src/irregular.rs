//! Irregular noun table
//!
//! Surface plurals that no suffix rule can recover. Looked up before any
//! other rule, so these forms never depend on the root vocabulary.

use crate::analysis::{Analysis, Number};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Irregular surface form with its root and number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrregularEntry {
    /// Surface form as found in text
    pub surface: &'static str,
    /// Singular root
    pub root: &'static str,
    /// Number of the surface form
    pub number: Number,
}

impl IrregularEntry {
    const fn plural(surface: &'static str, root: &'static str) -> Self {
        Self {
            surface,
            root,
            number: Number::Plural,
        }
    }

    /// Analysis produced for this entry
    pub fn analysis(&self) -> Analysis {
        Analysis::Noun {
            root: self.root.to_string(),
            number: self.number,
        }
    }
}

static IRREGULARS: [IrregularEntry; 9] = [
    IrregularEntry::plural("children", "child"),
    IrregularEntry::plural("men", "man"),
    IrregularEntry::plural("women", "woman"),
    IrregularEntry::plural("people", "person"),
    IrregularEntry::plural("mice", "mouse"),
    IrregularEntry::plural("geese", "goose"),
    IrregularEntry::plural("teeth", "tooth"),
    IrregularEntry::plural("feet", "foot"),
    IrregularEntry::plural("oxen", "ox"),
];

static BY_SURFACE: OnceLock<HashMap<&'static str, IrregularEntry>> = OnceLock::new();

fn by_surface() -> &'static HashMap<&'static str, IrregularEntry> {
    BY_SURFACE.get_or_init(|| IRREGULARS.iter().map(|e| (e.surface, *e)).collect())
}

/// Find the irregular entry for a surface form
#[inline]
pub fn lookup(word: &str) -> Option<&'static IrregularEntry> {
    by_surface().get(word)
}

/// Roots contributed by the irregular table
pub fn roots() -> impl Iterator<Item = &'static str> {
    IRREGULARS.iter().map(|e| e.root)
}
