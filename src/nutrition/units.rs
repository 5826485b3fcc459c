//! Unit names and alias normalization
//!
//! Units are free-form words taken from recipe documents. Only grams carry a
//! built-in meaning; every other unit is resolved through a recipe's own
//! conversion table after its spelling has been normalized here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The universal base unit
pub const GRAM: &str = "g";

/// Unit added to every derived recipe, defaulting to one full batch
pub const PORTION: &str = "Portion";

/// Built-in plural spellings and their canonical form
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("Portionen", PORTION),
    ("Zehen", "Zehe"),
    ("Dosen", "Dose"),
    ("Tassen", "Tasse"),
];

/// Alias table mapping raw unit spellings to canonical unit names
///
/// Lookups are exact and case-sensitive: "portionen" is not an alias of
/// "Portion" unless configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAliases {
    aliases: HashMap<String, String>,
}

impl Default for UnitAliases {
    fn default() -> Self {
        Self {
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
                .collect(),
        }
    }
}

impl UnitAliases {
    /// An alias table without any entries
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Add or replace an alias
    pub fn insert(&mut self, raw: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.insert(raw.into(), canonical.into());
    }

    /// Number of aliases
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Map a raw unit spelling to its canonical name
    ///
    /// Surrounding whitespace is trimmed first. Unknown spellings are returned
    /// trimmed but otherwise unchanged.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self.aliases.get(trimmed) {
            Some(canonical) => canonical.clone(),
            None => trimmed.to_string(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UnitAliases {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (raw, canonical) in iter {
            table.insert(raw, canonical);
        }
        table
    }
}
