//! Dictionary tables for dialect translation
//!
//! The store holds four flat tables:
//!
//! - American-only terms (`american-only.json`)
//! - British-only terms (`british-only.json`)
//! - American-to-British spelling pairs (`american-to-british-spelling.json`)
//! - American-to-British title pairs (`american-to-british-titles.json`)
//!
//! The two pair tables are read in both directions, so they are held as
//! [`PairTable`]s which refuse duplicate values at construction time.
//! Everything here is validated once when loaded; translation never
//! re-checks it.

use crate::error::{DictionaryError, DictionaryResult};
use crate::loader;
use std::collections::{HashMap, HashSet};

pub const AMERICAN_ONLY: &str = "american-only";
pub const BRITISH_ONLY: &str = "british-only";
pub const SPELLING: &str = "american-to-british-spelling";
pub const TITLES: &str = "american-to-british-titles";

/// One-directional term table: lowercase source term to its replacement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTable(HashMap<String, String>);

impl TermTable {
    /// Build a table from `(term, replacement)` entries.
    ///
    /// Keys are lowercased. Two keys that collide after lowercasing are
    /// rejected, as are empty keys or values.
    pub fn new<I, K, V>(name: &str, entries: I) -> DictionaryResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut terms = HashMap::new();
        for (key, value) in entries {
            let key = key.into().to_lowercase();
            let value = value.into();
            if key.is_empty() || value.is_empty() {
                return Err(DictionaryError::EmptyEntry {
                    table: name.to_string(),
                });
            }
            if terms.contains_key(&key) {
                return Err(DictionaryError::DuplicateKey {
                    table: name.to_string(),
                    key,
                });
            }
            terms.insert(key, value);
        }
        Ok(TermTable(terms))
    }

    pub fn get(&self, term: &str) -> Option<&String> {
        self.0.get(term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

/// Reversible pair table, injective in both directions.
///
/// Construction fails if two entries share a key or a value (compared
/// case-insensitively), which keeps [`PairTable::reversed`] well defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable {
    name: String,
    pairs: HashMap<String, String>,
}

impl PairTable {
    pub fn new<I, K, V>(name: &str, entries: I) -> DictionaryResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut pairs = HashMap::new();
        let mut seen_values = HashSet::new();
        for (key, value) in entries {
            let key = key.into().to_lowercase();
            let value = value.into();
            if key.is_empty() || value.is_empty() {
                return Err(DictionaryError::EmptyEntry {
                    table: name.to_string(),
                });
            }
            if pairs.contains_key(&key) {
                return Err(DictionaryError::DuplicateKey {
                    table: name.to_string(),
                    key,
                });
            }
            if !seen_values.insert(value.to_lowercase()) {
                return Err(DictionaryError::DuplicateValue {
                    table: name.to_string(),
                    value,
                });
            }
            pairs.insert(key, value);
        }
        Ok(PairTable {
            name: name.to_string(),
            pairs,
        })
    }

    /// The same pairs read the other way round: each `(key, value)` becomes
    /// `(value, key)`, with the new key lowercased.
    pub fn reversed(&self) -> PairTable {
        PairTable {
            name: format!("{} (reversed)", self.name),
            pairs: self
                .pairs
                .iter()
                .map(|(key, value)| (value.to_lowercase(), key.clone()))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.pairs.get(key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.pairs.iter()
    }
}

/// Direction-specific vocabulary: a one-sided term table overlaid with
/// spelling pairs.
///
/// Keys containing a space (phrases) are also kept in a separate list, so the
/// phrase pass does not have to filter the whole table on every call.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    terms: HashMap<String, String>,
    phrases: Vec<(String, String)>,
}

impl TermDictionary {
    /// Merge `base` with `overlay`. On a key present in both, the overlay wins.
    pub fn merge(base: &TermTable, overlay: &PairTable) -> Self {
        let mut terms: HashMap<String, String> = base
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        for (key, value) in overlay.iter() {
            terms.insert(key.clone(), value.clone());
        }

        let mut phrases: Vec<(String, String)> = terms
            .iter()
            .filter(|(key, _)| key.contains(' '))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        phrases.sort();

        TermDictionary { terms, phrases }
    }

    pub fn get(&self, term: &str) -> Option<&String> {
        self.terms.get(term)
    }

    /// Entries whose key is a multi-word phrase
    pub fn phrases(&self) -> &[(String, String)] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// The four source tables every translator is built from
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    pub american_only: TermTable,
    pub british_only: TermTable,
    pub spelling: PairTable,
    pub titles: PairTable,
}

impl DictionaryStore {
    pub fn new(
        american_only: TermTable,
        british_only: TermTable,
        spelling: PairTable,
        titles: PairTable,
    ) -> Self {
        DictionaryStore {
            american_only,
            british_only,
            spelling,
            titles,
        }
    }

    /// The dictionaries shipped with the crate
    pub fn builtin() -> DictionaryResult<Self> {
        Ok(DictionaryStore {
            american_only: TermTable::new(
                AMERICAN_ONLY,
                loader::parse_entries(
                    AMERICAN_ONLY,
                    include_str!("../data/american-only.json"),
                )?,
            )?,
            british_only: TermTable::new(
                BRITISH_ONLY,
                loader::parse_entries(
                    BRITISH_ONLY,
                    include_str!("../data/british-only.json"),
                )?,
            )?,
            spelling: PairTable::new(
                SPELLING,
                loader::parse_entries(
                    SPELLING,
                    include_str!("../data/american-to-british-spelling.json"),
                )?,
            )?,
            titles: PairTable::new(
                TITLES,
                loader::parse_entries(
                    TITLES,
                    include_str!("../data/american-to-british-titles.json"),
                )?,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_is_valid() {
        let store = DictionaryStore::builtin().unwrap();
        assert!(!store.american_only.is_empty());
        assert!(!store.british_only.is_empty());
        assert_eq!(store.spelling.get("favorite").unwrap(), "favourite");
        assert_eq!(store.titles.get("mr.").unwrap(), "mr");
    }

    #[test]
    fn test_term_table_lowercases_keys() {
        let table = TermTable::new("test", [("Parking Lot", "car park")]).unwrap();
        assert_eq!(table.get("parking lot").unwrap(), "car park");
        assert!(table.get("Parking Lot").is_none());
    }

    #[test]
    fn test_term_table_rejects_case_collision() {
        let err =
            TermTable::new("test", [("Candy", "sweets"), ("candy", "sweeties")]).unwrap_err();
        assert!(matches!(err, DictionaryError::DuplicateKey { key, .. } if key == "candy"));
    }

    #[test]
    fn test_pair_table_rejects_duplicate_values() {
        let err = PairTable::new("titles", [("mr.", "mr"), ("mister", "Mr")]).unwrap_err();
        match err {
            DictionaryError::DuplicateValue { table, value } => {
                assert_eq!(table, "titles");
                assert_eq!(value, "Mr");
            }
            other => panic!("expected DuplicateValue, got {other:?}"),
        }
    }

    #[test]
    fn test_pair_table_rejects_empty_entries() {
        assert!(matches!(
            PairTable::new("spelling", [("color", "")]),
            Err(DictionaryError::EmptyEntry { .. })
        ));
    }

    #[test]
    fn test_pair_table_reversed() {
        let table =
            PairTable::new("spelling", [("color", "colour"), ("gray", "grey")]).unwrap();
        let reversed = table.reversed();
        assert_eq!(reversed.get("colour").unwrap(), "color");
        assert_eq!(reversed.get("grey").unwrap(), "gray");
        assert!(reversed.get("color").is_none());
        assert_eq!(reversed.reversed().get("color").unwrap(), "colour");
        assert_eq!(reversed.len(), 2);
        assert_eq!(reversed.name(), "spelling (reversed)");
    }

    #[test]
    fn test_merge_overlay_wins_on_collision() {
        let base =
            TermTable::new("base", [("color", "hue"), ("parking lot", "car park")]).unwrap();
        let overlay = PairTable::new("overlay", [("color", "colour")]).unwrap();
        let dict = TermDictionary::merge(&base, &overlay);
        assert_eq!(dict.get("color").unwrap(), "colour");
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_merge_collects_phrases() {
        let base = TermTable::new(
            "base",
            [("trash can", "bin"), ("trashcan", "bin"), ("swap meet", "car boot sale")],
        )
        .unwrap();
        let overlay = PairTable::new("overlay", Vec::<(String, String)>::new()).unwrap();
        let dict = TermDictionary::merge(&base, &overlay);
        let keys: Vec<&str> = dict.phrases().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["swap meet", "trash can"]);
    }
}
