use crate::dictionary::{
    AMERICAN_ONLY, BRITISH_ONLY, DictionaryStore, PairTable, SPELLING, TITLES, TermTable,
};
use crate::error::{DictionaryError, DictionaryResult};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse the entries of one dictionary table from JSON text
///
/// The JSON document should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "parking lot": "car park",
///     "trash can": "bin"
/// }
/// ```
///
/// A key repeated verbatim within one document is not an error: the last
/// occurrence wins, as for any JSON object read by `serde_json`. Keys that only
/// differ in case survive parsing and are rejected by the table constructors.
///
/// # Arguments
/// * `origin` - Name of the table or file, used in error messages
/// * `content` - The JSON text
///
/// # Errors
/// - Invalid JSON
/// - Root is not an object
pub fn parse_entries(origin: &str, content: &str) -> DictionaryResult<Vec<(String, String)>> {
    let json: Value = serde_json::from_str(content).map_err(|source| DictionaryError::Json {
        origin: origin.to_string(),
        source,
    })?;

    let obj = json
        .as_object()
        .ok_or_else(|| DictionaryError::NotAnObject(origin.to_string()))?;

    let mut entries = Vec::with_capacity(obj.len());
    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }

        if let Some(term) = value.as_str() {
            entries.push((key.clone(), term.to_string()));
        } else {
            warn!(table = origin, key = %key, "dictionary entry is not a string, skipping");
        }
    }

    Ok(entries)
}

/// Load the entries of one dictionary table from a JSON file
pub fn load_entries_from_file(path: &Path) -> DictionaryResult<Vec<(String, String)>> {
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_entries(&path.display().to_string(), &content)
}

/// Load a complete dictionary store from a directory
///
/// The directory must contain the four table files:
/// `american-only.json`, `british-only.json`,
/// `american-to-british-spelling.json` and `american-to-british-titles.json`.
///
/// # Errors
/// - Directory not found, or not a directory
/// - Missing or unreadable table file
/// - Invalid JSON
/// - Duplicate keys, duplicate values in the pair tables, or empty entries
pub fn load_store_from_dir(dir: &Path) -> DictionaryResult<DictionaryStore> {
    if !dir.is_dir() {
        return Err(DictionaryError::NotADirectory(dir.to_path_buf()));
    }

    let entries = |table: &str| load_entries_from_file(&dir.join(format!("{table}.json")));

    let store = DictionaryStore::new(
        TermTable::new(AMERICAN_ONLY, entries(AMERICAN_ONLY)?)?,
        TermTable::new(BRITISH_ONLY, entries(BRITISH_ONLY)?)?,
        PairTable::new(SPELLING, entries(SPELLING)?)?,
        PairTable::new(TITLES, entries(TITLES)?)?,
    );

    debug!(
        dir = %dir.display(),
        american_only = store.american_only.len(),
        british_only = store.british_only.len(),
        spelling = store.spelling.len(),
        titles = store.titles.len(),
        "loaded dictionaries"
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_tables(dir: &Path, spelling: &str) {
        fs::write(dir.join("american-only.json"), r#"{"parking lot": "car park"}"#).unwrap();
        fs::write(dir.join("british-only.json"), r#"{"car park": "parking lot"}"#).unwrap();
        fs::write(dir.join("american-to-british-spelling.json"), spelling).unwrap();
        fs::write(dir.join("american-to-british-titles.json"), r#"{"dr.": "dr"}"#).unwrap();
    }

    #[test]
    fn test_parse_entries_skips_metadata_and_non_strings() {
        let entries = parse_entries(
            "test",
            r#"{"@metadata": {"authors": ["x"]}, "color": "colour", "count": 3}"#,
        )
        .unwrap();
        assert_eq!(entries, vec![("color".to_string(), "colour".to_string())]);
    }

    #[test]
    fn test_parse_entries_rejects_non_object() {
        assert!(matches!(
            parse_entries("test", r#"["color", "colour"]"#),
            Err(DictionaryError::NotAnObject(origin)) if origin == "test"
        ));
    }

    #[test]
    fn test_parse_entries_repeated_key_keeps_last() {
        let entries = parse_entries("test", r#"{"color": "hue", "color": "colour"}"#).unwrap();
        assert_eq!(entries, vec![("color".to_string(), "colour".to_string())]);

        let entries = parse_entries("test", r#"{"Color": "hue", "color": "colour"}"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(matches!(
            TermTable::new("test", entries),
            Err(DictionaryError::DuplicateKey { key, .. }) if key == "color"
        ));
    }

    #[test]
    fn test_parse_entries_rejects_invalid_json() {
        assert!(matches!(
            parse_entries("test", "{ not json"),
            Err(DictionaryError::Json { .. })
        ));
    }

    #[test]
    fn test_load_store_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path(), r#"{"color": "colour"}"#);

        let store = load_store_from_dir(dir.path()).unwrap();
        assert_eq!(store.american_only.get("parking lot").unwrap(), "car park");
        assert_eq!(store.british_only.get("car park").unwrap(), "parking lot");
        assert_eq!(store.spelling.get("color").unwrap(), "colour");
        assert_eq!(store.titles.get("dr.").unwrap(), "dr");
    }

    #[test]
    fn test_load_store_rejects_ambiguous_spelling() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path(), r#"{"color": "colour", "colour": "colour"}"#);

        assert!(matches!(
            load_store_from_dir(dir.path()),
            Err(DictionaryError::DuplicateValue { .. })
        ));
    }

    #[test]
    fn test_load_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("american-only.json"), "{}").unwrap();

        assert!(matches!(
            load_store_from_dir(dir.path()),
            Err(DictionaryError::Io { .. })
        ));
    }

    #[test]
    fn test_load_store_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere");
        assert!(matches!(
            load_store_from_dir(&missing),
            Err(DictionaryError::NotADirectory(path)) if path == missing
        ));
    }
}
