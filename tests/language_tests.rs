// Integration tests for the supported-language reference table
//
// These tests verify table completeness, key uniqueness, and the
// unknown-key failure mode.

use std::collections::HashSet;

use voxbridge::error::LanguageError;
use voxbridge::language::{entries, interchange_code, locale_code, lookup, SUPPORTED_LANGUAGES};

#[test]
fn test_every_entry_is_fully_populated() {
    assert_eq!(SUPPORTED_LANGUAGES.len(), 23, "Table should hold 23 entries");

    for entry in SUPPORTED_LANGUAGES {
        assert!(!entry.key.is_empty(), "Empty key in table");
        assert!(
            !entry.display_name.is_empty(),
            "Empty display name for {}",
            entry.key
        );
        assert!(
            !entry.interchange_code.is_empty(),
            "Empty interchange code for {}",
            entry.key
        );
        assert!(
            !entry.locale_code.is_empty(),
            "Empty locale code for {}",
            entry.key
        );
    }
}

#[test]
fn test_keys_are_pairwise_distinct() {
    let keys: HashSet<&str> = SUPPORTED_LANGUAGES.iter().map(|e| e.key).collect();
    assert_eq!(keys.len(), SUPPORTED_LANGUAGES.len(), "Duplicate keys in table");
}

#[test]
fn test_lookup_known_key() {
    let entry = lookup("en").unwrap();
    assert_eq!(entry.display_name, "English");
    assert_eq!(entry.interchange_code, "eng_Latn");
    assert_eq!(entry.locale_code, "en-US");

    let entry = lookup("zh").unwrap();
    assert_eq!(entry.display_name, "Chinese (Simplified)");
    assert_eq!(entry.locale_code, "zh-CN");
}

#[test]
fn test_lookup_unknown_key_fails() {
    let err = lookup("xx").unwrap_err();
    assert!(matches!(err, LanguageError::UnknownLanguage(ref key) if key == "xx"));
}

#[test]
fn test_code_accessors() {
    assert_eq!(locale_code("de").unwrap(), "de-DE");
    assert_eq!(interchange_code("de").unwrap(), "deu_Latn");

    // Some locales carry no region suffix
    assert_eq!(locale_code("ja").unwrap(), "ja");

    assert!(locale_code("xx").is_err());
    assert!(interchange_code("").is_err());
}

#[test]
fn test_entries_iterates_whole_table() {
    assert_eq!(entries().count(), SUPPORTED_LANGUAGES.len());
}
