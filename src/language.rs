use serde::Serialize;

use crate::error::LanguageError;

/// A single entry in the supported-language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    /// Short lookup key (ISO 639-1).
    pub key: &'static str,
    /// Human-readable language name.
    pub display_name: &'static str,
    /// Code format used by downstream translation/LLM consumers.
    pub interchange_code: &'static str,
    /// Locale the speech service recognizer expects.
    pub locale_code: &'static str,
}

/// Languages supported by the speech service.
///
/// The interchange code is carried alongside the recognizer locale so callers
/// can convert between the two systems without a second table.
pub const SUPPORTED_LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry {
        key: "bg",
        display_name: "Bulgarian",
        interchange_code: "bul_Cyrl",
        locale_code: "bg",
    },
    LanguageEntry {
        key: "ca",
        display_name: "Catalan",
        interchange_code: "cat_Latn",
        locale_code: "ca",
    },
    LanguageEntry {
        key: "cs",
        display_name: "Czech",
        interchange_code: "ces_Latn",
        locale_code: "cs",
    },
    LanguageEntry {
        key: "de",
        display_name: "German",
        interchange_code: "deu_Latn",
        locale_code: "de-DE",
    },
    LanguageEntry {
        key: "el",
        display_name: "Greek",
        interchange_code: "ell_Grek",
        locale_code: "el-GR",
    },
    LanguageEntry {
        key: "en",
        display_name: "English",
        interchange_code: "eng_Latn",
        locale_code: "en-US",
    },
    LanguageEntry {
        key: "es",
        display_name: "Spanish",
        interchange_code: "spa_Latn",
        locale_code: "es-ES",
    },
    LanguageEntry {
        key: "fi",
        display_name: "Finnish",
        interchange_code: "fin_Latn",
        locale_code: "fi",
    },
    LanguageEntry {
        key: "fr",
        display_name: "French",
        interchange_code: "fra_Latn",
        locale_code: "fr-FR",
    },
    LanguageEntry {
        key: "hu",
        display_name: "Hungarian",
        interchange_code: "hun_Latn",
        locale_code: "hu",
    },
    LanguageEntry {
        key: "id",
        display_name: "Indonesian",
        interchange_code: "ind_Latn",
        locale_code: "id",
    },
    LanguageEntry {
        key: "it",
        display_name: "Italian",
        interchange_code: "ita_Latn",
        locale_code: "it-IT",
    },
    LanguageEntry {
        key: "ja",
        display_name: "Japanese",
        interchange_code: "jpn_Jpan",
        locale_code: "ja",
    },
    LanguageEntry {
        key: "ko",
        display_name: "Korean",
        interchange_code: "kor_Hang",
        locale_code: "ko",
    },
    LanguageEntry {
        key: "nl",
        display_name: "Dutch",
        interchange_code: "nld_Latn",
        locale_code: "nl-NL",
    },
    LanguageEntry {
        key: "pl",
        display_name: "Polish",
        interchange_code: "pol_Latn",
        locale_code: "pl",
    },
    LanguageEntry {
        key: "pt",
        display_name: "Portuguese",
        interchange_code: "por_Latn",
        locale_code: "pt-PT",
    },
    LanguageEntry {
        key: "ro",
        display_name: "Romanian",
        interchange_code: "ron_Latn",
        locale_code: "ro-RO",
    },
    LanguageEntry {
        key: "ru",
        display_name: "Russian",
        interchange_code: "rus_Cyrl",
        locale_code: "ru",
    },
    LanguageEntry {
        key: "sk",
        display_name: "Slovak",
        interchange_code: "slk_Latn",
        locale_code: "sk",
    },
    LanguageEntry {
        key: "sv",
        display_name: "Swedish",
        interchange_code: "swe_Latn",
        locale_code: "sv-SE",
    },
    LanguageEntry {
        key: "tr",
        display_name: "Turkish",
        interchange_code: "tur_Latn",
        locale_code: "tr",
    },
    LanguageEntry {
        key: "zh",
        display_name: "Chinese (Simplified)",
        interchange_code: "zho_Hans",
        locale_code: "zh-CN",
    },
];

/// Look up a language entry by its short key.
pub fn lookup(key: &str) -> Result<&'static LanguageEntry, LanguageError> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|entry| entry.key == key)
        .ok_or_else(|| LanguageError::UnknownLanguage(key.to_string()))
}

/// Recognizer locale for a language key.
pub fn locale_code(key: &str) -> Result<&'static str, LanguageError> {
    lookup(key).map(|entry| entry.locale_code)
}

/// Interchange code for a language key.
pub fn interchange_code(key: &str) -> Result<&'static str, LanguageError> {
    lookup(key).map(|entry| entry.interchange_code)
}

/// Iterate all supported languages.
pub fn entries() -> impl Iterator<Item = &'static LanguageEntry> {
    SUPPORTED_LANGUAGES.iter()
}
