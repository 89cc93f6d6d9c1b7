//! Interface language table
//!
//! The table is supplied once at process start, either the built-in list of
//! YouTube interface languages or one loaded from configuration.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One selectable interface language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// Code persisted in the settings record (`hl` parameter)
    pub code: String,
    /// Human readable name shown in the selector
    pub label: String,
}

impl Language {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageTableError {
    #[error("language table is empty")]
    Empty,

    #[error("language entry {index} has an empty code")]
    EmptyCode { index: usize },

    #[error("language code {0:?} has surrounding whitespace")]
    PaddedCode(String),

    #[error("duplicate language code: {0}")]
    DuplicateCode(String),

    #[error("default language {0:?} is not in the table")]
    UnknownDefault(String),
}

/// Ordered, validated language list with a designated default entry
///
/// Construction guarantees the table is non-empty, codes are non-empty,
/// unpadded and unique, and the default entry exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    entries: Vec<Language>,
    default_index: usize,
}

const BUILTIN_DEFAULT: &str = "en";

const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("en-GB", "English (UK)"),
    ("de", "Deutsch"),
    ("fr", "Français"),
    ("es", "Español (España)"),
    ("es-419", "Español (Latinoamérica)"),
    ("it", "Italiano"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("pt", "Português (Brasil)"),
    ("pt-PT", "Português"),
    ("sv", "Svenska"),
    ("da", "Dansk"),
    ("no", "Norsk"),
    ("fi", "Suomi"),
    ("cs", "Čeština"),
    ("hu", "Magyar"),
    ("ro", "Română"),
    ("tr", "Türkçe"),
    ("el", "Ελληνικά"),
    ("ru", "Русский"),
    ("uk", "Українська"),
    ("ar", "العربية"),
    ("he", "עברית"),
    ("hi", "हिन्दी"),
    ("th", "ไทย"),
    ("vi", "Tiếng Việt"),
    ("id", "Bahasa Indonesia"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("zh-CN", "中文 (简体)"),
    ("zh-TW", "中文 (繁體)"),
];

static BUILTIN: Lazy<LanguageTable> = Lazy::new(|| LanguageTable {
    entries: BUILTIN_LANGUAGES
        .iter()
        .map(|(code, label)| Language::new(*code, *label))
        .collect(),
    default_index: 0,
});

impl LanguageTable {
    /// Validate `entries` and pick `default_code` as the fallback entry
    pub fn new(
        entries: Vec<Language>,
        default_code: &str,
    ) -> Result<Self, LanguageTableError> {
        if entries.is_empty() {
            return Err(LanguageTableError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.code.trim().is_empty() {
                return Err(LanguageTableError::EmptyCode { index });
            }
            // Stored codes are trimmed before lookup
            if entry.code.trim() != entry.code {
                return Err(LanguageTableError::PaddedCode(entry.code.clone()));
            }
            if !seen.insert(entry.code.as_str()) {
                return Err(LanguageTableError::DuplicateCode(
                    entry.code.clone(),
                ));
            }
        }

        let default_index = entries
            .iter()
            .position(|entry| entry.code == default_code)
            .ok_or_else(|| {
                LanguageTableError::UnknownDefault(default_code.to_string())
            })?;

        Ok(Self {
            entries,
            default_index,
        })
    }

    /// Built-in YouTube interface languages, defaulting to English
    pub fn builtin() -> &'static LanguageTable {
        &BUILTIN
    }

    /// Code of the built-in default entry
    pub fn builtin_default_code() -> &'static str {
        BUILTIN_DEFAULT
    }

    /// Built-in table with a different default entry
    pub fn builtin_with_default(
        default_code: &str,
    ) -> Result<Self, LanguageTableError> {
        Self::new(Self::builtin().entries.clone(), default_code)
    }

    pub fn entries(&self) -> &[Language] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_language(&self) -> &Language {
        &self.entries[self.default_index]
    }

    /// Exact lookup by code
    pub fn get(&self, code: &str) -> Option<&Language> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Lookup that never fails: absent, blank or unknown codes resolve to the
    /// default entry
    pub fn resolve(&self, code: Option<&str>) -> &Language {
        code.map(str::trim)
            .filter(|code| !code.is_empty())
            .and_then(|code| self.get(code))
            .unwrap_or_else(|| self.default_language())
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
