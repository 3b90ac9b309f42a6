//! Translation table validation.
//!
//! Checks that every key defined for one language is defined for the other,
//! and flags entries whose text is blank.

use crate::i18n::{Language, LanguageRegistry, TranslationTable};
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys missing from a language (the table invariant is broken)
    pub errors: Vec<String>,

    /// Non-critical issues such as blank text
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation table completeness.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Validate a table across every registered language.
    ///
    /// - a key present in any language but missing in another is an error
    /// - blank text is a warning
    pub fn validate(table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let languages: Vec<Language> = LanguageRegistry::get()
            .list_all()
            .into_iter()
            .filter_map(|config| Language::from_code(config.code).ok())
            .collect();

        let all_keys: BTreeSet<&'static str> = languages
            .iter()
            .flat_map(|language| table.keys(*language))
            .collect();

        for language in &languages {
            let keys = table.keys(*language);
            for missing in all_keys.difference(&keys) {
                report
                    .errors
                    .push(format!("Missing key '{}' for language '{}'", missing, language));
            }

            let mut blank: Vec<_> = table
                .entries(*language)
                .filter(|(_, text)| text.trim().is_empty())
                .map(|(key, _)| key)
                .collect();
            blank.sort_unstable();
            for key in blank {
                report
                    .warnings
                    .push(format!("Blank text for key '{}' in language '{}'", key, language));
            }
        }

        report
    }
}
