//! Language registry: Single source of truth for the site's languages.
//!
//! The site ships exactly two languages: English (canonical, left-to-right)
//! and Arabic (right-to-left). The registry is initialized once via
//! `OnceLock` and is immutable thereafter.

use crate::i18n::Direction;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Arabic")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "العربية")
    pub native_name: &'static str,

    /// Short label shown on the header language switch (e.g., "EN", "AR")
    pub switch_label: &'static str,

    /// Text direction used when this language is active
    pub direction: Direction,

    /// Whether this is the canonical/primary language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages in display order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is registered.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The two site languages: English (primary) and Arabic (secondary).
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            switch_label: "EN",
            direction: Direction::Ltr,
            is_canonical: true,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            switch_label: "AR",
            direction: Direction::Rtl,
            is_canonical: false,
        },
    ]
}
