//! Language type: validated language representation.
//!
//! A `Language` can only be built from the registry or through its
//! constants, so there is no third, unregistered state.

use crate::i18n::{Direction, LanguageConfig, LanguageRegistry};
use thiserror::Error;

/// Error returned when a language code is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language code: '{0}'")]
pub struct UnknownLanguage(pub String);

/// A validated site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ar")
    code: &'static str,
}

impl Language {
    /// Primary, left-to-right language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Secondary, right-to-left language.
    pub const ARABIC: Language = Language { code: "ar" };

    /// Create a Language from a language code string.
    ///
    /// # Example
    /// ```
    /// use set_el_beit::i18n::Language;
    ///
    /// let arabic = Language::from_code("ar").unwrap();
    /// assert!(arabic.is_rtl());
    /// ```
    pub fn from_code(code: &str) -> Result<Language, UnknownLanguage> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| UnknownLanguage(code.to_string()))
    }

    /// Get the canonical (primary) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Text direction of this language.
    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    /// `true` iff this language renders right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// The other site language.
    pub fn toggled(&self) -> Language {
        if *self == Language::ENGLISH {
            Language::ARABIC
        } else {
            Language::ENGLISH
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
