//! Translation lookup and the page-level language context.
//!
//! `TranslationTable` is a plain nested map (language → key → text).
//! `SiteContext` pairs a table with the active language and is handed to
//! every section that renders text, so tests can build as many independent
//! contexts as they like.

use crate::i18n::strings::{ARABIC_STRINGS, ENGLISH_STRINGS};
use crate::i18n::{Direction, DirectionalLayout, Language};
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;
use tracing::debug;

/// Language → key → display text.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<Language, HashMap<&'static str, &'static str>>,
}

/// Built-in table instance (initialized lazily)
static BUILTIN: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table holding the full site copy in English and Arabic.
    pub fn builtin() -> &'static TranslationTable {
        BUILTIN.get_or_init(|| {
            let mut table = TranslationTable::new();
            table.extend(Language::ENGLISH, ENGLISH_STRINGS);
            table.extend(Language::ARABIC, ARABIC_STRINGS);
            table
        })
    }

    /// Add or replace a single entry.
    pub fn insert(&mut self, language: Language, key: &'static str, text: &'static str) {
        self.entries.entry(language).or_default().insert(key, text);
    }

    /// Add every `(key, text)` pair for a language.
    pub fn extend(&mut self, language: Language, pairs: &[(&'static str, &'static str)]) {
        let map = self.entries.entry(language).or_default();
        for (key, text) in pairs {
            map.insert(*key, *text);
        }
    }

    /// Look up a key, returning `None` when the language has no entry for it.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.entries
            .get(&language)
            .and_then(|map| map.get(key))
            .copied()
    }

    /// Sorted keys defined for a language.
    pub fn keys(&self, language: Language) -> BTreeSet<&'static str> {
        self.entries
            .get(&language)
            .map(|map| map.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Iterate over every `(key, text)` pair of a language.
    pub fn entries(&self, language: Language) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries
            .get(&language)
            .into_iter()
            .flat_map(|map| map.iter().map(|(key, text)| (*key, *text)))
    }
}

/// Active language plus the table it reads from.
///
/// A fresh context always starts in the canonical language; nothing about the
/// selection is persisted.
#[derive(Debug, Clone, Copy)]
pub struct SiteContext<'a> {
    table: &'a TranslationTable,
    language: Language,
}

impl SiteContext<'static> {
    /// Context over the built-in table.
    pub fn builtin() -> Self {
        SiteContext::new(TranslationTable::builtin())
    }
}

impl<'a> SiteContext<'a> {
    pub fn new(table: &'a TranslationTable) -> Self {
        Self {
            table,
            language: Language::canonical(),
        }
    }

    /// Resolve a key to display text in the active language.
    ///
    /// A missing key is returned verbatim so the page shows a visible
    /// placeholder instead of failing.
    pub fn resolve<'s>(&'s self, key: &'s str) -> &'s str {
        match self.table.lookup(self.language, key) {
            Some(text) => text,
            None => {
                debug!(key, language = %self.language, "No translation, showing key");
                key
            }
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Replace the active language. Consumers pick it up on their next render.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switch to the other language and return it.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Label for the language switch: names the language it switches *to*.
    pub fn toggle_label(&self) -> &'static str {
        self.language.toggled().config().switch_label
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn layout(&self) -> DirectionalLayout {
        self.direction().layout()
    }

    pub fn table(&self) -> &'a TranslationTable {
        self.table
    }
}
