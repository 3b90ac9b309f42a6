//! Internationalization (i18n) module for the bilingual site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the two site languages and their metadata
//! - `language`: Type-safe Language type (English or Arabic, nothing else)
//! - `direction`: Text direction and the layout values derived from it
//! - `strings`: The built-in English/Arabic site copy
//! - `resolver`: Translation table lookup and the page-level `SiteContext`
//! - `validator`: Table completeness checks
//!
//! # Example
//!
//! ```
//! use set_el_beit::i18n::{Language, SiteContext};
//!
//! let mut ctx = SiteContext::builtin();
//! assert_eq!(ctx.resolve("nav.contact"), "Contact");
//!
//! ctx.set_language(Language::ARABIC);
//! assert!(ctx.is_rtl());
//! assert_eq!(ctx.layout().flex_direction, "row-reverse");
//! ```

mod direction;
mod language;
mod registry;
mod resolver;
mod strings;
mod validator;

pub use direction::{Direction, DirectionalLayout};
pub use language::{Language, UnknownLanguage};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{SiteContext, TranslationTable};
pub use strings::{ARABIC_STRINGS, ENGLISH_STRINGS};
pub use validator::{TranslationValidator, ValidationReport};
