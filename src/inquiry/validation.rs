//! Field-level validation of an inquiry draft.
//!
//! Every field is checked on its own so that all failures are reported
//! together. Messages are resolved through the active `SiteContext`.

use crate::i18n::SiteContext;
use crate::inquiry::{EventType, Field, InquiryDraft};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Localized error message per invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Invalid fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Drop the error of one field. Returns whether there was one.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Dot-separated local part of `A-Z 0-9 _ ' + -` (no leading, trailing or
/// doubled dots, no trailing apostrophe), then hostname labels ending in an
/// alphabetic top-level domain of two or more letters.
fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
        )
        .unwrap()
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| Regex::new(r"^[0-9\s+()-]+$").unwrap())
}

fn len_within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}

/// Whether a single field value satisfies its rule.
pub fn field_is_valid(field: Field, value: &str) -> bool {
    let value = value.trim();
    match field {
        Field::Name => len_within(value, 2, 100),
        Field::Email => value.chars().count() <= 255 && email_regex().is_match(value),
        Field::Phone => len_within(value, 8, 20) && phone_regex().is_match(value),
        Field::EventType => EventType::parse(value).is_some(),
        Field::Message => len_within(value, 10, 2000),
    }
}

/// Validate a whole draft.
///
/// Returns every failing field with its message in the active language.
/// Pure: the caller decides how to show the errors and when to drop old ones.
pub fn validate(draft: &InquiryDraft, ctx: &SiteContext<'_>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for field in Field::ALL {
        if !field_is_valid(field, draft.get(field)) {
            errors.insert(field, ctx.resolve(field.error_key()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn valid_draft() -> InquiryDraft {
        InquiryDraft {
            name: "Sarah M.".to_string(),
            email: "sarah@example.com".to_string(),
            phone: "+961 76 031 146".to_string(),
            event_type: "wedding".to_string(),
            message: "Please quote a 50-guest wedding menu.".to_string(),
            honeypot: String::new(),
        }
    }

    // ==================== Whole Draft Tests ====================

    #[test]
    fn test_valid_draft_passes() {
        let ctx = SiteContext::builtin();
        assert_eq!(validate(&valid_draft(), &ctx), Ok(()));
    }

    #[test]
    fn test_empty_draft_fails_every_field() {
        let ctx = SiteContext::builtin();
        let errors = validate(&InquiryDraft::new(), &ctx).unwrap_err();

        assert_eq!(errors.len(), 5);
        for field in Field::ALL {
            assert!(!errors.get(field).unwrap_or_default().is_empty());
        }
    }

    #[test]
    fn test_messages_are_localized() {
        let mut ctx = SiteContext::builtin();
        let errors = validate(&InquiryDraft::new(), &ctx).unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("Please enter your name"));
        assert_eq!(errors.get(Field::EventType), Some("Please select an event type"));

        ctx.set_language(Language::ARABIC);
        let errors = validate(&InquiryDraft::new(), &ctx).unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("الرجاء إدخال اسمك"));
    }

    #[test]
    fn test_only_failing_fields_reported() {
        let ctx = SiteContext::builtin();
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();

        let errors = validate(&draft, &ctx).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email]);
    }

    // ==================== Name ====================

    #[test]
    fn test_name_bounds() {
        assert!(!field_is_valid(Field::Name, "A"));
        assert!(!field_is_valid(Field::Name, "  A  "));
        assert!(field_is_valid(Field::Name, "Al"));
        assert!(field_is_valid(Field::Name, &"n".repeat(100)));
        assert!(!field_is_valid(Field::Name, &"n".repeat(101)));
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        assert!(field_is_valid(Field::Name, "منى"));
    }

    // ==================== Email ====================

    #[test]
    fn test_email_shape() {
        assert!(!field_is_valid(Field::Email, "not-an-email"));
        assert!(!field_is_valid(Field::Email, "user@localhost"));
        assert!(!field_is_valid(Field::Email, "@domain.co"));
        assert!(field_is_valid(Field::Email, "user@domain.co"));
        assert!(field_is_valid(Field::Email, "  first.last+events@mail.example.lb "));
        assert!(field_is_valid(Field::Email, "o'neill@example.com"));
    }

    #[test]
    fn test_email_top_level_domain_is_alphabetic() {
        assert!(!field_is_valid(Field::Email, "user@domain.c"));
        assert!(!field_is_valid(Field::Email, "user@host.123"));
        assert!(field_is_valid(Field::Email, "user@host-1.example.lb"));
    }

    #[test]
    fn test_email_local_part_characters() {
        assert!(!field_is_valid(Field::Email, "a!b@example.com"));
        assert!(!field_is_valid(Field::Email, "x{y}@example.com"));
        assert!(!field_is_valid(Field::Email, ".sarah@example.com"));
        assert!(!field_is_valid(Field::Email, "sarah.@example.com"));
        assert!(!field_is_valid(Field::Email, "sa..rah@example.com"));
        assert!(!field_is_valid(Field::Email, "sarah'@example.com"));
        assert!(field_is_valid(Field::Email, "s.a.r_a-h@example.com"));
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(!field_is_valid(Field::Email, &email));
    }

    // ==================== Phone ====================

    #[test]
    fn test_phone_rules() {
        assert!(!field_is_valid(Field::Phone, "abc"));
        assert!(!field_is_valid(Field::Phone, "1234567"));
        assert!(!field_is_valid(Field::Phone, "+961 76 O31 146"));
        assert!(field_is_valid(Field::Phone, "+961 76 031 146"));
        assert!(field_is_valid(Field::Phone, "(01) 234-5678"));
        assert!(!field_is_valid(Field::Phone, &"1".repeat(21)));
    }

    // ==================== Event Type ====================

    #[test]
    fn test_event_type_must_be_known() {
        assert!(!field_is_valid(Field::EventType, ""));
        assert!(!field_is_valid(Field::EventType, "picnic"));
        assert!(field_is_valid(Field::EventType, "corporate"));
    }

    // ==================== Message ====================

    #[test]
    fn test_message_bounds() {
        assert!(!field_is_valid(Field::Message, &"m".repeat(9)));
        assert!(field_is_valid(Field::Message, &"m".repeat(10)));
        assert!(field_is_valid(Field::Message, &"m".repeat(2000)));
        assert!(!field_is_valid(Field::Message, &"m".repeat(2001)));
        assert!(!field_is_valid(Field::Message, &format!("   {}   ", "m".repeat(9))));
    }

    // ==================== Error Set ====================

    #[test]
    fn test_clear_field_leaves_others() {
        let ctx = SiteContext::builtin();
        let mut errors = validate(&InquiryDraft::new(), &ctx).unwrap_err();

        assert!(errors.clear_field(Field::Phone));
        assert!(!errors.clear_field(Field::Phone));
        assert!(!errors.contains(Field::Phone));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_errors_serialize_by_field_name() {
        let ctx = SiteContext::builtin();
        let mut draft = valid_draft();
        draft.event_type.clear();

        let errors = validate(&draft, &ctx).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["eventType"], "Please select an event type");
    }
}
