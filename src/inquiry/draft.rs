use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A user-editable field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    EventType,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::EventType,
        Field::Message,
    ];

    /// Form field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::EventType => "eventType",
            Field::Message => "message",
        }
    }

    /// Translation key of the message shown when this field is invalid.
    pub fn error_key(&self) -> &'static str {
        match self {
            Field::Name => "contact.form.error.name",
            Field::Email => "contact.form.error.email",
            Field::Phone => "contact.form.error.phone",
            Field::EventType => "contact.form.error.event",
            Field::Message => "contact.form.error.message",
        }
    }

    /// Translation key of the field label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Field::Name => "contact.form.name",
            Field::Email => "contact.form.email",
            Field::Phone => "contact.form.phone",
            Field::EventType => "contact.form.event",
            Field::Message => "contact.form.message",
        }
    }

    /// Upper bound the input control enforces on typed characters.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Field::Name => Some(100),
            Field::Email => Some(255),
            Field::Phone => Some(20),
            Field::EventType => None,
            Field::Message => Some(2000),
        }
    }
}

/// In-progress contents of the contact form.
///
/// `honeypot` mirrors the hidden decoy input; a person never sees it, so it
/// stays empty unless an automated form-filler touched it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub message: String,
    #[serde(rename = "website")]
    pub honeypot: String,
}

impl InquiryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::EventType => &self.event_type,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::EventType => self.event_type = value,
            Field::Message => self.message = value,
        }
    }

    /// Reset every field, including the honeypot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty()) && self.honeypot.is_empty()
    }

    /// Load a draft saved as JSON (camelCase keys, missing keys empty).
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse draft file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_each_field() {
        let mut draft = InquiryDraft::new();
        for field in Field::ALL {
            draft.set(field, field.as_str());
        }
        for field in Field::ALL {
            assert_eq!(draft.get(field), field.as_str());
        }
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut draft = InquiryDraft::new();
        draft.set(Field::Name, "Sarah M.");
        draft.honeypot = "spam".to_string();
        assert!(!draft.is_empty());

        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, InquiryDraft::default());
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_fields() {
        let draft: InquiryDraft =
            serde_json::from_str(r#"{"name": "Rana", "eventType": "family"}"#).unwrap();
        assert_eq!(draft.name, "Rana");
        assert_eq!(draft.event_type, "family");
        assert!(draft.message.is_empty());
        assert!(draft.honeypot.is_empty());
    }

    #[test]
    fn test_honeypot_serializes_as_website() {
        let mut draft = InquiryDraft::new();
        draft.honeypot = "http://spam.example".to_string();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["website"], "http://spam.example");
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("draft.json");
        std::fs::write(&path, r#"{"name": "Sarah M.", "phone": "+961 76 031 146"}"#).unwrap();

        let draft = InquiryDraft::from_json_file(&path).unwrap();
        assert_eq!(draft.name, "Sarah M.");
        assert_eq!(draft.phone, "+961 76 031 146");
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let err = InquiryDraft::from_json_file(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let err = InquiryDraft::from_json_file(&broken).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(Field::EventType.as_str(), "eventType");
        assert_eq!(Field::EventType.error_key(), "contact.form.error.event");
        assert_eq!(Field::Message.label_key(), "contact.form.message");
        assert_eq!(Field::Phone.max_len(), Some(20));
    }
}
