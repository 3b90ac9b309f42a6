use serde::{Deserialize, Serialize};

/// The kinds of event the catering form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Family,
    Corporate,
    Birthday,
    Other,
}

impl EventType {
    /// All event types in the order the form lists them.
    pub const ALL: [EventType; 5] = [
        EventType::Wedding,
        EventType::Family,
        EventType::Corporate,
        EventType::Birthday,
        EventType::Other,
    ];

    /// Form value for this event type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Family => "family",
            EventType::Corporate => "corporate",
            EventType::Birthday => "birthday",
            EventType::Other => "other",
        }
    }

    /// Parse a form value. Empty and unknown values are `None`.
    pub fn parse(value: &str) -> Option<EventType> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Translation key of the option label.
    pub fn label_key(&self) -> &'static str {
        match self {
            EventType::Wedding => "contact.form.event.wedding",
            EventType::Family => "contact.form.event.family",
            EventType::Corporate => "contact.form.event.corporate",
            EventType::Birthday => "contact.form.event.birthday",
            EventType::Other => "contact.form.event.other",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
