use crate::inquiry::InquiryDraft;

/// Address every inquiry is handed off to unless configured otherwise.
pub const DEFAULT_DESTINATION: &str = "set_el_beit@yahoo.com";

/// A composed inquiry, ready for the mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub subject: String,
    pub body: String,
}

impl OutboundMessage {
    /// Build the subject line and the labelled body from a draft.
    pub fn compose(draft: &InquiryDraft) -> Self {
        let event_type = draft.event_type.trim();
        let subject = format!("Catering Inquiry - {}", event_type);
        let body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\nEvent Type: {}\n\nMessage:\n{}",
            draft.name.trim(),
            draft.email.trim(),
            draft.phone.trim(),
            event_type,
            draft.message.trim()
        );

        Self { subject, body }
    }

    /// `mailto:` URI with percent-encoded subject and body.
    pub fn mailto_uri(&self, destination: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            destination,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}
