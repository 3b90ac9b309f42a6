//! Contact form state and the submission pipeline.
//!
//! `Idle → honeypot → timing → field validation → submitting → Idle`.
//! Every failure path lands back in `Idle`; only a successful hand-off
//! clears the draft.

use crate::config::Config;
use crate::i18n::SiteContext;
use crate::inquiry::{
    validate, Field, GateRejection, HandoffError, InquiryDraft, MailHandoff, OutboundMessage,
    SpamGate, ValidationErrors,
};
use crate::visibility::{RevealTrigger, Section};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// A localized toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    fn localized(ctx: &SiteContext<'_>, title_key: &str, description_key: &str, kind: NoticeKind) -> Self {
        Self {
            title: ctx.resolve(title_key).to_string(),
            description: ctx.resolve(description_key).to_string(),
            kind,
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    Busy,
    /// Honeypot tripped. Dropped without any feedback.
    Dropped,
    /// Sent faster than the minimum fill time.
    TooFast(Notice),
    /// Field errors are now set on the form.
    Invalid,
    /// Handed to the mail client; the form is reset.
    Sent(Notice),
    /// The mail client could not be reached; the draft is kept.
    Failed(Notice),
}

/// A validated inquiry waiting for its mail hand-off.
///
/// Only [`ContactForm::begin_submit`] creates one, and
/// [`ContactForm::finish_submit`] consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInquiry {
    message: OutboundMessage,
    uri: String,
}

impl PendingInquiry {
    pub fn message(&self) -> &OutboundMessage {
        &self.message
    }

    pub fn mailto_uri(&self) -> &str {
        &self.uri
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    draft: InquiryDraft,
    errors: ValidationErrors,
    reveal: RevealTrigger,
    gate: SpamGate,
    destination: String,
    submitting: bool,
}

impl ContactForm {
    pub fn new(destination: impl Into<String>, gate: SpamGate) -> Self {
        Self {
            draft: InquiryDraft::new(),
            errors: ValidationErrors::new(),
            reveal: Section::Contact.reveal_trigger(),
            gate,
            destination: destination.into(),
            submitting: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.inquiry_destination.clone(),
            SpamGate::from_millis(config.min_fill_time_ms),
        )
    }

    /// Feed the section's viewport intersection ratio.
    ///
    /// The first time it crosses the threshold starts the fill timer.
    pub fn observe_visibility(&mut self, ratio: f32, now: DateTime<Utc>) -> bool {
        self.reveal.observe(ratio, now)
    }

    pub fn is_visible(&self) -> bool {
        self.reveal.is_revealed()
    }

    /// When the form first became visible.
    pub fn opened_at(&self) -> Option<DateTime<Utc>> {
        self.reveal.revealed_at()
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Store user input for a field and drop that field's error, if any.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        if self.errors.clear_field(field) {
            debug!(field = field.as_str(), "Cleared field error on edit");
        }
    }

    pub fn set_honeypot(&mut self, value: impl Into<String>) {
        self.draft.honeypot = value.into();
    }

    /// Run one submit attempt through the whole pipeline.
    pub fn submit(
        &mut self,
        ctx: &SiteContext<'_>,
        handoff: &dyn MailHandoff,
        now: DateTime<Utc>,
    ) -> SubmitOutcome {
        match self.begin_submit(ctx, now) {
            Ok(pending) => {
                let result = handoff.open(pending.mailto_uri());
                self.finish_submit(ctx, pending, result)
            }
            Err(outcome) => outcome,
        }
    }

    /// Gate and validate the draft, then mark the form as submitting.
    ///
    /// On success the caller owns the hand-off: open `mailto_uri()` and
    /// report the result through [`ContactForm::finish_submit`]. Until then
    /// `is_submitting()` is true and further attempts return `Busy`.
    pub fn begin_submit(
        &mut self,
        ctx: &SiteContext<'_>,
        now: DateTime<Utc>,
    ) -> Result<PendingInquiry, SubmitOutcome> {
        if self.submitting {
            debug!("Submission already in flight, ignoring");
            return Err(SubmitOutcome::Busy);
        }

        match self.gate.check(&self.draft.honeypot, self.opened_at(), now) {
            Ok(()) => {}
            Err(GateRejection::Honeypot) => {
                warn!("Bot detected via honeypot");
                return Err(SubmitOutcome::Dropped);
            }
            Err(rejection @ GateRejection::TooFast { .. }) => {
                warn!("Form submitted too quickly: {}", rejection);
                return Err(SubmitOutcome::TooFast(Notice::localized(
                    ctx,
                    "contact.toast.wait.title",
                    "contact.toast.wait.description",
                    NoticeKind::Destructive,
                )));
            }
        }

        match validate(&self.draft, ctx) {
            Ok(()) => self.errors.clear(),
            Err(errors) => {
                debug!(count = errors.len(), "Inquiry failed validation");
                self.errors = errors;
                return Err(SubmitOutcome::Invalid);
            }
        }

        self.submitting = true;
        let message = OutboundMessage::compose(&self.draft);
        let uri = message.mailto_uri(&self.destination);
        Ok(PendingInquiry { message, uri })
    }

    /// Record how the hand-off of a pending inquiry went and return to idle.
    pub fn finish_submit(
        &mut self,
        ctx: &SiteContext<'_>,
        pending: PendingInquiry,
        result: Result<(), HandoffError>,
    ) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(()) => {
                info!(subject = %pending.message.subject, "Inquiry handed off to mail client");
                self.draft.clear();
                self.errors.clear();
                SubmitOutcome::Sent(Notice::localized(
                    ctx,
                    "contact.toast.title",
                    "contact.toast.description",
                    NoticeKind::Success,
                ))
            }
            Err(e) => {
                warn!("Mail hand-off failed: {}", e);
                SubmitOutcome::Failed(Notice::localized(
                    ctx,
                    "contact.toast.error.title",
                    "contact.toast.error.description",
                    NoticeKind::Destructive,
                ))
            }
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
