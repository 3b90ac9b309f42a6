//! Contact inquiry pipeline.
//!
//! - `draft`: form fields and the in-progress inquiry
//! - `event_type`: the closed list of event kinds
//! - `validation`: per-field rules and localized error sets
//! - `gate`: honeypot and minimum-fill-time checks
//! - `message`: subject/body composition and the `mailto:` URI
//! - `handoff`: delivery to the user's mail client
//! - `form`: the form state machine tying the above together
//! - `channels`: direct contact methods shown next to the form

mod channels;
mod draft;
mod event_type;
mod form;
mod gate;
mod handoff;
mod message;
mod validation;

pub use channels::{ContactMethod, CONTACT_METHODS};
pub use draft::{Field, InquiryDraft};
pub use event_type::EventType;
pub use form::{ContactForm, Notice, NoticeKind, PendingInquiry, SubmitOutcome};
pub use gate::{GateRejection, SpamGate, DEFAULT_MIN_FILL_TIME_MS};
pub use handoff::{HandoffError, MailHandoff, SystemMailClient};
pub use message::{OutboundMessage, DEFAULT_DESTINATION};
pub use validation::{field_is_valid, validate, ValidationErrors};
