//! Anti-automation checks run before field validation.
//!
//! Both checks are heuristics against naive form-filling bots. They are not
//! a security boundary and do not stand in for server-side verification,
//! which this site does not have.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Default minimum time between the form opening and a submission.
pub const DEFAULT_MIN_FILL_TIME_MS: u64 = 3000;

/// Why a submission was stopped before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateRejection {
    /// The hidden decoy field was filled in. Dropped without feedback.
    #[error("honeypot field was filled")]
    Honeypot,

    /// Submitted sooner than a person plausibly could.
    #[error("submitted {elapsed_ms} ms after the form opened (minimum {min_ms} ms)")]
    TooFast { elapsed_ms: i64, min_ms: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpamGate {
    min_fill_time: Duration,
}

impl SpamGate {
    pub fn new(min_fill_time: Duration) -> Self {
        Self { min_fill_time }
    }

    /// Thresholds beyond what a `Duration` holds saturate at its maximum.
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX)))
    }

    pub fn min_fill_time(&self) -> Duration {
        self.min_fill_time
    }

    /// Run the honeypot check, then the timing check.
    ///
    /// `opened_at` is when the form first became visible. A form that was
    /// never seen counts as opened zero milliseconds ago.
    pub fn check(
        &self,
        honeypot: &str,
        opened_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<(), GateRejection> {
        if !honeypot.is_empty() {
            return Err(GateRejection::Honeypot);
        }

        let elapsed = opened_at.map(|t| now - t).unwrap_or_else(Duration::zero);
        if elapsed < self.min_fill_time {
            return Err(GateRejection::TooFast {
                elapsed_ms: elapsed.num_milliseconds(),
                min_ms: self.min_fill_time.num_milliseconds(),
            });
        }

        Ok(())
    }
}

impl Default for SpamGate {
    fn default() -> Self {
        Self::from_millis(DEFAULT_MIN_FILL_TIME_MS)
    }
}
