//! Core of the Set El Beit catering site.
//!
//! - [`i18n`]: English/Arabic copy, language switching and RTL layout
//! - [`inquiry`]: the contact form, its validation, anti-spam gate and mail hand-off
//! - [`visibility`]: once-only viewport reveal triggers for page sections
//! - [`config`]: environment-driven settings for the binaries

pub mod config;
pub mod i18n;
pub mod inquiry;
pub mod visibility;
