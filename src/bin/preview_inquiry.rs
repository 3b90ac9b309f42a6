//! Preview inquiry binary - validates a saved draft and shows the mailto: link
//!
//! Usage:
//!   cargo run --bin preview -- draft.json             # English messages
//!   cargo run --bin preview -- draft.json --lang ar   # Arabic messages
//!
//! The draft file uses the form's field names:
//!   {"name": "...", "email": "...", "phone": "...", "eventType": "wedding", "message": "..."}
//!
//! Nothing is opened or sent; the anti-spam gate is not applied.
//!
//! Optional:
//! - INQUIRY_DESTINATION (defaults to set_el_beit@yahoo.com)
//! - SITE_LANGUAGE (defaults to en)

use anyhow::{Context, Result};
use serde::Serialize;
use set_el_beit::config::Config;
use set_el_beit::i18n::{DirectionalLayout, Language, SiteContext};
use set_el_beit::inquiry::{validate, InquiryDraft, OutboundMessage, ValidationErrors};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Serialize)]
struct Preview {
    language: &'static str,
    layout: DirectionalLayout,
    valid: bool,
    #[serde(skip_serializing_if = "ValidationErrors::is_empty")]
    errors: ValidationErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mailto: Option<String>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("set_el_beit=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let lang_flag = args.iter().position(|arg| arg == "--lang");
    let path = args
        .iter()
        .enumerate()
        .find(|(i, arg)| !arg.starts_with("--") && lang_flag.map_or(true, |flag| *i != flag + 1))
        .map(|(_, arg)| PathBuf::from(arg))
        .context("Usage: preview <draft.json> [--lang en|ar]")?;
    let language = match lang_flag {
        Some(i) => Language::from_code(args.get(i + 1).context("--lang needs a language code")?)?,
        None => config.site_language,
    };

    let draft = InquiryDraft::from_json_file(&path)?;
    info!("Loaded draft from {}", path.display());

    let mut ctx = SiteContext::builtin();
    ctx.set_language(language);

    let preview = match validate(&draft, &ctx) {
        Ok(()) => {
            let message = OutboundMessage::compose(&draft);
            Preview {
                language: language.code(),
                layout: ctx.layout(),
                valid: true,
                errors: ValidationErrors::new(),
                mailto: Some(message.mailto_uri(&config.inquiry_destination)),
                subject: Some(message.subject),
            }
        }
        Err(errors) => Preview {
            language: language.code(),
            layout: ctx.layout(),
            valid: false,
            errors,
            subject: None,
            mailto: None,
        },
    };

    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}

