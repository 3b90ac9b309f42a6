//! Terminal rendition of the contact form.
//!
//! Usage:
//!   cargo run                      # English form, opens the mail client
//!   cargo run -- --lang ar         # Arabic form
//!   cargo run -- --dry-run         # Print the mailto: URI instead of opening it
//!
//! Optional environment variables:
//! - SITE_LANGUAGE (defaults to en)
//! - INQUIRY_DESTINATION (defaults to set_el_beit@yahoo.com)
//! - MIN_FILL_TIME_MS (defaults to 3000)

use anyhow::{bail, Context, Result};
use chrono::Utc;
use set_el_beit::config::Config;
use set_el_beit::i18n::{Language, SiteContext};
use set_el_beit::inquiry::{
    ContactForm, EventType, Field, HandoffError, MailHandoff, Notice, SubmitOutcome,
    SystemMailClient,
};
use std::io::{self, BufRead, Write};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging on stderr so prompts stay readable
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("set_el_beit=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().collect();
    let dry_run = args.iter().any(|arg| arg == "--dry-run");
    let language = match args.iter().position(|arg| arg == "--lang") {
        Some(i) => {
            let code = args.get(i + 1).context("--lang needs a language code")?;
            Language::from_code(code)?
        }
        None => config.site_language,
    };

    let mut ctx = SiteContext::builtin();
    ctx.set_language(language);
    info!(language = %language, dir = ctx.layout().dir, "Starting contact form");

    let print_uri = |uri: &str| -> Result<(), HandoffError> {
        println!("{}", uri);
        Ok(())
    };
    let handoff: &dyn MailHandoff = if dry_run { &print_uri } else { &SystemMailClient };

    let mut form = ContactForm::from_config(&config);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", ctx.resolve("contact.form.title"));
    println!("{}", ctx.resolve("contact.description"));
    println!();
    form.observe_visibility(1.0, Utc::now());

    let mut pending: Vec<Field> = Field::ALL.to_vec();
    loop {
        for field in &pending {
            let value = prompt_field(&ctx, *field, &mut input)?;
            form.update_field(*field, value);
        }

        match form.submit(&ctx, handoff, Utc::now()) {
            SubmitOutcome::Sent(notice) => {
                print_notice(&notice);
                return Ok(());
            }
            SubmitOutcome::Invalid => {
                for (_, message) in form.errors().iter() {
                    println!("  ! {}", message);
                }
                pending = form.errors().fields().collect();
            }
            SubmitOutcome::TooFast(notice) => {
                print_notice(&notice);
                read_line(&mut input)?;
                pending.clear();
            }
            SubmitOutcome::Failed(notice) => {
                print_notice(&notice);
                bail!("Could not hand the inquiry to a mail client");
            }
            SubmitOutcome::Dropped | SubmitOutcome::Busy => return Ok(()),
        }
    }
}

fn prompt_field(ctx: &SiteContext<'_>, field: Field, input: &mut impl BufRead) -> Result<String> {
    println!("{} *", ctx.resolve(field.label_key()));

    if field == Field::EventType {
        for (i, kind) in EventType::ALL.iter().enumerate() {
            println!("  {}) {}", i + 1, ctx.resolve(kind.label_key()));
        }
        let answer = read_line(input)?;
        let picked = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| EventType::ALL.get(i))
            .map(|kind| kind.as_str().to_string());
        return Ok(picked.unwrap_or(answer));
    }

    read_line(input)
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read from stdin")? == 0 {
        bail!("Input closed before the form was submitted");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_notice(notice: &Notice) {
    println!();
    println!("{}", notice.title);
    println!("{}", notice.description);
}
