//! Inspect how an entity record maps onto the store's multi-language form.
//!
//! Usage:
//!   cargo run -- <payment_method|category|product> [record.json]
//!
//! Required environment variables:
//! - STORE_LANGUAGES (e.g. "ar,en", primary first)
//!
//! Optional:
//! - DISPLAY_LANGUAGE (used when no language preference is stored; otherwise
//!   the primary language)
//! - SESSION_FILE (defaults to data/session.json)

use anyhow::{bail, Context, Result};
use store_i18n::config::Config;
use store_i18n::context::AppContext;
use store_i18n::entity::{EntityForm, EntityKind};
use store_i18n::i18n::translated_value;
use store_i18n::session::SessionStore;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("store_i18n=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(kind) = args.next() else {
        bail!("Usage: store-i18n <payment_method|category|product> [record.json]");
    };
    let kind: EntityKind = kind.parse()?;

    let config = Config::from_env()?;
    let store = SessionStore::open(&config.session_file)?;
    let context = AppContext::new(&config, store);

    info!(
        "Store languages: {} (display: {})",
        context.languages(),
        context.display_language()
    );

    let form = match args.next() {
        Some(path) => {
            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read record file {}", path))?;
            let record: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse record file {}", path))?;
            if !record.is_object() {
                bail!("Record file {} must contain a JSON object", path);
            }
            EntityForm::from_record(kind, context.languages().clone(), &record)
        }
        None => EntityForm::new(kind, context.languages().clone()),
    };

    let display_language = context.display_language();
    for field in kind.translatable_fields() {
        let value = translated_value(form.state(), field, context.languages(), display_language.as_str());
        info!("{} [{}]: {:?}", field, display_language, value);
    }

    for input in form.inputs() {
        info!(
            "{:<20} {:<24} required={} value={:?}",
            input.key, input.label, input.required, input.value
        );
    }

    let report = form.validate();
    for warning in &report.warnings {
        warn!("{}", warning);
    }

    let body = form.request_body()?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
