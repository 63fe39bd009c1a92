//! Audit a page for missing language variants.
//!
//! Usage:
//!   cargo run --bin audit -- page.json
//!
//! Prints the validation report as JSON and exits with status 1 when the page
//! has errors (e.g., no language control). Warnings alone exit 0.
//!
//! Uses the same LOCALIZER_* environment variables as the main binary.

use anyhow::{Context, Result};
use page_localizer::i18n::PageValidator;
use page_localizer::{Config, Document};
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("page_localizer=info".parse()?),
        )
        .init();

    let page_path = std::env::args()
        .nth(1)
        .context("Usage: audit <page.json>")?;

    let config = Config::from_env()?;
    let registry = config.registry()?;
    let scheme = config.scheme();

    let content = std::fs::read_to_string(&page_path)
        .with_context(|| format!("Failed to read page {}", page_path))?;
    let document = Document::from_json(&content)
        .with_context(|| format!("Invalid page JSON in {}", page_path))?;

    info!(
        "Auditing {} elements against {} of {} languages",
        document.elements.len(),
        registry.list_enabled().len(),
        registry.languages().len()
    );

    let report = PageValidator::new(&registry, &scheme, &config.base_language)
        .validate(&document, &config.control_id);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.has_errors() {
        warn!("Page has {} errors", report.errors.len());
        std::process::exit(1);
    }
    if report.is_clean() {
        info!("Page is fully translated");
    } else {
        info!("Page has {} warnings", report.warnings.len());
    }

    Ok(())
}
