//! Localize a page file.
//!
//! Usage:
//!   page-localizer page.json                     # Restore the saved language and print the page
//!   page-localizer page.json --select fr         # Then switch to French as a user would
//!   page-localizer page.json --output out.json   # Write the page to a file instead of stdout
//!
//! Optional environment variables (see `Config::from_env`):
//! - LOCALIZER_LANGUAGES (defaults to "en")
//! - LOCALIZER_DEFAULT_LANGUAGE (defaults to "en")
//! - LOCALIZER_CONTROL_ID (defaults to "languageSwitcher")
//! - LOCALIZER_STORE_PATH (defaults to data/preferences.json)

use anyhow::{bail, Context, Result};
use page_localizer::{Config, Document, JsonFileStore, LanguageSwitcher};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("page_localizer=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(page_path) = positional(&args) else {
        bail!("Usage: page-localizer <page.json> [--select <code>] [--output <path>]");
    };
    let select = flag_value(&args, "--select");
    let output = flag_value(&args, "--output");

    let config = Config::from_env()?;

    let content = std::fs::read_to_string(page_path)
        .with_context(|| format!("Failed to read page {}", page_path))?;
    let mut document =
        Document::from_json(&content).with_context(|| format!("Invalid page JSON in {}", page_path))?;
    info!("Loaded {} elements from {}", document.elements.len(), page_path);

    let store = JsonFileStore::new(&config.store_path);
    match LanguageSwitcher::init(&config, store, &mut document) {
        Some(mut switcher) => {
            switcher.subscribe(|event| {
                info!(
                    "{}: {} -> {}",
                    event.name(),
                    event.previous.as_ref().map(|c| c.as_str()).unwrap_or("-"),
                    event.language
                );
            });

            if let Some(code) = select {
                switcher.select(&mut document, code.as_str());
            }

            let report = serde_json::to_string(&switcher.metrics().report())?;
            info!("Metrics: {}", report);
        }
        None => info!(
            "No '#{}' control on the page, leaving it unchanged",
            config.control_id
        ),
    }

    let json = document.to_json()?;
    match output {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path))?;
            info!("Page written to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// First argument that is neither a flag nor a flag's value.
fn positional(args: &[String]) -> Option<&String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
        } else {
            return Some(arg);
        }
    }
    None
}

/// Value following `flag` on the command line, if any.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
