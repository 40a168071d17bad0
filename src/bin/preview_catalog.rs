//! Print the full translation catalog for one language.
//!
//! Usage: `preview_catalog [language-code]` (defaults to "en").

use anyhow::{bail, Result};
use dashboard_i18n::{Catalog, Language};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dashboard_i18n=info".parse()?),
        )
        .init();

    let code = std::env::args().nth(1).unwrap_or_else(|| "en".to_string());
    let language = Language::from_code(&code)?;

    info!(language = language.code(), "previewing catalog");

    let Some(bundle) = Catalog::get().bundle(language.code()) else {
        bail!("No bundle for language '{}'", language.code());
    };

    println!(
        "{} ({}) — {} keys\n",
        language.name(),
        language.native_name(),
        bundle.len()
    );

    let mut entries: Vec<_> = bundle.entries().collect();
    entries.sort_unstable();
    for (key, value) in entries {
        println!("{:<28} {}", key, value);
    }

    Ok(())
}
