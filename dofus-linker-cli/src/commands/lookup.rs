use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dofus_linker_core::PageKind;
use dofus_linker_lookup::{DofusDbClient, resolve_urls};

use crate::CliError;
use crate::commands::url::print_urls;
use crate::commands::{load_settings, print_json};

/// Entry point for `lookup`: English name → French name → URLs.
pub(crate) fn run_lookup(english_name: &str, kind: PageKind, json: bool) -> Result<(), CliError> {
    let settings = load_settings()?;
    let linker = settings.build_linker()?;
    let client = DofusDbClient::from_settings(&settings.api)?;

    log::debug!("Querying {} for '{}' ({})", client.base_url(), english_name, kind);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
    let resolved = rt.block_on(resolve_urls(&client, &linker, english_name, kind));

    if json {
        return print_json(&resolved);
    }

    match &resolved.french {
        Some(french) => log::info!(
            "{} → {}",
            english_name,
            french.if_supports_color(Stdout, |t| t.bold())
        ),
        None => log::info!(
            "{} {}",
            english_name.if_supports_color(Stdout, |t| t.bold()),
            "(no French name found)".if_supports_color(Stdout, |t| t.yellow()),
        ),
    }
    print_urls(&resolved.urls);
    Ok(())
}
