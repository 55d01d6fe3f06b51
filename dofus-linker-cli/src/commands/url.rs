use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dofus_linker_core::settings::Priority;
use dofus_linker_core::{Resolution, UrlVariants};

use crate::CliError;
use crate::commands::{load_settings, print_json};

pub(crate) fn run_url(name: &str, json: bool, priority: Option<Priority>) -> Result<(), CliError> {
    let mut settings = load_settings()?;
    if let Some(priority) = priority {
        settings.selector.priority = priority;
    }
    let linker = settings.build_linker()?;
    let urls = linker.generate(name);

    if json {
        return print_json(&urls);
    }
    print_urls(&urls);
    Ok(())
}

/// Human-readable primary/fallback listing shared with `lookup`.
pub(crate) fn print_urls(urls: &UrlVariants) {
    let how = match urls.resolution {
        Resolution::Exception => "exception table".to_string(),
        Resolution::Heuristic { primary } => format!("{} first", primary),
    };
    log::info!(
        "  Primary:  {} {}",
        urls.primary.if_supports_color(Stdout, |t| t.cyan()),
        format!("({})", how).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if urls.fallback != urls.primary {
        log::info!("  Fallback: {}", urls.fallback);
    }
    if urls.is_degenerate() {
        log::warn!("Empty slug, these URLs will not resolve to a guide page");
    }
}
