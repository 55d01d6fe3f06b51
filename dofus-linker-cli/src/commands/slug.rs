use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dofus_linker_core::{Slugs, VariantPolicy};

use crate::CliError;
use crate::commands::load_settings;

/// Show both slugs, the detected pattern, and which one the selector picks.
pub(crate) fn run_slug(name: &str) -> Result<(), CliError> {
    let settings = load_settings()?;
    let exceptions = settings.exception_table();
    let policy = settings.selector.policy()?;
    let slugs = Slugs::of(name);
    let primary = policy.primary_variant(name);

    log::info!("{}", name.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Pattern:    {}", slugs.pattern);
    log::info!("  Normalized: {}", slugs.normalized);
    log::info!("  Entity:     {}", slugs.entity);
    log::info!(
        "  Primary:    {}",
        primary.if_supports_color(Stdout, |t| t.cyan())
    );

    if let Some(slug) = exceptions.lookup(name) {
        log::info!(
            "  Exception:  {} {}",
            slug.if_supports_color(Stdout, |t| t.green()),
            "(overrides both)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if slugs.normalized.is_empty() {
        log::warn!("Name produces an empty slug");
    }
    Ok(())
}
