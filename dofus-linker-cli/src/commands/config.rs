use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dofus_linker_core::settings::{API_URL_ENV, BASE_URL_ENV, settings_path};

use crate::CliError;
use crate::commands::load_settings;

/// Show the settings file status and the effective values.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = load_settings()?;

    log::info!(
        "{}",
        "dofus-linker Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for var in [BASE_URL_ENV, API_URL_ENV] {
        if let Ok(value) = std::env::var(var) {
            log::info!(
                "  {} {}",
                format!("${}:", var).if_supports_color(Stdout, |t| t.yellow()),
                value
            );
        }
    }
    log::info!("");

    for line in settings.to_toml()?.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}
