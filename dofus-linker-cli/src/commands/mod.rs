pub(crate) mod config;
pub(crate) mod exceptions;
pub(crate) mod lookup;
pub(crate) mod slug;
pub(crate) mod url;

use dofus_linker_core::Settings;

use crate::CliError;

/// Settings file plus environment overrides.
pub(crate) fn load_settings() -> Result<Settings, CliError> {
    Ok(Settings::load()?)
}

/// Print a value as pretty JSON on stdout, bypassing the logger.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
