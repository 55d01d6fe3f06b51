use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dofus_linker_core::ExceptionTable;

use crate::CliError;
use crate::commands::load_settings;

pub(crate) fn run_exceptions_list(filter: Option<&str>) -> Result<(), CliError> {
    let table = load_settings()?.exception_table();
    let filter = filter.map(str::to_lowercase);

    let mut shown = 0usize;
    for (name, slug) in table.iter() {
        if filter.as_ref().is_some_and(|f| !name.contains(f.as_str())) {
            continue;
        }
        log::info!(
            "{} {} {}",
            name,
            "→".if_supports_color(Stdout, |t| t.dimmed()),
            slug.if_supports_color(Stdout, |t| t.cyan()),
        );
        shown += 1;
    }
    log::info!("");
    log::info!("{} of {} entries", shown, table.len());
    Ok(())
}

pub(crate) fn run_exceptions_check(name: &str) -> Result<(), CliError> {
    let table = load_settings()?.exception_table();
    let slug = table
        .lookup(name)
        .ok_or_else(|| CliError::not_found(format!("'{}' is not in the exception table", name)))?;
    log::info!(
        "{} {} {}",
        name.if_supports_color(Stdout, |t| t.bold()),
        "→".if_supports_color(Stdout, |t| t.dimmed()),
        slug.if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

pub(crate) fn run_exceptions_duplicates() -> Result<(), CliError> {
    let duplicates = ExceptionTable::builtin().duplicates();
    if duplicates.is_empty() {
        log::info!("No duplicate names.");
        return Ok(());
    }
    for dup in duplicates {
        log::info!("{}", dup.name.if_supports_color(Stdout, |t| t.bold()));
        log::info!(
            "  kept:      {}",
            dup.kept.if_supports_color(Stdout, |t| t.green())
        );
        log::info!(
            "  discarded: {}",
            dup.discarded.if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    Ok(())
}
