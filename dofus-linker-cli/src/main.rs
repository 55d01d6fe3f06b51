//! dofus-linker CLI
//!
//! Command-line interface for generating DofusPourLesNoobs guide URLs.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction, ExceptionsAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Slug { name } => commands::slug::run_slug(&name),
        Commands::Url {
            name,
            json,
            priority,
        } => commands::url::run_url(&name, json, priority),
        Commands::Lookup { name, kind, json } => commands::lookup::run_lookup(&name, kind, json),
        Commands::Exceptions { action } => match action {
            ExceptionsAction::List { filter } => {
                commands::exceptions::run_exceptions_list(filter.as_deref())
            }
            ExceptionsAction::Check { name } => commands::exceptions::run_exceptions_check(&name),
            ExceptionsAction::Duplicates => commands::exceptions::run_exceptions_duplicates(),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Info messages are the program's output and print bare; other levels
/// carry their level name. `RUST_LOG` still applies.
fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }
    builder.target(env_logger::Target::Stdout).init();
}
