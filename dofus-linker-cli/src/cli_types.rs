//! CLI type definitions: command enums and argument structs.

use clap::{Parser, Subcommand};

use dofus_linker_core::PageKind;
use dofus_linker_core::settings::Priority;

#[derive(Parser)]
#[command(name = "dofus-linker")]
#[command(about = "Guess DofusPourLesNoobs guide URLs from Dofus names", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show both slugs of a French name and how they were built
    Slug {
        /// French display name, e.g. "Épreuve du Zobal"
        name: String,
    },

    /// Generate the primary and fallback guide URLs for a French name
    Url {
        /// French display name
        name: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Override the configured variant priority (heuristic, normalized, entity)
        #[arg(long)]
        priority: Option<Priority>,
    },

    /// Resolve an English name to French through DofusDB, then generate URLs
    Lookup {
        /// English display name, e.g. "The Zobal Trial"
        name: String,

        /// Kind of page the name comes from; its category is searched first
        #[arg(short, long, default_value = "unknown")]
        kind: PageKind,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect the exception table
    Exceptions {
        #[command(subcommand)]
        action: ExceptionsAction,
    },

    /// Show settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ExceptionsAction {
    /// List every entry (builtin and configured)
    List {
        /// Only show names containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Look up one name
    Check {
        /// French display name
        name: String,
    },

    /// Show names the builtin data asserts more than once
    Duplicates,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["dofus-linker", "lookup", "The Zobal Trial", "-k", "quests", "--json"])
            .unwrap();
        match cli.command {
            Commands::Lookup { name, kind, json } => {
                assert_eq!(name, "The Zobal Trial");
                assert_eq!(kind, PageKind::Quest);
                assert!(json);
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_parse_url_priority() {
        let cli = Cli::try_parse_from(["dofus-linker", "--quiet", "url", "Forêt", "--priority", "entity"])
            .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Url { priority, json, .. } => {
                assert_eq!(priority, Some(Priority::Entity));
                assert!(!json);
            }
            _ => panic!("expected url"),
        }
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["dofus-linker", "lookup", "X", "--kind", "pets"]).is_err());
    }
}
