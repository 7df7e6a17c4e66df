//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;
use synphot_config::config::{CONFIG_FILE, ConfigKey, Group};

/// Inspect and edit synphot resource locations
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List configuration entries
    #[command(visible_alias = "ls")]
    List {
        /// Only show one group
        #[arg(short, long)]
        group: Option<Group>,

        /// Only show entries that differ from their default
        #[arg(short, long)]
        modified: bool,

        /// Print JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Print the value of one key
    Get {
        #[arg(value_parser = parse_key)]
        key: ConfigKey,

        /// Print the default instead of the current value
        #[arg(short, long)]
        default: bool,
    },

    /// Store a value in the config file
    Set {
        #[arg(value_parser = parse_key)]
        key: ConfigKey,

        value: String,

        /// Also rewrite the key's group with paths derived from the new values
        #[arg(short, long)]
        refresh: bool,
    },

    /// Remove a value from the config file
    Unset {
        #[arg(value_parser = parse_key)]
        key: ConfigKey,
    },

    /// Re-derive file paths from the current directory values
    Refresh {
        /// Persist the refreshed paths to the config file
        #[arg(short, long)]
        write: bool,
    },

    /// Write a commented config template
    #[command(visible_alias = "i")]
    Init {
        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_key(s: &str) -> Result<ConfigKey, String> {
    s.parse().map_err(|err| format!("{err}"))
}
