//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use mdev::domain::vocabulary::{ElementType, LogLevel, Platform, Vocabulary};
use std::path::PathBuf;

/// Inspect the mobile tooling vocabulary.
#[derive(Debug, Parser)]
#[command(name = "mdev")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub(crate) struct Cli {
    /// Minimum severity written to stderr (a `log_level` tag)
    #[arg(long, global = true, default_value = "warning")]
    pub(crate) log_level: LogLevel,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the tags of one enumeration, or of all of them
    List {
        /// Enumeration name (e.g. `platform`, `log_level`)
        vocabulary: Option<Vocabulary>,
    },
    /// Check whether a value is a member of an enumeration (exit status 1 if not)
    Check {
        vocabulary: Vocabulary,
        value: String,
    },
    /// Map a native widget class name to its element type
    Classify {
        #[arg(short, long)]
        platform: Platform,
        /// Native class or type name, matched exactly
        native: String,
        /// Element type to report for unmapped names instead of failing
        #[arg(short, long)]
        fallback: Option<ElementType>,
    },
    /// Print the effective tool configuration as JSON
    Defaults {
        /// Configuration file layered over the built-in defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
