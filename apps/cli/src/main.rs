#![allow(clippy::print_stdout)]

mod args;

use crate::args::{Cli, Command};
use anyhow::{Context, bail};
use clap::Parser;
use mdev::prelude::*;
use mdev_logger::{ConsoleTarget, Logger};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(ConsoleTarget::Stderr)
        .ansi(false)
        .log_level(cli.log_level)
        .init()?;

    match cli.command {
        Command::List { vocabulary } => list(vocabulary),
        Command::Check { vocabulary, value } => return Ok(check(vocabulary, &value)),
        Command::Classify { platform, native, fallback } => {
            let element = match fallback {
                Some(fallback) => classify_or(platform, &native, fallback),
                None => match classify(platform, &native) {
                    Some(element) => element,
                    None => bail!("no {platform} element type mapped for '{native}'"),
                },
            };
            println!("{element}");
        },
        Command::Defaults { config } => {
            let config = load_tool_config(config.as_deref())?;
            let rendered =
                serde_json::to_string_pretty(&config).context("Failed to render configuration")?;
            println!("{rendered}");
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn list(vocabulary: Option<Vocabulary>) {
    match vocabulary {
        Some(vocabulary) => {
            for tag in vocabulary.tags() {
                println!("{tag}");
            }
        },
        None => {
            for vocabulary in Vocabulary::VARIANTS {
                println!("{vocabulary}: {}", vocabulary.tags().join(", "));
            }
        },
    }
}

fn check(vocabulary: Vocabulary, value: &str) -> ExitCode {
    match check_tag(vocabulary, value) {
        Ok(_) => {
            println!("true");
            ExitCode::SUCCESS
        },
        Err(err) => {
            tracing::info!("{err}");
            println!("false");
            ExitCode::FAILURE
        },
    }
}
