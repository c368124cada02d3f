// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Facework - list faces, their terminuses, and their actions.
//!
//! This is the binary entry point.

mod faces;
mod lister;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::faces::FacesArgs;

/// Facework - list faces, their terminuses, and their actions.
#[derive(Parser, Debug)]
#[command(name = "facework", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default lookup.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List available faces with their terminuses and actions.
    #[command(disable_help_flag = true)]
    Faces(FacesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(Commands::Faces(args)) = &cli.command
        && args.help
    {
        print!("{}", faces::help());
        return ExitCode::SUCCESS;
    }

    let loaded = match &cli.config {
        Some(path) => facework_config::load_and_validate_path(path),
        None => facework_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            facework_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Some(Commands::Faces(args)) => match faces::run_faces(&config, &args) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("facework: {e}");
                ExitCode::FAILURE
            }
        },
        None => {
            println!("facework: use --help for available commands");
            ExitCode::SUCCESS
        }
    }
}
