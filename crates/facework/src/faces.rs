// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `facework faces` command implementation.
//!
//! Builds the face registry from the built-in catalog and the configured
//! manifest directories, eagerly loads every face, and hands the registry to
//! the [`Lister`].

use std::path::PathBuf;

use clap::Args;
use facework_config::FaceworkConfig;
use facework_core::{FaceworkError, LogLevel, Section, Sections, load_all};
use facework_registry::ManifestRegistry;
use tracing::info;

use crate::lister::{ListSummary, Lister, ListerConfig};

const FACES_HELP: &str = r#"facework-faces(8) -- List available faces and actions
========

SYNOPSIS
--------
Lists the available faces (with applicable terminuses and/or actions)
known to facework. This information is read from the faces compiled into
the binary and from the face manifests found in the configured directories.
By default, the output includes all terminuses and actions.

USAGE
-----
facework faces [-d|--debug] [-v|--verbose] [--trace] [--faces-dir <DIR>]
               [actions|terminuses]

With no section named, both are listed. Any other section name is rejected
with a usage error (exit status 2) and nothing is listed.

OPTIONS
-------
* --debug:
  Sets the log level to "debug". Log output goes to standard error.

* --verbose:
  Sets the log level to "info". Log output goes to standard error.

* --trace:
  When a lookup fails, also print the error and each of its causes to
  standard output.

* --faces-dir <DIR>:
  Scan DIR for face manifests (`*.toml`) in addition to the directories
  listed under `faces.dirs` in facework.toml. May be repeated.

* --config <PATH>:
  Read configuration from PATH instead of the usual facework.toml lookup.

FILES
-----
/etc/facework/facework.toml, ~/.config/facework/facework.toml, ./facework.toml

Each face manifest looks like:

    [face]
    name = "fileserver"
    version = "0.0.1"
    actions = ["find", "save"]

    [indirection]
    terminuses = ["file", "rest"]
"#;

/// Static manual text for `facework faces`.
pub fn help() -> &'static str {
    FACES_HELP
}

/// Arguments for `facework faces`.
#[derive(Args, Debug, Default)]
#[command(disable_help_flag = true)]
pub struct FacesArgs {
    /// Set the log level to "debug".
    #[arg(short, long, conflicts_with = "verbose")]
    pub debug: bool,

    /// Set the log level to "info".
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the full error chain to stdout when a lookup fails.
    #[arg(long)]
    pub trace: bool,

    /// Additional directory to scan for face manifests.
    #[arg(long = "faces-dir", value_name = "DIR")]
    pub faces_dirs: Vec<PathBuf>,

    /// Print the manual for this command.
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Sections to list: terminuses, actions. Lists both when omitted; any
    /// other name is a usage error.
    #[arg(value_name = "SECTION")]
    pub sections: Vec<Section>,
}

/// Build the registry: built-ins first (unless disabled), then manifests
/// from the configured and command-line directories, in that order.
pub fn build_registry(
    config: &FaceworkConfig,
    extra_dirs: &[PathBuf],
) -> Result<ManifestRegistry, FaceworkError> {
    let mut registry = if config.faces.builtin {
        ManifestRegistry::new().with_builtin()
    } else {
        ManifestRegistry::new()
    };

    for dir in config.faces.dir_paths().iter().chain(extra_dirs) {
        registry.discover(dir)?;
    }

    let failed = load_all(&mut registry);
    info!(faces = registry.len(), failed, "face registry loaded");
    Ok(registry)
}

/// Run the `facework faces` command.
///
/// Lookup failures are reported per face and do not make this fail; only
/// registry discovery and writing the output can.
pub fn run_faces(config: &FaceworkConfig, args: &FacesArgs) -> Result<ListSummary, FaceworkError> {
    let lister_config = ListerConfig::from_flags(
        args.debug,
        args.verbose,
        args.trace || config.log.trace,
        config.log.level(),
    );
    init_tracing(lister_config.level);

    let registry = build_registry(config, &args.faces_dirs)?;
    let sections = Sections::from_filters(args.sections.iter().copied());

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let summary = Lister::new(&registry, lister_config)
        .with_version(config.faces.face_version())
        .list(&sections, stdout.lock(), stderr.lock())
        .map_err(|e| FaceworkError::Internal(format!("failed to write listing: {e}")))?;

    info!(
        faces = summary.faces,
        failures = summary.failures,
        "listing complete"
    );
    Ok(summary)
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when set.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("facework={level},warn")));

    // A subscriber may already be installed when called more than once in a process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .try_init();
}
