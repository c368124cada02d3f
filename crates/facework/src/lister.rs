// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatted listing of faces with their terminuses and actions.
//!
//! One block is written per face, in registry order. Lookup failures are
//! reported on the error stream and never stop the listing.

use std::io::{self, Write};

use facework_core::{DEFAULT_FACE_VERSION, FaceRegistry, LogLevel, LookupError, Section, Sections};
use semver::Version;
use tracing::debug;

/// Settings the lister is constructed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListerConfig {
    /// Verbosity handed to the logging subsystem. Has no effect on output.
    pub level: LogLevel,
    /// Write the full error chain to the output stream on lookup failure.
    pub trace: bool,
}

impl ListerConfig {
    /// Resolve the level from the `--debug` / `--verbose` flags, falling back
    /// to `configured` when neither is given.
    pub fn from_flags(debug: bool, verbose: bool, trace: bool, configured: LogLevel) -> Self {
        let level = if debug {
            LogLevel::Debug
        } else if verbose {
            LogLevel::Info
        } else {
            configured
        };
        Self { level, trace }
    }
}

/// Counts from a finished listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    /// Faces a block was written for.
    pub faces: usize,
    /// Lookups that failed and were reported.
    pub failures: usize,
}

pub struct Lister<'a> {
    registry: &'a dyn FaceRegistry,
    config: ListerConfig,
    version: Version,
}

impl<'a> Lister<'a> {
    pub fn new(registry: &'a dyn FaceRegistry, config: ListerConfig) -> Self {
        Self {
            registry,
            config,
            version: DEFAULT_FACE_VERSION,
        }
    }

    /// Resolve actions against `version` instead of `0.0.1`.
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Write one block per face to `out`, and one line per failed lookup to `err`.
    ///
    /// Only I/O errors on the two streams are returned.
    pub fn list<O, E>(&self, sections: &Sections, mut out: O, mut err: E) -> io::Result<ListSummary>
    where
        O: Write,
        E: Write,
    {
        let mut summary = ListSummary::default();

        for name in self.registry.face_names() {
            debug!(face = %name, "listing face");
            let mut block = format!("{name}:\n");

            if sections.contains(Section::Terminuses) {
                match self.terminus_names(&name) {
                    Ok(terminuses) => {
                        block.push_str(&format!("\tTerminuses: {}\n", terminuses.join(", ")));
                    }
                    Err(e) => {
                        summary.failures += 1;
                        self.report(Section::Terminuses, &name, &e, &mut out, &mut err)?;
                    }
                }
            }

            if sections.contains(Section::Actions) {
                match self.action_names(&name) {
                    Ok(actions) => {
                        block.push_str(&format!("\tActions: {}\n", actions.join(", ")));
                    }
                    Err(e) => {
                        summary.failures += 1;
                        self.report(Section::Actions, &name, &e, &mut out, &mut err)?;
                    }
                }
            }

            out.write_all(block.as_bytes())?;
            summary.faces += 1;
        }

        out.flush()?;
        Ok(summary)
    }

    /// Terminus names for the face's indirection, sorted ascending.
    fn terminus_names(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let mut terminuses = self.registry.terminuses(name)?;
        terminuses.sort();
        Ok(terminuses.iter().map(ToString::to_string).collect())
    }

    /// Action names sorted by display form. A face missing at the lookup
    /// version has no actions.
    fn action_names(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let face = match self.registry.face(name, &self.version) {
            Ok(face) => face,
            Err(e) if e.is_not_found() => {
                debug!(face = %name, version = %self.version, "no face at version, no actions");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };
        let mut actions: Vec<String> = face.actions()?.iter().map(ToString::to_string).collect();
        actions.sort();
        Ok(actions)
    }

    fn report<O, E>(
        &self,
        section: Section,
        name: &str,
        error: &LookupError,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()>
    where
        O: Write,
        E: Write,
    {
        debug!(face = %name, %section, error = %error, "lookup failed");
        if self.config.trace {
            write_trace(out, error)?;
        }
        writeln!(err, "Could not load {section} for {name}: {error}")
    }
}

/// Write `error` followed by its `source()` chain, one cause per line.
pub fn write_trace<W: Write>(out: &mut W, error: &dyn std::error::Error) -> io::Result<()> {
    writeln!(out, "error: {error}")?;
    let mut source = error.source();
    while let Some(cause) = source {
        writeln!(out, "  caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}
