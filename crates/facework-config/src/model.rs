// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Facework face lister.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::path::PathBuf;

use facework_core::{DEFAULT_FACE_VERSION, LogLevel};
use serde::{Deserialize, Serialize};

/// Top-level Facework configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FaceworkConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Face discovery settings.
    #[serde(default)]
    pub faces: FacesConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Dump the full error chain to stdout when a lookup fails.
    #[serde(default)]
    pub trace: bool,
}

impl LogConfig {
    /// The configured level, falling back to the default when unparseable.
    ///
    /// Validation rejects bad levels, so the fallback only applies to
    /// configs that skipped `validate_config`.
    pub fn level(&self) -> LogLevel {
        self.level.parse().unwrap_or_default()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            trace: false,
        }
    }
}

fn default_log_level() -> String {
    LogLevel::default().to_string()
}

/// Face discovery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FacesConfig {
    /// Directories scanned for `*.toml` face manifests.
    #[serde(default)]
    pub dirs: Vec<String>,

    /// Include the faces compiled into the binary.
    #[serde(default = "default_true")]
    pub builtin: bool,

    /// Face version that actions are resolved against.
    #[serde(default = "default_face_version")]
    pub version: String,
}

impl FacesConfig {
    pub fn dir_paths(&self) -> Vec<PathBuf> {
        self.dirs.iter().map(PathBuf::from).collect()
    }

    /// The configured face version, falling back to `0.0.1` when unparseable.
    pub fn face_version(&self) -> semver::Version {
        semver::Version::parse(&self.version).unwrap_or(DEFAULT_FACE_VERSION)
    }
}

impl Default for FacesConfig {
    fn default() -> Self {
        Self {
            dirs: Vec::new(),
            builtin: true,
            version: default_face_version(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_face_version() -> String {
    DEFAULT_FACE_VERSION.to_string()
}
