// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Facework face lister.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type used across Facework crates.
#[derive(Debug, Error)]
pub enum FaceworkError {
    /// Filesystem errors while discovering or reading face manifests.
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A registry lookup failed outside of per-face listing.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Failure to resolve terminuses or actions for a single face.
///
/// The lister reports these per face and keeps going; they never abort a
/// whole listing.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No face is registered under this name and version.
    #[error("no face `{name}` at version {version}")]
    NotFound { name: String, version: String },

    /// No indirection is registered under this name.
    #[error("no indirection named `{name}`")]
    NoIndirection { name: String },

    /// The indirection exists but has no terminus classes.
    #[error("no backends registered for `{name}`")]
    NoTerminuses { name: String },

    /// The face module could not be loaded.
    #[error("failed to load face `{name}`: {source}")]
    Load {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The face manifest is malformed.
    #[error("invalid face manifest: {0}")]
    Manifest(String),
}

impl LookupError {
    /// Build a `NotFound` error for a face missing at `version`.
    pub fn not_found(name: impl Into<String>, version: &semver::Version) -> Self {
        LookupError::NotFound {
            name: name.into(),
            version: version.to_string(),
        }
    }

    /// True when no face matched the requested name and version.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }

    /// Build a `Load` error from any boxed-compatible source.
    pub fn load(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        LookupError::Load {
            name: name.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_terminuses_message_names_the_face() {
        let err = LookupError::NoTerminuses {
            name: "report".into(),
        };
        assert_eq!(err.to_string(), "no backends registered for `report`");
    }

    #[test]
    fn load_error_keeps_its_source() {
        use std::error::Error;

        let err = LookupError::load("catalog", std::io::Error::other("disk gone"));
        assert!(err.to_string().contains("catalog"));
        assert!(err.to_string().contains("disk gone"));
        let source = err.source().expect("load error should expose its source");
        assert_eq!(source.to_string(), "disk gone");
    }

    #[test]
    fn not_found_names_face_and_version() {
        let err = LookupError::not_found("parser", &semver::Version::new(0, 0, 1));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no face `parser` at version 0.0.1");
        assert!(!LookupError::Manifest("bad".into()).is_not_found());
    }

    #[test]
    fn lookup_error_converts_into_facework_error() {
        let err: FaceworkError = LookupError::NoIndirection {
            name: "node".into(),
        }
        .into();
        assert_eq!(err.to_string(), "no indirection named `node`");
    }

    #[test]
    fn io_error_mentions_path() {
        let err = FaceworkError::Io {
            path: PathBuf::from("/srv/faces"),
            source: std::io::Error::other("permission denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/faces"));
        assert!(msg.contains("permission denied"));
    }
}
