// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Face manifest parsing from TOML files.
//!
//! A manifest declares one face: its name, version, actions, and optionally
//! the terminuses registered behind its indirection.

use facework_core::{Action, Face, LookupError, Terminus};
use semver::Version;
use serde::Deserialize;

/// Parsed face manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceManifest {
    /// Face name, also the name of its indirection.
    pub name: String,
    pub version: Version,
    /// One-line description.
    pub summary: String,
    pub actions: Vec<Action>,
    /// `None` when the face has no indirection point.
    pub indirection: Option<IndirectionManifest>,
}

/// Terminuses registered behind a face's indirection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndirectionManifest {
    pub terminuses: Vec<Terminus>,
}

impl Face for FaceManifest {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &Version {
        &self.version
    }

    fn actions(&self) -> Result<Vec<Action>, LookupError> {
        Ok(self.actions.clone())
    }
}

/// Intermediate TOML deserialization struct for a manifest file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FaceManifestFile {
    face: FaceSection,
    indirection: Option<IndirectionSection>,
}

/// The `[face]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FaceSection {
    name: String,
    version: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    actions: Vec<ActionEntry>,
}

/// Actions may be listed as bare names or as `{ name, summary }` tables.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ActionEntry {
    Name(String),
    Full(ActionTable),
}

/// The `{ name, summary }` form of an action.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ActionTable {
    name: String,
    #[serde(default)]
    summary: Option<String>,
}

impl ActionEntry {
    fn name(&self) -> &str {
        match self {
            ActionEntry::Name(name) => name,
            ActionEntry::Full(table) => &table.name,
        }
    }
}

impl From<ActionEntry> for Action {
    fn from(entry: ActionEntry) -> Self {
        match entry {
            ActionEntry::Name(name) => Action::new(name),
            ActionEntry::Full(ActionTable { name, summary }) => Action { name, summary },
        }
    }
}

/// The `[indirection]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IndirectionSection {
    #[serde(default)]
    terminuses: Vec<String>,
}

/// Parse a face manifest from TOML content.
///
/// The name must be non-empty and the version must be valid semver.
pub fn parse_face_manifest(toml_content: &str) -> Result<FaceManifest, LookupError> {
    let file: FaceManifestFile = toml::from_str(toml_content)
        .map_err(|e| LookupError::Manifest(e.message().to_string()))?;

    let section = file.face;

    if section.name.trim().is_empty() {
        return Err(LookupError::Manifest("name must not be empty".to_string()));
    }

    let version = Version::parse(&section.version).map_err(|e| {
        LookupError::Manifest(format!(
            "face `{}` has invalid version `{}`: {e}",
            section.name, section.version
        ))
    })?;

    if let Some(empty) = section.actions.iter().position(|a| a.name().trim().is_empty()) {
        return Err(LookupError::Manifest(format!(
            "face `{}` has an action with an empty name at position {empty}",
            section.name
        )));
    }

    Ok(FaceManifest {
        name: section.name,
        version,
        summary: section.summary,
        actions: section.actions.into_iter().map(Action::from).collect(),
        indirection: file.indirection.map(|i| IndirectionManifest {
            terminuses: i.terminuses.into_iter().map(Terminus).collect(),
        }),
    })
}
