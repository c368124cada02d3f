// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the registry, the configuration layer, and the lister.

use std::collections::BTreeSet;
use std::fmt;

use semver::Version;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Face version the lister resolves actions against.
pub const DEFAULT_FACE_VERSION: Version = Version::new(0, 0, 1);

/// Log verbosity, from quietest to noisiest.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

/// A section of per-face output that a listing can be filtered to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Terminuses,
    Actions,
}

/// The set of sections selected for a listing.
///
/// An empty filter list selects every section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections(BTreeSet<Section>);

impl Sections {
    /// Every section.
    pub fn all() -> Self {
        Sections(Section::iter().collect())
    }

    /// Build a selection from filter tokens, defaulting to all sections when empty.
    pub fn from_filters<I>(filters: I) -> Self
    where
        I: IntoIterator<Item = Section>,
    {
        let selected: BTreeSet<Section> = filters.into_iter().collect();
        if selected.is_empty() {
            Self::all()
        } else {
            Sections(selected)
        }
    }

    pub fn contains(&self, section: Section) -> bool {
        self.0.contains(&section)
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self::all()
    }
}

/// A named operation exposed by a face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named backend implementation behind a face's indirection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Terminus(pub String);

impl Terminus {
    pub fn new(name: impl Into<String>) -> Self {
        Terminus(name.into())
    }
}

impl fmt::Display for Terminus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
