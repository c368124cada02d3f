// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait implemented by every loaded face.

use semver::Version;

use crate::error::LookupError;
use crate::types::Action;

/// A pluggable subcommand module exposing a set of named actions.
pub trait Face {
    /// Returns the face name, which is also the name of its indirection.
    fn name(&self) -> &str;

    /// Returns the semantic version of this face.
    fn version(&self) -> &Version;

    /// Returns the actions this face exposes, in no particular order.
    fn actions(&self) -> Result<Vec<Action>, LookupError>;
}
