// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory face for deterministic testing.

use facework_core::{Action, DEFAULT_FACE_VERSION, Face, LookupError};
use semver::Version;

/// A face whose actions are fixed at construction time.
///
/// `actions()` either returns the configured list as-is (unsorted) or fails
/// with the configured message.
#[derive(Debug, Clone)]
pub struct StaticFace {
    name: String,
    version: Version,
    actions: Result<Vec<Action>, String>,
}

impl StaticFace {
    /// Create a face at version `0.0.1` with no actions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_FACE_VERSION,
            actions: Ok(Vec::new()),
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = Ok(actions.into_iter().map(Action::new).collect());
        self
    }

    /// Make `actions()` fail with a load error carrying `message`.
    pub fn failing_actions(mut self, message: impl Into<String>) -> Self {
        self.actions = Err(message.into());
        self
    }
}

impl Face for StaticFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &Version {
        &self.version
    }

    fn actions(&self) -> Result<Vec<Action>, LookupError> {
        self.actions
            .clone()
            .map_err(|message| LookupError::load(self.name.as_str(), message))
    }
}
