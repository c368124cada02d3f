// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry trait for discovering, loading, and resolving faces.

use semver::Version;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::traits::face::Face;
use crate::types::Terminus;

/// Source of faces and their terminuses.
///
/// Implementations range from static tables in tests to manifest directory
/// scans in the binary.
pub trait FaceRegistry {
    /// Names of every discoverable face module, loaded or not.
    fn available(&self) -> Vec<String>;

    /// Load the face module with the given name.
    ///
    /// A failed load must not poison the registry: later lookups for the
    /// face report the failure instead.
    fn load(&mut self, name: &str) -> Result<(), LookupError>;

    /// Names of the known faces, in the order they should be listed.
    fn face_names(&self) -> Vec<String>;

    /// Resolve a face by name and version.
    ///
    /// Fails with [`LookupError::NotFound`] when no face has this name and
    /// version. Callers that treat a missing face as empty check
    /// [`LookupError::is_not_found`].
    fn face(&self, name: &str, version: &Version) -> Result<&dyn Face, LookupError>;

    /// Terminus classes registered for an indirection, in no particular order.
    fn terminuses(&self, indirection: &str) -> Result<Vec<Terminus>, LookupError>;
}

/// Eagerly load every discoverable face module.
///
/// Failures are logged and skipped. Returns the number of modules that
/// failed to load.
pub fn load_all<R>(registry: &mut R) -> usize
where
    R: FaceRegistry + ?Sized,
{
    let mut failed = 0;
    for name in registry.available() {
        match registry.load(&name) {
            Ok(()) => debug!(face = %name, "face loaded"),
            Err(e) => {
                failed += 1;
                warn!(face = %name, error = %e, "could not load face");
            }
        }
    }
    failed
}
