// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Insertion-ordered registry built from static tables.
//!
//! Faces are listed in the order they were added. Terminus lists, face
//! lookups, and module loads can each be made to fail independently.

use facework_core::{Face, FaceRegistry, LookupError, Terminus};
use semver::Version;
use tracing::debug;

use crate::static_face::StaticFace;

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    /// `None` means the face is known by name but has no resolvable version.
    face: Option<StaticFace>,
    terminuses: Result<Vec<Terminus>, String>,
    lookup_error: Option<String>,
    load_error: Option<String>,
}

impl Entry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            face: None,
            terminuses: Ok(Vec::new()),
            lookup_error: None,
            load_error: None,
        }
    }
}

/// A [`FaceRegistry`] over in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: Vec<Entry>,
    loaded: Vec<String>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_mut(&mut self, name: &str) -> &mut Entry {
        let index = match self.entries.iter().position(|e| e.name == name) {
            Some(i) => i,
            None => {
                self.entries.push(Entry::new(name));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Add (or replace) a face. Its name is appended to the listing order
    /// the first time it is seen.
    pub fn with_face(mut self, face: StaticFace) -> Self {
        let name = face.name().to_string();
        self.entry_mut(&name).face = Some(face);
        self
    }

    /// Register a face name with no resolvable face behind it.
    pub fn with_name(mut self, name: &str) -> Self {
        self.entry_mut(name);
        self
    }

    pub fn with_terminuses<I, S>(mut self, name: &str, terminuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry_mut(name).terminuses = Ok(terminuses.into_iter().map(Terminus::new).collect());
        self
    }

    /// Make terminus lookup for `name` fail with `message`.
    pub fn failing_terminuses(mut self, name: &str, message: &str) -> Self {
        self.entry_mut(name).terminuses = Err(message.to_string());
        self
    }

    /// Make face lookup for `name` fail with a load error instead of `NotFound`.
    pub fn failing_lookup(mut self, name: &str, message: &str) -> Self {
        self.entry_mut(name).lookup_error = Some(message.to_string());
        self
    }

    /// Make loading the module `name` fail.
    pub fn failing_load(mut self, name: &str, message: &str) -> Self {
        self.entry_mut(name).load_error = Some(message.to_string());
        self
    }

    /// Names passed to [`FaceRegistry::load`], in call order.
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }
}

impl FaceRegistry for StaticRegistry {
    fn available(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    fn load(&mut self, name: &str) -> Result<(), LookupError> {
        self.loaded.push(name.to_string());
        match self.entry(name).and_then(|e| e.load_error.clone()) {
            Some(message) => Err(LookupError::load(name, message)),
            None => {
                debug!(face = %name, "static face loaded");
                Ok(())
            }
        }
    }

    fn face_names(&self) -> Vec<String> {
        self.available()
    }

    fn face(&self, name: &str, version: &Version) -> Result<&dyn Face, LookupError> {
        let entry = self
            .entry(name)
            .ok_or_else(|| LookupError::not_found(name, version))?;
        if let Some(message) = &entry.lookup_error {
            return Err(LookupError::load(name, message.as_str()));
        }
        entry
            .face
            .as_ref()
            .filter(|f| f.version() == version)
            .map(|f| f as &dyn Face)
            .ok_or_else(|| LookupError::not_found(name, version))
    }

    fn terminuses(&self, indirection: &str) -> Result<Vec<Terminus>, LookupError> {
        let entry = self
            .entry(indirection)
            .ok_or_else(|| LookupError::NoIndirection {
                name: indirection.to_string(),
            })?;
        entry
            .terminuses
            .clone()
            .map_err(|message| LookupError::load(indirection, message))
    }
}

/// Two faces: `fileserver` resolves everything, `report` fails its terminus
/// lookup with "no backends registered".
pub fn scenario_registry() -> StaticRegistry {
    StaticRegistry::new()
        .with_face(StaticFace::new("fileserver").with_actions(["save", "find"]))
        .with_terminuses("fileserver", ["rest", "file"])
        .with_face(StaticFace::new("report").with_actions(["save"]))
        .failing_terminuses("report", "no backends registered")
}

#[cfg(test)]
mod tests {
    use facework_core::{DEFAULT_FACE_VERSION, load_all};

    use super::*;

    #[test]
    fn names_keep_insertion_order() {
        let registry = StaticRegistry::new()
            .with_name("zeta")
            .with_face(StaticFace::new("alpha"))
            .with_terminuses("zeta", ["x"]);
        assert_eq!(registry.face_names(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn nameless_entry_is_not_found() {
        let registry = StaticRegistry::new().with_name("ghost");
        assert!(matches!(
            registry.face("ghost", &DEFAULT_FACE_VERSION),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn version_mismatch_is_not_found() {
        let registry = StaticRegistry::new()
            .with_face(StaticFace::new("parser").with_version(Version::new(0, 1, 0)));
        assert!(matches!(
            registry.face("parser", &DEFAULT_FACE_VERSION),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn injected_lookup_failure_is_a_load_error() {
        let registry = StaticRegistry::new()
            .with_face(StaticFace::new("catalog"))
            .failing_lookup("catalog", "version index corrupt");
        let err = registry.face("catalog", &DEFAULT_FACE_VERSION).err().expect("lookup fails");
        assert!(!err.is_not_found());
    }

    #[test]
    fn load_records_calls_and_failures() {
        let mut registry = scenario_registry().failing_load("report", "syntax error");
        assert_eq!(load_all(&mut registry), 1);
        assert_eq!(registry.loaded(), &["fileserver".to_string(), "report".to_string()]);
    }

    #[test]
    fn scenario_registry_fails_report_terminuses() {
        let registry = scenario_registry();
        assert_eq!(registry.terminuses("fileserver").unwrap().len(), 2);
        let err = registry.terminuses("report").unwrap_err().to_string();
        assert!(err.contains("no backends registered"));
    }
}
