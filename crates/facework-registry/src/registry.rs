// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Face registry backed by the built-in catalog and manifest directories.
//!
//! `ManifestRegistry` stores one entry per face name. Built-in faces are
//! loaded on registration; manifests found on disk are only read when
//! [`FaceRegistry::load`] is called for them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use facework_core::{Face, FaceRegistry, FaceworkError, LookupError, Terminus};
use semver::Version;
use tracing::{debug, info};

use crate::catalog::builtin_catalog;
use crate::manifest::{FaceManifest, parse_face_manifest};

/// Where a face entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceSource {
    /// Compiled into the binary.
    Builtin,
    /// Read from a manifest file.
    File(PathBuf),
}

impl std::fmt::Display for FaceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceSource::Builtin => write!(f, "builtin"),
            FaceSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
enum FaceState {
    Pending,
    Loaded(FaceManifest),
    /// Load failed; the message is replayed on every lookup.
    Failed(String),
}

#[derive(Debug)]
struct FaceEntry {
    source: FaceSource,
    state: FaceState,
}

impl FaceEntry {
    /// The loaded manifest, or the replayed load failure.
    fn manifest(&self, name: &str) -> Result<&FaceManifest, LookupError> {
        match &self.state {
            FaceState::Loaded(m) => Ok(m),
            FaceState::Failed(message) => Err(LookupError::load(name, message.as_str())),
            FaceState::Pending => Err(LookupError::load(name, "face has not been loaded")),
        }
    }
}

/// Registry of faces keyed by name, listed in ascending name order.
#[derive(Debug, Default)]
pub struct ManifestRegistry {
    entries: BTreeMap<String, FaceEntry>,
}

impl ManifestRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every face from the built-in catalog.
    pub fn with_builtin(mut self) -> Self {
        for manifest in builtin_catalog() {
            self.register(manifest);
        }
        self
    }

    /// Register an already-parsed face as a loaded built-in.
    pub fn register(&mut self, manifest: FaceManifest) {
        self.entries.insert(
            manifest.name.clone(),
            FaceEntry {
                source: FaceSource::Builtin,
                state: FaceState::Loaded(manifest),
            },
        );
    }

    /// Scan `dir` for `*.toml` manifests and make each one available.
    ///
    /// The file stem names the face. A manifest shadows a built-in face of
    /// the same name. A missing directory is skipped; any other read error
    /// is returned. Returns the number of manifests found.
    pub fn discover(&mut self, dir: &Path) -> Result<usize, FaceworkError> {
        if !dir.exists() {
            debug!(dir = %dir.display(), "face directory does not exist, skipping");
            return Ok(0);
        }

        let io_err = |source| FaceworkError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut found = 0;
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned) else {
                debug!(path = %path.display(), "skipping manifest with non-UTF-8 name");
                continue;
            };
            if let Some(previous) = self.entries.get(&name) {
                debug!(face = %name, shadowed = %previous.source, "manifest shadows face");
            }
            self.entries.insert(
                name,
                FaceEntry {
                    source: FaceSource::File(path),
                    state: FaceState::Pending,
                },
            );
            found += 1;
        }

        info!(dir = %dir.display(), count = found, "face manifests discovered");
        Ok(found)
    }

    /// Where the named face came from, if known.
    pub fn source(&self, name: &str) -> Option<&FaceSource> {
        self.entries.get(name).map(|e| &e.source)
    }

    /// The loaded manifest for a face, if it loaded successfully.
    pub fn manifest(&self, name: &str) -> Option<&FaceManifest> {
        match self.entries.get(name).map(|e| &e.state) {
            Some(FaceState::Loaded(m)) => Some(m),
            _ => None,
        }
    }

    /// Returns the number of registered faces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no faces are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_manifest(name: &str, path: &Path) -> Result<FaceManifest, LookupError> {
    let content = std::fs::read_to_string(path).map_err(|e| LookupError::load(name, e))?;
    let manifest = parse_face_manifest(&content).map_err(|e| LookupError::load(name, e))?;
    if manifest.name != name {
        return Err(LookupError::load(
            name,
            format!(
                "{} declares face `{}`, expected `{name}`",
                path.display(),
                manifest.name
            ),
        ));
    }
    Ok(manifest)
}

impl FaceRegistry for ManifestRegistry {
    fn available(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn load(&mut self, name: &str) -> Result<(), LookupError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| LookupError::load(name, "no such face module"))?;

        let path = match (&entry.state, &entry.source) {
            (FaceState::Loaded(_), _) => return Ok(()),
            (FaceState::Failed(message), _) => {
                return Err(LookupError::load(name, message.as_str()));
            }
            (FaceState::Pending, FaceSource::File(path)) => path.clone(),
            (FaceState::Pending, FaceSource::Builtin) => {
                return Err(LookupError::load(name, "builtin face has no manifest"));
            }
        };

        match read_manifest(name, &path) {
            Ok(manifest) => {
                debug!(face = %name, version = %manifest.version, "face manifest loaded");
                entry.state = FaceState::Loaded(manifest);
                Ok(())
            }
            Err(e) => {
                let message = match &e {
                    LookupError::Load { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                entry.state = FaceState::Failed(message);
                Err(e)
            }
        }
    }

    fn face_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn face(&self, name: &str, version: &Version) -> Result<&dyn Face, LookupError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| LookupError::not_found(name, version))?;
        let manifest = entry.manifest(name)?;
        if manifest.version == *version {
            Ok(manifest as &dyn Face)
        } else {
            debug!(face = %name, wanted = %version, found = %manifest.version, "face version mismatch");
            Err(LookupError::not_found(name, version))
        }
    }

    fn terminuses(&self, indirection: &str) -> Result<Vec<Terminus>, LookupError> {
        let entry = self
            .entries
            .get(indirection)
            .ok_or_else(|| LookupError::NoIndirection {
                name: indirection.to_string(),
            })?;
        let manifest = entry.manifest(indirection)?;
        match &manifest.indirection {
            Some(i) if !i.terminuses.is_empty() => Ok(i.terminuses.clone()),
            _ => Err(LookupError::NoTerminuses {
                name: indirection.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use facework_core::{DEFAULT_FACE_VERSION, load_all};

    use super::*;

    fn write_manifest(dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).unwrap();
    }

    const FILESERVER: &str = r#"
[face]
name = "fileserver"
version = "0.0.1"
actions = ["save", "find"]

[indirection]
terminuses = ["rest", "file"]
"#;

    const REPORT: &str = r#"
[face]
name = "report"
version = "0.0.1"
actions = ["save"]
"#;

    #[test]
    fn builtin_registry_lists_sorted_names() {
        let registry = ManifestRegistry::new().with_builtin();
        let names = registry.face_names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(registry.len(), builtin_catalog().len());
        assert_eq!(registry.source("node"), Some(&FaceSource::Builtin));
    }

    #[test]
    fn discover_then_load_reads_manifests() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "fileserver.toml", FILESERVER);
        write_manifest(dir.path(), "report.toml", REPORT);
        write_manifest(dir.path(), "README.md", "not a manifest");

        let mut registry = ManifestRegistry::new();
        assert_eq!(registry.discover(dir.path()).unwrap(), 2);
        assert_eq!(registry.available(), vec!["fileserver", "report"]);
        assert!(registry.manifest("fileserver").is_none());

        assert_eq!(load_all(&mut registry), 0);
        let face = registry
            .face("fileserver", &DEFAULT_FACE_VERSION)
            .expect("fileserver should resolve");
        assert_eq!(face.actions().unwrap().len(), 2);
        assert_eq!(
            registry.terminuses("fileserver").unwrap(),
            vec![Terminus::new("rest"), Terminus::new("file")]
        );
    }

    #[test]
    fn face_without_indirection_has_no_backends() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "report.toml", REPORT);

        let mut registry = ManifestRegistry::new();
        registry.discover(dir.path()).unwrap();
        load_all(&mut registry);

        let err = registry.terminuses("report").unwrap_err();
        assert!(matches!(err, LookupError::NoTerminuses { .. }));
        assert!(err.to_string().contains("no backends registered"));
    }

    #[test]
    fn unknown_indirection_is_an_error() {
        let registry = ManifestRegistry::new().with_builtin();
        assert!(matches!(
            registry.terminuses("nonexistent"),
            Err(LookupError::NoIndirection { .. })
        ));
    }

    #[test]
    fn unknown_face_or_version_is_not_found() {
        let registry = ManifestRegistry::new().with_builtin();
        assert!(matches!(
            registry.face("nonexistent", &DEFAULT_FACE_VERSION),
            Err(LookupError::NotFound { .. })
        ));
        assert!(matches!(
            registry.face("parser", &DEFAULT_FACE_VERSION),
            Err(LookupError::NotFound { .. })
        ));
        let parser = registry
            .face("parser", &Version::new(0, 1, 0))
            .expect("parser exists at 0.1.0");
        assert_eq!(parser.version(), &Version::new(0, 1, 0));
    }

    #[test]
    fn loaded_face_and_terminuses_resolve_together() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "fileserver.toml", FILESERVER);

        let mut registry = ManifestRegistry::new();
        registry.discover(dir.path()).unwrap();
        registry.load("fileserver").unwrap();

        let face = registry.face("fileserver", &DEFAULT_FACE_VERSION).expect("loaded");
        let terminuses = registry.terminuses("fileserver").unwrap();
        assert_eq!(face.name(), "fileserver");
        assert_eq!(terminuses.len(), 2);
    }

    #[test]
    fn broken_manifest_fails_every_lookup() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "catalog.toml", "[face]\nname = \"catalog\"\n");

        let mut registry = ManifestRegistry::new();
        registry.discover(dir.path()).unwrap();
        assert_eq!(load_all(&mut registry), 1);

        assert_eq!(registry.face_names(), vec!["catalog"]);
        assert!(matches!(
            registry.face("catalog", &DEFAULT_FACE_VERSION),
            Err(LookupError::Load { .. })
        ));
        let err = registry.terminuses("catalog").unwrap_err();
        assert!(err.to_string().contains("catalog"), "got: {err}");
        assert!(registry.load("catalog").is_err(), "failure is remembered");
    }

    #[test]
    fn manifest_name_must_match_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "files.toml", FILESERVER);

        let mut registry = ManifestRegistry::new();
        registry.discover(dir.path()).unwrap();
        let err = registry.load("files").unwrap_err().to_string();
        assert!(err.contains("declares face `fileserver`"), "got: {err}");
    }

    #[test]
    fn manifest_shadows_builtin() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "report.toml", REPORT);

        let mut registry = ManifestRegistry::new().with_builtin();
        let before = registry.len();
        registry.discover(dir.path()).unwrap();
        assert_eq!(registry.len(), before);
        assert!(matches!(registry.source("report"), Some(FaceSource::File(_))));

        registry.load("report").unwrap();
        assert!(registry.terminuses("report").is_err());
    }

    #[test]
    fn pending_face_reports_not_loaded() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "report.toml", REPORT);

        let mut registry = ManifestRegistry::new();
        registry.discover(dir.path()).unwrap();
        let err = registry
            .face("report", &DEFAULT_FACE_VERSION)
            .err()
            .expect("pending face should not resolve")
            .to_string();
        assert!(err.contains("has not been loaded"), "got: {err}");
    }

    #[test]
    fn missing_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = ManifestRegistry::new();
        assert_eq!(registry.discover(&dir.path().join("absent")).unwrap(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn loading_unknown_module_fails() {
        let mut registry = ManifestRegistry::new();
        assert!(registry.load("ghost").is_err());
    }
}
