// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Face manifests, the built-in face catalog, and a registry backed by both.
//!
//! Faces are described by `face.toml`-style manifests. The registry discovers
//! manifest files in configured directories, loads them on demand, and serves
//! face and terminus lookups to the lister.

pub mod catalog;
pub mod manifest;
pub mod registry;

pub use catalog::builtin_catalog;
pub use manifest::{FaceManifest, IndirectionManifest, parse_face_manifest};
pub use registry::{FaceSource, ManifestRegistry};
