// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Facework face lister.
//!
//! This crate provides the trait definitions, error types, and common types
//! shared by the registry implementations, the configuration layer, and the
//! `facework` binary.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{FaceworkError, LookupError};
pub use traits::{Face, FaceRegistry, load_all};
pub use types::{Action, DEFAULT_FACE_VERSION, LogLevel, Section, Sections, Terminus};
