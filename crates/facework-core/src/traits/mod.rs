// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions at the seam between the lister and face providers.
//!
//! A [`FaceRegistry`] discovers and loads face modules, resolves a
//! [`Face`] by name and version, and enumerates terminuses per indirection.

pub mod face;
pub mod registry;

pub use face::Face;
pub use registry::{FaceRegistry, load_all};
