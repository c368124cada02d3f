// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Facework tests.
//!
//! Provides in-memory faces and registries with injectable failures, so the
//! lister can be exercised without manifest files.
//!
//! # Components
//!
//! - [`StaticFace`] - Face with a fixed action list or a fixed failure
//! - [`StaticRegistry`] - Insertion-ordered registry built from static tables

pub mod static_face;
pub mod static_registry;

pub use static_face::StaticFace;
pub use static_registry::{StaticRegistry, scenario_registry};
