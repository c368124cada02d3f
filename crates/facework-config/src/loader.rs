// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./facework.toml` > `~/.config/facework/facework.toml` >
//! `/etc/facework/facework.toml`, with `FACEWORK_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::FaceworkConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/facework/facework.toml";

/// Config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "facework.toml";

/// Path of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("facework").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/facework/facework.toml`
/// 3. `~/.config/facework/facework.toml`
/// 4. `./facework.toml`
/// 5. `FACEWORK_*` environment variables
pub fn load_config() -> Result<FaceworkConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<FaceworkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FaceworkConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from an explicit file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FaceworkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FaceworkConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for the default hierarchy, before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(FaceworkConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping `FACEWORK_<SECTION>_<KEY>` to `section.key`.
///
/// Keys reach the mapper uppercase, so they are lowercased first. Only the
/// underscore after the section name becomes a dot, so keys that contain
/// underscores stay intact.
fn env_provider() -> Env {
    Env::prefixed("FACEWORK_").map(|key| {
        let key = key.as_str().to_ascii_lowercase();
        let mapped = if let Some(rest) = key.strip_prefix("log_") {
            format!("log.{rest}")
        } else if let Some(rest) = key.strip_prefix("faces_") {
            format!("faces.{rest}")
        } else {
            key
        };
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_log_section() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("FACEWORK_LOG_LEVEL", "debug");
            jail.set_env("FACEWORK_LOG_TRACE", "true");
            let config = load_config().expect("env override should load");
            assert_eq!(config.log.level, "debug");
            assert!(config.log.trace);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_faces_section() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("FACEWORK_FACES_BUILTIN", "false");
            jail.set_env("FACEWORK_FACES_VERSION", "0.1.0");
            let config = load_config().expect("env override should load");
            assert!(!config.faces.builtin);
            assert_eq!(config.faces.version, "0.1.0");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_explicit_path() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[log]\nlevel = \"info\"\n")?;
            jail.set_env("FACEWORK_LOG_TRACE", "true");
            let config = load_config_from_path(Path::new("custom.toml")).expect("should load");
            assert_eq!(config.log.level, "info");
            assert!(config.log.trace);
            Ok(())
        });
    }

    #[test]
    fn local_file_is_picked_up() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
[faces]
builtin = false
dirs = ["./faces"]
"#,
            )?;
            let config = load_config().expect("local file should load");
            assert!(!config.faces.builtin);
            assert_eq!(config.faces.dirs, vec!["./faces"]);
            Ok(())
        });
    }

    #[test]
    fn env_beats_local_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_FILE, "[log]\nlevel = \"info\"\n")?;
            jail.set_env("FACEWORK_LOG_LEVEL", "error");
            let config = load_config().expect("should load");
            assert_eq!(config.log.level, "error");
            Ok(())
        });
    }
}
