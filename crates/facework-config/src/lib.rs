// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Facework face lister.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and miette diagnostic rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use facework_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("log level: {}", config.log.level);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

use tracing::debug;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{FacesConfig, FaceworkConfig, LogConfig};

/// Load configuration from the standard hierarchy and validate it.
///
/// Figment errors are converted to diagnostics with source spans taken from
/// whichever config files exist.
pub fn load_and_validate() -> Result<FaceworkConfig, Vec<ConfigError>> {
    debug!("loading configuration from the default hierarchy");
    match loader::load_config() {
        Ok(config) => validated(config),
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load configuration from an explicit file and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<FaceworkConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::Other(format!(
            "config file {} does not exist",
            path.display()
        ))]);
    }
    debug!(path = %path.display(), "loading configuration file");
    match loader::load_config_from_path(path) {
        Ok(config) => validated(config),
        Err(err) => {
            let sources = read_source(path).into_iter().collect::<Vec<_>>();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<FaceworkConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => validated(config),
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

fn validated(config: FaceworkConfig) -> Result<FaceworkConfig, Vec<ConfigError>> {
    if let Err(errors) = validation::validate_config(&config) {
        debug!(errors = errors.len(), "configuration failed validation");
        return Err(errors);
    }
    debug!(level = %config.log.level, builtin = config.faces.builtin, "configuration loaded");
    Ok(config)
}

/// Collect the contents of every config file in the hierarchy that exists.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::LOCAL_CONFIG_FILE))
        .unwrap_or_else(|_| loader::LOCAL_CONFIG_FILE.into());

    [
        Some(local),
        loader::user_config_path(),
        Some(loader::SYSTEM_CONFIG_PATH.into()),
    ]
    .into_iter()
    .flatten()
    .filter_map(|p| read_source(&p))
    .collect()
}

fn read_source(path: &Path) -> Option<(String, String)> {
    std::fs::read_to_string(path)
        .ok()
        .map(|content| (path.display().to_string(), content))
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn successful_load_is_logged() {
        let config = load_and_validate_str("[faces]\nbuiltin = false\n").expect("valid config");
        assert!(!config.faces.builtin);
        assert!(logs_contain("configuration loaded"));
    }

    #[test]
    #[traced_test]
    fn validation_failure_is_logged() {
        let errors = load_and_validate_str("[log]\nlevel = \"shouty\"\n").expect_err("bad level");
        assert_eq!(errors.len(), 1);
        assert!(logs_contain("configuration failed validation"));
    }
}
