// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;

use facework_core::LogLevel;

use crate::diagnostic::ConfigError;
use crate::model::FaceworkConfig;

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &FaceworkConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.log.level.parse::<LogLevel>().is_err() {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: error, warn, info, debug, trace",
                config.log.level
            ),
        });
    }

    if let Err(e) = semver::Version::parse(&config.faces.version) {
        errors.push(ConfigError::Validation {
            message: format!(
                "faces.version `{}` is not a valid semantic version: {e}",
                config.faces.version
            ),
        });
    }

    let mut seen = HashSet::new();
    for (i, dir) in config.faces.dirs.iter().enumerate() {
        if dir.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("faces.dirs[{i}] must not be empty"),
            });
        } else if !seen.insert(dir.as_str()) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate face directory `{dir}` in faces.dirs"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_validation(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&FaceworkConfig::default()).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = FaceworkConfig::default();
        config.log.level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_validation(&errors, "log.level"));
    }

    #[test]
    fn bad_face_version_fails_validation() {
        let mut config = FaceworkConfig::default();
        config.faces.version = "0.1".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_validation(&errors, "faces.version"));
    }

    #[test]
    fn empty_and_duplicate_dirs_are_all_reported() {
        let mut config = FaceworkConfig::default();
        config.faces.dirs = vec![
            "/srv/faces".to_string(),
            " ".to_string(),
            "/srv/faces".to_string(),
        ];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(has_validation(&errors, "faces.dirs[1]"));
        assert!(has_validation(&errors, "duplicate face directory"));
    }
}
