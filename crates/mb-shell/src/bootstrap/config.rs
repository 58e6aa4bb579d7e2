//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read the TOML configuration file
//! - Parse TOML into the [`AppConfig`] DTO
//! - Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! No validation, no default values, no business rules. An unknown wizard
//! variant is still a fact at this point; wiring decides what it means.

use anyhow::Context;
use std::path::Path;
use tracing::info;

use mb_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields an empty config.
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "no config file, using empty config");
        return Ok(AppConfig::default());
    }
    load_config(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_valid_toml() {
        let toml_content = r#"
            [wizard]
            variant = "compact"

            [platform]
            target = "web"

            [storage]
            vehicles_path = "/srv/motorbook/vehicles.json"

            [session]
            session_path = "/srv/motorbook/session.json"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.wizard_variant, "compact");
        assert_eq!(config.platform_target, "web");
        assert_eq!(
            config.vehicles_path,
            PathBuf::from("/srv/motorbook/vehicles.json")
        );
        assert_eq!(
            config.session_path,
            PathBuf::from("/srv/motorbook/session.json")
        );
    }

    #[test]
    fn unknown_values_are_accepted_as_facts() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[wizard]\nvariant = \"deluxe\"\n")
            .unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.wizard_variant, "deluxe");
        assert_eq!(config.vehicles_path, PathBuf::new());
    }

    #[test]
    fn invalid_toml_reports_parse_context() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[wizard\nvariant = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn missing_file_is_an_error_unless_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(load_config(&path)
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
        assert_eq!(load_config_or_default(&path).unwrap(), AppConfig::default());
    }
}
