//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! No business logic, no validation, no default value calculation.
//! Interpreting the values (which wizard variant, which platform target)
//! happens during wiring.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Wizard variant name (`full` or `compact`); may be empty
    pub wizard_variant: String,

    /// Platform target name (`native` or `web`); may be empty
    pub platform_target: String,

    /// Vehicle store file path (path info only, no existence check)
    pub vehicles_path: PathBuf,

    /// Session file path (path info only, no existence check)
    pub session_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method must NOT contain any validation or default value logic.
    /// Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            wizard_variant: read_str(toml_value, "wizard", "variant").to_string(),
            platform_target: read_str(toml_value, "platform", "target").to_string(),
            vehicles_path: PathBuf::from(read_str(toml_value, "storage", "vehicles_path")),
            session_path: PathBuf::from(read_str(toml_value, "session", "session_path")),
        })
    }
}

fn read_str<'a>(value: &'a toml::Value, section: &str, key: &str) -> &'a str {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}
