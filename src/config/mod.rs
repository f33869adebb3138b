//! Configuration module for share-menu.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Place a `.share-menu.yaml` file in your project root or
//! `~/.config/share-menu/`:
//!
//! ```yaml
//! share:
//!   base_url: "https://squeaker.example"
//! ui:
//!   status_clear_ms: 2000
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_BASE_URL, DEFAULT_FEED_ITEMS, DEFAULT_STATUS_CLEAR_MS};
pub use file::{
    discover_config_file, generate_example_config, load_config, load_config_file,
    load_or_default, ConfigFileError,
};
pub use types::{AppConfig, AppConfigBuilder, ClipboardConfig, ShareConfig, UiConfig};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.share-menu.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_names_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"share\""));
        assert!(schema.contains("\"status_clear_ms\""));
    }
}
