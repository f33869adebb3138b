//! Configuration validation for share-menu.

use super::defaults::{FEED_ITEMS_RANGE, STATUS_CLEAR_MS_RANGE};
use super::types::{AppConfig, ClipboardConfig, ShareConfig, UiConfig};
use crate::error::{Result, ShareMenuError};

// ============================================================================
// Configuration Error
// ============================================================================

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.share.validate());
        errors.extend(self.clipboard.validate());
        errors.extend(self.ui.validate());
        errors
    }
}

impl AppConfig {
    /// Return the config if it is valid, or every problem in one error.
    pub fn validated(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(self);
        }
        let details = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(ShareMenuError::config(details))
    }
}

impl Validatable for ShareConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            errors.push(ConfigError::new(
                "share.base_url",
                format!(
                    "Base URL must start with http:// or https://, got '{}'",
                    self.base_url
                ),
            ));
        }
        errors
    }
}

impl Validatable for ClipboardConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(command) = &self.command {
            if command.first().map_or(true, |program| program.trim().is_empty()) {
                errors.push(ConfigError::new(
                    "clipboard.command",
                    "Clipboard command must name a program",
                ));
            }
        }
        errors
    }
}

impl Validatable for UiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !STATUS_CLEAR_MS_RANGE.contains(&self.status_clear_ms) {
            errors.push(ConfigError::new(
                "ui.status_clear_ms",
                format!(
                    "Must be between {} and {}, got {}",
                    STATUS_CLEAR_MS_RANGE.start(),
                    STATUS_CLEAR_MS_RANGE.end(),
                    self.status_clear_ms
                ),
            ));
        }
        if !FEED_ITEMS_RANGE.contains(&self.feed_items) {
            errors.push(ConfigError::new(
                "ui.feed_items",
                format!(
                    "Must be between {} and {}, got {}",
                    FEED_ITEMS_RANGE.start(),
                    FEED_ITEMS_RANGE.end(),
                    self.feed_items
                ),
            ));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_base_url() {
        let config = AppConfig::builder().base_url("ftp://example.com").build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "share.base_url");
    }

    #[test]
    fn test_ui_ranges() {
        let config = AppConfig::builder()
            .status_clear_ms(5)
            .feed_items(0)
            .build();
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["ui.status_clear_ms", "ui.feed_items"]);
    }

    #[test]
    fn test_empty_clipboard_command() {
        let config = AppConfig::builder().clipboard_command(Vec::new()).build();
        assert!(!config.is_valid());

        let config = AppConfig::builder()
            .clipboard_command(vec!["wl-copy".to_string()])
            .build();
        assert!(config.is_valid());
    }

    #[test]
    fn test_validated_joins_errors() {
        let err = AppConfig::builder()
            .status_clear_ms(5)
            .feed_items(0)
            .build()
            .validated()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid configuration:"));
        assert!(msg.contains("ui.status_clear_ms"));
        assert!(msg.contains("; ui.feed_items"));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::new("ui.feed_items", "too many");
        assert_eq!(err.to_string(), "ui.feed_items: too many");
    }
}
