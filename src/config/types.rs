//! Configuration types for share-menu.

use super::defaults::{DEFAULT_BASE_URL, DEFAULT_FEED_ITEMS, DEFAULT_STATUS_CLEAR_MS};
use crate::handlers::DEFAULT_WHATSAPP_TEXT;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and overridden by CLI
/// arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Link building for shared items
    pub share: ShareConfig,
    /// Clipboard access
    pub clipboard: ClipboardConfig,
    /// Terminal front end
    pub ui: UiConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// How shared links are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ShareConfig {
    /// Site root; an item's link is `<base_url>/meep/<id>/`
    pub base_url: String,
    /// Text placed before the link in WhatsApp messages
    pub whatsapp_text: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            whatsapp_text: DEFAULT_WHATSAPP_TEXT.to_string(),
        }
    }
}

/// Clipboard access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Command that receives copied text on stdin, e.g. `["wl-copy"]`.
    /// Defaults to `pbcopy` on macOS and `xclip -selection clipboard` elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UiConfig {
    /// How long status messages stay visible, in milliseconds
    pub status_clear_ms: u64,
    /// Number of posts in the demo feed
    pub feed_items: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
            feed_items: DEFAULT_FEED_ITEMS,
        }
    }
}

impl UiConfig {
    #[must_use]
    pub const fn status_clear_after(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.share.base_url = url.into();
        self
    }

    pub fn whatsapp_text(mut self, text: impl Into<String>) -> Self {
        self.config.share.whatsapp_text = text.into();
        self
    }

    pub fn clipboard_command(mut self, command: Vec<String>) -> Self {
        self.config.clipboard.command = Some(command);
        self
    }

    pub const fn status_clear_ms(mut self, ms: u64) -> Self {
        self.config.ui.status_clear_ms = ms;
        self
    }

    pub const fn feed_items(mut self, items: usize) -> Self {
        self.config.ui.feed_items = items;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let config = AppConfig::builder()
            .base_url("https://squeaker.example")
            .feed_items(3)
            .status_clear_ms(500)
            .clipboard_command(vec!["wl-copy".to_string()])
            .build();

        assert_eq!(config.share.base_url, "https://squeaker.example");
        assert_eq!(config.ui.feed_items, 3);
        assert_eq!(config.ui.status_clear_after(), Duration::from_millis(500));
        assert_eq!(config.clipboard.command, Some(vec!["wl-copy".to_string()]));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml_ng::from_str("ui:\n  feed_items: 4\n").unwrap();
        assert_eq!(config.ui.feed_items, 4);
        assert_eq!(config.ui.status_clear_ms, DEFAULT_STATUS_CLEAR_MS);
        assert_eq!(config.share, ShareConfig::default());
    }
}
