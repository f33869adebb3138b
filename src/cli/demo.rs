//! Demo command handler.
//!
//! Implements the `demo` subcommand: an interactive feed with share menus.

use crate::config::{load_config, AppConfig};
use crate::tui::{run_tui, FeedApp};
use anyhow::{Context, Result};
use std::path::Path;

/// Values given on the command line that override the config file.
#[derive(Debug, Clone, Default)]
pub struct DemoOverrides {
    pub items: Option<usize>,
    pub base_url: Option<String>,
}

impl DemoOverrides {
    /// Layer the values that were given over `config`.
    #[must_use]
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(items) = self.items {
            config.ui.feed_items = items;
        }
        if let Some(url) = &self.base_url {
            config.share.base_url.clone_from(url);
        }
        config
    }
}

/// Resolve the effective configuration for the demo.
pub(crate) fn resolve_config(
    config_path: Option<&Path>,
    overrides: &DemoOverrides,
) -> Result<AppConfig> {
    let (config, loaded_from) = load_config(config_path)?;
    if let Some(path) = &loaded_from {
        tracing::info!("Loaded config from {}", path.display());
    }

    Ok(overrides.apply(config).validated()?)
}

/// Run the demo command
pub fn run_demo(config_path: Option<&Path>, overrides: &DemoOverrides) -> Result<i32> {
    let config = resolve_config(config_path, overrides)?;
    tracing::info!(
        items = config.ui.feed_items,
        base_url = %config.share.base_url,
        "starting feed demo"
    );

    let mut app = FeedApp::from_config(&config);
    let result = run_tui(&mut app);
    // Already disposed after a normal quit; this covers a failed session.
    app.controller.dispose();
    result.context("terminal session failed")?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_over_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("share-menu.yaml");
        std::fs::write(&path, "ui:\n  feed_items: 30\n").expect("write config");

        let overrides = DemoOverrides {
            items: None,
            base_url: Some("https://squeaker.example".to_string()),
        };
        let config = resolve_config(Some(path.as_path()), &overrides).expect("valid config");

        assert_eq!(config.ui.feed_items, 30);
        assert_eq!(config.share.base_url, "https://squeaker.example");
    }

    #[test]
    fn test_override_equal_to_default_still_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("share-menu.yaml");
        std::fs::write(
            &path,
            "share:\n  base_url: https://file.example\nui:\n  feed_items: 30\n",
        )
        .expect("write config");

        let overrides = DemoOverrides {
            items: Some(crate::config::DEFAULT_FEED_ITEMS),
            base_url: Some(crate::config::DEFAULT_BASE_URL.to_string()),
        };
        let config = resolve_config(Some(path.as_path()), &overrides).expect("valid config");

        assert_eq!(config.ui.feed_items, crate::config::DEFAULT_FEED_ITEMS);
        assert_eq!(config.share.base_url, crate::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("share-menu.yaml");
        std::fs::write(&path, "ui:\n  feed_items: 30\n").expect("write config");

        let overrides = DemoOverrides {
            items: Some(0),
            base_url: None,
        };
        let err =
            resolve_config(Some(path.as_path()), &overrides).expect_err("zero items is invalid");
        assert!(err.to_string().contains("feed_items"));
    }

    #[test]
    fn test_named_config_that_is_missing_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.yaml");

        let err = resolve_config(Some(path.as_path()), &DemoOverrides::default())
            .expect_err("named file must exist");
        assert!(err.to_string().contains("missing.yaml"));
    }
}
