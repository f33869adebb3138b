//! Error types for share-menu.
//!
//! The controller itself never fails: operations that cannot apply return a
//! [`ControllerMiss`] describing why nothing happened. Action handlers report
//! failures as [`HandlerError`], which the controller logs and drops.
//! [`ShareMenuError`] covers everything around the controller (configuration,
//! IO, terminal setup).

use crate::model::{MenuId, ShareAction};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for share-menu operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShareMenuError {
    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup or drawing failed
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    /// An action tag that names no known action
    #[error("Unknown share action '{0}' (expected one of: copy, repost, whatsapp, facebook)")]
    UnknownAction(String),
}

/// Why a controller operation left the menus untouched.
///
/// None of these are failures: the caller may log them, the controller only
/// reports them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerMiss {
    /// The id does not resolve to a rendered menu
    #[error("no menu registered as '{0}'")]
    UnresolvedTarget(MenuId),

    /// No handler is registered for this action kind
    #[error("no handler registered for action '{0}'")]
    UnregisteredAction(ShareAction),

    /// An action was selected on a menu that is not open
    #[error("menu '{0}' is not open")]
    MenuClosed(MenuId),

    /// The controller has been disposed
    #[error("controller has been disposed")]
    Disposed,
}

impl ControllerMiss {
    /// Whether this miss points at a wiring mistake rather than a stale event.
    #[must_use]
    pub const fn is_configuration_defect(&self) -> bool {
        matches!(self, Self::UnregisteredAction(_))
    }
}

/// Failure reported by an action handler.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HandlerError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to open {url}: {message}")]
    Open { url: String, message: String },

    #[error("backend rejected request: {0}")]
    Backend(String),

    #[error("handler panicked: {0}")]
    Panicked(String),
}

/// Convenient Result type for share-menu operations
pub type Result<T> = std::result::Result<T, ShareMenuError>;

impl ShareMenuError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for ShareMenuError {
    fn from(err: std::io::Error) -> Self {
        let message = format!("{err}");
        Self::Io {
            path: None,
            message,
            source: err,
        }
    }
}
