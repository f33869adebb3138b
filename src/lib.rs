//! **Share menus for a social feed.**
//!
//! `share-menu` implements the per-post share menu of a social feed as a
//! plain state machine that can be driven and tested without any rendering
//! surface, plus a terminal front end that binds it to a screen.
//!
//! ## Core Concepts & Modules
//!
//! - **[`controller`]**: [`PopupMenuController`] keeps at most one menu open,
//!   dismisses menus on outside clicks, and dispatches a picked action to the
//!   handler registered for it, closing the menu whatever the outcome.
//!   [`SharedController`] queues operations that handlers send back while a
//!   dispatch is running.
//! - **[`model`]**: [`MenuId`], [`MenuPayload`], [`ShareAction`] and the
//!   transient [`ActionRequest`].
//! - **[`handlers`]**: default handlers for copying a link, reposting, and
//!   sharing to WhatsApp or Facebook, each behind a small collaborator trait.
//! - **[`notify`]**: the [`Notifier`] handlers report outcomes through.
//! - **[`region`]**: click origins and popup-owner regions.
//! - **[`config`]**: YAML configuration discovery, loading and validation.
//! - **[`tui`]**: the ratatui feed.
//! - **[`cli`]**: handlers behind the `share-menu` subcommands.
//!
//! ## Getting Started
//!
//! ```
//! use share_menu::{MemoryNotifier, MenuPayload, PopupMenuController, ShareAction};
//! use share_menu::handlers::{CopyLinkHandler, MemoryClipboard};
//! use share_menu::region::ClickOrigin;
//! use std::rc::Rc;
//!
//! let clipboard = MemoryClipboard::default();
//! let notifier = Rc::new(MemoryNotifier::new());
//!
//! let mut controller = PopupMenuController::new();
//! controller.register_handler(
//!     ShareAction::Copy,
//!     CopyLinkHandler::new(Box::new(clipboard.clone()), notifier.clone()),
//! );
//! let menu = controller.register_item("42", MenuPayload::for_item("https://example.com", "42"));
//!
//! controller.toggle(&menu).unwrap();
//! controller.select_action(&menu, ShareAction::Copy).unwrap();
//!
//! assert_eq!(clipboard.contents().as_deref(), Some("https://example.com/meep/42/"));
//! assert!(!controller.is_visible(&menu));
//!
//! // Clicking outside every menu is always safe.
//! controller.dismiss_all(&ClickOrigin::Outside);
//! ```

#![warn(clippy::unwrap_used)]
#![allow(
    // Cell coordinates are u16 while indices are usize
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unused_self
)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod model;
pub mod notify;
pub mod region;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use controller::{ControllerEvent, HandlerRegistry, PopupMenuController, SharedController};
pub use error::{ControllerMiss, HandlerError, Result, ShareMenuError};
pub use handlers::{ActionHandler, HandlerOutcome};
pub use model::{ActionRequest, MenuId, MenuPayload, MenuState, PopupMenu, ShareAction};
pub use notify::{MemoryNotifier, Notifier, NotifyLevel, StatusNotifier, TracingNotifier};
pub use region::{ClickOrigin, OwnerRegion};
