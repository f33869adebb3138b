//! Popup menus and the requests they produce.

use super::ShareAction;
use crate::region::OwnerRegion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix used to derive a menu id from the owning item's id.
pub const MENU_ID_PREFIX: &str = "share-menu-";

/// Opaque identifier of a popup menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(String);

impl MenuId {
    /// Wrap an existing identifier as-is.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the menu id for a content item (`share-menu-<item_id>`).
    #[must_use]
    pub fn for_item(item_id: &str) -> Self {
        Self(format!("{MENU_ID_PREFIX}{item_id}"))
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The owning item's id, if this id was derived with [`MenuId::for_item`].
    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        self.0.strip_prefix(MENU_ID_PREFIX)
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MenuId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Data the action handlers need about the item a menu belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuPayload {
    /// Absolute URL of the content item
    pub url: String,
    /// Backend id of the content item
    pub item_id: String,
}

impl MenuPayload {
    pub fn new(url: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            item_id: item_id.into(),
        }
    }

    /// Build the payload for an item served under `base_url` at `/meep/<id>/`.
    #[must_use]
    pub fn for_item(base_url: &str, item_id: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self::new(format!("{base}/meep/{item_id}/"), item_id)
    }
}

/// Visibility state of a single menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// A popup menu attached to one rendered content item.
///
/// Visibility is not stored here: the controller tracks the single open menu
/// so that two menus can never be open at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupMenu {
    pub id: MenuId,
    pub payload: MenuPayload,
    /// Where the wrapper holding the trigger and the popup was last drawn
    pub owner: Option<OwnerRegion>,
}

impl PopupMenu {
    pub fn new(id: MenuId, payload: MenuPayload) -> Self {
        Self {
            id,
            payload,
            owner: None,
        }
    }
}

/// The selection of `action` on menu `menu_id`, handed to the action handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRequest {
    pub menu_id: MenuId,
    pub action: ShareAction,
    pub payload: MenuPayload,
}

impl ActionRequest {
    pub fn new(menu_id: MenuId, action: ShareAction, payload: MenuPayload) -> Self {
        Self {
            menu_id,
            action,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_id_for_item() {
        let id = MenuId::for_item("42");
        assert_eq!(id.as_str(), "share-menu-42");
        assert_eq!(id.item_id(), Some("42"));
        assert_eq!(MenuId::new("user-dropdown").item_id(), None);
    }

    #[test]
    fn test_payload_for_item_trims_trailing_slash() {
        let payload = MenuPayload::for_item("https://squeaker.example/", "7");
        assert_eq!(payload.url, "https://squeaker.example/meep/7/");
        assert_eq!(payload.item_id, "7");
    }

    #[test]
    fn test_menu_state_default_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::Closed.is_open());
        assert!(MenuState::Open.is_open());
    }
}
