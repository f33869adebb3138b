//! Data model for share menus.
//!
//! A [`PopupMenu`] exists for each rendered content item and carries the
//! [`MenuPayload`] its actions need. Picking a [`ShareAction`] from an open
//! menu produces a transient [`ActionRequest`].

mod action;
mod menu;

pub use action::ShareAction;
pub use menu::{ActionRequest, MenuId, MenuPayload, MenuState, PopupMenu, MENU_ID_PREFIX};
