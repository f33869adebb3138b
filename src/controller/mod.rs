//! Popup menu controller.
//!
//! [`PopupMenuController`] owns the open/closed state of every share menu on
//! the page and keeps at most one of them open. It reacts to three stimuli:
//!
//! - a trigger activation on one menu ([`PopupMenuController::toggle`]),
//! - a click anywhere in the document ([`PopupMenuController::dismiss_all`]),
//! - an action picked inside the open menu
//!   ([`PopupMenuController::select_action`]).
//!
//! Operations never fail. When one cannot apply (unknown menu, closed menu,
//! action without a handler) it leaves every menu untouched and returns a
//! [`ControllerMiss`] the caller may log.
//!
//! # Example
//!
//! ```
//! use share_menu::controller::PopupMenuController;
//! use share_menu::model::{MenuId, MenuPayload, MenuState};
//!
//! let mut controller = PopupMenuController::new();
//! let a = controller.register_item("1", MenuPayload::for_item("https://example.com", "1"));
//! let b = controller.register_item("2", MenuPayload::for_item("https://example.com", "2"));
//!
//! controller.toggle(&a).unwrap();
//! assert!(controller.is_visible(&a));
//!
//! controller.toggle(&b).unwrap();
//! assert_eq!(controller.state_of(&a), Some(MenuState::Closed));
//! assert_eq!(controller.open_menu(), Some(&b));
//! ```

mod event;
mod registry;
mod shared;

pub use event::ControllerEvent;
pub use registry::HandlerRegistry;
pub use shared::SharedController;

use crate::error::ControllerMiss;
use crate::handlers::ActionHandler;
use crate::model::{ActionRequest, MenuId, MenuPayload, MenuState, PopupMenu, ShareAction};
use crate::region::{ClickOrigin, OwnerRegion};
use indexmap::IndexMap;

/// Visibility controller for a set of popup menus.
#[derive(Debug, Default)]
pub struct PopupMenuController {
    /// Rendered menus, in registration order
    menus: IndexMap<MenuId, PopupMenu>,
    /// The single open menu, if any
    open: Option<MenuId>,
    handlers: HandlerRegistry,
    disposed: bool,
}

impl PopupMenuController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Render collaborator
    // ------------------------------------------------------------------

    /// Record a rendered menu. Re-registering an id replaces its payload and
    /// keeps its visibility.
    pub fn register_menu(&mut self, id: MenuId, payload: MenuPayload) -> Result<(), ControllerMiss> {
        self.ensure_live()?;
        match self.menus.get_mut(&id) {
            Some(menu) => menu.payload = payload,
            None => {
                tracing::debug!(menu = %id, "menu registered");
                self.menus.insert(id.clone(), PopupMenu::new(id, payload));
            }
        }
        Ok(())
    }

    /// Record the menu of a content item, deriving its id from `item_id`.
    ///
    /// Returns the menu id even after [`dispose`](Self::dispose), in which
    /// case nothing is recorded.
    pub fn register_item(&mut self, item_id: &str, payload: MenuPayload) -> MenuId {
        let id = MenuId::for_item(item_id);
        if let Err(miss) = self.register_menu(id.clone(), payload) {
            tracing::debug!("register_item ignored: {miss}");
        }
        id
    }

    /// Forget a menu whose item left the page. Removing the open menu leaves
    /// no menu open.
    pub fn remove_menu(&mut self, id: &MenuId) -> Option<PopupMenu> {
        let removed = self.menus.shift_remove(id)?;
        if self.open.as_ref() == Some(id) {
            self.open = None;
        }
        tracing::debug!(menu = %id, "menu removed");
        Some(removed)
    }

    /// Record where the owner wrapper of `id` (trigger plus popup) is drawn.
    pub fn set_owner_region(
        &mut self,
        id: &MenuId,
        region: Option<OwnerRegion>,
    ) -> Result<(), ControllerMiss> {
        self.ensure_live()?;
        let menu = self
            .menus
            .get_mut(id)
            .ok_or_else(|| ControllerMiss::UnresolvedTarget(id.clone()))?;
        menu.owner = region;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------

    /// Associate `handler` with `action`. The last registration wins; the
    /// replaced handler is returned.
    pub fn register_handler(
        &mut self,
        action: ShareAction,
        handler: impl ActionHandler + 'static,
    ) -> Option<Box<dyn ActionHandler>> {
        self.register_boxed_handler(action, Box::new(handler))
    }

    pub fn register_boxed_handler(
        &mut self,
        action: ShareAction,
        handler: Box<dyn ActionHandler>,
    ) -> Option<Box<dyn ActionHandler>> {
        if self.disposed {
            tracing::debug!(%action, "handler registration after dispose ignored");
            return None;
        }
        self.handlers.register(action, handler)
    }

    #[must_use]
    pub fn has_handler(&self, action: ShareAction) -> bool {
        self.handlers.contains(action)
    }

    #[must_use]
    pub const fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    // ------------------------------------------------------------------
    // Stimuli
    // ------------------------------------------------------------------

    /// Flip menu `id`, closing every other menu first.
    ///
    /// Returns the new state of `id`. Afterwards `id` is open exactly when it
    /// was closed before.
    pub fn toggle(&mut self, id: &MenuId) -> Result<MenuState, ControllerMiss> {
        self.ensure_live()?;
        if !self.menus.contains_key(id) {
            return Err(self.miss(ControllerMiss::UnresolvedTarget(id.clone())));
        }

        let state = if self.open.as_ref() == Some(id) {
            self.open = None;
            MenuState::Closed
        } else {
            if let Some(previous) = self.open.replace(id.clone()) {
                tracing::debug!(menu = %previous, "closed by another menu opening");
            }
            MenuState::Open
        };
        tracing::debug!(menu = %id, ?state, "toggled");
        Ok(state)
    }

    /// Close every menu unless `origin` lies inside some popup owner.
    ///
    /// Returns `true` if the click counted as outside. Calling it again with
    /// the same outside origin is harmless.
    pub fn dismiss_all(&mut self, origin: &ClickOrigin) -> bool {
        if self.disposed || self.is_inside_owner(origin) {
            return false;
        }
        if let Some(closed) = self.open.take() {
            tracing::debug!(menu = %closed, "dismissed by outside click");
        }
        true
    }

    /// Whether `origin` falls inside any popup owner.
    #[must_use]
    pub fn is_inside_owner(&self, origin: &ClickOrigin) -> bool {
        match origin {
            ClickOrigin::Point { column, row } => self
                .menus
                .values()
                .filter_map(|menu| menu.owner)
                .any(|owner| owner.contains(*column, *row)),
            ClickOrigin::InsideOwner(_) => true,
            ClickOrigin::Outside => false,
        }
    }

    /// Run the handler for `action` on open menu `id`, then close the menu
    /// whatever the handler's outcome.
    ///
    /// Returns the request that was dispatched. The handler's own failure is
    /// logged here and is its notifier's business; it never turns into a
    /// miss.
    pub fn select_action(
        &mut self,
        id: &MenuId,
        action: ShareAction,
    ) -> Result<ActionRequest, ControllerMiss> {
        self.ensure_live()?;
        let Some(menu) = self.menus.get(id) else {
            return Err(self.miss(ControllerMiss::UnresolvedTarget(id.clone())));
        };
        if self.open.as_ref() != Some(id) {
            return Err(self.miss(ControllerMiss::MenuClosed(id.clone())));
        }
        if !self.handlers.contains(action) {
            return Err(self.miss(ControllerMiss::UnregisteredAction(action)));
        }

        let request = ActionRequest::new(id.clone(), action, menu.payload.clone());
        match self.handlers.dispatch(&request) {
            Some(Ok(())) => tracing::debug!(menu = %id, %action, "action handled"),
            Some(Err(e)) => tracing::warn!(menu = %id, %action, "action handler failed: {e}"),
            None => {}
        }

        self.open = None;
        Ok(request)
    }

    /// Close whichever menu is open. Returns the menu that was closed.
    pub fn close_all(&mut self) -> Option<MenuId> {
        self.open.take()
    }

    /// Route one external stimulus.
    pub fn handle_event(&mut self, event: ControllerEvent) -> Result<(), ControllerMiss> {
        self.ensure_live()?;
        match event {
            ControllerEvent::Trigger(id) => self.toggle(&id).map(drop),
            ControllerEvent::DocumentClick(origin) => {
                self.dismiss_all(&origin);
                Ok(())
            }
            ControllerEvent::Select { menu, action } => self.select_action(&menu, action).map(drop),
            ControllerEvent::Escape => {
                self.close_all();
                Ok(())
            }
        }
    }

    /// Tear the controller down: close and forget every menu, drop every
    /// handler. Later operations are no-ops returning
    /// [`ControllerMiss::Disposed`].
    ///
    /// Dropping the handlers also breaks reference cycles formed by handlers
    /// that hold a [`SharedController`].
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.open = None;
        self.menus.clear();
        self.handlers.clear();
        self.disposed = true;
        tracing::debug!("controller disposed");
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn is_visible(&self, id: &MenuId) -> bool {
        self.open.as_ref() == Some(id)
    }

    #[must_use]
    pub const fn open_menu(&self) -> Option<&MenuId> {
        self.open.as_ref()
    }

    /// State of menu `id`, or `None` when no such menu is registered.
    #[must_use]
    pub fn state_of(&self, id: &MenuId) -> Option<MenuState> {
        self.menus.contains_key(id).then(|| {
            if self.is_visible(id) {
                MenuState::Open
            } else {
                MenuState::Closed
            }
        })
    }

    #[must_use]
    pub fn menu(&self, id: &MenuId) -> Option<&PopupMenu> {
        self.menus.get(id)
    }

    /// Registered menus in registration order.
    pub fn menus(&self) -> impl Iterator<Item = &PopupMenu> {
        self.menus.values()
    }

    /// Every menu with its state, in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(MenuId, MenuState)> {
        self.menus
            .keys()
            .map(|id| {
                let state = if self.is_visible(id) {
                    MenuState::Open
                } else {
                    MenuState::Closed
                };
                (id.clone(), state)
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn ensure_live(&self) -> Result<(), ControllerMiss> {
        if self.disposed {
            Err(ControllerMiss::Disposed)
        } else {
            Ok(())
        }
    }

    fn miss(&self, miss: ControllerMiss) -> ControllerMiss {
        if miss.is_configuration_defect() {
            tracing::warn!("share menu misconfigured: {miss}");
        } else {
            tracing::debug!("ignored: {miss}");
        }
        miss
    }
}
