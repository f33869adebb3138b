//! Stimuli the controller reacts to.

use crate::model::{MenuId, ShareAction};
use crate::region::ClickOrigin;

/// An input routed to [`PopupMenuController::handle_event`].
///
/// [`PopupMenuController::handle_event`]: super::PopupMenuController::handle_event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// A menu's trigger was activated
    Trigger(MenuId),
    /// A click happened somewhere in the document
    DocumentClick(ClickOrigin),
    /// An action was picked inside a menu
    Select { menu: MenuId, action: ShareAction },
    /// The user asked to dismiss whatever is open
    Escape,
}
