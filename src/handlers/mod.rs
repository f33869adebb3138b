//! Action handlers.
//!
//! A handler performs the real effect of a selected [`ShareAction`] and
//! reports the outcome to the user through a [`Notifier`]. Failures are also
//! returned so the controller can log them; the controller closes the menu
//! either way.
//!
//! Closures implement [`ActionHandler`], so ad-hoc handlers need no type:
//!
//! ```
//! use share_menu::handlers::{ActionHandler, HandlerOutcome};
//! use share_menu::model::{ActionRequest, MenuId, MenuPayload, ShareAction};
//!
//! let mut handler = |request: &ActionRequest| -> HandlerOutcome {
//!     println!("{} -> {}", request.action, request.payload.url);
//!     Ok(())
//! };
//! let request = ActionRequest::new(
//!     MenuId::for_item("1"),
//!     ShareAction::Copy,
//!     MenuPayload::new("https://example.com/meep/1/", "1"),
//! );
//! assert!(handler.handle(&request).is_ok());
//! ```

mod copy;
mod repost;
mod share;

pub use copy::{Clipboard, CopyLinkHandler, MemoryClipboard, SystemClipboard};
pub use repost::{MemoryRepostClient, RepostClient, RepostHandler};
pub use share::{
    facebook_share_url, whatsapp_share_url, ExternalShareHandler, MemoryOpener, ShareTarget,
    SystemOpener, UrlOpener, DEFAULT_WHATSAPP_TEXT,
};

use crate::error::HandlerError;
use crate::model::{ActionRequest, ShareAction};
use crate::notify::Notifier;
use std::rc::Rc;

/// Result of running a handler.
pub type HandlerOutcome = Result<(), HandlerError>;

/// Performs the effect of one action kind.
pub trait ActionHandler {
    fn handle(&mut self, request: &ActionRequest) -> HandlerOutcome;
}

impl<F> ActionHandler for F
where
    F: FnMut(&ActionRequest) -> HandlerOutcome,
{
    fn handle(&mut self, request: &ActionRequest) -> HandlerOutcome {
        self(request)
    }
}

/// Collaborators the default handlers are built from.
pub struct HandlerDeps {
    pub notifier: Rc<dyn Notifier>,
    pub clipboard: Box<dyn Clipboard>,
    pub opener: Rc<dyn UrlOpener>,
    pub repost: Box<dyn RepostClient>,
    /// Text placed before the link in WhatsApp messages
    pub whatsapp_text: String,
}

/// Build the handler for every [`ShareAction`], in [`ShareAction::ALL`] order.
#[must_use]
pub fn default_handlers(deps: HandlerDeps) -> Vec<(ShareAction, Box<dyn ActionHandler>)> {
    let HandlerDeps {
        notifier,
        clipboard,
        opener,
        repost,
        whatsapp_text,
    } = deps;

    vec![
        (
            ShareAction::Copy,
            Box::new(CopyLinkHandler::new(clipboard, Rc::clone(&notifier))) as Box<dyn ActionHandler>,
        ),
        (
            ShareAction::Repost,
            Box::new(RepostHandler::new(repost, Rc::clone(&notifier))),
        ),
        (
            ShareAction::WhatsApp,
            Box::new(
                ExternalShareHandler::new(
                    ShareTarget::WhatsApp,
                    Rc::clone(&opener),
                    Rc::clone(&notifier),
                )
                .with_whatsapp_text(whatsapp_text),
            ),
        ),
        (
            ShareAction::Facebook,
            Box::new(ExternalShareHandler::new(
                ShareTarget::Facebook,
                opener,
                notifier,
            )),
        ),
    ]
}
