//! External share actions (WhatsApp, Facebook).

use super::{ActionHandler, HandlerOutcome};
use crate::error::HandlerError;
use crate::model::ActionRequest;
use crate::notify::{Notifier, NotifyLevel};
use std::cell::RefCell;
use std::process::{Command, Stdio};
use std::rc::Rc;

/// Default text placed before the link in WhatsApp messages.
pub const DEFAULT_WHATSAPP_TEXT: &str = "Check this out: ";

const WHATSAPP_BASE: &str = "https://wa.me/?text=";
const FACEBOOK_BASE: &str = "https://www.facebook.com/sharer/sharer.php?u=";

/// Share link for WhatsApp: the prefix text and the item URL, percent-encoded.
#[must_use]
pub fn whatsapp_share_url(text: &str, url: &str) -> String {
    let message = format!("{text}{url}");
    format!("{WHATSAPP_BASE}{}", urlencoding::encode(&message))
}

/// Share dialog link for Facebook.
#[must_use]
pub fn facebook_share_url(url: &str) -> String {
    format!("{FACEBOOK_BASE}{}", urlencoding::encode(url))
}

/// Where an external share goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    WhatsApp,
    Facebook,
}

impl ShareTarget {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Facebook => "Facebook",
        }
    }
}

/// Opens a URL outside the application (browser, share dialog).
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), HandlerError>;
}

/// Opens URLs with `open` on macOS and `xdg-open` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), HandlerError> {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        // The browser outlives us; don't wait on it.
        Command::new(program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|e| HandlerError::Open {
                url: url.to_string(),
                message: format!("{program}: {e}"),
            })
    }
}

/// Records opened URLs instead of opening them.
#[derive(Debug, Default)]
pub struct MemoryOpener {
    opened: RefCell<Vec<String>>,
}

impl MemoryOpener {
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for MemoryOpener {
    fn open(&self, url: &str) -> Result<(), HandlerError> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Opens the share link for one external service.
pub struct ExternalShareHandler {
    target: ShareTarget,
    opener: Rc<dyn UrlOpener>,
    notifier: Rc<dyn Notifier>,
    whatsapp_text: String,
}

impl ExternalShareHandler {
    pub fn new(target: ShareTarget, opener: Rc<dyn UrlOpener>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            target,
            opener,
            notifier,
            whatsapp_text: DEFAULT_WHATSAPP_TEXT.to_string(),
        }
    }

    /// Replace the text placed before the link in WhatsApp messages.
    #[must_use]
    pub fn with_whatsapp_text(mut self, text: impl Into<String>) -> Self {
        self.whatsapp_text = text.into();
        self
    }

    /// The link this handler opens for `url`.
    #[must_use]
    pub fn share_url(&self, url: &str) -> String {
        match self.target {
            ShareTarget::WhatsApp => whatsapp_share_url(&self.whatsapp_text, url),
            ShareTarget::Facebook => facebook_share_url(url),
        }
    }
}

impl ActionHandler for ExternalShareHandler {
    fn handle(&mut self, request: &ActionRequest) -> HandlerOutcome {
        let link = self.share_url(&request.payload.url);
        self.opener.open(&link).map_err(|e| {
            tracing::warn!("{} share failed: {e}", self.target.name());
            self.notifier.notify(
                &format!("Could not open {}", self.target.name()),
                NotifyLevel::Error,
            );
            e
        })
    }
}
