//! `actions` and `share-url` command handlers.

use crate::config::AppConfig;
use crate::controller::PopupMenuController;
use crate::handlers::{
    default_handlers, facebook_share_url, whatsapp_share_url, HandlerDeps, MemoryRepostClient,
    SystemClipboard, SystemOpener,
};
use crate::model::{MenuPayload, ShareAction};
use crate::notify::{MemoryNotifier, Notifier, NotifyLevel, TracingNotifier};
use anyhow::Result;
use std::io::Write;
use std::rc::Rc;

/// The URL an action would hand off for `url`.
///
/// Copy and repost act on the item link itself, so it comes back unchanged.
#[must_use]
pub fn share_url_for(action: ShareAction, url: &str, whatsapp_text: &str) -> String {
    match action {
        ShareAction::WhatsApp => whatsapp_share_url(whatsapp_text, url),
        ShareAction::Facebook => facebook_share_url(url),
        ShareAction::Copy | ShareAction::Repost => url.to_string(),
    }
}

/// Run the actions command: list every action with its tag and label.
pub fn run_actions(out: &mut impl Write) -> Result<i32> {
    for action in ShareAction::ALL {
        writeln!(out, "{:<10} {}", action.tag(), action.label())?;
    }
    Ok(0)
}

/// Item id of a `<base>/meep/<id>/` link, or the whole URL when it has no
/// path segments.
fn item_id_of(url: &str) -> &str {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(url)
}

/// Run `action` on `url` through a one-menu controller wired to the system
/// clipboard and browser. Returns the outcome message, if any.
fn perform(action: ShareAction, url: &str, config: &AppConfig) -> Option<(String, NotifyLevel)> {
    let messages = Rc::new(MemoryNotifier::new());
    let notifier: Rc<dyn Notifier> = Rc::new(Fanout(Rc::clone(&messages)));
    let clipboard = config
        .clipboard
        .command
        .clone()
        .map_or_else(SystemClipboard::new, SystemClipboard::with_command);
    let deps = HandlerDeps {
        notifier,
        clipboard: Box::new(clipboard),
        opener: Rc::new(SystemOpener),
        // No backend from the command line.
        repost: Box::new(MemoryRepostClient::rejecting("no repost backend configured")),
        whatsapp_text: config.share.whatsapp_text.clone(),
    };

    let mut controller = PopupMenuController::new();
    for (kind, handler) in default_handlers(deps) {
        controller.register_boxed_handler(kind, handler);
    }
    let menu = controller.register_item(item_id_of(url), MenuPayload::new(url, item_id_of(url)));
    let dispatched = controller
        .toggle(&menu)
        .and_then(|_| controller.select_action(&menu, action));
    if let Err(miss) = dispatched {
        tracing::warn!("share action not run: {miss}");
    }
    controller.dispose();
    messages.last()
}

/// Sends every message to the log and keeps it for the exit status.
struct Fanout(Rc<MemoryNotifier>);

impl Notifier for Fanout {
    fn notify(&self, message: &str, level: NotifyLevel) {
        TracingNotifier.notify(message, level);
        self.0.notify(message, level);
    }
}

/// Run the share-url command. With `open`, the action is also performed.
pub fn run_share_url(
    action: ShareAction,
    url: &str,
    config: &AppConfig,
    open: bool,
    out: &mut impl Write,
) -> Result<i32> {
    if url.trim().is_empty() {
        eprintln!("error: url must not be empty");
        return Ok(1);
    }
    let link = share_url_for(action, url, &config.share.whatsapp_text);
    tracing::debug!(%action, %link, "built share link");
    writeln!(out, "{link}")?;

    if !open {
        return Ok(0);
    }
    match perform(action, url, config) {
        Some((message, NotifyLevel::Error)) => {
            eprintln!("error: {message}");
            Ok(1)
        }
        Some((message, _)) => {
            eprintln!("{message}");
            Ok(0)
        }
        None => Ok(0),
    }
}
