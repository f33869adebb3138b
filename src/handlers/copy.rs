//! Copy-link action and clipboard access.

use super::{ActionHandler, HandlerOutcome};
use crate::error::HandlerError;
use crate::model::ActionRequest;
use crate::notify::{Notifier, NotifyLevel};
use std::cell::RefCell;
use std::io::Write;
use std::process::{Command, Stdio};
use std::rc::Rc;

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), HandlerError>;
}

/// The system clipboard, reached through a helper command.
///
/// Uses `pbcopy` on macOS and `xclip -selection clipboard` elsewhere unless a
/// command is configured.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `command` (program followed by its arguments) instead of the
    /// platform default. An empty command falls back to the default.
    #[must_use]
    pub fn with_command(command: Vec<String>) -> Self {
        Self {
            command: if command.is_empty() { None } else { Some(command) },
        }
    }

    fn program_and_args(&self) -> (String, Vec<String>) {
        if let Some((program, args)) = self.command.as_ref().and_then(|c| c.split_first()) {
            return (program.clone(), args.to_vec());
        }
        if cfg!(target_os = "macos") {
            ("pbcopy".to_string(), Vec::new())
        } else {
            (
                "xclip".to_string(),
                vec!["-selection".to_string(), "clipboard".to_string()],
            )
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), HandlerError> {
        let (program, args) = self.program_and_args();
        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::piped())
            .spawn()
            .and_then(|mut child| {
                // stdin must close before waiting or the helper never sees EOF
                let written = match child.stdin.take() {
                    Some(mut stdin) => stdin.write_all(text.as_bytes()),
                    None => Ok(()),
                };
                // Reap the helper even when the write failed.
                let status = child.wait()?;
                written.map(|()| status)
            })
            .map_err(|e| HandlerError::Clipboard(format!("{program}: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(HandlerError::Clipboard(format!("{program} exited with {status}")))
        }
    }
}

/// In-memory clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard that rejects every write.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            contents: Rc::default(),
            fail: true,
        }
    }

    /// The last text written.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), HandlerError> {
        if self.fail {
            return Err(HandlerError::Clipboard("permission denied".to_string()));
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

/// Copies the item link to a clipboard.
pub struct CopyLinkHandler {
    clipboard: Box<dyn Clipboard>,
    notifier: Rc<dyn Notifier>,
}

impl CopyLinkHandler {
    pub fn new(clipboard: Box<dyn Clipboard>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            clipboard,
            notifier,
        }
    }
}

impl ActionHandler for CopyLinkHandler {
    fn handle(&mut self, request: &ActionRequest) -> HandlerOutcome {
        match self.clipboard.write_text(&request.payload.url) {
            Ok(()) => {
                self.notifier.notify("Link copied!", NotifyLevel::Success);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to copy {}: {e}", request.payload.url);
                self.notifier.notify("Failed to copy link", NotifyLevel::Error);
                Err(e)
            }
        }
    }
}
