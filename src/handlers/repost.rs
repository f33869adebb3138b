//! Repost action.

use super::{ActionHandler, HandlerOutcome};
use crate::error::HandlerError;
use crate::model::ActionRequest;
use crate::notify::{Notifier, NotifyLevel};
use std::cell::RefCell;
use std::rc::Rc;

/// Backend that reposts an item on the current user's behalf.
pub trait RepostClient {
    fn repost(&self, item_id: &str) -> Result<(), HandlerError>;
}

/// Repost backend that records item ids in memory. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepostClient {
    reposted: Rc<RefCell<Vec<String>>>,
    reject_with: Option<String>,
}

impl MemoryRepostClient {
    /// A backend that rejects every repost with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reposted: Rc::default(),
            reject_with: Some(reason.into()),
        }
    }

    /// Item ids reposted so far, oldest first.
    #[must_use]
    pub fn reposted(&self) -> Vec<String> {
        self.reposted.borrow().clone()
    }
}

impl RepostClient for MemoryRepostClient {
    fn repost(&self, item_id: &str) -> Result<(), HandlerError> {
        if let Some(reason) = &self.reject_with {
            return Err(HandlerError::Backend(reason.clone()));
        }
        let mut reposted = self.reposted.borrow_mut();
        if reposted.iter().any(|id| id == item_id) {
            return Err(HandlerError::Backend(format!(
                "item {item_id} already reposted"
            )));
        }
        reposted.push(item_id.to_string());
        Ok(())
    }
}

/// Reposts the menu's item through a [`RepostClient`].
pub struct RepostHandler {
    client: Box<dyn RepostClient>,
    notifier: Rc<dyn Notifier>,
}

impl RepostHandler {
    pub fn new(client: Box<dyn RepostClient>, notifier: Rc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }
}

impl ActionHandler for RepostHandler {
    fn handle(&mut self, request: &ActionRequest) -> HandlerOutcome {
        match self.client.repost(&request.payload.item_id) {
            Ok(()) => {
                tracing::debug!(item = %request.payload.item_id, "reposted");
                self.notifier
                    .notify("Successfully reposted!", NotifyLevel::Success);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(item = %request.payload.item_id, "repost failed: {e}");
                self.notifier.notify("Failed to repost", NotifyLevel::Error);
                Err(e)
            }
        }
    }
}
