//! Mapping from action kind to handler.

use crate::error::HandlerError;
use crate::handlers::{ActionHandler, HandlerOutcome};
use crate::model::{ActionRequest, ShareAction};
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// One handler per [`ShareAction`]; registering again replaces the old one.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<ShareAction, Box<dyn ActionHandler>>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `action`, returning the handler it replaced.
    pub fn register(
        &mut self,
        action: ShareAction,
        handler: Box<dyn ActionHandler>,
    ) -> Option<Box<dyn ActionHandler>> {
        let previous = self.handlers.insert(action, handler);
        if previous.is_some() {
            tracing::debug!(%action, "replaced action handler");
        }
        previous
    }

    pub fn unregister(&mut self, action: ShareAction) -> Option<Box<dyn ActionHandler>> {
        self.handlers.remove(&action)
    }

    #[must_use]
    pub fn contains(&self, action: ShareAction) -> bool {
        self.handlers.contains_key(&action)
    }

    /// Registered actions, sorted.
    #[must_use]
    pub fn actions(&self) -> Vec<ShareAction> {
        let mut actions: Vec<ShareAction> = self.handlers.keys().copied().collect();
        actions.sort();
        actions
    }

    /// Actions from [`ShareAction::ALL`] that have no handler.
    #[must_use]
    pub fn missing(&self) -> Vec<ShareAction> {
        ShareAction::ALL
            .into_iter()
            .filter(|action| !self.contains(*action))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Run the handler for `request.action`.
    ///
    /// Returns `None` when no handler is registered. A panicking handler is
    /// contained and reported as [`HandlerError::Panicked`].
    pub fn dispatch(&mut self, request: &ActionRequest) -> Option<HandlerOutcome> {
        let handler = self.handlers.get_mut(&request.action)?;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(request)))
            .unwrap_or_else(|payload| Err(HandlerError::Panicked(panic_message(&*payload))));
        Some(outcome)
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("actions", &self.actions())
            .finish()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
