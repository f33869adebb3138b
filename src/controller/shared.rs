//! Shared, re-entrancy-safe handle to a controller.

use super::{ControllerEvent, PopupMenuController};
use crate::error::ControllerMiss;
use crate::model::{MenuId, ShareAction};
use crate::region::ClickOrigin;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A cloneable handle to one [`PopupMenuController`].
///
/// Handlers may hold a clone and send events back while the controller is
/// still dispatching to them. Such events are queued and applied, in order,
/// once the running operation has finished, so every operation sees the
/// controller in a consistent state and only one menu is ever open.
///
/// A handler holding a clone forms a reference cycle with the controller;
/// [`SharedController::dispose`] breaks it.
#[derive(Clone, Default)]
pub struct SharedController {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    controller: RefCell<PopupMenuController>,
    pending: RefCell<VecDeque<Deferred>>,
}

/// Work queued while an operation was running.
enum Deferred {
    Event(ControllerEvent),
    Dispose,
}

impl SharedController {
    pub fn new(controller: PopupMenuController) -> Self {
        Self {
            inner: Rc::new(Inner {
                controller: RefCell::new(controller),
                pending: RefCell::default(),
            }),
        }
    }

    /// Apply `event` now, or queue it if an operation is already running.
    ///
    /// Returns `None` when the event was queued.
    pub fn dispatch(&self, event: ControllerEvent) -> Option<Result<(), ControllerMiss>> {
        let result = {
            let Ok(mut controller) = self.inner.controller.try_borrow_mut() else {
                tracing::debug!(?event, "deferring re-entrant event");
                self.inner.pending.borrow_mut().push_back(Deferred::Event(event));
                return None;
            };
            controller.handle_event(event)
        };
        self.drain();
        Some(result)
    }

    pub fn toggle(&self, id: &MenuId) -> Option<Result<(), ControllerMiss>> {
        self.dispatch(ControllerEvent::Trigger(id.clone()))
    }

    pub fn dismiss_all(&self, origin: ClickOrigin) -> Option<Result<(), ControllerMiss>> {
        self.dispatch(ControllerEvent::DocumentClick(origin))
    }

    pub fn select_action(
        &self,
        id: &MenuId,
        action: ShareAction,
    ) -> Option<Result<(), ControllerMiss>> {
        self.dispatch(ControllerEvent::Select {
            menu: id.clone(),
            action,
        })
    }

    /// Run `f` against the controller, or return `None` if an operation is
    /// running.
    pub fn with<R>(&self, f: impl FnOnce(&mut PopupMenuController) -> R) -> Option<R> {
        let result = {
            let mut controller = self.inner.controller.try_borrow_mut().ok()?;
            f(&mut controller)
        };
        self.drain();
        Some(result)
    }

    /// Number of events waiting for the running operation to finish.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// Dispose the controller and drop queued events.
    ///
    /// If called from inside a handler, disposal is queued behind the
    /// running operation instead.
    pub fn dispose(&self) {
        if let Ok(mut controller) = self.inner.controller.try_borrow_mut() {
            controller.dispose();
            self.inner.pending.borrow_mut().clear();
        } else {
            tracing::debug!("dispose requested during dispatch; deferring");
            self.inner.pending.borrow_mut().push_back(Deferred::Dispose);
        }
    }

    fn drain(&self) {
        loop {
            let Some(next) = self.inner.pending.borrow_mut().pop_front() else {
                break;
            };
            let Ok(mut controller) = self.inner.controller.try_borrow_mut() else {
                self.inner.pending.borrow_mut().push_front(next);
                break;
            };
            match next {
                Deferred::Event(event) => {
                    if let Err(miss) = controller.handle_event(event) {
                        tracing::debug!("deferred event ignored: {miss}");
                    }
                }
                Deferred::Dispose => {
                    controller.dispose();
                    drop(controller);
                    self.inner.pending.borrow_mut().clear();
                    break;
                }
            }
        }
    }
}
