//! Process-wide keyboard dispatch.
//!
//! The application shell owns one [`KeyDispatcher`]. Components subscribe a
//! handler while mounted and hold the returned [`Subscription`]; dropping it
//! removes the handler.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_search::{KeyEvent, KeyOutcome, SearchOverlay};

/// Receives key presses from the dispatcher.
pub trait KeyHandler {
    /// Handle a key press. Returns `true` if the key was consumed.
    fn handle_key(&mut self, event: &KeyEvent) -> bool;
}

impl KeyHandler for SearchOverlay {
    fn handle_key(&mut self, event: &KeyEvent) -> bool {
        SearchOverlay::handle_key(self, event) != KeyOutcome::Ignored
    }
}

type SharedHandler = Rc<RefCell<dyn KeyHandler>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, SharedHandler)>,
}

/// Delivers key presses to every subscribed handler.
#[derive(Default)]
pub struct KeyDispatcher {
    registry: Rc<RefCell<Registry>>,
}

impl KeyDispatcher {
    /// Create a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes the handler"]
    pub fn subscribe<H: KeyHandler + 'static>(&self, handler: Rc<RefCell<H>>) -> Subscription {
        let handler: SharedHandler = handler;
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, handler));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to all handlers in subscription order.
    ///
    /// Returns `true` if any handler consumed it.
    pub fn dispatch(&self, event: &KeyEvent) -> bool {
        // Snapshot so handlers may subscribe or unsubscribe while running.
        let handlers: Vec<SharedHandler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        let mut consumed = false;
        for handler in handlers {
            consumed |= handler.borrow_mut().handle_key(event);
        }
        consumed
    }

    /// Number of live subscriptions.
    pub fn handler_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Guard for a dispatcher subscription.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
        }
    }
}
