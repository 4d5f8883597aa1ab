//! # Subscription handle.
//!
//! Returned by [`Emitter::on`](crate::Emitter::on) and [`Emitter::once`](crate::Emitter::once).
//! Each handle cancels exactly one registration.
//!
//! ## Rules
//! - `unsubscribe()` removes only the slot the handle was issued for; other
//!   registrations of an equal listener stay.
//! - Calling it again, or after the slot was removed some other way, is a no-op.
//! - The handle holds a weak reference: it does not keep the emitter alive, and is a
//!   no-op once the emitter is dropped.
//! - Dropping the handle does **not** unsubscribe.

use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;

use crate::core::registry::{Registry, SlotId};

/// Cancellation handle for one registration.
#[derive(Clone)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    event: &'static str,
    slot: SlotId,
}

impl Subscription {
    pub(crate) fn new(registry: Weak<RefCell<Registry>>, event: &'static str, slot: SlotId) -> Self {
        Self {
            registry,
            event,
            slot,
        }
    }

    /// Removes the registration this handle was issued for.
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = registry.borrow_mut().remove_slot(self.event, self.slot);
        if removed.is_some() {
            tracing::trace!(event = self.event, slot = self.slot, "listener unsubscribed");
        }
        // `removed` is dropped here, after the borrow: listener captures may re-enter.
    }

    /// True while the registration is still present in a live emitter.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|r| r.borrow().contains_slot(self.event, self.slot))
    }

    /// Name of the event this handle was issued for.
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("slot", &self.slot)
            .field("active", &self.is_active())
            .finish()
    }
}
