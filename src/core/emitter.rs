//! # Emitter: typed registration and synchronous, in-order dispatch.
//!
//! The [`Emitter`] owns a registry mapping event names to ordered listener slots and
//! exposes three groups of operations:
//! - **subscribe**: [`Emitter::on`], [`Emitter::once`] → [`Subscription`]
//! - **unsubscribe**: [`Emitter::off`] (by listener), [`Emitter::off_all`] (by type),
//!   [`Emitter::clear`] (everything)
//! - **publish**: [`Emitter::emit`]
//!
//! ## Dispatch
//! ```text
//! emit::<E>(payload)
//!   ├─ validate E::NAME (non-empty) and payload binding
//!   └─ for each slot of E::NAME, in registration order:
//!        ├─ once slot? claim it (remove from registry); skip if already gone
//!        └─ listener.call(&payload)        ◄── runs on the caller's stack
//!                 └─ may call on/off/emit on this emitter (nested emit runs to completion)
//! ```
//!
//! ## Rules
//! - Listeners for one event run in registration order, duplicates included.
//! - `emit` with no listeners is a no-op.
//! - No registry borrow is held while a listener runs.
//! - Listener panics are **not** caught: the panic unwinds out of `emit` and the
//!   remaining listeners of that call are skipped. The emitter stays usable.
//! - Each `emit` dispatches over a copy of the slots taken when it starts. Listeners
//!   added during that call first run on the next emission; listeners removed during it
//!   still receive the current one (a claimed `once` slot excepted).
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tinyemit::{Emitter, EventMap, Listener, event};
//!
//! struct Chat;
//! impl EventMap for Chat {}
//! event!(Message in Chat => String = "message");
//! event!(Joined in Chat => u32 = "joined");
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let emitter = Emitter::<Chat>::new();
//!
//! let sink = Rc::clone(&log);
//! let sub = emitter.on::<Message>(Listener::new(move |m: &String| {
//!     sink.borrow_mut().push(m.clone())
//! }))?;
//!
//! emitter
//!     .emit::<Message>("hello".to_string())?
//!     .emit::<Joined>(7)?;
//! sub.unsubscribe();
//! emitter.emit::<Message>("unheard".to_string())?;
//!
//! assert_eq!(*log.borrow(), vec!["hello".to_string()]);
//! # Ok::<(), tinyemit::EmitterError>(())
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::{
    config::EmitterConfig,
    registry::{DispatchSlot, Registry, Rejected},
};
use crate::{
    error::EmitterError,
    events::{Event, EventMap},
    listeners::{Listener, Subscription},
};

/// Typed, synchronous event emitter for the events of map `M`.
///
/// Single-threaded: the emitter is neither `Send` nor `Sync`. All operations take
/// `&self`, so a listener holding a reference to its emitter can re-enter it.
pub struct Emitter<M: EventMap> {
    registry: Rc<RefCell<Registry>>,
    cfg: EmitterConfig,
    _map: PhantomData<fn() -> M>,
}

impl<M: EventMap> Emitter<M> {
    /// Creates an empty emitter with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an empty emitter with the given configuration.
    pub fn with_config(cfg: EmitterConfig) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new())),
            cfg,
            _map: PhantomData,
        }
    }

    /// Configuration this emitter was built with.
    pub fn config(&self) -> &EmitterConfig {
        &self.cfg
    }

    /// Registers `listener` for `E`.
    ///
    /// Appends a new slot even if an equal listener is already registered.
    ///
    /// ### Errors
    /// [`EmitterError::InvalidArgument`] if `E::NAME` is empty, or is currently bound to
    /// a different payload type.
    pub fn on<E: Event<M>>(
        &self,
        listener: Listener<E::Payload>,
    ) -> Result<Subscription, EmitterError> {
        self.subscribe::<E>("on", listener, false)
    }

    /// Registers `listener` for the next emission of `E` only.
    ///
    /// The slot is removed right before the listener runs, so it fires at most once even
    /// when `E` is emitted again from inside a listener.
    ///
    /// ### Errors
    /// Same as [`Emitter::on`].
    pub fn once<E: Event<M>>(
        &self,
        listener: Listener<E::Payload>,
    ) -> Result<Subscription, EmitterError> {
        self.subscribe::<E>("once", listener, true)
    }

    /// Removes every registration of `listener` for `E`.
    ///
    /// All slots holding a listener equal to `listener` (clones of it) are removed.
    /// Unknown events and listeners are a no-op.
    ///
    /// ### Errors
    /// [`EmitterError::InvalidArgument`] if `E::NAME` is empty.
    pub fn off<E: Event<M>>(
        &self,
        listener: &Listener<E::Payload>,
    ) -> Result<&Self, EmitterError> {
        let name = event_name::<M, E>("off")?;
        let removed = self.registry.borrow_mut().remove_listener(name, listener);
        tracing::trace!(event = name, removed = removed.len(), "listener removed");
        Ok(self)
    }

    /// Removes every listener registered for `E`.
    ///
    /// ### Errors
    /// [`EmitterError::InvalidArgument`] if `E::NAME` is empty, or is currently bound to
    /// a different payload type (nothing is removed then).
    pub fn off_all<E: Event<M>>(&self) -> Result<&Self, EmitterError> {
        let name = event_name::<M, E>("off_all")?;
        let removed = {
            let mut registry = self.registry.borrow_mut();
            registry
                .check_payload::<E::Payload>(name)
                .map_err(|bound| EmitterError::payload_mismatch("off_all", name, bound))?;
            registry.remove_event(name)
        };
        if !removed.is_empty() {
            tracing::debug!(event = name, removed = removed.len(), "event listeners removed");
        }
        Ok(self)
    }

    /// Removes every listener of every event.
    pub fn clear(&self) -> &Self {
        let removed = self.registry.borrow_mut().clear();
        tracing::debug!(removed = removed.len(), "registry cleared");
        self
    }

    /// Invokes every listener registered for `E`, in registration order, with `&payload`.
    ///
    /// ### Errors
    /// [`EmitterError::InvalidArgument`] if `E::NAME` is empty, or is currently bound to
    /// a different payload type.
    ///
    /// ### Panics
    /// Propagates any listener panic; listeners after the panicking one are not invoked.
    pub fn emit<E: Event<M>>(&self, payload: E::Payload) -> Result<&Self, EmitterError> {
        let name = event_name::<M, E>("emit")?;
        let slots = self
            .registry
            .borrow()
            .snapshot::<E::Payload>(name)
            .map_err(|bound| EmitterError::payload_mismatch("emit", name, bound))?;
        tracing::trace!(event = name, listeners = slots.len(), "emit");

        for slot in slots {
            self.invoke(name, slot, &payload);
        }
        Ok(self)
    }

    /// Number of listeners registered for `E`.
    pub fn listener_count<E: Event<M>>(&self) -> usize {
        self.registry.borrow().len(E::NAME)
    }

    /// True if at least one listener is registered for `E`.
    pub fn has_listeners<E: Event<M>>(&self) -> bool {
        self.listener_count::<E>() > 0
    }

    /// Sorted names of events with at least one listener.
    pub fn event_names(&self) -> Vec<&'static str> {
        self.registry.borrow().names()
    }

    /// True if no listener is registered for any event.
    pub fn is_empty(&self) -> bool {
        self.registry.borrow().is_empty()
    }

    fn subscribe<E: Event<M>>(
        &self,
        op: &'static str,
        listener: Listener<E::Payload>,
        once: bool,
    ) -> Result<Subscription, EmitterError> {
        let name = event_name::<M, E>(op)?;
        let mut registry = self.registry.borrow_mut();
        let inserted = match registry.insert(name, listener, once) {
            Ok(inserted) => inserted,
            Err(Rejected { bound, listener }) => {
                // Release the borrow before the listener (and its captures) is dropped.
                drop(registry);
                drop(listener);
                return Err(EmitterError::payload_mismatch(op, name, bound));
            }
        };

        if inserted.created {
            tracing::debug!(event = name, "event registered");
        }
        tracing::trace!(event = name, slot = inserted.id, once, "listener registered");

        if let Some(limit) = self.cfg.listener_limit() {
            if inserted.len > limit && registry.mark_warned(name) {
                tracing::warn!(
                    event = name,
                    listeners = inserted.len,
                    limit,
                    "possible listener leak: listener count exceeds max_listeners"
                );
            }
        }
        drop(registry);

        Ok(Subscription::new(Rc::downgrade(&self.registry), name, inserted.id))
    }

    /// Runs one dispatched slot; `once` slots are claimed first.
    fn invoke<P: 'static>(&self, name: &'static str, slot: DispatchSlot<P>, payload: &P) {
        if slot.once {
            let claimed = self.registry.borrow_mut().remove_slot(name, slot.id);
            if claimed.is_none() {
                return;
            }
        }
        slot.listener.call(payload);
    }
}

/// Validates the name of `E` for operation `op`.
fn event_name<M: EventMap, E: Event<M>>(op: &'static str) -> Result<&'static str, EmitterError> {
    if E::NAME.is_empty() {
        return Err(EmitterError::missing_event(op));
    }
    Ok(E::NAME)
}

impl<M: EventMap> Default for Emitter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: EventMap> fmt::Debug for Emitter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.registry.try_borrow().map(|r| r.names()).unwrap_or_default();
        f.debug_struct("Emitter")
            .field("map", &std::any::type_name::<M>())
            .field("config", &self.cfg)
            .field("events", &names)
            .finish()
    }
}
