//! # tinyemit
//!
//! **tinyemit** is a typed, synchronous, in-process event emitter for Rust.
//!
//! Callers register per-event-type listeners; emitting an event invokes every
//! listener currently registered for that type, in registration order, on the
//! caller's own stack. Payload types are bound to event types at compile time.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ Listener<P1> │   │ Listener<P1> │   │ Listener<P2> │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ on::<E1>         │ once::<E1>       │ on::<E2>
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Emitter<M> (one instance, owns its registry)                     │
//! │  Registry:                                                        │
//! │    E1::NAME ─► [slot #1] [slot #2 once]     (insertion order)     │
//! │    E2::NAME ─► [slot #3]                                          │
//! └──────┬─────────────────────────────────────────────────┬──────────┘
//!        │ emit::<E1>(payload)                             │
//!        ▼                                                 ▼
//!   slot #1 ─► slot #2 (claimed, then called)        Subscription(#n)
//!   direct calls, caller's stack, in order            .unsubscribe()
//! ```
//!
//! ### Lifecycle
//! ```text
//! Emitter::new() ── empty registry
//!   ├─► on/once::<E>(listener)    → append slot, return Subscription
//!   ├─► emit::<E>(payload)        → call slots of E in order (no-op if none)
//!   ├─► off::<E>(&listener)       → remove every slot equal to listener
//!   ├─► off_all::<E>()            → remove every slot of E
//!   ├─► clear()                   → remove everything
//!   └─► Subscription::unsubscribe → remove that one slot (idempotent)
//!
//! An event entry disappears with its last slot. Dropping the emitter drops the registry.
//! ```
//!
//! ## Features
//! | Area              | Description                                                     | Key types / traits                       |
//! |-------------------|-----------------------------------------------------------------|------------------------------------------|
//! | **Events**        | Static binding of event names to payload types.                 | [`EventMap`], [`Event`], [`event!`]      |
//! | **Listeners**     | Identity-compared callbacks and per-registration handles.       | [`Listener`], [`Subscription`]           |
//! | **Dispatch**      | Synchronous, ordered, re-entrant emission over a slot snapshot. | [`Emitter`]                              |
//! | **Errors**        | Typed error for structurally invalid calls.                     | [`EmitterError`]                         |
//! | **Configuration** | Listener leak warning.                                          | [`EmitterConfig`]                        |
//!
//! ## Not provided
//! Async dispatch, bubbling, wildcard matching, priorities, and listener error
//! isolation: a panicking listener unwinds out of `emit`.
//!
//! ## Logging
//! Operations are instrumented with [`tracing`] (`trace`/`debug`, plus a `warn` for
//! the listener limit). Install a subscriber in the application to see them.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tinyemit::{Emitter, EmitterConfig, EventMap, Listener, event};
//!
//! struct Store;
//! impl EventMap for Store {}
//!
//! event!(pub Updated in Store => u64 = "updated");
//! event!(pub Reset in Store => () = "reset");
//!
//! let emitter = Emitter::<Store>::with_config(EmitterConfig { max_listeners: 8 });
//!
//! let total = Rc::new(Cell::new(0));
//! let sum = Rc::clone(&total);
//! let add = Listener::new(move |v: &u64| sum.set(sum.get() + *v));
//!
//! let sub = emitter.on::<Updated>(add.clone())?;
//! emitter.on::<Updated>(add.clone())?; // second, independent slot
//!
//! emitter.emit::<Updated>(5)?;          // both slots fire
//! sub.unsubscribe();                    // removes the first slot only
//! emitter.emit::<Updated>(1)?;
//! emitter.off::<Updated>(&add)?;        // removes every remaining slot of `add`
//! emitter.emit::<Updated>(100)?.emit::<Reset>(())?;
//!
//! assert_eq!(total.get(), 11);
//! assert!(emitter.is_empty());
//! # Ok::<(), tinyemit::EmitterError>(())
//! ```

mod core;
mod error;
mod events;
mod listeners;

// ---- Public re-exports ----

pub use crate::core::{Emitter, EmitterConfig};
pub use error::EmitterError;
pub use events::{Event, EventMap};
pub use listeners::{Listener, Subscription};
