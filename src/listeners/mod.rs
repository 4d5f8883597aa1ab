//! # Listeners and subscription handles.
//!
//! A [`Listener`] is the callback value stored by the emitter. A [`Subscription`] is the
//! handle returned from a successful registration; it cancels exactly that registration.
//!
//! ## Identity
//! ```text
//! let a = Listener::new(f);      // identity #1
//! let b = a.clone();             // identity #1 (a == b)
//! let c = Listener::new(f);      // identity #2 (a != c)
//!
//! on::<E>(a)   ─► slot 1 ─► Subscription(slot 1)
//! on::<E>(b)   ─► slot 2 ─► Subscription(slot 2)
//! off::<E>(&a)              removes slots 1 and 2 (value-equal)
//! Subscription(slot 1).unsubscribe()   removes slot 1 only
//! ```

mod listener;
mod subscription;

pub use listener::Listener;
pub use subscription::Subscription;
