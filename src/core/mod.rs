//! Emitter core: registry, dispatch and configuration.
//!
//! The public API from this module is [`Emitter`] and its [`EmitterConfig`].
//!
//! Internal modules:
//! - [`registry`]: ordered listener slots per event name;
//! - [`emitter`]: validation, subscribe/unsubscribe and synchronous dispatch;
//! - [`config`]: settings.
//!
//! ## Wiring
//! ```text
//! Emitter<M>
//!   ├─ cfg: EmitterConfig
//!   └─ Rc<RefCell<Registry>> ◄──── Weak ──── Subscription (one per slot)
//!
//! emit::<E>(payload)
//!   ├─ borrow registry ─► copy slots ─► release borrow
//!   └─ listener.call(&payload)   (no borrow held: listeners may re-enter)
//! ```

mod config;
mod emitter;
pub(crate) mod registry;

pub use config::EmitterConfig;
pub use emitter::Emitter;
