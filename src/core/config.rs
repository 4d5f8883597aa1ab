//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`] settings for one emitter instance, passed to
//! `Emitter::with_config(config)`.
//!
//! ## Sentinel values
//! - `max_listeners = 0` → unlimited (no leak warning is ever logged)

/// Configuration for one emitter.
///
/// ## Field semantics
/// - `max_listeners`: per-event soft limit for the leak warning (`0` = unlimited)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Soft limit on listeners per event type.
    ///
    /// - `0` = unlimited
    /// - `n > 0` = the first time an event type holds more than `n` listeners, a
    ///   `tracing` warning is logged for it. Registrations are never rejected.
    pub max_listeners: usize,
}

impl EmitterConfig {
    /// Returns the listener limit as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → warn past `n` listeners per event type
    #[inline]
    pub fn listener_limit(&self) -> Option<usize> {
        if self.max_listeners == 0 {
            None
        } else {
            Some(self.max_listeners)
        }
    }
}
