//! Error types returned by the emitter.
//!
//! The emitter has a single caller-facing error kind, [`EmitterError::InvalidArgument`],
//! returned synchronously from the call that was structurally invalid:
//!
//! - `on` / `once` with an event whose name is empty, or whose name is already
//!   bound to a different payload type;
//! - `off` / `off_all` with an event whose name is empty;
//! - `emit` with an event whose name is empty, or bound to a different payload type.
//!
//! Absent listeners, absent event types and redundant unsubscription are **not** errors.
//! Listener panics are never caught or converted; they unwind out of `emit`.

use thiserror::Error;

/// # Errors produced by the emitter.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitterError {
    /// The call was made with an argument the emitter cannot act on.
    #[error("cannot call <Emitter>.{op}(...) {reason}")]
    InvalidArgument {
        /// Operation that rejected the call (`on`, `once`, `off`, `off_all`, `emit`).
        op: &'static str,
        /// What was wrong with the arguments.
        reason: String,
    },
}

impl EmitterError {
    /// Event type declared with an empty name.
    pub(crate) fn missing_event(op: &'static str) -> Self {
        EmitterError::InvalidArgument {
            op,
            reason: "without a type".to_string(),
        }
    }

    /// Event name already bound to another payload type in this emitter.
    pub(crate) fn payload_mismatch(op: &'static str, event: &str, bound: &str) -> Self {
        EmitterError::InvalidArgument {
            op,
            reason: format!("with type {event:?}: it is bound to payload `{bound}`"),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use tinyemit::{Emitter, EventMap, event};
    ///
    /// struct Nameless;
    /// impl EventMap for Nameless {}
    /// event!(Blank in Nameless => () = "");
    ///
    /// let emitter = Emitter::<Nameless>::new();
    /// let err = emitter.emit::<Blank>(()).unwrap_err();
    /// assert_eq!(err.as_label(), "emitter_invalid_argument");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::InvalidArgument { .. } => "emitter_invalid_argument",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitterError::InvalidArgument { op, reason } => format!("{op}: {reason}"),
        }
    }

    /// Name of the operation that rejected the call.
    pub fn op(&self) -> &'static str {
        match self {
            EmitterError::InvalidArgument { op, .. } => op,
        }
    }
}
