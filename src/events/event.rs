//! # Event declarations.
//!
//! [`Event`] binds an event type to its registry name and payload. Payload types
//! are checked at compile time at the `on`/`emit` boundary; the name is the key the
//! emitter stores listeners under.
//!
//! ## Rules
//! - The name must be non-empty; an empty name is rejected with
//!   [`EmitterError::InvalidArgument`](crate::EmitterError::InvalidArgument).
//! - Two event types of one map may share a name only if they share a payload type.
//!   Otherwise `on`/`once`/`emit`/`off_all` through the second type is rejected while the
//!   first one has listeners.
//!
//! ## Example
//! ```rust
//! use tinyemit::{Emitter, Event, EventMap, Listener, event};
//!
//! struct AppEvents;
//! impl EventMap for AppEvents {}
//!
//! event!(pub Update in AppEvents => String = "update");
//!
//! // Same thing, written out by hand:
//! pub struct Resize;
//! impl Event<AppEvents> for Resize {
//!     const NAME: &'static str = "resize";
//!     type Payload = (u32, u32);
//! }
//!
//! let emitter = Emitter::<AppEvents>::new();
//! emitter.on::<Resize>(Listener::new(|(w, h): &(u32, u32)| assert!(*w > 0 && *h > 0)))?;
//! emitter.emit::<Resize>((640, 480))?;
//! assert_eq!(Update::NAME, "update");
//! # Ok::<(), tinyemit::EmitterError>(())
//! ```

/// Marker for a set of events accepted by one [`Emitter`](crate::Emitter).
pub trait EventMap: 'static {}

/// One event type of the map `M`.
pub trait Event<M: EventMap>: 'static {
    /// Registry key. Must be non-empty.
    const NAME: &'static str;

    /// Value handed (by reference) to every listener of this event.
    type Payload: 'static;
}

/// Declares a unit marker type implementing [`Event`] for a map.
///
/// ```rust
/// use tinyemit::{EventMap, event};
///
/// struct Ui;
/// impl EventMap for Ui {}
///
/// event!(
///     /// Pointer moved to (x, y).
///     pub PointerMoved in Ui => (i32, i32) = "pointer-moved"
/// );
/// event!(Closed in Ui => () = "closed");
/// ```
#[macro_export]
macro_rules! event {
    ($(#[$meta:meta])* $vis:vis $name:ident in $map:ty => $payload:ty = $key:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl $crate::Event<$map> for $name {
            const NAME: &'static str = $key;
            type Payload = $payload;
        }
    };
}
