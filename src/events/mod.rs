//! Event types: the static binding between an event name and its payload.
//!
//! An emitter is parameterized by an [`EventMap`], a marker type naming the set of
//! events it accepts. Each event is a marker type implementing [`Event`] for that map,
//! carrying its registry name and its payload type.
//!
//! ## Contents
//! - [`EventMap`] marker trait for an event set
//! - [`Event`] name + payload binding for one event type
//! - [`event!`](crate::event) one-line declaration of an event marker type
//!
//! ## Quick wiring
//! ```text
//! struct AppEvents;              ── impl EventMap
//! event!(Update in AppEvents => String = "update")
//!      └─► Emitter<AppEvents>::on::<Update>(Listener<String>)
//!      └─► Emitter<AppEvents>::emit::<Update>(String)
//! ```

mod event;

pub use event::{Event, EventMap};
