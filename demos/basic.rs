//! # Basic Example
//!
//! Registers a few listeners on a typed emitter, emits events, and unsubscribes.
//!
//! Shows:
//! - Declaring an event map and its events
//! - `on`, `once`, `off`, `off_all` and subscription handles
//! - Emitter logging through `tracing`
//!
//! ## Run
//! ```bash
//! RUST_LOG=tinyemit=trace cargo run --example basic
//! ```

use std::cell::Cell;
use std::rc::Rc;

use tinyemit::{Emitter, EmitterConfig, EventMap, Listener, event};
use tracing_subscriber::EnvFilter;

struct Shop;
impl EventMap for Shop {}

#[derive(Debug)]
struct Order {
    id: u32,
    total_cents: u64,
}

event!(OrderPlaced in Shop => Order = "order-placed");
event!(OrderCancelled in Shop => u32 = "order-cancelled");
event!(Closing in Shop => () = "closing");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let emitter = Emitter::<Shop>::with_config(EmitterConfig { max_listeners: 4 });

    let revenue = Rc::new(Cell::new(0u64));

    let sum = Rc::clone(&revenue);
    let accounting = Listener::new(move |o: &Order| sum.set(sum.get() + o.total_cents));
    let printer = Listener::new(|o: &Order| {
        println!("[order] id={} total={}c", o.id, o.total_cents)
    });

    emitter.on::<OrderPlaced>(accounting.clone())?;
    let print_sub = emitter.on::<OrderPlaced>(printer)?;
    emitter.on::<OrderCancelled>(Listener::new(|id: &u32| println!("[cancelled] id={id}")))?;
    emitter.once::<Closing>(Listener::new(|_: &()| println!("[closing] goodbye")))?;

    emitter
        .emit::<OrderPlaced>(Order { id: 1, total_cents: 1250 })?
        .emit::<OrderPlaced>(Order { id: 2, total_cents: 799 })?
        .emit::<OrderCancelled>(2)?;

    print_sub.unsubscribe();
    emitter.emit::<OrderPlaced>(Order { id: 3, total_cents: 100 })?;

    emitter.off::<OrderPlaced>(&accounting)?;
    emitter.emit::<OrderPlaced>(Order { id: 4, total_cents: 5000 })?;

    emitter.off_all::<OrderCancelled>()?;
    emitter.emit::<Closing>(())?.emit::<Closing>(())?;

    println!();
    println!("Summary:");
    println!(" ├─► Revenue:  {}c", revenue.get());
    println!(" └─► Events:   {:?}", emitter.event_names());
    Ok(())
}
