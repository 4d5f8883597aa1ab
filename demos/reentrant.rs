//! # Re-entrant Dispatch Example
//!
//! A listener changes the registry while `emit` is running.
//!
//! - The running `emit` keeps the listener list it started with: a player removed
//!   mid-turn still hears that turn, and a late joiner added mid-turn does not.
//! - The next `emit` sees the changes.
//!
//! ## Run
//! ```bash
//! cargo run --example reentrant
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tinyemit::{Emitter, EmitterError, EventMap, Listener, Subscription, event};

struct Game;
impl EventMap for Game {}

event!(Turn in Game => u32 = "turn");

fn main() -> Result<(), EmitterError> {
    let emitter = Rc::new(Emitter::<Game>::new());
    let log = Rc::new(RefCell::new(Vec::new()));
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let weak = Rc::downgrade(&emitter);
    let target = Rc::clone(&victim);
    let sink = Rc::clone(&log);
    emitter.on::<Turn>(Listener::new(move |turn: &u32| {
        sink.borrow_mut().push(format!("referee: turn {turn}"));
        if let Some(sub) = target.borrow_mut().take() {
            sub.unsubscribe();
        }
        let Some(emitter) = weak.upgrade() else {
            return;
        };
        let sink = Rc::clone(&sink);
        let late = Listener::new(move |t: &u32| {
            sink.borrow_mut().push(format!("late joiner: turn {t}"))
        });
        if let Err(err) = emitter.once::<Turn>(late) {
            eprintln!("late joiner rejected: {err}");
        }
    }))?;

    let sink = Rc::clone(&log);
    let sub = emitter.on::<Turn>(Listener::new(move |t: &u32| {
        sink.borrow_mut().push(format!("removed player: turn {t}"))
    }))?;
    *victim.borrow_mut() = Some(sub);

    for turn in 1..=2 {
        emitter.emit::<Turn>(turn)?;
        println!("After turn {turn}:");
        for line in log.borrow_mut().drain(..) {
            println!(" ├─► {line}");
        }
        println!(" └─► listeners: {}", emitter.listener_count::<Turn>());
        println!();
    }
    Ok(())
}
