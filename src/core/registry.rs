//! # Listener registry - ordered slots per event name.
//!
//! The registry owns every registration of one emitter:
//! - keyed by event name (`Event::NAME`);
//! - each entry records the payload type it is bound to and its slots in insertion order;
//! - each slot is one registration (`on`/`once`) with a unique, monotonically increasing id.
//!
//! ## Architecture
//! ```text
//! Registry
//!   ├─ "update" ─► Entry { payload: String, slots: [#1 L_a] [#3 L_b] [#4 L_a once] }
//!   └─ "resize" ─► Entry { payload: (u32,u32), slots: [#2 L_c] }
//!
//! insert(name, L)          → append slot #next (creates entry if absent)
//! remove_slot(name, #id)   → remove that slot only            (Subscription)
//! remove_listener(name, L) → remove every slot equal to L      (off)
//! remove_event(name)       → remove the whole entry            (off_all)
//! clear()                  → remove everything                 (clear)
//! ```
//!
//! ## Rules
//! - Slot ids are never reused; slots within an entry stay sorted by id.
//! - No entry is ever left with zero slots: removal prunes empty entries.
//! - An entry's payload binding lives exactly as long as the entry.
//! - Removal methods hand back what they removed, and a refused insert hands back its
//!   listener, so the caller decides where listeners are dropped.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::listeners::Listener;

/// Slot identifier, unique within one registry.
pub(crate) type SlotId = u64;

/// One registration.
pub(crate) struct Slot {
    id: SlotId,
    once: bool,
    /// Always a `Listener<P>` where `P` is the owning entry's payload type.
    listener: Box<dyn Any>,
}

/// Typed copy of a slot, taken for dispatch.
pub(crate) struct DispatchSlot<P> {
    pub(crate) id: SlotId,
    pub(crate) once: bool,
    pub(crate) listener: Listener<P>,
}

impl Slot {
    fn typed<P: 'static>(&self) -> Option<DispatchSlot<P>> {
        self.listener
            .downcast_ref::<Listener<P>>()
            .map(|listener| DispatchSlot {
                id: self.id,
                once: self.once,
                listener: listener.clone(),
            })
    }
}

/// Slots registered under one event name.
struct Entry {
    payload: TypeId,
    payload_name: &'static str,
    slots: Vec<Slot>,
    /// Listener-limit warning already issued for this entry.
    warned: bool,
}

impl Entry {
    fn bound_to<P: 'static>(&self) -> Result<(), &'static str> {
        if self.payload == TypeId::of::<P>() {
            Ok(())
        } else {
            Err(self.payload_name)
        }
    }
}

/// Result of a successful insert.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Inserted {
    pub(crate) id: SlotId,
    /// Number of slots for the event after the insert.
    pub(crate) len: usize,
    /// The insert created the entry.
    pub(crate) created: bool,
}

/// A listener refused by [`Registry::insert`].
#[derive(Debug)]
pub(crate) struct Rejected<P> {
    /// Payload type name the event is bound to.
    pub(crate) bound: &'static str,
    pub(crate) listener: Listener<P>,
}

/// Registry of listener slots for one emitter.
#[derive(Default)]
pub(crate) struct Registry {
    entries: HashMap<&'static str, Entry>,
    last_id: SlotId,
}

impl Registry {
    /// Creates an empty registry.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a slot for `name`.
    ///
    /// Fails if `name` is registered with another payload. The error carries the bound
    /// payload type name and hands the rejected listener back unchanged.
    pub(crate) fn insert<P: 'static>(
        &mut self,
        name: &'static str,
        listener: Listener<P>,
        once: bool,
    ) -> Result<Inserted, Rejected<P>> {
        if let Err(bound) = self.check_payload::<P>(name) {
            return Err(Rejected { bound, listener });
        }

        let created = !self.entries.contains_key(name);
        let entry = self.entries.entry(name).or_insert_with(|| Entry {
            payload: TypeId::of::<P>(),
            payload_name: std::any::type_name::<P>(),
            slots: Vec::new(),
            warned: false,
        });

        self.last_id += 1;
        let id = self.last_id;
        entry.slots.push(Slot {
            id,
            once,
            listener: Box::new(listener),
        });

        Ok(Inserted {
            id,
            len: entry.slots.len(),
            created,
        })
    }

    /// Checks that `name` is absent or bound to payload `P`.
    pub(crate) fn check_payload<P: 'static>(&self, name: &str) -> Result<(), &'static str> {
        match self.entries.get(name) {
            Some(entry) => entry.bound_to::<P>(),
            None => Ok(()),
        }
    }

    /// Marks the listener-limit warning as issued; returns `true` the first time.
    pub(crate) fn mark_warned(&mut self, name: &str) -> bool {
        match self.entries.get_mut(name) {
            Some(entry) if !entry.warned => {
                entry.warned = true;
                true
            }
            _ => false,
        }
    }

    /// Removes one slot by id.
    pub(crate) fn remove_slot(&mut self, name: &str, id: SlotId) -> Option<Slot> {
        let entry = self.entries.get_mut(name)?;
        let pos = entry.slots.iter().position(|s| s.id == id)?;
        let slot = entry.slots.remove(pos);
        self.prune(name);
        Some(slot)
    }

    /// Removes every slot of `name` holding a listener equal to `listener`.
    pub(crate) fn remove_listener<P: 'static>(
        &mut self,
        name: &str,
        listener: &Listener<P>,
    ) -> Vec<Slot> {
        let Some(entry) = self.entries.get_mut(name) else {
            return Vec::new();
        };

        let (removed, kept): (Vec<Slot>, Vec<Slot>) =
            std::mem::take(&mut entry.slots)
                .into_iter()
                .partition(|s| s.listener.downcast_ref::<Listener<P>>() == Some(listener));
        entry.slots = kept;
        self.prune(name);
        removed
    }

    /// Removes the entry for `name` with all its slots.
    pub(crate) fn remove_event(&mut self, name: &str) -> Vec<Slot> {
        self.entries
            .remove(name)
            .map(|entry| entry.slots)
            .unwrap_or_default()
    }

    /// Removes every entry; returns the removed slots.
    pub(crate) fn clear(&mut self) -> Vec<Slot> {
        self.entries
            .drain()
            .flat_map(|(_, entry)| entry.slots)
            .collect()
    }

    /// Typed copy of the slots of `name`, in registration order.
    ///
    /// Absent names yield an empty list; a payload mismatch yields the bound type name.
    pub(crate) fn snapshot<P: 'static>(
        &self,
        name: &str,
    ) -> Result<Vec<DispatchSlot<P>>, &'static str> {
        let Some(entry) = self.entries.get(name) else {
            return Ok(Vec::new());
        };
        entry.bound_to::<P>()?;
        Ok(entry.slots.iter().filter_map(Slot::typed).collect())
    }

    /// Number of slots registered for `name`.
    pub(crate) fn len(&self, name: &str) -> usize {
        self.entries.get(name).map_or(0, |e| e.slots.len())
    }

    /// Whether slot `id` of `name` is still registered.
    pub(crate) fn contains_slot(&self, name: &str, id: SlotId) -> bool {
        self.entries
            .get(name)
            .is_some_and(|e| e.slots.iter().any(|s| s.id == id))
    }

    /// Sorted list of event names with at least one slot.
    pub(crate) fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// True if no event has any slot.
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops the entry for `name` if it has no slots left.
    fn prune(&mut self, name: &str) {
        if self.entries.get(name).is_some_and(|e| e.slots.is_empty()) {
            self.entries.remove(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Listener<u32> {
        Listener::new(|_: &u32| {})
    }

    fn ids(reg: &Registry, name: &str) -> Vec<SlotId> {
        reg.snapshot::<u32>(name)
            .expect("bound to u32")
            .iter()
            .map(|s| s.id)
            .collect()
    }

    #[test]
    fn test_insert_preserves_order_and_duplicates() {
        let mut reg = Registry::new();
        let a = noop();
        let b = noop();

        let first = reg.insert("tick", a.clone(), false).unwrap();
        assert!(first.created);
        reg.insert("tick", b.clone(), false).unwrap();
        let third = reg.insert("tick", a.clone(), false).unwrap();
        assert!(!third.created);
        assert_eq!(third.len, 3);

        let snap = reg.snapshot::<u32>("tick").unwrap();
        let listeners: Vec<&Listener<u32>> = snap.iter().map(|s| &s.listener).collect();
        assert_eq!(listeners, vec![&a, &b, &a]);
        assert_eq!(ids(&reg, "tick"), vec![1, 2, 3]);
    }

    #[test]
    fn test_payload_binding_is_enforced() {
        let mut reg = Registry::new();
        reg.insert("tick", noop(), false).unwrap();

        let rejected = Listener::new(|_: &String| {});
        let Err(err) = reg.insert("tick", rejected.clone(), false) else {
            panic!("String listener accepted for a u32 event");
        };
        assert!(err.bound.contains("u32"), "{}", err.bound);
        assert_eq!(err.listener, rejected);
        assert!(reg.check_payload::<String>("tick").is_err());
        assert!(reg.check_payload::<String>("other").is_ok());
        assert_eq!(reg.len("tick"), 1);
    }

    #[test]
    fn test_binding_released_with_entry() {
        let mut reg = Registry::new();
        reg.insert("tick", noop(), false).unwrap();
        reg.remove_event("tick");

        assert!(reg.insert("tick", Listener::new(|_: &String| {}), false).is_ok());
    }

    #[test]
    fn test_remove_listener_removes_all_equal_slots() {
        let mut reg = Registry::new();
        let a = noop();
        let b = noop();
        reg.insert("tick", a.clone(), false).unwrap();
        reg.insert("tick", b.clone(), false).unwrap();
        reg.insert("tick", a.clone(), true).unwrap();

        let removed = reg.remove_listener("tick", &a);
        assert_eq!(removed.len(), 2);
        assert_eq!(ids(&reg, "tick"), vec![2]);
    }

    #[test]
    fn test_last_removal_prunes_entry() {
        let mut reg = Registry::new();
        let a = noop();
        let slot = reg.insert("tick", a.clone(), false).unwrap();
        reg.insert("tock", a.clone(), false).unwrap();

        assert!(reg.remove_slot("tick", slot.id).is_some());
        assert_eq!(reg.names(), vec!["tock"]);

        assert_eq!(reg.remove_listener("tock", &a).len(), 1);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_remove_slot_is_idempotent() {
        let mut reg = Registry::new();
        let slot = reg.insert("tick", noop(), false).unwrap();

        assert!(reg.contains_slot("tick", slot.id));
        assert!(reg.remove_slot("tick", slot.id).is_some());
        assert!(reg.remove_slot("tick", slot.id).is_none());
        assert!(!reg.contains_slot("tick", slot.id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut reg = Registry::new();
        let first = reg.insert("tick", noop(), false).unwrap();
        reg.clear();
        let second = reg.insert("tick", noop(), false).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_mark_warned_once_per_entry() {
        let mut reg = Registry::new();
        reg.insert("tick", noop(), false).unwrap();

        assert!(reg.mark_warned("tick"));
        assert!(!reg.mark_warned("tick"));
        assert!(!reg.mark_warned("absent"));

        reg.remove_event("tick");
        reg.insert("tick", noop(), false).unwrap();
        assert!(reg.mark_warned("tick"));
    }
}
