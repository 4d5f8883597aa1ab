//! # Listener callback value.
//!
//! [`Listener`] wraps a closure taking the payload by reference. It is cheap to clone
//! (reference-counted) and compares by identity: clones are equal, separately created
//! listeners are not, even when built from the same function.
//!
//! ## Example
//! ```rust
//! use tinyemit::Listener;
//!
//! let print = Listener::new(|msg: &String| println!("{msg}"));
//! let same = print.clone();
//! let other = Listener::new(|msg: &String| println!("{msg}"));
//!
//! assert_eq!(print, same);
//! assert_ne!(print, other);
//! ```

use std::fmt;
use std::rc::Rc;

/// Callback invoked with the payload of one event type.
///
/// The return value of the wrapped closure is `()`; listeners report failures by
/// panicking (propagates out of `emit`) or through state they capture.
pub struct Listener<P> {
    f: Rc<dyn Fn(&P)>,
}

impl<P: 'static> Listener<P> {
    /// Wraps a closure into a listener with a fresh identity.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&P) + 'static,
    {
        Self { f: Rc::new(f) }
    }

    /// Invokes the callback directly, outside of any emitter.
    #[inline]
    pub fn call(&self, payload: &P) {
        (self.f)(payload)
    }
}

impl<P> Clone for Listener<P> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<P> PartialEq for Listener<P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl<P> Eq for Listener<P> {}

impl<P> fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("payload", &std::any::type_name::<P>())
            .field("refs", &Rc::strong_count(&self.f))
            .finish()
    }
}
