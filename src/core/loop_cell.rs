// Shared slot for a callback that re-schedules itself.
//
// A self-arming frame loop has to hold a handle to its own slot, which is
// a reference cycle: the slot owns the callback and the callback owns a
// clone of the slot. `take` from inside the callback breaks that cycle,
// so a stopped loop releases everything it captured instead of pinning it
// for the life of the page.

use std::cell::RefCell;
use std::rc::Rc;

pub struct LoopCell<F> {
    slot: Rc<RefCell<Option<F>>>,
}

impl<F> LoopCell<F> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set(&self, f: F) {
        *self.slot.borrow_mut() = Some(f);
    }

    /// Remove the callback from the slot. Safe to call from inside the
    /// callback itself; the caller decides when the returned value drops.
    pub fn take(&self) -> Option<F> {
        self.slot.borrow_mut().take()
    }

    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Run `g` against the stored callback, if any.
    pub fn with<R>(&self, g: impl FnOnce(&F) -> R) -> Option<R> {
        self.slot.borrow().as_ref().map(g)
    }
}

impl<F> Clone for LoopCell<F> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<F> Default for LoopCell<F> {
    fn default() -> Self {
        Self::new()
    }
}
