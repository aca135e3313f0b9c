//! Shared context handle passed to every actor.
//!
//! `SharedContext` is a cheap-to-clone handle wrapping an `Rc<RefCell<S>>`.
//! The caller keeps one clone to inspect the state after a run while the
//! generator holds another. Being `Rc`-based, the handle cannot cross
//! threads, so a run always has a single writer.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A shared, cloneable handle to state mutated by actors.
///
/// # Example
///
/// ```
/// use moonpool_gentest::SharedContext;
///
/// let shared = SharedContext::new(0u64);
/// let observer = shared.clone();
/// *shared.borrow_mut() += 5;
/// assert_eq!(*observer.borrow(), 5);
/// ```
#[derive(Debug, Default)]
pub struct SharedContext<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> Clone for SharedContext<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> SharedContext<S> {
    /// Wrap a value in a new shared handle.
    pub fn new(state: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    /// Immutably borrow the state.
    ///
    /// # Panics
    ///
    /// Panics if the state is currently mutably borrowed, e.g. from inside
    /// an actor that is being run through this handle.
    pub fn borrow(&self) -> Ref<'_, S> {
        self.inner.borrow()
    }

    /// Mutably borrow the state.
    ///
    /// # Panics
    ///
    /// Panics if the state is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, S> {
        self.inner.borrow_mut()
    }

    /// Mutably borrow the state, or `None` if it is already borrowed.
    pub fn try_borrow_mut(&self) -> Option<RefMut<'_, S>> {
        self.inner.try_borrow_mut().ok()
    }
}
