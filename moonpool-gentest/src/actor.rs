//! Actor trait for generated action sequences.
//!
//! An actor performs one action against the shared context and describes
//! what it did. Implement the trait directly or use [`actor_fn`] for
//! closures:
//!
//! ```
//! use moonpool_gentest::{Actor, GentestResult, actor_fn};
//!
//! struct Deposit;
//!
//! impl Actor<u64> for Deposit {
//!     fn perform(&mut self, balance: &mut u64) -> GentestResult<String> {
//!         *balance += 10;
//!         Ok(format!("deposit 10 -> {balance}"))
//!     }
//! }
//!
//! let withdraw = actor_fn(|balance: &mut u64| {
//!     *balance = balance.saturating_sub(5);
//!     format!("withdraw 5 -> {balance}")
//! });
//! ```

use crate::GentestResult;

/// A participant that can act on shared state of type `S`.
///
/// The returned string is recorded verbatim after the generator name and is
/// never interpreted. Returning an error aborts the surrounding run.
pub trait Actor<S> {
    /// Perform one action and describe it.
    fn perform(&mut self, shared: &mut S) -> GentestResult<String>;

    /// Reset any randomness the actor owns to the stream named by `seed`.
    ///
    /// Called on every actor when the owning generator is seeded, so nested
    /// generators follow the seed of the run they take part in. Actors
    /// without their own randomness keep the default no-op.
    fn reseed(&mut self, _seed: u64) {}
}

impl<S, A: Actor<S> + ?Sized> Actor<S> for Box<A> {
    fn perform(&mut self, shared: &mut S) -> GentestResult<String> {
        (**self).perform(shared)
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }
}

/// Closure-based actor adapter.
struct FnActor<F> {
    f: F,
}

impl<S, F> Actor<S> for FnActor<F>
where
    F: FnMut(&mut S) -> String,
{
    fn perform(&mut self, shared: &mut S) -> GentestResult<String> {
        Ok((self.f)(shared))
    }
}

/// Create an infallible actor from a closure.
pub fn actor_fn<S, F>(f: F) -> Box<dyn Actor<S>>
where
    S: 'static,
    F: FnMut(&mut S) -> String + 'static,
{
    Box::new(FnActor { f })
}

/// Closure-based actor adapter for actions that can fail.
struct TryFnActor<F> {
    f: F,
}

impl<S, F> Actor<S> for TryFnActor<F>
where
    F: FnMut(&mut S) -> GentestResult<String>,
{
    fn perform(&mut self, shared: &mut S) -> GentestResult<String> {
        (self.f)(shared)
    }
}

/// Create a fallible actor from a closure.
pub fn try_actor_fn<S, F>(f: F) -> Box<dyn Actor<S>>
where
    S: 'static,
    F: FnMut(&mut S) -> GentestResult<String> + 'static,
{
    Box::new(TryFnActor { f })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GentestError;

    #[test]
    fn test_actor_fn_mutates_shared() {
        let mut actor = actor_fn(|n: &mut u32| {
            *n += 1;
            format!("n={n}")
        });
        let mut n = 0;
        assert_eq!(actor.perform(&mut n), Ok("n=1".to_string()));
        assert_eq!(actor.perform(&mut n), Ok("n=2".to_string()));
        assert_eq!(n, 2);
    }

    #[test]
    fn test_try_actor_fn_propagates_failure() {
        let mut actor = try_actor_fn(|_: &mut ()| Err(GentestError::actor("boom")));
        assert_eq!(actor.perform(&mut ()), Err(GentestError::actor("boom")));
    }
}
