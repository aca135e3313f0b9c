//! # Moonpool Gentest
//!
//! Weighted random action sequences for stress testing stateful systems.
//!
//! A [`Generator`] holds a set of [`Actor`]s, each with an integer weight,
//! and a [`SharedContext`] they all act on. Every step picks one actor with
//! probability `weight / total_weight`, lets it mutate the context, and logs
//! `"<generator name>: <what the actor did>"`. The log is the sequence of
//! actions to inspect or replay when the system under test misbehaves.
//!
//! ## Quick Start
//!
//! ```
//! use moonpool_gentest::{Generator, SharedContext, actor_fn};
//!
//! let queue = SharedContext::new(Vec::<u32>::new());
//! let mut test = Generator::with_weights(
//!     "queue",
//!     vec![
//!         actor_fn(|q: &mut Vec<u32>| { q.push(1); "push".to_string() }),
//!         actor_fn(|q: &mut Vec<u32>| format!("pop {:?}", q.pop())),
//!     ],
//!     queue.clone(),
//!     vec![3, 1],
//! );
//! test.set_commands(50);
//! test.set_seed(7);
//! test.run().expect("run completes");
//! assert_eq!(test.actions().len(), 50);
//! ```
//!
//! ## Nesting
//!
//! A generator is an actor too. Performing it makes one weighted choice among
//! its own actors, so an inner generator embedded in an outer one produces
//! records like `"outer: inner: push"`.
//!
//! ## Reproducibility
//!
//! Every run reseeds the generator's own [`RandomProvider`]. With a fixed seed
//! ([`Generator::set_seed`]) the same actors produce the same log; without
//! one the seed comes from the clock and is reported in the [`RunReport`].

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

/// Actor trait and closure adapters.
pub mod actor;
/// Generator configuration.
pub mod config;
/// Shared context handle.
pub mod context;
/// Error types.
pub mod error;
/// The sequence generator.
pub mod generator;
/// Random number generation providers.
pub mod random;
/// Per-run reports.
pub mod report;
/// Weighted choice.
pub mod weights;

pub use actor::{Actor, actor_fn, try_actor_fn};
pub use config::{DEFAULT_COMMANDS, GeneratorConfig};
pub use context::SharedContext;
pub use error::{GentestError, GentestResult};
pub use generator::Generator;
pub use random::{RandomProvider, sim::SimRandomProvider, time_seed};
pub use report::RunReport;
pub use weights::{choose_weighted, pick_index, total_weight};
