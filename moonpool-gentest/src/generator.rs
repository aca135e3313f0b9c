//! The sequence generator.
//!
//! A [`Generator`] holds a named list of actors with positional weights and a
//! handle to the shared context. Each step picks one actor with probability
//! proportional to its weight, lets it act on the context, and records
//! `"<name>: <description>"` in the action log.
//!
//! The generator is itself an [`Actor`]: performing it runs exactly one step
//! against the caller's context, so generators nest inside other generators.
//!
//! ```
//! use moonpool_gentest::{Generator, GeneratorConfig, SharedContext, actor_fn};
//!
//! let balance = SharedContext::new(0i64);
//! let mut bank = Generator::with_weights(
//!     "bank",
//!     vec![
//!         actor_fn(|b: &mut i64| { *b += 10; "deposit".to_string() }),
//!         actor_fn(|b: &mut i64| { *b -= 1; "withdraw".to_string() }),
//!     ],
//!     balance.clone(),
//!     vec![1, 3],
//! )
//! .with_config(GeneratorConfig::default().with_commands(100).with_seed(42));
//!
//! let report = bank.run().expect("run completes");
//! assert_eq!(report.steps, 100);
//! assert_eq!(bank.actions().len(), 100);
//! assert!(bank.actions()[0].starts_with("bank: "));
//! ```

use std::fmt;
use std::time::Instant;

use tracing::{debug, instrument, trace, warn};

use crate::actor::Actor;
use crate::config::GeneratorConfig;
use crate::context::SharedContext;
use crate::error::{GentestError, GentestResult};
use crate::random::sim::SimRandomProvider;
use crate::random::{RandomProvider, time_seed};
use crate::report::RunReport;
use crate::weights::{choose_weighted, total_weight};

/// Weighted random action-sequence generator.
pub struct Generator<S, R = SimRandomProvider> {
    name: String,
    actors: Vec<Box<dyn Actor<S>>>,
    weights: Vec<u32>,
    shared: SharedContext<S>,
    random: R,
    /// Seed the provider was last reset to, `None` until first seeded.
    seed: Option<u64>,
    config: GeneratorConfig,
    actions: Vec<String>,
}

impl<S> Generator<S, SimRandomProvider> {
    /// Create a generator where every actor has weight 1.
    ///
    /// Nothing is validated here; a generator without actors fails on its
    /// first step with [`GentestError::NoEligibleActor`].
    pub fn new(
        name: impl Into<String>,
        actors: Vec<Box<dyn Actor<S>>>,
        shared: SharedContext<S>,
    ) -> Self {
        let weights = vec![1; actors.len()];
        Self::build(name.into(), actors, shared, weights)
    }

    /// Create a generator with explicit weights, one per actor.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len() != actors.len()`.
    pub fn with_weights(
        name: impl Into<String>,
        actors: Vec<Box<dyn Actor<S>>>,
        shared: SharedContext<S>,
        weights: Vec<u32>,
    ) -> Self {
        Self::try_with_weights(name, actors, shared, weights)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Create a generator with explicit weights, reporting a length mismatch
    /// as [`GentestError::WeightMismatch`].
    pub fn try_with_weights(
        name: impl Into<String>,
        actors: Vec<Box<dyn Actor<S>>>,
        shared: SharedContext<S>,
        weights: Vec<u32>,
    ) -> GentestResult<Self> {
        if actors.len() != weights.len() {
            return Err(GentestError::WeightMismatch {
                actors: actors.len(),
                weights: weights.len(),
            });
        }
        Ok(Self::build(name.into(), actors, shared, weights))
    }

    fn build(
        name: String,
        actors: Vec<Box<dyn Actor<S>>>,
        shared: SharedContext<S>,
        weights: Vec<u32>,
    ) -> Self {
        let config = GeneratorConfig::default();
        Self {
            name,
            actors,
            weights,
            shared,
            random: SimRandomProvider::default(),
            seed: None,
            actions: Vec::with_capacity(config.commands),
            config,
        }
    }
}

impl<S, R: RandomProvider> Generator<S, R> {
    /// Replace the random provider.
    pub fn with_random<R2: RandomProvider>(self, random: R2) -> Generator<S, R2> {
        Generator {
            name: self.name,
            actors: self.actors,
            weights: self.weights,
            shared: self.shared,
            random,
            seed: None,
            config: self.config,
            actions: self.actions,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of steps the next run executes. The default is 10000.
    ///
    /// Entries already in the log are kept.
    pub fn set_commands(&mut self, commands: usize) {
        self.config.commands = commands;
    }

    /// Fix the seed used at the start of every run.
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
    }

    /// Go back to deriving a fresh seed from the clock on every run.
    pub fn clear_seed(&mut self) {
        self.config.seed = None;
    }

    /// Name used as the prefix of every record.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weights by actor position.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Number of steps a run executes.
    pub fn commands(&self) -> usize {
        self.config.commands
    }

    /// Seed applied by the last run or first manual step, if any.
    ///
    /// Nested generators report the seed their parent derived for them.
    pub fn current_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Number of actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the generator has no actors.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Handle to the shared context the generator runs against.
    pub fn shared(&self) -> &SharedContext<S> {
        &self.shared
    }

    /// Recorded actions in the order they happened.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Drain the recorded actions.
    pub fn take_actions(&mut self) -> Vec<String> {
        std::mem::take(&mut self.actions)
    }

    /// Box the generator so it can be nested inside another generator.
    pub fn into_actor(self) -> Box<dyn Actor<S>>
    where
        S: 'static,
        R: 'static,
    {
        Box::new(self)
    }

    /// Run the configured number of steps against the shared context.
    ///
    /// The generator is reseeded first, with the configured seed or one
    /// derived from the clock, and every actor is reseeded from that stream.
    /// Records are appended to the log as they are produced; if a step fails
    /// the run stops there and the error is returned, leaving the earlier
    /// records in place.
    #[instrument(skip(self), fields(generator = %self.name))]
    pub fn run(&mut self) -> GentestResult<RunReport> {
        let (seed, fixed_seed) = self.seed_from_config();

        let steps = self.config.commands;
        debug!(steps, seed, fixed_seed, "Starting run");

        self.actions.reserve(steps);
        let started = Instant::now();
        let mut selections = vec![0u64; self.actors.len()];

        for step in 0..steps {
            let (index, record) = match self.step_shared() {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(step, seed, error = %err, "Run aborted");
                    return Err(err);
                }
            };
            trace!(step, index, "Actor performed");
            selections[index] += 1;
            self.actions.push(record);
        }

        let wall_time = started.elapsed();
        debug!(steps, ?wall_time, "Run completed");

        Ok(RunReport {
            generator: self.name.clone(),
            seed,
            fixed_seed,
            steps,
            selections,
            wall_time,
        })
    }

    /// Perform a single step against the shared context and log it.
    ///
    /// The generator is seeded from its configuration on the first step if no
    /// run has seeded it yet; after that steps continue the current stream, so
    /// callers can drive steps from their own loop and stop whenever they like.
    pub fn step(&mut self) -> GentestResult<String> {
        if self.seed.is_none() {
            let (seed, fixed_seed) = self.seed_from_config();
            debug!(generator = %self.name, seed, fixed_seed, "Seeded on first step");
        }
        let (_, record) = self.step_shared()?;
        self.actions.push(record.clone());
        Ok(record)
    }

    fn seed_from_config(&mut self) -> (u64, bool) {
        let (seed, fixed_seed) = match self.config.seed {
            Some(seed) => (seed, true),
            None => (time_seed(), false),
        };
        Actor::reseed(self, seed);
        (seed, fixed_seed)
    }

    fn step_shared(&mut self) -> GentestResult<(usize, String)> {
        let shared = self.shared.clone();
        let mut state = shared
            .try_borrow_mut()
            .ok_or_else(|| GentestError::ContextBorrowed {
                generator: self.name.clone(),
            })?;
        self.perform_step(&mut state)
    }

    /// Pick an actor, let it act on `shared`, and format the record.
    fn perform_step(&mut self, shared: &mut S) -> GentestResult<(usize, String)> {
        let index = choose_weighted(&self.weights, &mut self.random).ok_or_else(|| {
            GentestError::NoEligibleActor {
                generator: self.name.clone(),
                total_weight: total_weight(&self.weights),
            }
        })?;

        let description = self.actors[index]
            .perform(shared)
            .map_err(|err| err.in_generator(&self.name))?;

        Ok((index, format!("{}: {}", self.name, description)))
    }
}

impl<S, R: RandomProvider> Actor<S> for Generator<S, R> {
    /// One weighted step against the caller's context.
    ///
    /// The record is returned, not appended to this generator's own log.
    fn perform(&mut self, shared: &mut S) -> GentestResult<String> {
        self.perform_step(shared).map(|(_, record)| record)
    }

    /// Reset the provider to `seed`, then give each actor a seed drawn from it.
    fn reseed(&mut self, seed: u64) {
        self.random.reseed(seed);
        for actor in &mut self.actors {
            actor.reseed(self.random.random_range(0..u64::MAX));
        }
        self.seed = Some(seed);
    }
}

impl<S, R> fmt::Debug for Generator<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("name", &self.name)
            .field("actors", &self.actors.len())
            .field("weights", &self.weights)
            .field("seed", &self.seed)
            .field("config", &self.config)
            .field("actions", &self.actions.len())
            .finish()
    }
}
