use thiserror::Error;

/// Errors that can occur while building or running a generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GentestError {
    /// Weighted construction received a different number of weights and actors.
    #[error("weights != actors: {actors} actors but {weights} weights")]
    WeightMismatch {
        /// Number of actors supplied.
        actors: usize,
        /// Number of weights supplied.
        weights: usize,
    },
    /// Selection found no actor to run (no actors, or every weight is zero).
    #[error("no eligible actor in generator '{generator}' (total weight {total_weight})")]
    NoEligibleActor {
        /// Name of the generator that attempted the selection.
        generator: String,
        /// Sum of the weights at selection time.
        total_weight: u64,
    },
    /// The shared context was already borrowed when a step started.
    #[error("shared context of generator '{generator}' is already borrowed")]
    ContextBorrowed {
        /// Name of the generator that attempted the step.
        generator: String,
    },
    /// An actor reported a failure while performing its action.
    #[error("actor failed in generator '{generator}': {reason}")]
    ActorFailed {
        /// Name of the innermost generator the actor belongs to.
        ///
        /// Empty until the error passes through a generator.
        generator: String,
        /// Failure description supplied by the actor.
        reason: String,
    },
}

impl GentestError {
    /// Build an actor failure. The owning generator fills in its name.
    pub fn actor(reason: impl Into<String>) -> Self {
        GentestError::ActorFailed {
            generator: String::new(),
            reason: reason.into(),
        }
    }

    /// Attach a generator name to an actor failure that has none yet.
    pub(crate) fn in_generator(self, name: &str) -> Self {
        match self {
            GentestError::ActorFailed { generator, reason } if generator.is_empty() => {
                GentestError::ActorFailed {
                    generator: name.to_string(),
                    reason,
                }
            }
            other => other,
        }
    }
}

/// A type alias for `Result<T, GentestError>`.
pub type GentestResult<T> = Result<T, GentestError>;
