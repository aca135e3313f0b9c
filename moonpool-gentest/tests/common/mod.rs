//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

use moonpool_gentest::{Actor, RandomProvider, SimRandomProvider, actor_fn};
use rand::distr::uniform::SampleUniform;

/// State mutated by the test actors.
#[derive(Debug, Default)]
pub struct Ledger {
    pub performed: u64,
    pub by_label: std::collections::BTreeMap<String, u64>,
}

/// Actor that always reports `label` and counts itself in the ledger.
pub fn labelled(label: &'static str) -> Box<dyn Actor<Ledger>> {
    actor_fn(move |ledger: &mut Ledger| {
        ledger.performed += 1;
        *ledger.by_label.entry(label.to_string()).or_default() += 1;
        label.to_string()
    })
}

/// Random provider that counts range draws.
#[derive(Clone)]
pub struct CountingRandom {
    inner: SimRandomProvider,
    pub draws: Rc<Cell<u64>>,
}

impl CountingRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SimRandomProvider::new(seed),
            draws: Rc::new(Cell::new(0)),
        }
    }
}

impl RandomProvider for CountingRandom {
    fn reseed(&mut self, seed: u64) {
        self.inner.reseed(seed);
    }

    fn random_range<T>(&mut self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.draws.set(self.draws.get() + 1);
        self.inner.random_range(range)
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
