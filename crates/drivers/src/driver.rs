// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Loop driver
//!
//! Pairs a [`RecordSource`] with the random source used to pick indices, and
//! exposes each loop pattern as a method that picks its own indices.

use await_loops_directory::{
    Directory, JitterSource, LookupResult, LookupSimulator, RecordSource, generate_indices,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::collected::run_collected;
use crate::config::DemoConfig;
use crate::fire_and_forget::run_fire_and_forget;
use crate::pause;
use crate::report::{DispatchReport, LoopReport};
use crate::sequential::run_sequential;

// Keeps the jitter and index streams apart when both derive from one seed
const INDEX_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Runs the loop patterns against one record source
pub struct LoopDriver {
    source: Arc<dyn RecordSource>,
    rng: Mutex<StdRng>,
}

impl LoopDriver {
    /// Create a driver whose indices come from an OS-seeded generator
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self::with_rng(source, StdRng::from_os_rng())
    }

    /// Create a driver with reproducible index selection
    pub fn seeded(source: Arc<dyn RecordSource>, seed: u64) -> Self {
        Self::with_rng(source, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(source: Arc<dyn RecordSource>, rng: StdRng) -> Self {
        Self {
            source,
            rng: Mutex::new(rng),
        }
    }

    /// Build a simulator over `directory` from `config` and wrap it
    pub fn from_config(config: &DemoConfig, directory: Arc<Directory>) -> Self {
        let jitter = match config.seed {
            Some(seed) => JitterSource::seeded(config.jitter_radius, seed),
            None => JitterSource::from_entropy(config.jitter_radius),
        };
        let source: Arc<dyn RecordSource> = Arc::new(LookupSimulator::with_parts(
            directory,
            config.latency(),
            jitter,
        ));

        match config.seed {
            Some(seed) => Self::seeded(source, seed ^ INDEX_SEED_MIX),
            None => Self::new(source),
        }
    }

    /// Pick `count` random indices into the source
    pub fn generate_indices(&self, count: usize) -> Vec<usize> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        generate_indices(&mut *rng, self.source.size(), count)
    }

    /// Look up `count` random records one after another
    pub async fn sequential(&self, count: usize, jitter: bool) -> LookupResult<LoopReport> {
        let indices = self.generate_indices(count);
        run_sequential(self.source.as_ref(), &indices, jitter).await
    }

    /// Dispatch `count` random lookups without waiting for them
    pub fn fire_and_forget(
        &self,
        count: usize,
        jitter: bool,
        sync_mode: bool,
    ) -> LookupResult<DispatchReport> {
        let indices = self.generate_indices(count);
        run_fire_and_forget(Arc::clone(&self.source), &indices, jitter, sync_mode)
    }

    /// Look up `count` random records concurrently and wait for all of them
    pub async fn collected(&self, count: usize, jitter: bool) -> LookupResult<LoopReport> {
        let indices = self.generate_indices(count);
        run_collected(self.source.as_ref(), &indices, jitter).await
    }

    /// Time `iterations` consecutive pauses of `seconds` each
    pub async fn pause_demo(&self, iterations: usize, seconds: f64) -> LookupResult<Vec<Duration>> {
        pause::pause_demo(iterations, seconds).await
    }
}

impl fmt::Debug for LoopDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopDriver")
            .field("source_size", &self.source.size())
            .finish_non_exhaustive()
    }
}
