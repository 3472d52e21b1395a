// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Scripted record source for testing
//!
//! Wraps a [`Directory`] with per-index delays chosen by the test, and records
//! the order in which lookups complete.

use await_loops_directory::{Directory, LookupResult, RecordSource, User};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Record source with scripted latency and completion tracking
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    directory: Arc<Directory>,
    default_delay: Duration,
    delays: HashMap<usize, Duration>,
    completions: Arc<Mutex<Vec<usize>>>,
    sync_calls: Arc<Mutex<Vec<usize>>>,
}

impl ScriptedSource {
    /// Create a source over `directory` where every lookup waits `default_delay`
    pub fn new(directory: Arc<Directory>, default_delay: Duration) -> Self {
        Self {
            directory,
            default_delay,
            delays: HashMap::new(),
            completions: Arc::new(Mutex::new(Vec::new())),
            sync_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Override the delay for one index
    pub fn with_delay(mut self, index: usize, delay: Duration) -> Self {
        self.delays.insert(index, delay);
        self
    }

    pub fn directory(&self) -> &Arc<Directory> {
        &self.directory
    }

    /// Indices of async lookups in the order they completed
    pub fn completions(&self) -> Vec<usize> {
        self.completions.lock().unwrap().clone()
    }

    /// Indices passed to `fetch_record_sync`, in call order
    pub fn sync_calls(&self) -> Vec<usize> {
        self.sync_calls.lock().unwrap().clone()
    }

    fn delay_for(&self, index: usize) -> Duration {
        self.delays
            .get(&index)
            .copied()
            .unwrap_or(self.default_delay)
    }
}

#[async_trait::async_trait]
impl RecordSource for ScriptedSource {
    fn size(&self) -> usize {
        self.directory.size()
    }

    async fn fetch_record(&self, index: usize, _jitter: bool) -> LookupResult<User> {
        let user = self.directory.get(index)?.clone();
        tokio::time::sleep(self.delay_for(index)).await;
        self.completions.lock().unwrap().push(index);
        Ok(user)
    }

    fn fetch_record_sync(&self, index: usize) -> LookupResult<User> {
        self.sync_calls.lock().unwrap().push(index);
        self.directory.get(index).cloned()
    }
}

/// Builder for creating scripted sources with a fluent API
pub struct ScriptedSourceBuilder {
    directory: Arc<Directory>,
    default_delay: Duration,
    delays: Vec<(usize, Duration)>,
}

impl Default for ScriptedSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedSourceBuilder {
    /// Start from the default roster and a 3 second delay
    pub fn new() -> Self {
        Self {
            directory: Arc::new(Directory::roster()),
            default_delay: Duration::from_secs(3),
            delays: Vec::new(),
        }
    }

    pub fn with_directory(mut self, directory: Directory) -> Self {
        self.directory = Arc::new(directory);
        self
    }

    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    /// Make lookups of `index` take `delay` instead of the default
    pub fn with_delay(mut self, index: usize, delay: Duration) -> Self {
        self.delays.push((index, delay));
        self
    }

    pub fn build(self) -> ScriptedSource {
        self.delays.into_iter().fold(
            ScriptedSource::new(self.directory, self.default_delay),
            |source, (index, delay)| source.with_delay(index, delay),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_scripted_delays_reorder_completion() {
        let source = ScriptedSourceBuilder::new()
            .with_delay(2, Duration::from_secs(5))
            .with_delay(0, Duration::from_secs(1))
            .build();

        let (a, b) = tokio::join!(source.fetch_record(2, false), source.fetch_record(0, false));

        assert_eq!(a.unwrap().name, "Everette Hauck");
        assert_eq!(b.unwrap().name, "Marlee Beier");
        assert_eq!(source.completions(), vec![0, 2]);
    }

    #[test]
    fn test_sync_calls_recorded() {
        let source = ScriptedSourceBuilder::new().build();

        source.fetch_record_sync(4).unwrap();
        assert!(source.fetch_record_sync(99).is_err());

        assert_eq!(source.sync_calls(), vec![4, 99]);
    }
}
