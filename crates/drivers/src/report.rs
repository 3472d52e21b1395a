// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Driver results

use await_loops_directory::{LookupResult, User};
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};

/// Outcome of a driver that waits for its lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopReport {
    /// Indices the driver looked up, in dispatch order
    pub indices: Vec<usize>,

    /// `users[i]` is the record at `indices[i]`
    pub users: Vec<User>,

    /// Time between the start and end timer events
    pub elapsed: Duration,
}

impl LoopReport {
    pub fn names(&self) -> Vec<&str> {
        self.users.iter().map(|u| u.name.as_str()).collect()
    }
}

/// Outcome of the fire-and-forget driver
///
/// In async mode the driver returns while its lookups are still in flight, so
/// `accumulated` is always empty at that point. The spawned tasks keep running
/// and log their own results; `handles` lets a caller wait for them anyway.
#[derive(Debug)]
pub struct DispatchReport {
    pub indices: Vec<usize>,

    /// Records available when the driver returned
    pub accumulated: Vec<User>,

    pub elapsed: Duration,

    /// One task per index, in dispatch order; empty in sync mode
    pub handles: Vec<JoinHandle<LookupResult<User>>>,
}

impl DispatchReport {
    /// Number of spawned lookups that have not finished yet
    pub fn in_flight(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Wait for every spawned lookup, returning results in dispatch order
    ///
    /// # Errors
    ///
    /// Returns the `JoinError` of the first task that panicked or was cancelled.
    pub async fn settle(self) -> Result<Vec<LookupResult<User>>, JoinError> {
        futures::future::join_all(self.handles)
            .await
            .into_iter()
            .collect()
    }
}
