// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Collected driver
//!
//! Creates every lookup up front, then waits once for all of them. This is
//! the pattern to reach for when the caller needs every result before moving
//! on: the total time is the longest single delay, and results line up with
//! the input indices whatever order the lookups finish in.

use await_loops_directory::{LookupResult, RecordSource};
use futures::future::try_join_all;

use crate::report::LoopReport;
use crate::timer::Stopwatch;

/// Timer label for the collected driver
pub const COLLECTED_LABEL: &str = "collected";

/// Look up `indices` concurrently and wait for all of them
///
/// # Errors
///
/// Returns `LookupError::OutOfRange` if any index is invalid.
pub async fn run_collected(
    source: &dyn RecordSource,
    indices: &[usize],
    jitter: bool,
) -> LookupResult<LoopReport> {
    let timer = Stopwatch::start(COLLECTED_LABEL);

    let pending: Vec<_> = indices
        .iter()
        .map(|&index| source.fetch_record(index, jitter))
        .collect();
    tracing::debug!(pending = pending.len(), "dispatched lookups");

    let users = try_join_all(pending).await?;

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    tracing::info!(count = users.len(), users = ?names, "collected results");

    Ok(LoopReport {
        indices: indices.to_vec(),
        elapsed: timer.stop(),
        users,
    })
}
