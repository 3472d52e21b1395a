// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Fire-and-forget driver
//!
//! Spawns one task per index and returns immediately. Each task logs its own
//! record when its lookup completes. The driver never waits for that work, so
//! the accumulator it reports is empty at return; the task handles are the
//! only way to observe completion.
//!
//! Sync mode runs the same loop with `fetch_record_sync`: no suspension, and
//! every record is logged in order before the driver returns.

use await_loops_directory::{LookupError, LookupResult, RecordSource};
use std::sync::Arc;

use crate::report::DispatchReport;
use crate::timer::Stopwatch;

/// Timer label for the fire-and-forget driver
pub const FIRE_AND_FORGET_LABEL: &str = "fire_and_forget";

/// Dispatch a lookup for every index without waiting for any of them
///
/// Must be called from within a tokio runtime when `sync_mode` is false.
///
/// # Errors
///
/// Returns `LookupError::OutOfRange` if any index is invalid. Indices are
/// checked before anything is dispatched.
pub fn run_fire_and_forget(
    source: Arc<dyn RecordSource>,
    indices: &[usize],
    jitter: bool,
    sync_mode: bool,
) -> LookupResult<DispatchReport> {
    let timer = Stopwatch::start(FIRE_AND_FORGET_LABEL);

    let size = source.size();
    if let Some(&index) = indices.iter().find(|&&index| index >= size) {
        return Err(LookupError::OutOfRange { index, size });
    }

    let mut accumulated = Vec::new();
    let mut handles = Vec::new();

    if sync_mode {
        for (position, &index) in indices.iter().enumerate() {
            let user = source.fetch_record_sync(index)?;
            tracing::info!(
                item = position + 1,
                index,
                name = user.name.as_str(),
                "User #{}",
                position + 1
            );
            accumulated.push(user);
        }
    } else {
        handles.reserve(indices.len());
        for (position, &index) in indices.iter().enumerate() {
            let source = Arc::clone(&source);
            handles.push(tokio::spawn(async move {
                let result = source.fetch_record(index, jitter).await;
                match &result {
                    Ok(user) => tracing::info!(
                        item = position + 1,
                        index,
                        name = user.name.as_str(),
                        "User #{}",
                        position + 1
                    ),
                    Err(e) => tracing::warn!(item = position + 1, index, "lookup failed: {e}"),
                }
                result
            }));
        }
        tracing::debug!(spawned = handles.len(), "dispatched lookups");
    }

    tracing::info!(
        accumulated = accumulated.len(),
        in_flight = handles.len(),
        "fire-and-forget returning"
    );

    Ok(DispatchReport {
        indices: indices.to_vec(),
        accumulated,
        elapsed: timer.stop(),
        handles,
    })
}
