// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Sequential driver
//!
//! Awaits each lookup before starting the next. The lookups are independent,
//! so the total time is the sum of every delay instead of the longest one.

use await_loops_directory::{LookupResult, RecordSource};
use tokio::time::Instant;

use crate::report::LoopReport;
use crate::timer::Stopwatch;

/// Timer label for the sequential driver
pub const SEQUENTIAL_LABEL: &str = "sequential";

/// Look up `indices` one at a time, in order
///
/// # Errors
///
/// Returns `LookupError::OutOfRange` at the first invalid index. Lookups
/// before it have already completed and been logged.
pub async fn run_sequential(
    source: &dyn RecordSource,
    indices: &[usize],
    jitter: bool,
) -> LookupResult<LoopReport> {
    let timer = Stopwatch::start(SEQUENTIAL_LABEL);
    let mut users = Vec::with_capacity(indices.len());

    for (position, &index) in indices.iter().enumerate() {
        let lap = Instant::now();
        let user = source.fetch_record(index, jitter).await?;

        tracing::info!(
            item = position + 1,
            index,
            name = user.name.as_str(),
            elapsed_ms = lap.elapsed().as_millis() as u64,
            "User #{}",
            position + 1
        );
        users.push(user);
    }

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    tracing::info!(count = users.len(), users = ?names, "sequential results");

    Ok(LoopReport {
        indices: indices.to_vec(),
        elapsed: timer.stop(),
        users,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use await_loops_directory::LookupError;
    use await_loops_test_utils::{DirectoryFixtures, ScriptedSourceBuilder, capture_logs};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_sequential_preserves_order() {
        let source = ScriptedSourceBuilder::new().build();

        let report = run_sequential(&source, &[2, 0, 10], false).await.unwrap();

        assert_eq!(
            report.users,
            DirectoryFixtures::expected_users(source.directory(), &[2, 0, 10])
        );
        assert_eq!(source.completions(), vec![2, 0, 10]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_sums_delays() {
        let source = ScriptedSourceBuilder::new().build();

        let report = run_sequential(&source, &[1, 2, 3, 4], false).await.unwrap();

        assert!(report.elapsed >= Duration::from_secs(12));
        assert!(report.elapsed < Duration::from_millis(12_100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_repeats_duplicate_indices() {
        let source = ScriptedSourceBuilder::new()
            .with_directory(DirectoryFixtures::singleton())
            .with_default_delay(Duration::from_secs(1))
            .build();

        let report = run_sequential(&source, &[0, 0, 0], false).await.unwrap();

        assert_eq!(report.names(), vec!["Only User"; 3]);
        assert_eq!(source.completions(), vec![0, 0, 0]);
        assert!(report.elapsed >= Duration::from_secs(3));
        assert!(report.elapsed < Duration::from_millis(3_100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_stops_at_out_of_range() {
        let source = ScriptedSourceBuilder::new().build();

        let result = run_sequential(&source, &[1, 50, 2], false).await;

        assert_eq!(
            result,
            Err(LookupError::OutOfRange {
                index: 50,
                size: 50
            })
        );
        assert_eq!(source.completions(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_logs_numbered_items() {
        let (logs, _guard) = capture_logs();
        let source = ScriptedSourceBuilder::new().build();

        run_sequential(&source, &[4, 4], false).await.unwrap();

        let messages = logs.messages();
        assert!(messages.contains(&"User #1".to_string()));
        assert!(messages.contains(&"User #2".to_string()));
        assert_eq!(logs.with_message("User #2")[0].field("name"), Some("Letitia Harvey"));
    }
}
