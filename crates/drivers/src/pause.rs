// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Timed pauses, independent of any lookup

use await_loops_directory::{LookupError, LookupResult};
use std::time::Duration;
use tokio::time::Instant;

use crate::timer::Stopwatch;

/// Timer label for the pause demonstration
pub const PAUSE_LABEL: &str = "pause_demo";

/// Convert a duration in seconds, rejecting negative and non-finite values
pub fn pause_duration(seconds: f64) -> LookupResult<Duration> {
    Duration::try_from_secs_f64(seconds)
        .map_err(|e| LookupError::invalid(format!("invalid pause of {seconds}s: {e}")))
}

/// Suspend the caller for `seconds`
///
/// # Errors
///
/// Returns `LookupError::InvalidArgument` if `seconds` is negative or not finite.
pub async fn pause(seconds: f64) -> LookupResult<()> {
    let duration = pause_duration(seconds)?;
    tokio::time::sleep(duration).await;
    Ok(())
}

/// Pause `iterations` times in a row, timing and logging each pause
///
/// Returns the measured length of every pause.
///
/// # Errors
///
/// Returns `LookupError::InvalidArgument` if `seconds` is negative or not
/// finite. Nothing is paused in that case.
pub async fn pause_demo(iterations: usize, seconds: f64) -> LookupResult<Vec<Duration>> {
    pause_duration(seconds)?;
    let timer = Stopwatch::start(PAUSE_LABEL);
    let mut laps = Vec::with_capacity(iterations);

    for iteration in 1..=iterations {
        let lap = Instant::now();
        pause(seconds).await?;
        let elapsed = lap.elapsed();

        tracing::info!(
            iteration,
            elapsed_ms = elapsed.as_millis() as u64,
            "pause #{iteration}"
        );
        laps.push(elapsed);
    }

    timer.stop();
    Ok(laps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use await_loops_test_utils::capture_logs;

    #[test]
    fn test_pause_duration_rejects_bad_input() {
        assert_eq!(pause_duration(1.5), Ok(Duration::from_millis(1500)));
        assert_eq!(pause_duration(0.0), Ok(Duration::ZERO));

        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                pause_duration(bad),
                Err(LookupError::InvalidArgument(_))
            ));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_demo_times_each_pause() {
        let laps = pause_demo(3, 1.0).await.unwrap();

        assert_eq!(laps.len(), 3);
        for lap in laps {
            assert!(lap >= Duration::from_secs(1));
            assert!(lap < Duration::from_millis(1_050));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_negative_fails() {
        let start = Instant::now();
        assert!(pause(-0.5).await.is_err());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_demo_rejects_bad_seconds_before_timing() {
        let (logs, _guard) = capture_logs();

        assert!(matches!(
            pause_demo(2, f64::NAN).await,
            Err(LookupError::InvalidArgument(_))
        ));
        assert!(logs.events().is_empty());
    }

    #[tokio::test]
    async fn test_pause_demo_zero_iterations() {
        assert!(pause_demo(0, 5.0).await.unwrap().is_empty());
    }
}
