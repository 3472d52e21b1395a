// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Labelled timers
//!
//! Every driver call is bracketed by a `timer started` / `timer ended` event
//! pair carrying the driver's label in the `timer` field. The end event is
//! emitted even when the driver bails out early with an error, since it is
//! also logged on drop.

use std::time::Duration;
use tokio::time::Instant;

/// Message of the event emitted when a timer starts
pub const TIMER_STARTED: &str = "timer started";

/// Message of the event emitted when a timer ends
pub const TIMER_ENDED: &str = "timer ended";

/// Wall-clock timer that logs its start and end
#[derive(Debug)]
pub struct Stopwatch {
    label: String,
    started: Instant,
    finished: bool,
}

impl Stopwatch {
    pub fn start(label: impl Into<String>) -> Self {
        let label = label.into();
        tracing::info!(timer = label.as_str(), "timer started");

        Self {
            label,
            started: Instant::now(),
            finished: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Log the end event and return the elapsed time
    pub fn stop(mut self) -> Duration {
        self.finish()
    }

    fn finish(&mut self) -> Duration {
        let elapsed = self.elapsed();
        if !self.finished {
            self.finished = true;
            tracing::info!(
                timer = self.label.as_str(),
                elapsed_ms = elapsed.as_millis() as u64,
                "timer ended"
            );
        }
        elapsed
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use await_loops_test_utils::capture_logs;

    #[tokio::test(start_paused = true)]
    async fn test_stop_logs_start_and_end() {
        let (logs, _guard) = capture_logs();

        let timer = Stopwatch::start("demo");
        tokio::time::sleep(Duration::from_secs(2)).await;
        let elapsed = timer.stop();

        assert!(elapsed >= Duration::from_secs(2));
        let events = logs.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, TIMER_STARTED);
        assert_eq!(events[1].message, TIMER_ENDED);
        assert_eq!(events[1].field("timer"), Some("demo"));
        assert!(events[1].field("elapsed_ms").is_some());
    }

    #[test]
    fn test_drop_logs_end_once() {
        let (logs, _guard) = capture_logs();

        {
            let _timer = Stopwatch::start("dropped");
        }
        Stopwatch::start("stopped").stop();

        assert_eq!(logs.with_message(TIMER_ENDED).len(), 2);
    }
}
