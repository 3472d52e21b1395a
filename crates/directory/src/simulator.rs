// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Lookup simulator
//!
//! Serves records from a [`Directory`] after a timer-backed delay, standing in
//! for a database round trip. Many lookups can be in flight at once on a
//! single thread since each one only waits on a tokio timer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use await_loops_directory::{Directory, LookupSimulator, RecordSource};
//!
//! let simulator = LookupSimulator::new(Arc::new(Directory::roster()));
//! let user = simulator.fetch_record(3, false).await?;
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::jitter::JitterSource;
use crate::record::User;
use crate::{Directory, LookupResult, RecordSource};

/// Delay of one lookup, in time units
pub const DEFAULT_BASE_DELAY_UNITS: u32 = 3;

/// Default jitter radius, in time units
pub const DEFAULT_JITTER_RADIUS: u32 = 1;

/// Length of one time unit
pub const DEFAULT_TIME_UNIT: Duration = Duration::from_secs(1);

/// How long a simulated lookup takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Fixed delay before jitter, in time units
    pub base_delay_units: u32,

    /// Wall-clock length of one time unit
    pub time_unit: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            base_delay_units: DEFAULT_BASE_DELAY_UNITS,
            time_unit: DEFAULT_TIME_UNIT,
        }
    }
}

impl LatencyProfile {
    pub fn new(base_delay_units: u32, time_unit: Duration) -> Self {
        Self {
            base_delay_units,
            time_unit,
        }
    }

    /// Delay without jitter, saturating at `Duration::MAX`
    pub fn base_delay(&self) -> Duration {
        self.time_unit.saturating_mul(self.base_delay_units)
    }

    /// Delay after applying a signed offset, floored at zero and saturating
    /// at `Duration::MAX`
    pub fn delay_with_offset(&self, offset_units: i64) -> Duration {
        let units = (i64::from(self.base_delay_units) + offset_units).max(0);
        u32::try_from(units)
            .ok()
            .and_then(|units| self.time_unit.checked_mul(units))
            .unwrap_or(Duration::MAX)
    }

    /// Longest delay a lookup can take with jitter of up to `radius` units
    ///
    /// Returns `None` if that delay does not fit in a `Duration`.
    pub fn max_delay(&self, radius: u32) -> Option<Duration> {
        let units = self.base_delay_units.checked_add(radius)?;
        self.time_unit.checked_mul(units)
    }
}

/// Directory-backed [`RecordSource`] with simulated latency
#[derive(Debug)]
pub struct LookupSimulator {
    directory: Arc<Directory>,
    latency: LatencyProfile,
    jitter: JitterSource,
}

impl LookupSimulator {
    /// Create a simulator with the default latency and an OS-seeded jitter source
    pub fn new(directory: Arc<Directory>) -> Self {
        Self::with_parts(
            directory,
            LatencyProfile::default(),
            JitterSource::from_entropy(DEFAULT_JITTER_RADIUS),
        )
    }

    pub fn with_parts(
        directory: Arc<Directory>,
        latency: LatencyProfile,
        jitter: JitterSource,
    ) -> Self {
        Self {
            directory,
            latency,
            jitter,
        }
    }

    pub fn directory(&self) -> &Arc<Directory> {
        &self.directory
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    /// Pick the delay for one lookup
    pub fn next_delay(&self, jitter: bool) -> Duration {
        if jitter {
            self.latency.delay_with_offset(self.jitter.next_offset())
        } else {
            self.latency.base_delay()
        }
    }
}

#[async_trait]
impl RecordSource for LookupSimulator {
    fn size(&self) -> usize {
        self.directory.size()
    }

    async fn fetch_record(&self, index: usize, jitter: bool) -> LookupResult<User> {
        let user = self.directory.get(index)?.clone();
        let delay = self.next_delay(jitter);
        tracing::debug!(index, delay_ms = delay.as_millis() as u64, "fetching record");

        tokio::time::sleep(delay).await;
        Ok(user)
    }

    fn fetch_record_sync(&self, index: usize) -> LookupResult<User> {
        self.directory.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LookupError;
    use tokio::time::Instant;

    fn simulator(radius: u32) -> LookupSimulator {
        LookupSimulator::with_parts(
            Arc::new(Directory::roster()),
            LatencyProfile::default(),
            JitterSource::seeded(radius, 42),
        )
    }

    #[test]
    fn test_delay_with_offset_floors_at_zero() {
        let latency = LatencyProfile::default();
        assert_eq!(latency.delay_with_offset(-1), Duration::from_secs(2));
        assert_eq!(latency.delay_with_offset(1), Duration::from_secs(4));
        assert_eq!(latency.delay_with_offset(-5), Duration::ZERO);
    }

    #[test]
    fn test_huge_latency_saturates() {
        let latency = LatencyProfile::new(4000, Duration::from_millis(u64::MAX));

        assert_eq!(latency.base_delay(), Duration::MAX);
        assert_eq!(latency.delay_with_offset(1), Duration::MAX);
        assert_eq!(latency.max_delay(0), None);

        let wide = LatencyProfile::new(u32::MAX, Duration::from_nanos(1));
        assert_eq!(wide.delay_with_offset(1), Duration::MAX);
        assert_eq!(wide.max_delay(1), None);
        assert_eq!(
            LatencyProfile::default().max_delay(1),
            Some(Duration::from_secs(4))
        );
    }

    #[test]
    fn test_next_delay_jitter_values() {
        let simulator = simulator(1);
        assert_eq!(simulator.next_delay(false), Duration::from_secs(3));

        for _ in 0..50 {
            let delay = simulator.next_delay(true);
            assert!(delay == Duration::from_secs(2) || delay == Duration::from_secs(4));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_record_waits_base_delay() {
        let simulator = simulator(1);
        let start = Instant::now();

        let user = simulator.fetch_record(2, false).await.unwrap();

        assert_eq!(user.name, "Everette Hauck");
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(3));
        assert!(elapsed < Duration::from_millis(3050));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_record_out_of_range_fails_fast() {
        let simulator = simulator(1);
        let start = Instant::now();

        let result = simulator.fetch_record(50, false).await;

        assert_eq!(
            result,
            Err(LookupError::OutOfRange {
                index: 50,
                size: 50
            })
        );
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_fetch_record_sync_matches_async() {
        let simulator = LookupSimulator::with_parts(
            Arc::new(Directory::roster()),
            LatencyProfile::new(3, Duration::ZERO),
            JitterSource::seeded(1, 42),
        );

        for index in [0, 10, 49] {
            let sync = simulator.fetch_record_sync(index).unwrap();
            let async_user = tokio_test::block_on(simulator.fetch_record(index, true)).unwrap();
            assert_eq!(sync, async_user);
        }
    }
}
