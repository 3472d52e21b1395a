// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Jitter source
//!
//! Draws signed delay offsets from `{-R, ..., -1, 1, ..., R}`. Zero is never
//! produced for a non-zero radius, so every jittered delay actually moves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Seedable source of signed delay offsets
#[derive(Debug)]
pub struct JitterSource {
    radius: u32,
    rng: Mutex<StdRng>,
}

impl JitterSource {
    /// Create a jitter source with a fixed seed
    pub fn seeded(radius: u32, seed: u64) -> Self {
        Self::from_rng(radius, StdRng::seed_from_u64(seed))
    }

    /// Create a jitter source seeded from the operating system
    pub fn from_entropy(radius: u32) -> Self {
        Self::from_rng(radius, StdRng::from_os_rng())
    }

    pub fn from_rng(radius: u32, rng: StdRng) -> Self {
        Self {
            radius,
            rng: Mutex::new(rng),
        }
    }

    /// Draw the next offset, in time units
    ///
    /// Returns 0 when the radius is 0.
    pub fn next_offset(&self) -> i64 {
        if self.radius == 0 {
            return 0;
        }

        // A poisoned lock still holds a valid generator
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let magnitude = i64::from(rng.random_range(1..=self.radius));
        if rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_offsets_within_radius() {
        let jitter = JitterSource::seeded(3, 42);

        for _ in 0..200 {
            let offset = jitter.next_offset();
            assert!((-3..=3).contains(&offset));
            assert_ne!(offset, 0);
        }
    }

    #[test]
    fn test_offsets_cover_both_signs() {
        let jitter = JitterSource::seeded(1, 42);
        let seen: HashSet<i64> = (0..100).map(|_| jitter.next_offset()).collect();
        assert_eq!(seen, HashSet::from([-1, 1]));
    }

    #[test]
    fn test_zero_radius() {
        let jitter = JitterSource::seeded(0, 42);
        assert_eq!(jitter.next_offset(), 0);
    }

    #[test]
    fn test_same_seed_same_offsets() {
        let a = JitterSource::seeded(2, 9);
        let b = JitterSource::seeded(2, 9);
        let a: Vec<i64> = (0..16).map(|_| a.next_offset()).collect();
        let b: Vec<i64> = (0..16).map(|_| b.next_offset()).collect();
        assert_eq!(a, b);
    }
}
