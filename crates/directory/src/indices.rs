// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Random index selection

use rand::Rng;

use crate::{LookupError, LookupResult};

/// Draw `count` indices, each uniformly from `[0, size)`
///
/// Duplicates are allowed. `count == 0` yields an empty vector.
///
/// # Panics
///
/// Panics if `size` is zero and `count` is not. Every [`crate::Directory`]
/// holds at least one record, so sizes taken from a directory are safe.
pub fn generate_indices<R: Rng>(rng: &mut R, size: usize, count: usize) -> Vec<usize> {
    (0..count).map(|_| rng.random_range(0..size)).collect()
}

/// Convert a signed count from user input into a usable one
///
/// # Errors
///
/// Returns `LookupError::InvalidArgument` if `raw` is negative.
pub fn checked_count(raw: i64) -> LookupResult<usize> {
    usize::try_from(raw)
        .map_err(|_| LookupError::invalid(format!("count must not be negative, got {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_indices_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for count in [0, 1, 5, 100] {
            let indices = generate_indices(&mut rng, 50, count);
            assert_eq!(indices.len(), count);
            assert!(indices.iter().all(|&i| i < 50));
        }
    }

    #[test]
    fn test_generate_indices_zero_count() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(generate_indices(&mut rng, 50, 0).is_empty());
    }

    #[test]
    fn test_generate_indices_single_record() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_indices(&mut rng, 1, 4), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_generate_indices_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_indices(&mut rng1, 50, 20),
            generate_indices(&mut rng2, 50, 20)
        );
    }

    #[test]
    fn test_checked_count() {
        assert_eq!(checked_count(0), Ok(0));
        assert_eq!(checked_count(5), Ok(5));
        assert!(matches!(
            checked_count(-1),
            Err(LookupError::InvalidArgument(_))
        ));
    }
}
