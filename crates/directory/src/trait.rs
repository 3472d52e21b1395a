// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # RecordSource trait for record lookups
//!
//! This module defines the async lookup contract the loop drivers are written
//! against.

use crate::error::LookupResult;
use crate::record::User;

/// Lookup contract for a position-indexed store of users
///
/// Implementations may add latency to `fetch_record`, but must resolve with
/// the same record `fetch_record_sync` returns for the same index.
///
/// # Examples
///
/// ```rust,ignore
/// use await_loops_directory::{LookupResult, RecordSource, User};
///
/// async fn first_two(source: &dyn RecordSource) -> LookupResult<Vec<User>> {
///     let a = source.fetch_record(0, false).await?;
///     let b = source.fetch_record(1, false).await?;
///     Ok(vec![a, b])
/// }
/// ```
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Number of records; indices in `[0, size())` are valid
    fn size(&self) -> usize;

    /// Fetch the record at `index`, suspending for the simulated latency
    ///
    /// # Arguments
    ///
    /// * `index` - Position in the directory
    /// * `jitter` - Perturb the delay by a random offset
    ///
    /// # Errors
    ///
    /// Returns `LookupError::OutOfRange` if `index >= size()`. The check
    /// happens before any suspension.
    async fn fetch_record(&self, index: usize, jitter: bool) -> LookupResult<User>;

    /// Fetch the record at `index` without any delay
    ///
    /// # Errors
    ///
    /// Returns `LookupError::OutOfRange` if `index >= size()`.
    fn fetch_record_sync(&self, index: usize) -> LookupResult<User>;
}
