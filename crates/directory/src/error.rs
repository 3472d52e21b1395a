// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for directory lookups
//!
//! Both variants describe malformed input from the caller. Nothing here is
//! retried or recovered from; the condition is handed back to the caller.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for directory operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur while reading from the directory
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum LookupError {
    /// Index is outside `[0, size)`
    #[error("Index {index} is out of range for a directory of {size} records")]
    OutOfRange { index: usize, size: usize },

    /// Negative count or duration, or an otherwise unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl LookupError {
    /// Shorthand for building an [`LookupError::InvalidArgument`]
    pub fn invalid(reason: impl Into<String>) -> Self {
        LookupError::InvalidArgument(reason.into())
    }
}
