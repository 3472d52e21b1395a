// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Await Loops - Directory Layer
//!
//! This crate provides the mock data source the loop drivers read from.
//! It defines the `RecordSource` trait and the types behind it:
//!
//! - **Directory**: an immutable, position-indexed list of users
//! - **Lookup Simulator**: serves directory records after a timer-backed delay
//! - **Jitter**: seedable signed offsets that perturb the delay
//! - **Index Generator**: uniform random positions into the directory
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use await_loops_directory::{Directory, LookupError, LookupSimulator, RecordSource};
//!
//! async fn print_user(source: &dyn RecordSource) -> Result<(), LookupError> {
//!     let user = source.fetch_record(0, false).await?;
//!     println!("{}", user.name);
//!     Ok(())
//! }
//!
//! let simulator = LookupSimulator::new(Arc::new(Directory::roster()));
//! print_user(&simulator).await?;
//! ```

pub mod error;
pub mod indices;
pub mod jitter;
pub mod record;
pub mod simulator;
pub mod r#static;
pub mod r#trait;

// Re-exports
pub use error::{LookupError, LookupResult};
pub use indices::{checked_count, generate_indices};
pub use jitter::JitterSource;
pub use record::User;
pub use simulator::{
    DEFAULT_BASE_DELAY_UNITS, DEFAULT_JITTER_RADIUS, DEFAULT_TIME_UNIT, LatencyProfile,
    LookupSimulator,
};
pub use r#static::Directory;
pub use r#trait::RecordSource;
