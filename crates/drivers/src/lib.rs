// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Await Loops - Drivers
//!
//! This crate runs the same batch of independent lookups three ways to show
//! what awaiting inside a loop costs.
//!
//! ## Overview
//!
//! - **Sequential**: awaits each lookup before starting the next; takes the
//!   sum of all delays
//! - **Fire-and-forget**: spawns every lookup and returns at once; results
//!   only show up in the log, after the driver has returned
//! - **Collected**: starts every lookup, then awaits them together; takes the
//!   longest single delay and returns results in index order
//!
//! A pause demonstration times a series of plain sleeps for comparison.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        await-loops binary (clap)        │
//! └──────────────┬──────────────────────────┘
//!                │ DemoConfig
//!                ↓
//! ┌─────────────────────────────────────────┐
//! │               LoopDriver                │
//! ├─────────────────────────────────────────┤
//! │  • sequential / fire_and_forget         │
//! │  • collected / pause_demo               │
//! └──────────────┬──────────────────────────┘
//!                │ RecordSource
//!                ↓
//! ┌─────────────────────────────────────────┐
//! │  LookupSimulator → Directory (Arc)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use await_loops_directory::Directory;
//! use await_loops_drivers::{DemoConfig, LoopDriver};
//!
//! let driver = LoopDriver::from_config(&DemoConfig::default(), Arc::new(Directory::roster()));
//! let report = driver.collected(5, false).await?;
//! println!("{:?} in {:?}", report.names(), report.elapsed);
//! ```

pub mod collected;
pub mod config;
pub mod driver;
pub mod fire_and_forget;
pub mod pause;
pub mod report;
pub mod sequential;
pub mod timer;

// Re-exports
pub use await_loops_directory::{Directory, LookupError, LookupResult, RecordSource, User};
pub use collected::{COLLECTED_LABEL, run_collected};
pub use config::{ConfigError, DemoConfig};
pub use driver::LoopDriver;
pub use fire_and_forget::{FIRE_AND_FORGET_LABEL, run_fire_and_forget};
pub use pause::{PAUSE_LABEL, pause, pause_demo, pause_duration};
pub use report::{DispatchReport, LoopReport};
pub use sequential::{SEQUENTIAL_LABEL, run_sequential};
pub use timer::{Stopwatch, TIMER_ENDED, TIMER_STARTED};
