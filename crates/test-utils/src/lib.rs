// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for await-loops
//!
//! This crate provides common testing components including:
//! - A scripted record source with per-index delays
//! - Tracing capture for asserting on log output
//! - Sample directories

pub mod fixtures;
pub mod log_capture;
pub mod mock_source;

// Re-exports for convenience
pub use fixtures::DirectoryFixtures;
pub use log_capture::{CapturedEvent, CapturedLogs, capture_logs};
pub use mock_source::{ScriptedSource, ScriptedSourceBuilder};
