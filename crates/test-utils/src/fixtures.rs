// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures and sample directories

use await_loops_directory::{Directory, User};

/// Sample directories for testing
pub struct DirectoryFixtures;

impl DirectoryFixtures {
    /// Three users, small enough to reason about by hand
    pub fn trio() -> Directory {
        Directory::from_names(["Ada Lovelace", "Grace Hopper", "Edsger Dijkstra"])
            .expect("fixture names are non-empty")
    }

    /// A directory with a single user; every generated index is 0
    pub fn singleton() -> Directory {
        Directory::from_names(["Only User"]).expect("fixture names are non-empty")
    }

    /// The default 50-user roster
    pub fn roster() -> Directory {
        Directory::roster()
    }

    /// Records a driver should return for `indices`, in the same order
    pub fn expected_users(directory: &Directory, indices: &[usize]) -> Vec<User> {
        indices
            .iter()
            .map(|&i| directory.get(i).expect("fixture index in range").clone())
            .collect()
    }
}
