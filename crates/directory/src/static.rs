// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static Directory
//!
//! This module provides the read-only list of users every lookup reads from.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use await_loops_directory::Directory;
//!
//! let directory = Directory::roster();
//! let user = directory.get(2)?;
//! ```

use crate::record::User;
use crate::{LookupError, LookupResult};

/// Names backing [`Directory::roster`]
const ROSTER: [&str; 50] = [
    "Marlee Beier",
    "Mrs. Kennith Carter",
    "Everette Hauck",
    "Mr. Veronica Stehr",
    "Letitia Harvey",
    "Santina Schumm",
    "Jarret Jast",
    "Mr. Meghan Parker",
    "Rico Nienow",
    "Jermain Mante",
    "Barry Legros",
    "Liliana Beahan",
    "Sydnee King",
    "Savion Rippin",
    "Luna Russel",
    "Frankie Ward",
    "Tressa McGlynn",
    "Kaela Yost",
    "Dr. Mathilde Schneider",
    "Danika Rippin",
    "Aracely Lindgren",
    "Danielle Bernier",
    "Lucienne Leuschke",
    "Niko Kertzmann",
    "Anastacio Kutch",
    "Giuseppe Kilback PhD",
    "Bart Purdy",
    "Murphy Bauch",
    "Adam Koepp",
    "Maxie Rogahn",
    "Zella McCullough",
    "Omer Sporer",
    "Katharina Bode",
    "Audra Pacocha",
    "Edyth Reinger",
    "Everette Tillman",
    "Bennie Schiller",
    "Tia Padberg I",
    "Ines Tremblay",
    "Cora Lehner",
    "Miss Kaylah Jones",
    "Winona Dooley",
    "Rae Schiller",
    "Linnie Johnson",
    "Dr. Shanna Renner",
    "Litzy Lehner",
    "Dixie Watsica",
    "Amir Marquardt",
    "Mrs. Minnie Botsford",
    "Ari Kiehn",
];

/// Immutable, position-indexed list of users
///
/// A directory always holds at least one record. It is never mutated after
/// construction; share it behind an `Arc` when several tasks read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    /// Create the default 50-user directory
    pub fn roster() -> Self {
        Self {
            users: ROSTER.iter().map(|name| User::new(*name)).collect(),
        }
    }

    /// Create a directory from an explicit list of names
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidArgument` if `names` is empty.
    pub fn from_names<I, S>(names: I) -> LookupResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let users: Vec<User> = names.into_iter().map(User::new).collect();
        if users.is_empty() {
            return Err(LookupError::invalid(
                "a directory needs at least one record",
            ));
        }
        Ok(Self { users })
    }

    /// Number of records
    pub fn size(&self) -> usize {
        self.users.len()
    }

    /// Get the record at `index`
    ///
    /// # Errors
    ///
    /// Returns `LookupError::OutOfRange` if `index >= size()`.
    pub fn get(&self, index: usize) -> LookupResult<&User> {
        self.users.get(index).ok_or(LookupError::OutOfRange {
            index,
            size: self.users.len(),
        })
    }

    /// Iterate over all records in index order
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::roster()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_size() {
        let directory = Directory::roster();
        assert_eq!(directory.size(), 50);
    }

    #[test]
    fn test_roster_order() {
        let directory = Directory::roster();
        assert_eq!(directory.get(0).unwrap().name, "Marlee Beier");
        assert_eq!(directory.get(2).unwrap().name, "Everette Hauck");
        assert_eq!(directory.get(49).unwrap().name, "Ari Kiehn");
    }

    #[test]
    fn test_roster_names_are_distinct() {
        let directory = Directory::roster();
        let names: std::collections::HashSet<&str> =
            directory.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names.len(), directory.size());
    }

    #[test]
    fn test_get_out_of_range() {
        let directory = Directory::roster();
        let result = directory.get(50);
        assert_eq!(
            result,
            Err(LookupError::OutOfRange {
                index: 50,
                size: 50
            })
        );
    }

    #[test]
    fn test_from_names() {
        let directory = Directory::from_names(["Ada", "Grace"]).unwrap();
        assert_eq!(directory.size(), 2);
        assert_eq!(directory.get(1).unwrap(), &User::new("Grace"));
    }

    #[test]
    fn test_from_names_rejects_empty() {
        let result = Directory::from_names(Vec::<String>::new());
        assert!(matches!(result, Err(LookupError::InvalidArgument(_))));
    }
}
