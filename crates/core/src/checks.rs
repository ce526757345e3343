//! # Validation Checks
//!
//! This module contains the validation checks that are performed on pull requests.
//!
//! - `title`: Validates a PR title against length, prefix, suffix and pattern rules

pub mod title;
