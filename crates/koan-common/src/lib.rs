//! Common utilities for the koan exercises.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored terminal output for questionable input that is still accepted

pub mod warning;
