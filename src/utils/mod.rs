//! Utility functions and helpers
//!
//! This module contains timestamp utilities shared by the fetcher and queries.

pub mod time;

pub use time::{format_utc, now_utc, parse_utc};
