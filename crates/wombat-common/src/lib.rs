//! Common utilities for the Wombat geometry crates.
//!
//! This crate provides shared infrastructure used by all components:
//! - **Warning System** - colored, deduplicated terminal output for lossy
//!   conversions (non-px lengths, unsupported shorthand parts)

pub mod warning;
