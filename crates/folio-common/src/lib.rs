//! Common utilities for the folio style pipeline.
//!
//! This crate provides shared infrastructure used by all folio components:
//! - **Warning System** - colored terminal output for dropped or degraded styles

pub mod warning;
