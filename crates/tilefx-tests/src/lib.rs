//! Integration tests for the tilefx crates.
//!
//! End-to-end coverage of the generate -> save -> load -> process flow and
//! of pipeline behavior that spans crate boundaries.
