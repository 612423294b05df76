// Rust guideline compliant 2026-10-16

//! Command implementations for the jsonfold CLI.

pub mod merge;
