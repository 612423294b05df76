// Rust guideline compliant 2026-10-16

//! jsonfold CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod config;
pub mod error;
pub mod lock;
pub mod logging;
pub mod output;
pub mod response;
pub mod terminal;

pub use config::{Config, Overrides};
pub use error::{CliError, ErrorCode, Result};
pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;
