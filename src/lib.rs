//! intfile: read a base-10 integer from a file
//!
//! The library exposes the file reader used by the `intfile` binary together
//! with its command-line definition and output formatting.

/// Command-line definition
pub mod cli;

/// Program entry point
pub mod entry;

/// Tracing subscriber setup
pub mod logging;

/// Reading and parsing integers from files
pub mod reader;

/// Output formatting
pub mod report;

pub use reader::{int_from_file, parse_int, ParseFailure, ReadError};
