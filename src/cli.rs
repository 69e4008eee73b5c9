use clap::Parser;
use std::path::PathBuf;

use crate::entry::DEFAULT_FILENAME;
use crate::report::OutputFormat;

/// Read an integer from a file and print it
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about)]
pub struct Cli {
    /// File holding a base-10 integer
    #[arg(value_name = "FILE", default_value = DEFAULT_FILENAME)]
    pub file: PathBuf,
    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,
}
