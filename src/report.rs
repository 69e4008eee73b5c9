use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `int is <value>`
    #[default]
    Text,
    /// A JSON object holding the file path and the value
    Json,
}

/// The JSON shape of a successful read
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub file: String,
    pub value: i64,
}

pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    path: &Path,
    value: i64,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "int is {value}").context("failed to write result")?;
        }
        OutputFormat::Json => {
            let report = Report {
                file: path.display().to_string(),
                value,
            };
            serde_json::to_writer(&mut *out, &report).context("failed to write JSON report")?;
            writeln!(out).context("failed to write result")?;
        }
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}
