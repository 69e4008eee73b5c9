use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

use crate::cli::Cli;
use crate::reader::int_from_file;
use crate::report::write_report;

/// File read when no argument is given
pub const DEFAULT_FILENAME: &str = "yolo";

/// Read the integer named by `cli` and write it to `out`.
///
/// A [`ReadError`](crate::reader::ReadError) is returned as the root of the
/// `anyhow::Error`, so callers can `downcast_ref` it.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<i64> {
    debug!(file = %cli.file.display(), format = ?cli.format, "reading integer");
    let value = int_from_file(&cli.file)?;
    write_report(out, cli.format, &cli.file, value)?;
    Ok(value)
}

/// Parse a raw argument list (program name first) and [`run`] it
pub fn run_from_args<I, T, W>(args: I, out: &mut W) -> Result<i64>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    run(&cli, out)
}
