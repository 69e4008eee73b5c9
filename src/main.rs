use anyhow::Result;
use clap::Parser;

use intfile::cli::Cli;
use intfile::entry::run;
use intfile::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())?;
    Ok(())
}
