use clap_markdown::help_markdown;

use intfile::cli::Cli;

fn main() {
    println!("# intfile CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `intfile` command-line interface.");
    println!();

    println!("{}", help_markdown::<Cli>());
}
