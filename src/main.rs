use anyhow::Result;
use clap::Parser;
use partita::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
