mod cli;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use tracing_subscriber::EnvFilter;

use cli::opts::Cli;

fn main() -> Result<()> {
    // stderr keeps the prompts on stdout readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flashdrill=info,flashdrill_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    cli::session::run(args)
}
