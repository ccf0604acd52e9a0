use clap::Parser;
use tracing_subscriber::EnvFilter;

use subgenome_fold::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("subgenome_fold=debug,info")
    } else {
        EnvFilter::new("subgenome_fold=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Collapse(args) => {
            cli::collapse::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Relabel(args) => {
            cli::relabel::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
