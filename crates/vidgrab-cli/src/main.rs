//! CLI entry point - the composition root.
//!
//! Settings are resolved and infrastructure is wired via bootstrap, then the
//! command is dispatched to its handler. Errors map to sysexits-style codes.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use vidgrab_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Warnings only by default; `-v` raises vidgrab crates to debug.
/// An explicit `RUST_LOG` always wins.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,vidgrab_core=debug,vidgrab_runtime=debug,vidgrab_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, command: Commands) -> Result<(), CliError> {
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(&config)?;

    match command {
        Commands::Setup => handlers::setup::execute(&ctx).await,
        Commands::Download { url } => handlers::download::execute(&ctx, &url).await,
        Commands::Interactive => handlers::interactive::execute(&ctx).await,
        Commands::Paths => {
            handlers::paths::execute(&config, &ctx);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.take() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Err(err) = run(cli, command).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
