use anyhow::Context;
use clap::Parser;
use folio_config::FolioConfig;
use folio_schema::SchemaRegistry;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("folio error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        Commands::Serve(args) => {
            let config = FolioConfig::load_with_overrides(|config| args.apply(config))
                .context("failed to load configuration")?;
            folio_server::serve(&config).await
        }
        Commands::Schema { name } => print_schema(name.as_deref()),
    }
}

fn print_schema(name: Option<&str>) -> anyhow::Result<()> {
    let registry = SchemaRegistry::global();
    let Some(name) = name else {
        for name in registry.list() {
            println!("{name}");
        }
        return Ok(());
    };

    let schema = registry
        .json_schema(name)
        .with_context(|| format!("unknown resource '{name}' (expected one of: {})", registry.list().join(", ")))?;
    println!("{}", serde_json::to_string_pretty(schema)?);
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
