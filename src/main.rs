//! drawable-wrap - Main entry point

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use drawable_wrap::cli::{Cli, Commands};
use drawable_wrap::{Conventions, Passes, RunSummary};

/// Initialize logging; RUST_LOG overrides the default level
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("drawable_wrap=info"))
        .context("Failed to build log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match &cli.command {
        Some(Commands::Validate { file }) => {
            info!("Validating conventions file: {:?}", file);
            Conventions::load_from_file(file)?;
            println!("✓ Conventions file is valid: {}", file.display());
            Ok(())
        }
        Some(Commands::InitConfig { file }) => {
            Conventions::default().save_to_file(file)?;
            println!("✓ Wrote default conventions to {}", file.display());
            Ok(())
        }
        Some(command) => {
            let passes = command.passes().unwrap_or_default();
            run_passes(&cli, passes)
        }
        None => run_passes(&cli, Passes::All),
    }
}

fn run_passes(cli: &Cli, passes: Passes) -> Result<()> {
    let conventions = match &cli.config {
        Some(path) => Conventions::load_from_file(path)?,
        None => Conventions::default(),
    };

    let summary = drawable_wrap::run(&cli.root, &conventions, passes, cli.dry_run)
        .with_context(|| format!("Failed to process {}", cli.root.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize run summary")?;
        println!("{}", json);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let prefix = if summary.dry_run { "[dry-run] " } else { "" };
    println!(
        "{}✓ {} renamed, {} wrappers written, {} assets skipped",
        prefix,
        summary.renamed,
        summary.wrappers_written,
        summary.skipped.len()
    );
}
