//! eqset-scenarios - runs the fixed scenario battery against `EqSet`
//!
//! Usage:
//!   eqset-scenarios [--only <name>] [--list] [--work-dir <dir>]

mod scenarios;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scenarios::{SCENARIOS, Workspace};

#[derive(Parser, Debug)]
#[command(name = "eqset-scenarios")]
#[command(about = "Runs the eqset scenario battery, stopping at the first failure")]
struct Cli {
    /// Run a single scenario by name
    #[arg(long)]
    only: Option<String>,

    /// List scenario names and exit
    #[arg(long)]
    list: bool,

    /// Directory for files written by the persistence scenario (default: system temp dir)
    #[arg(long)]
    work_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list {
        for scenario in SCENARIOS {
            println!("{:<16} {}", scenario.name, scenario.description);
        }
        return Ok(());
    }

    let selected: Vec<_> = SCENARIOS
        .iter()
        .filter(|scenario| cli.only.as_deref().is_none_or(|name| scenario.name == name))
        .collect();
    if selected.is_empty() {
        bail!(
            "unknown scenario `{}` (use --list to see the available ones)",
            cli.only.unwrap_or_default()
        );
    }

    let workspace = Workspace::new(cli.work_dir.unwrap_or_else(std::env::temp_dir));
    tracing::debug!(work_dir = %workspace.directory().display(), "scenario workspace");

    println!("========================================");
    println!("  eqset scenario battery");
    println!("========================================");

    for (number, scenario) in selected.iter().enumerate() {
        tracing::info!(scenario = scenario.name, "running");
        (scenario.run)(&workspace)
            .with_context(|| format!("scenario `{}` failed", scenario.name))?;
        println!("[{}] {:<48} ok", number + 1, scenario.description);
    }

    println!("========================================");
    println!("  {} scenario(s) passed", selected.len());
    println!("========================================");
    Ok(())
}
