use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;

use cli::Cli;
use cli::commands::Commands;
use revwatch::config::Config;
use revwatch::handler::{Decision, Outcome, ReviewSnapshot};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("revwatch")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("revwatch.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Evaluate {
            snapshot,
            now,
            seed,
            json,
        } => handle_evaluate_command(snapshot, *now, *seed, *json, config),
        Commands::Config => handle_config_command(config),
    }
}

fn handle_evaluate_command(
    path: &Path,
    now: Option<chrono::DateTime<chrono::Utc>>,
    seed: Option<u64>,
    json: bool,
    config: &Config,
) -> Result<()> {
    info!("Evaluating snapshot: {}", path.display());

    let content = fs::read_to_string(path).context(format!("Failed to read snapshot {}", path.display()))?;
    let snapshot: ReviewSnapshot = serde_json::from_str(&content).context("Failed to parse snapshot")?;

    let handler = config.handler().context("Invalid configuration")?;
    let now = now.unwrap_or_else(chrono::Utc::now);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let outcome = handler
        .evaluate_at(&snapshot, now, &mut rng)
        .context(format!("Failed to evaluate PR #{}", snapshot.number))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome {
        Outcome::Skipped { reason } => {
            println!("{} PR #{} ({:?})", "Skipped:".yellow(), snapshot.number, reason);
        }
        Outcome::Active => {
            println!("{} PR #{} needs no reminder", "Active:".green(), snapshot.number);
        }
        Outcome::Nudge {
            decision,
            notification,
            prior_reminders,
            ..
        } => {
            println!("{} PR #{}", "Inactive:".red(), snapshot.number);
            if let Decision::Inactive { suggested: Some(login) } = decision {
                println!("  Suggested reviewer: {}", login.cyan());
            }
            println!("  Earlier reminders: {}", prior_reminders);
            println!();
            println!("{}", notification);
        }
    }
    Ok(())
}

fn handle_config_command(config: &Config) -> Result<()> {
    info!("Printing effective configuration");
    config.policy().context("Invalid policy")?;
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
