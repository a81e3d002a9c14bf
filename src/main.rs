use clap::{Parser, Subcommand};
use std::path::Path;
use std::sync::Arc;

use mediator_pattern::infrastructure::adapters::ConsoleColleague;
use mediator_pattern::infrastructure::config::Config;
use mediator_pattern::{Colleague, ScenarioService};

#[derive(Parser)]
#[command(name = "mediator-pattern")]
#[command(about = "Colleagues exchanging messages through mediators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Scenario file path
    #[arg(short, long, default_value = "mediator.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Wire the scenario and play its sends
    Run,
    /// Show version
    Version,
    /// Write the default scenario to the config path
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_scenario(&cli.config),
        Commands::Version => {
            println!("mediator-pattern v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(&cli.config),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run_scenario(config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = if Path::new(config_path).exists() {
        Config::load(config_path)?
    } else {
        tracing::info!("{} not found, using built-in scenario", config_path);
        Config::default()
    };

    let report = ScenarioService::play(&config, |name| {
        let colleague: Arc<dyn Colleague> = Arc::new(ConsoleColleague::new(name));
        colleague
    })?;

    tracing::info!(
        "Done: {} sends across {} mediators",
        report.sends,
        report.mediators
    );
    Ok(())
}

fn init_config(config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    if Path::new(config_path).exists() {
        return Err(format!("{} already exists", config_path).into());
    }

    std::fs::write(config_path, Config::default().to_yaml()?)?;
    println!("Created {}", config_path);
    Ok(())
}
