mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "duid")]
#[command(author, version, about = "Inspect, compare and sort DHCP Unique Identifiers", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "duid.yaml")]
    config: String,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a DUID and print its canonical form, type and length
    Show {
        /// DUID (e.g., 00:03:00:01:AA:BB:CC:DD:EE:FF)
        input: String,
        /// Format specifier: U, L, U:, L:, U- or L- (default from config)
        #[arg(long, short = 'f')]
        format: Option<String>,
    },
    /// Report whether each input is a valid DUID
    Check {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Compare two DUIDs (length first, then octets)
    Compare { left: String, right: String },
    /// Print DUIDs in ascending order
    Sort {
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Drop duplicates
        #[arg(long, short = 'u')]
        unique: bool,
    },
    /// Write the default configuration to the config path
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duid_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = if std::path::Path::new(&cli.config).exists() {
        match Config::from_file(&cli.config) {
            Ok(cfg) => {
                info!("Loaded configuration from {}", cli.config);
                cfg
            }
            Err(e) => {
                error!("Failed to load configuration from {}: {}", cli.config, e);
                info!("Using default configuration");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if cli.json {
        config.json = true;
    }

    match cli.command {
        Commands::Show { input, format } => {
            println!("{}", commands::show::handle(&config, &input, format.as_deref())?);
        }
        Commands::Check { inputs } => {
            let (output, all_valid) = commands::check::handle(&config, &inputs)?;
            println!("{}", output);
            if !all_valid {
                std::process::exit(1);
            }
        }
        Commands::Compare { left, right } => {
            println!("{}", commands::compare::handle(&config, &left, &right)?);
        }
        Commands::Sort { inputs, unique } => {
            println!("{}", commands::sort::handle(&config, &inputs, unique)?);
        }
        Commands::InitConfig => {
            Config::default().to_file(&cli.config)?;
            info!("Wrote default configuration to {}", cli.config);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_json_after_subcommand() {
        let cli = Cli::try_parse_from(["duid", "show", "00:01:02", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Show { ref input, .. } if input == "00:01:02"));
    }

    #[test]
    fn test_cli_json_before_subcommand() {
        let cli = Cli::try_parse_from(["duid", "--json", "sort", "00:01:02", "000000"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_config_after_subcommand() {
        let cli = Cli::try_parse_from(["duid", "compare", "0:0:1", "0:0:2", "-c", "other.yaml"])
            .unwrap();
        assert_eq!(cli.config, "other.yaml");
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_init_config() {
        let cli = Cli::try_parse_from(["duid", "init-config", "--config", "new.yaml"]).unwrap();
        assert!(matches!(cli.command, Commands::InitConfig));
        assert_eq!(cli.config, "new.yaml");
    }
}
