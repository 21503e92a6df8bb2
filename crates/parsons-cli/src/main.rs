mod commands;
mod io;
mod source;

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use parsons_config::Config;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "parsons")]
#[command(about = "Build and check Parsons puzzles")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Config file (default: ./parsons.toml)")]
    config: Option<PathBuf>,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Log more (-v info, -vv debug)")]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Write a default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
    #[command(about = "Print the render payload for one puzzle")]
    Build {
        #[arg(help = "Puzzle source file")]
        file: PathBuf,
    },
    #[command(about = "Build every configured puzzle into <widget-id>.json files")]
    BuildAll {
        #[arg(long, value_name = "DIR", help = "Output directory (overrides config)")]
        out: Option<PathBuf>,
    },
    #[command(about = "Check an arrangement against a puzzle")]
    Check {
        #[arg(help = "Puzzle source file")]
        file: PathBuf,
        #[arg(help = "Arrangement JSON file")]
        arrangement: PathBuf,
    },
    #[command(about = "Print the canonical arrangement for a puzzle")]
    Solution {
        #[arg(help = "Puzzle source file")]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    match cli.command {
        Commands::Init { force } => {
            commands::init(&config_path, force)?;
            println!("Wrote {}", config_path.display());
        }
        Commands::Build { file } => {
            let config = load_config(&config_path, cli.config.is_some())?;
            println!("{}", commands::build(&file, &config)?);
        }
        Commands::BuildAll { out } => {
            let config = load_config(&config_path, cli.config.is_some())?;
            let written = commands::build_all(&config, out)?;
            println!("Built {} puzzles", written.len());
        }
        Commands::Check { file, arrangement } => {
            let config = load_config(&config_path, cli.config.is_some())?;
            let result = commands::check(&file, &arrangement, &config)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.passed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Solution { file } => {
            let config = load_config(&config_path, cli.config.is_some())?;
            println!("{}", commands::solution(&file, &config)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the config file, falling back to defaults unless it was asked for explicitly
fn load_config(config_path: &Path, explicit: bool) -> Result<Config> {
    match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None if explicit => bail!("Config file not found: {}", config_path.display()),
        None => {
            log::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Ok(Config::default())
        }
    }
}
