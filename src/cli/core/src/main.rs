/* src/cli/core/src/main.rs */

mod clean;
mod config;
mod link;
mod ui;
mod workspace;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{RoutelinkConfig, find_config, load_config};

#[derive(Parser)]
#[command(name = "routelink", about = "Monorepo route linker")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Scan the monorepo and regenerate route shims and the route manifest
  Link {
    /// Path to routelink.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Remove the generated app trees and the route manifest
  Clean {
    /// Path to routelink.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, RoutelinkConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_config(&cwd)?
    }
  };
  let config = load_config(&path)?;
  Ok((path, config))
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Link { config } => {
      let (config_path, config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| std::path::Path::new("."));
      link::run_link(&config, base_dir)?;
    }
    Command::Clean { config } => {
      let (config_path, config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| std::path::Path::new("."));
      clean::run_clean(&config, base_dir)?;
    }
  }

  Ok(())
}
