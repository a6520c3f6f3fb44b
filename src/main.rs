//! CheapSpy - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// CheapSpy - live window message inspector for the terminal
#[derive(Parser, Debug)]
#[command(name = "cheapspy")]
#[command(version)]
#[command(about = "Record and display every message delivered to a terminal window")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Redraw timer period in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(10..))]
    pub tick_ms: Option<u64>,

    /// Do not capture mouse input
    #[arg(long)]
    pub no_mouse: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = cheapspy::config::load_config_with_precedence(args.config.clone())?;

        let merged = cheapspy::config::merge_config(config_file);

        let with_env = cheapspy::config::apply_env_overrides(merged)?;

        // --no-mouse only ever turns capture off
        let mouse_override = if args.no_mouse { Some(false) } else { None };

        cheapspy::config::apply_cli_overrides(
            with_env,
            args.title.clone(),
            args.tick_ms,
            mouse_override,
        )
        .validate()?
    };

    cheapspy::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let options = cheapspy::view::WindowOptions::from(&config);
    let exit_code = cheapspy::view::run_with_options(&options)?;

    info!(exit_code, "Message loop finished");

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
