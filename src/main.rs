//! Splitboard - split touch keyboard layout and input engine
//!
//! The binary exposes the engine through headless CLI commands for
//! scripting and CI, plus an interactive terminal demo (the default
//! when no subcommand is given).

use anyhow::Result;
use clap::{Parser, Subcommand};
use splitboard::cli::{ConfigArgs, InspectArgs, LayersArgs, PreviewArgs, SimulateArgs};

/// Splitboard - split touch keyboard layout and input engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered keyboard layers
    Layers(LayersArgs),
    /// Print the computed key rectangles for a layer and panel size
    Inspect(InspectArgs),
    /// Render a layer's panels as a text diagram
    Preview(PreviewArgs),
    /// Drive the engine with a JSON touch script
    Simulate(SimulateArgs),
    /// Manage persisted keyboard settings
    Config(ConfigArgs),
    /// Run the interactive terminal demo (default)
    #[cfg(feature = "ratatui")]
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Layers(args)) => args.execute(),
        Some(Command::Inspect(args)) => args.execute(),
        Some(Command::Preview(args)) => args.execute(),
        Some(Command::Simulate(args)) => args.execute(),
        Some(Command::Config(args)) => args.execute(),
        #[cfg(feature = "ratatui")]
        Some(Command::Demo) | None => return run_demo(),
        #[cfg(not(feature = "ratatui"))]
        None => {
            eprintln!(
                "{}: no subcommand given and the demo feature is disabled.",
                splitboard::constants::APP_NAME
            );
            eprintln!("Run with --help for the available commands.");
            std::process::exit(1);
        }
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code().code());
    }

    Ok(())
}

#[cfg(feature = "ratatui")]
fn run_demo() -> Result<()> {
    // Session boundaries: settings load before the demo, final layer
    // saved after it
    let config = splitboard::config::KeyboardConfig::load().unwrap_or_default();
    let config = splitboard::tui::run_demo(config)?;
    config.save()?;
    Ok(())
}
