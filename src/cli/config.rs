//! Configuration management CLI commands.

use crate::cli::common::{output_json, CliError, CliResult};
use crate::config::KeyboardConfig;
use crate::constants::{MAX_WIDTH_PERCENT, MIN_WIDTH_PERCENT};
use crate::models::LayerRegistry;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Panel width as a percentage of the screen (10-30)
    #[arg(long, value_name = "PERCENT")]
    width_percent: Option<f32>,

    /// Layer restored on the next launch
    #[arg(long, value_name = "NAME")]
    layer: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = KeyboardConfig::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;

        if self.json {
            return output_json(&config);
        }

        println!("width_percent: {}", config.width_percent);
        println!("current_layer: {}", config.current_layer);
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.width_percent.is_none() && self.layer.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --width-percent or --layer",
            ));
        }

        // Start from defaults if the existing file is missing or invalid
        let mut config = KeyboardConfig::load().unwrap_or_default();

        if let Some(width_percent) = self.width_percent {
            if !(MIN_WIDTH_PERCENT..=MAX_WIDTH_PERCENT).contains(&width_percent) {
                return Err(CliError::validation(format!(
                    "width_percent {} is outside the allowed range {}-{}",
                    width_percent, MIN_WIDTH_PERCENT, MAX_WIDTH_PERCENT
                )));
            }
            config.width_percent = width_percent;
        }

        if let Some(layer) = &self.layer {
            let registry = LayerRegistry::builtin();
            if !registry.contains(layer) {
                return Err(CliError::validation(format!(
                    "Unknown layer '{}'. Available: {}",
                    layer,
                    registry.names().join(", ")
                )));
            }
            config.current_layer.clone_from(layer);
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration saved");
        Ok(())
    }
}
