//! Layer preview command.

use crate::cli::common::{CliError, CliResult};
use crate::export::render_layer_diagram;
use crate::models::LayerRegistry;
use clap::Args;

/// Render a layer's panels as a text diagram
#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    /// Layer to render
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    pub layer: String,

    /// Render every registered layer
    #[arg(long, conflicts_with = "layer")]
    pub all: bool,
}

impl PreviewArgs {
    /// Execute the preview command
    pub fn execute(&self) -> CliResult<()> {
        let registry = LayerRegistry::builtin();

        if self.all {
            for (index, name) in registry.names().iter().enumerate() {
                if index > 0 {
                    println!();
                }
                if let Some(layer) = registry.get(name) {
                    print!("{}", render_layer_diagram(layer));
                }
            }
            return Ok(());
        }

        let layer = registry.get(&self.layer).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown layer '{}'. Available: {}",
                self.layer,
                registry.names().join(", ")
            ))
        })?;

        print!("{}", render_layer_diagram(layer));
        Ok(())
    }
}
