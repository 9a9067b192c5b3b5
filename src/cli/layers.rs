//! Layer listing command.

use crate::cli::common::{output_json, CliResult};
use crate::models::{LayerRegistry, PanelSide};
use clap::Args;
use serde::Serialize;

/// List the registered keyboard layers
#[derive(Debug, Clone, Args)]
pub struct LayersArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct LayerSummary {
    name: String,
    left: SideSummary,
    right: SideSummary,
}

#[derive(Serialize, Debug)]
struct SideSummary {
    rows: usize,
    keys: usize,
}

impl LayersArgs {
    /// Execute the layers command
    pub fn execute(&self) -> CliResult<()> {
        let registry = LayerRegistry::builtin();

        let summaries: Vec<LayerSummary> = registry
            .names()
            .iter()
            .filter_map(|name| registry.get(name))
            .map(|layer| LayerSummary {
                name: layer.name.clone(),
                left: SideSummary {
                    rows: layer.rows(PanelSide::Left).len(),
                    keys: layer.key_count(PanelSide::Left),
                },
                right: SideSummary {
                    rows: layer.rows(PanelSide::Right).len(),
                    keys: layer.key_count(PanelSide::Right),
                },
            })
            .collect();

        if self.json {
            return output_json(&summaries);
        }

        println!(
            "{:<12} {:>10} {:>10} {:>11} {:>11}",
            "LAYER", "LEFT ROWS", "LEFT KEYS", "RIGHT ROWS", "RIGHT KEYS"
        );
        for summary in &summaries {
            println!(
                "{:<12} {:>10} {:>10} {:>11} {:>11}",
                summary.name,
                summary.left.rows,
                summary.left.keys,
                summary.right.rows,
                summary.right.keys
            );
        }

        Ok(())
    }
}
