//! Key-rectangle inspection command.

use crate::cli::common::{output_json, CliError, CliResult};
use crate::models::{KeyBounds, LayerRegistry, PanelGeometry, PanelSide};
use crate::services::compute_panel_bounds;
use clap::Args;
use serde::Serialize;

/// Print the computed key rectangles for a layer and panel size
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Layer to lay out
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    pub layer: String,

    /// Panel side (left or right)
    #[arg(short, long, value_name = "SIDE", default_value = "left")]
    pub side: String,

    /// Panel width in pixels
    #[arg(long, value_name = "PX")]
    pub width: f32,

    /// Panel height in pixels
    #[arg(long, value_name = "PX")]
    pub height: f32,

    /// X coordinate of the panel's left edge
    #[arg(long, value_name = "PX", default_value_t = 0.0)]
    pub origin_x: f32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct InspectOutput<'a> {
    layer: &'a str,
    side: &'a str,
    geometry: PanelGeometry,
    keys: &'a [KeyBounds],
}

/// Parses a CLI side argument.
pub fn parse_side(value: &str) -> CliResult<PanelSide> {
    match value {
        "left" => Ok(PanelSide::Left),
        "right" => Ok(PanelSide::Right),
        other => Err(CliError::validation(format!(
            "Invalid side '{other}'. Must be 'left' or 'right'"
        ))),
    }
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let side = parse_side(&self.side)?;

        let registry = LayerRegistry::builtin();
        let layer = registry.get(&self.layer).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown layer '{}'. Available: {}",
                self.layer,
                registry.names().join(", ")
            ))
        })?;

        let geometry = PanelGeometry::new(self.origin_x, self.width, self.height);
        let bounds = compute_panel_bounds(layer.rows(side), &geometry);

        if self.json {
            return output_json(&InspectOutput {
                layer: &layer.name,
                side: side.as_str(),
                geometry,
                keys: &bounds,
            });
        }

        println!(
            "Layer '{}', {} panel, {}x{} px ({} keys)",
            layer.name,
            side.as_str(),
            self.width,
            self.height,
            bounds.len()
        );
        println!(
            "{:<8} {:<14} {:>9} {:>9} {:>8} {:>8}",
            "KEY", "TYPE", "X", "Y", "WIDTH", "HEIGHT"
        );
        for kb in &bounds {
            println!(
                "{:<8} {:<14} {:>9.1} {:>9.1} {:>8.1} {:>8.1}",
                kb.key.label,
                kb.key.key_type.as_str(),
                kb.rect.x,
                kb.rect.y,
                kb.rect.width,
                kb.rect.height
            );
        }

        Ok(())
    }
}
