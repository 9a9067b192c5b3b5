//! Headless touch-script simulation command.

use crate::cli::common::{output_json, CliError, CliResult};
use crate::constants::DEFAULT_WIDTH_PERCENT;
use crate::models::{LayerRegistry, PanelSide};
use crate::services::{OutputEvent, SplitKeyboard, TouchEvent, TouchPhase};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drive the engine with a JSON touch script
#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    /// Path to the touch script file
    #[arg(short, long, value_name = "FILE")]
    pub script: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Touch script file format.
///
/// Coordinates are panel-local: the origin of each panel is its own
/// top-left corner regardless of where it sits on screen.
#[derive(Deserialize, Debug)]
struct TouchScript {
    screen: ScreenSize,
    #[serde(default)]
    width_percent: Option<f32>,
    #[serde(default)]
    initial_layer: Option<String>,
    events: Vec<ScriptEvent>,
}

#[derive(Deserialize, Debug)]
struct ScreenSize {
    width: f32,
    height: f32,
}

#[derive(Deserialize, Debug)]
struct ScriptEvent {
    panel: PanelSide,
    phase: TouchPhase,
    x: f32,
    y: f32,
}

#[derive(Serialize, Debug)]
struct StepReport {
    index: usize,
    panel: &'static str,
    phase: TouchPhase,
    consumed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputEvent>,
    layer_changed: bool,
}

#[derive(Serialize, Debug)]
struct SimulationReport {
    steps: Vec<StepReport>,
    final_layer: String,
    is_shifted: bool,
    text: String,
}

impl SimulateArgs {
    /// Execute the simulate command
    pub fn execute(&self) -> CliResult<()> {
        let content = std::fs::read_to_string(&self.script).map_err(|e| {
            CliError::io(format!(
                "Failed to read script {}: {e}",
                self.script.display()
            ))
        })?;
        let script: TouchScript = serde_json::from_str(&content).map_err(|e| {
            CliError::validation(format!(
                "Invalid touch script {}: {e}",
                self.script.display()
            ))
        })?;

        let report = run_script(&script);

        if self.json {
            return output_json(&report);
        }

        for step in &report.steps {
            let mut line = format!(
                "#{:<3} {:<5} {:<5} {}",
                step.index,
                step.panel,
                phase_name(step.phase),
                if step.consumed { "consumed" } else { "pass-through" }
            );
            match &step.output {
                Some(OutputEvent::CommitText(text)) => {
                    line.push_str(&format!(", commit {text:?}"));
                }
                Some(OutputEvent::DeleteBackward) => line.push_str(", delete"),
                Some(OutputEvent::SendEnter) => line.push_str(", enter"),
                None => {}
            }
            if step.layer_changed {
                line.push_str(", layer changed");
            }
            println!("{line}");
        }
        println!();
        println!("final layer: {}", report.final_layer);
        println!("shifted:     {}", report.is_shifted);
        println!("text:        {:?}", report.text);

        Ok(())
    }
}

const fn phase_name(phase: TouchPhase) -> &'static str {
    match phase {
        TouchPhase::Down => "down",
        TouchPhase::Move => "move",
        TouchPhase::Up => "up",
    }
}

fn run_script(script: &TouchScript) -> SimulationReport {
    let initial_layer = script.initial_layer.as_deref().unwrap_or("default");
    let mut engine = SplitKeyboard::new(LayerRegistry::builtin(), initial_layer);

    let width_percent = script.width_percent.unwrap_or(DEFAULT_WIDTH_PERCENT);
    let panel_width = script.screen.width * (width_percent / 100.0);
    for side in PanelSide::ALL {
        engine.resize_panel(side, panel_width, script.screen.height);
    }

    let mut steps = Vec::with_capacity(script.events.len());
    let mut text = String::new();

    for (index, event) in script.events.iter().enumerate() {
        let response = engine.handle_touch(
            event.panel,
            TouchEvent::new(event.phase, event.x, event.y),
        );

        match &response.output {
            Some(OutputEvent::CommitText(committed)) => text.push_str(committed),
            Some(OutputEvent::DeleteBackward) => {
                text.pop();
            }
            Some(OutputEvent::SendEnter) => text.push('\n'),
            None => {}
        }

        steps.push(StepReport {
            index,
            panel: event.panel.as_str(),
            phase: event.phase,
            consumed: response.consumed,
            output: response.output,
            layer_changed: response.layer_changed,
        });
    }

    let state = engine.end_session();
    SimulationReport {
        steps,
        final_layer: state.current_layer.clone(),
        is_shifted: state.is_shifted,
        text,
    }
}
