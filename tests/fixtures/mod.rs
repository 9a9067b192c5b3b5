//! Shared test fixtures for E2E and integration tests.
#![allow(dead_code)] // Not every fixture is used by every test binary

use splitboard::models::{Key, KeyType, KeyboardLayer, LayerRegistry, PanelSide};
use splitboard::services::{SplitKeyboard, TouchEvent, TouchPhase};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds an engine over the built-in layers with both panels sized to
/// the reference 300x900 px.
pub fn reference_engine() -> SplitKeyboard {
    let mut engine = SplitKeyboard::with_builtin_layers();
    engine.resize_panel(PanelSide::Left, 300.0, 900.0);
    engine.resize_panel(PanelSide::Right, 300.0, 900.0);
    engine
}

/// Builds a minimal two-layer registry for tests that want full control
/// over the key set.
pub fn tiny_registry() -> LayerRegistry {
    let default = KeyboardLayer::new(
        "default",
        vec![vec![Key::new("a"), Key::new("b")]],
        vec![vec![
            Key::special("123", KeyType::LayerSwitch),
            Key::special("⇧", KeyType::Shift),
        ]],
    )
    .unwrap();

    let numbers = KeyboardLayer::new(
        "numbers",
        vec![vec![Key::new("1"), Key::new("2")]],
        vec![vec![Key::special("ABC", KeyType::LayerSwitch)]],
    )
    .unwrap();

    LayerRegistry::new(vec![default, numbers]).unwrap()
}

/// Center of the labelled key on the given panel.
///
/// # Panics
///
/// Panics if the key is not on the panel's active layer.
pub fn key_center(engine: &SplitKeyboard, side: PanelSide, label: &str) -> (f32, f32) {
    engine
        .panel_bounds(side)
        .iter()
        .find(|kb| kb.key.label == label)
        .unwrap_or_else(|| panic!("no key '{label}' on {} panel", side.as_str()))
        .rect
        .center()
}

/// Feeds a full down→up tap on the labelled key.
pub fn tap_key(
    engine: &mut SplitKeyboard,
    side: PanelSide,
    label: &str,
) -> splitboard::services::EngineResponse {
    let (x, y) = key_center(engine, side, label);
    engine.handle_touch(side, TouchEvent::new(TouchPhase::Down, x, y));
    engine.handle_touch(side, TouchEvent::new(TouchPhase::Up, x, y))
}

/// Writes a touch script to a temp directory and returns its path.
///
/// The returned `TempDir` must be kept alive for the duration of the
/// test.
pub fn create_temp_script(json: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("script.json");
    fs::write(&path, json).expect("Failed to write script");
    (path, temp_dir)
}

/// Touch script JSON that taps the top-left key of the left panel.
pub fn tap_q_script() -> String {
    r#"{
        "screen": {"width": 2000, "height": 900},
        "width_percent": 15.0,
        "events": [
            {"panel": "left", "phase": "down", "x": 30.0, "y": 30.0},
            {"panel": "left", "phase": "up", "x": 30.0, "y": 30.0}
        ]
    }"#
    .to_string()
}
