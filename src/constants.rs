//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed panel geometry values.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Splitboard";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "splitboard";

/// Gap between neighbouring keys and between rows, in pixels.
pub const KEY_MARGIN: f32 = 4.0;

/// Inset applied to every key rectangle on all sides, in pixels.
pub const KEY_PADDING: f32 = 8.0;

/// Name of the layer every session starts on.
pub const DEFAULT_LAYER: &str = "default";

/// Default panel width as a percentage of the screen width.
pub const DEFAULT_WIDTH_PERCENT: f32 = 15.0;

/// Smallest allowed panel width percentage.
pub const MIN_WIDTH_PERCENT: f32 = 10.0;

/// Largest allowed panel width percentage.
pub const MAX_WIDTH_PERCENT: f32 = 30.0;
