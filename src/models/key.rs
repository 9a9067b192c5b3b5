//! Key definitions for the split keyboard.

use serde::{Deserialize, Serialize};

/// Behavior class of a key, dispatched on commit.
///
/// The seven kinds below are the complete set; commit handling in
/// `SessionController` matches exhaustively over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// Ordinary key that commits its output text
    #[default]
    Character,
    /// Deletes the character before the cursor
    Backspace,
    /// Sends an enter/newline key event
    Enter,
    /// Commits a single space
    Space,
    /// Toggles the shift state
    Shift,
    /// Switches to another layer, selected by the key's label
    LayerSwitch,
    /// Reserved extension point, currently a no-op
    Special,
}

impl KeyType {
    /// Lowercase name used in CLI output, matching the serde spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Backspace => "backspace",
            Self::Enter => "enter",
            Self::Space => "space",
            Self::Shift => "shift",
            Self::LayerSwitch => "layer_switch",
            Self::Special => "special",
        }
    }
}

/// A single key on the keyboard.
///
/// Keys are immutable values created once at layer-definition time.
/// `output_text` defaults to the label, and `width` is a relative weight
/// within the key's row (1.0 = normal key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    /// Display string drawn on the key face
    pub label: String,
    /// Text committed when the key is pressed (defaults to the label)
    pub output_text: String,
    /// Relative width weight within the row (1.0 = normal key)
    pub width: f32,
    /// Behavior class, dispatched on commit
    pub key_type: KeyType,
}

impl Key {
    /// Creates a character key whose output text equals its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            output_text: label.clone(),
            label,
            width: 1.0,
            key_type: KeyType::Character,
        }
    }

    /// Creates a key of the given behavior class.
    pub fn special(label: impl Into<String>, key_type: KeyType) -> Self {
        Self {
            key_type,
            ..Self::new(label)
        }
    }

    /// Sets the committed output text.
    #[must_use]
    pub fn with_output(mut self, output_text: impl Into<String>) -> Self {
        self.output_text = output_text.into();
        self
    }

    /// Sets the relative width weight.
    #[must_use]
    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Checks if this key commits text when pressed.
    #[must_use]
    pub fn commits_text(&self) -> bool {
        matches!(self.key_type, KeyType::Character | KeyType::Space)
    }
}
