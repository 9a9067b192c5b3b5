//! Read-only registry of keyboard layers.

use crate::constants::DEFAULT_LAYER;
use crate::models::{Key, KeyType, KeyboardLayer};
use anyhow::Result;
use std::collections::HashMap;

/// Fixed mapping from layer name to [`KeyboardLayer`].
///
/// Populated once at construction and read-only for the lifetime of the
/// process. The registry is passed explicitly to the session controller
/// rather than living in global state, so tests can inject custom layer
/// sets.
#[derive(Debug, Clone)]
pub struct LayerRegistry {
    layers: HashMap<String, KeyboardLayer>,
}

impl LayerRegistry {
    /// Creates a registry from a list of layers.
    ///
    /// Every registry must include a layer named "default": it is the
    /// unconditional session-reset target and the fallback for
    /// unrecognized layer-switch labels.
    ///
    /// # Errors
    ///
    /// Returns an error if two layers share a name or no "default" layer
    /// is present.
    pub fn new(layers: Vec<KeyboardLayer>) -> Result<Self> {
        let mut map = HashMap::with_capacity(layers.len());
        for layer in layers {
            let name = layer.name.clone();
            if map.insert(name.clone(), layer).is_some() {
                anyhow::bail!("Duplicate layer name '{}'", name);
            }
        }
        if !map.contains_key(DEFAULT_LAYER) {
            anyhow::bail!("Layer registry must include a '{}' layer", DEFAULT_LAYER);
        }

        Ok(Self { layers: map })
    }

    /// Builds the four built-in layers: default, shift, numbers, symbols.
    #[must_use]
    pub fn builtin() -> Self {
        let layers = vec![
            default_layer(),
            shift_layer(),
            numbers_layer(),
            symbols_layer(),
        ];
        // Built-in layers are statically valid
        Self::new(layers).unwrap_or_else(|_| unreachable!("built-in layers are valid"))
    }

    /// Looks up a layer by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&KeyboardLayer> {
        self.layers.get(name)
    }

    /// Checks whether a layer name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    /// Layer names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.layers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks whether the registry is empty (never true for a constructed registry).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Shorthand for a row of plain character keys.
fn row(labels: &[&str]) -> Vec<Key> {
    labels.iter().map(|label| Key::new(*label)).collect()
}

fn space() -> Key {
    Key::special(" ", KeyType::Space)
}

fn backspace() -> Key {
    Key::special("⌫", KeyType::Backspace)
}

fn enter() -> Key {
    Key::special("↵", KeyType::Enter)
}

fn shift() -> Key {
    Key::special("⇧", KeyType::Shift)
}

fn layer_switch(label: &str) -> Key {
    Key::special(label, KeyType::LayerSwitch)
}

fn default_layer() -> KeyboardLayer {
    let left = vec![
        row(&["q", "w", "e", "r", "t"]),
        row(&["a", "s", "d", "f", "g"]),
        row(&["z", "x", "c", "v", "b"]),
        vec![Key::new(","), Key::new("."), space()],
        vec![layer_switch("123"), shift()],
    ];
    let right = vec![
        row(&["y", "u", "i", "o", "p"]),
        row(&["h", "j", "k", "l", ";"]),
        row(&["n", "m", "!", "?", "'"]),
        vec![Key::new("-"), Key::new("_"), space()],
        vec![backspace(), enter()],
    ];
    KeyboardLayer::new("default", left, right).unwrap_or_else(|_| unreachable!())
}

fn shift_layer() -> KeyboardLayer {
    let left = vec![
        row(&["Q", "W", "E", "R", "T"]),
        row(&["A", "S", "D", "F", "G"]),
        row(&["Z", "X", "C", "V", "B"]),
        vec![Key::new(","), Key::new("."), space()],
        vec![layer_switch("123"), shift()],
    ];
    let right = vec![
        row(&["Y", "U", "I", "O", "P"]),
        row(&["H", "J", "K", "L", ":"]),
        row(&["N", "M", "!", "?", "\""]),
        vec![Key::new("-"), Key::new("_"), space()],
        vec![backspace(), enter()],
    ];
    KeyboardLayer::new("shift", left, right).unwrap_or_else(|_| unreachable!())
}

fn numbers_layer() -> KeyboardLayer {
    let left = vec![
        row(&["1", "2", "3", "4", "5"]),
        row(&["@", "#", "$", "%", "&"]),
        row(&["-", "+", "(", ")", "="]),
        vec![Key::new(","), Key::new("."), space()],
        vec![layer_switch("ABC"), layer_switch("#+")],
    ];
    let right = vec![
        row(&["6", "7", "8", "9", "0"]),
        row(&["*", "\"", "'", ":", ";"]),
        row(&["/", "<", ">", "[", "]"]),
        vec![Key::new("!"), Key::new("?"), space()],
        vec![backspace(), enter()],
    ];
    KeyboardLayer::new("numbers", left, right).unwrap_or_else(|_| unreachable!())
}

fn symbols_layer() -> KeyboardLayer {
    let left = vec![
        row(&["~", "`", "|", "•", "√"]),
        row(&["π", "÷", "×", "¶", "∆"]),
        row(&["£", "¢", "€", "¥", "^"]),
        vec![Key::new(","), Key::new("."), space()],
        vec![layer_switch("123"), layer_switch("ABC")],
    ];
    let right = vec![
        row(&["©", "®", "™", "✓", "§"]),
        row(&["{", "}", "\\", "<", ">"]),
        row(&["[", "]", "°", "•", "..."]),
        vec![Key::new("_"), Key::new("-"), space()],
        vec![backspace(), enter()],
    ];
    KeyboardLayer::new("symbols", left, right).unwrap_or_else(|_| unreachable!())
}
