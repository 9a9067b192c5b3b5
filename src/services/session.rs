//! Layer and session control.
//!
//! Owns the current layer name and shift flag, dispatches committed keys
//! to output events, and decides layer transitions including the
//! auto-unshift-after-one-character policy.

use crate::constants::DEFAULT_LAYER;
use crate::models::{Key, KeyType, KeyboardLayer, LayerRegistry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mutable per-session state, reset at every session start.
///
/// Kept as an explicit serializable value rather than ambient fields so
/// the controller's transitions are testable without a UI harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Name of the active layer; always a key of the registry
    pub current_layer: String,
    /// Whether the next character commit is shifted
    pub is_shifted: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_layer: DEFAULT_LAYER.to_string(),
            is_shifted: false,
        }
    }
}

/// Side effect the host applies to the focused text field.
///
/// Fire-and-forget from the engine's perspective; a failed application is
/// the host's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum OutputEvent {
    /// Insert the given text at the cursor
    CommitText(String),
    /// Delete the character before the cursor
    DeleteBackward,
    /// Send an enter/newline key event
    SendEnter,
}

/// Result of dispatching one committed key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommitEffect {
    /// Output event for the host, at most one per commit
    pub output: Option<OutputEvent>,
    /// Whether the active layer changed; the caller must recompute both
    /// panels' bounds when set
    pub layer_changed: bool,
}

/// Dispatches committed keys and manages layer transitions.
///
/// Constructed with an injected read-only [`LayerRegistry`]; there is no
/// global layer table.
#[derive(Debug, Clone)]
pub struct SessionController {
    registry: LayerRegistry,
    state: SessionState,
}

impl SessionController {
    /// Creates a controller on the given registry, starting on
    /// `initial_layer` if it exists and on "default" otherwise.
    #[must_use]
    pub fn new(registry: LayerRegistry, initial_layer: &str) -> Self {
        let current_layer = if registry.contains(initial_layer) {
            initial_layer.to_string()
        } else {
            DEFAULT_LAYER.to_string()
        };

        Self {
            registry,
            state: SessionState {
                current_layer,
                is_shifted: false,
            },
        }
    }

    /// The injected layer registry.
    #[must_use]
    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The active layer's definition.
    ///
    /// The current layer name is only ever set after a registry lookup
    /// succeeds, so this never misses.
    #[must_use]
    pub fn current_layer(&self) -> &KeyboardLayer {
        self.registry
            .get(&self.state.current_layer)
            .expect("current layer name is always registered")
    }

    /// Dispatches one committed key.
    ///
    /// Behavior per key type:
    /// - `Character`: commit the key's output text; if shifted, clear the
    ///   flag and return to "default" (auto-unshift after one character).
    /// - `Backspace` / `Enter` / `Space`: the corresponding output event.
    /// - `Shift`: toggle the flag and switch to "shift" or "default".
    /// - `LayerSwitch`: target selected by label ("123" → numbers,
    ///   "ABC" → default, "#+=" or "#+" → symbols, anything else →
    ///   default).
    /// - `Special`: reserved, no effect.
    pub fn on_commit(&mut self, key: &Key) -> CommitEffect {
        debug!(label = %key.label, key_type = ?key.key_type, "commit");

        match key.key_type {
            KeyType::Character => {
                let output = OutputEvent::CommitText(key.output_text.clone());
                let layer_changed = if self.state.is_shifted {
                    self.state.is_shifted = false;
                    self.switch_to_layer(DEFAULT_LAYER)
                } else {
                    false
                };
                CommitEffect {
                    output: Some(output),
                    layer_changed,
                }
            }
            KeyType::Backspace => CommitEffect {
                output: Some(OutputEvent::DeleteBackward),
                layer_changed: false,
            },
            KeyType::Enter => CommitEffect {
                output: Some(OutputEvent::SendEnter),
                layer_changed: false,
            },
            KeyType::Space => CommitEffect {
                output: Some(OutputEvent::CommitText(" ".to_string())),
                layer_changed: false,
            },
            KeyType::Shift => {
                self.state.is_shifted = !self.state.is_shifted;
                let target = if self.state.is_shifted {
                    "shift"
                } else {
                    DEFAULT_LAYER
                };
                CommitEffect {
                    output: None,
                    layer_changed: self.switch_to_layer(target),
                }
            }
            KeyType::LayerSwitch => {
                let target = match key.label.as_str() {
                    "123" => "numbers",
                    "ABC" => DEFAULT_LAYER,
                    "#+=" | "#+" => "symbols",
                    // Unrecognized labels intentionally fall back to the
                    // letters layer rather than erroring
                    _ => DEFAULT_LAYER,
                };
                CommitEffect {
                    output: None,
                    layer_changed: self.switch_to_layer(target),
                }
            }
            KeyType::Special => CommitEffect::default(),
        }
    }

    /// Switches to the named layer.
    ///
    /// An unknown name is a silent no-op (layer names are caller-controlled
    /// constants, so a miss is defensive, not an error). Returns whether
    /// the active layer actually changed.
    pub fn switch_to_layer(&mut self, name: &str) -> bool {
        if !self.registry.contains(name) {
            debug!(layer = name, "ignoring switch to unknown layer");
            return false;
        }
        if self.state.current_layer == name {
            return false;
        }

        debug!(from = %self.state.current_layer, to = name, "layer switch");
        self.state.current_layer = name.to_string();
        true
    }

    /// Starts a new input session, unconditionally resetting to the
    /// default layer with shift off.
    pub fn begin_session(&mut self) {
        self.state = SessionState::default();
    }

    /// Ends the session, handing the final state to the persistence
    /// collaborator.
    #[must_use]
    pub fn end_session(&self) -> &SessionState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeyType;

    fn controller() -> SessionController {
        SessionController::new(LayerRegistry::builtin(), DEFAULT_LAYER)
    }

    #[test]
    fn test_character_commit_emits_output_text() {
        let mut ctrl = controller();
        let effect = ctrl.on_commit(&Key::new("q"));
        assert_eq!(
            effect.output,
            Some(OutputEvent::CommitText("q".to_string()))
        );
        assert!(!effect.layer_changed);
        assert_eq!(ctrl.state().current_layer, "default");
    }

    #[test]
    fn test_auto_unshift_after_one_character() {
        let mut ctrl = controller();
        ctrl.on_commit(&Key::special("⇧", KeyType::Shift));
        assert_eq!(ctrl.state().current_layer, "shift");
        assert!(ctrl.state().is_shifted);

        let effect = ctrl.on_commit(&Key::new("A"));
        assert_eq!(
            effect.output,
            Some(OutputEvent::CommitText("A".to_string()))
        );
        assert!(effect.layer_changed);
        assert_eq!(ctrl.state().current_layer, "default");
        assert!(!ctrl.state().is_shifted);
    }

    #[test]
    fn test_shift_toggles_off() {
        let mut ctrl = controller();
        ctrl.on_commit(&Key::special("⇧", KeyType::Shift));
        let effect = ctrl.on_commit(&Key::special("⇧", KeyType::Shift));
        assert!(effect.layer_changed);
        assert_eq!(ctrl.state().current_layer, "default");
        assert!(!ctrl.state().is_shifted);
    }

    #[test]
    fn test_shift_a_b_layer_sequence() {
        // [SHIFT, "a", "b"] → shift, default, default
        let mut ctrl = controller();

        ctrl.on_commit(&Key::special("⇧", KeyType::Shift));
        assert_eq!(ctrl.state().current_layer, "shift");

        ctrl.on_commit(&Key::new("a"));
        assert_eq!(ctrl.state().current_layer, "default");

        let effect = ctrl.on_commit(&Key::new("b"));
        assert_eq!(ctrl.state().current_layer, "default");
        assert!(!effect.layer_changed);
    }

    #[test]
    fn test_backspace_enter_space_outputs() {
        let mut ctrl = controller();
        assert_eq!(
            ctrl.on_commit(&Key::special("⌫", KeyType::Backspace)).output,
            Some(OutputEvent::DeleteBackward)
        );
        assert_eq!(
            ctrl.on_commit(&Key::special("↵", KeyType::Enter)).output,
            Some(OutputEvent::SendEnter)
        );
        assert_eq!(
            ctrl.on_commit(&Key::special(" ", KeyType::Space)).output,
            Some(OutputEvent::CommitText(" ".to_string()))
        );
    }

    #[test]
    fn test_layer_switch_labels() {
        let mut ctrl = controller();

        ctrl.on_commit(&Key::special("123", KeyType::LayerSwitch));
        assert_eq!(ctrl.state().current_layer, "numbers");

        ctrl.on_commit(&Key::special("#+", KeyType::LayerSwitch));
        assert_eq!(ctrl.state().current_layer, "symbols");

        ctrl.on_commit(&Key::special("ABC", KeyType::LayerSwitch));
        assert_eq!(ctrl.state().current_layer, "default");

        ctrl.on_commit(&Key::special("#+=", KeyType::LayerSwitch));
        assert_eq!(ctrl.state().current_layer, "symbols");
    }

    #[test]
    fn test_layer_switch_unknown_label_falls_back_to_default() {
        let mut ctrl = controller();
        ctrl.on_commit(&Key::special("123", KeyType::LayerSwitch));
        assert_eq!(ctrl.state().current_layer, "numbers");

        ctrl.on_commit(&Key::special("emoji", KeyType::LayerSwitch));
        assert_eq!(ctrl.state().current_layer, "default");
    }

    #[test]
    fn test_special_key_is_noop() {
        let mut ctrl = controller();
        let effect = ctrl.on_commit(&Key::special("fn", KeyType::Special));
        assert_eq!(effect, CommitEffect::default());
    }

    #[test]
    fn test_switch_to_unknown_layer_is_ignored() {
        let mut ctrl = controller();
        ctrl.on_commit(&Key::special("123", KeyType::LayerSwitch));
        assert!(!ctrl.switch_to_layer("emoji"));
        assert_eq!(ctrl.state().current_layer, "numbers");
    }

    #[test]
    fn test_switch_to_same_layer_reports_no_change() {
        let mut ctrl = controller();
        assert!(!ctrl.switch_to_layer("default"));
        assert!(ctrl.switch_to_layer("numbers"));
    }

    #[test]
    fn test_begin_session_resets_state() {
        let mut ctrl = controller();
        ctrl.on_commit(&Key::special("⇧", KeyType::Shift));
        ctrl.switch_to_layer("symbols");

        ctrl.begin_session();
        assert_eq!(ctrl.state().current_layer, "default");
        assert!(!ctrl.state().is_shifted);
    }

    #[test]
    fn test_end_session_exposes_final_state() {
        let mut ctrl = controller();
        ctrl.switch_to_layer("numbers");
        let state = ctrl.end_session();
        assert_eq!(state.current_layer, "numbers");
    }

    #[test]
    fn test_unknown_initial_layer_falls_back_to_default() {
        let ctrl = SessionController::new(LayerRegistry::builtin(), "emoji");
        assert_eq!(ctrl.state().current_layer, "default");
    }

    #[test]
    fn test_initial_layer_restored_when_known() {
        let ctrl = SessionController::new(LayerRegistry::builtin(), "numbers");
        assert_eq!(ctrl.state().current_layer, "numbers");
    }
}
