//! Press/drag/release gesture tracking for one panel.

use crate::models::{Key, KeyBounds};
use serde::{Deserialize, Serialize};

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    /// Finger made contact
    Down,
    /// Finger moved while in contact
    Move,
    /// Finger lifted
    Up,
}

/// A single touch event in panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    /// Event phase
    pub phase: TouchPhase,
    /// X coordinate in panel space
    pub x: f32,
    /// Y coordinate in panel space
    pub y: f32,
}

impl TouchEvent {
    /// Creates a touch event.
    #[must_use]
    pub const fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }
}

/// Result of feeding one touch event to the tracker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchOutcome {
    /// Whether the event was handled; unconsumed events pass through to
    /// whatever lies beneath the panel
    pub consumed: bool,
    /// The key committed by this event, set at most once per down→up cycle
    pub committed: Option<Key>,
}

impl TouchOutcome {
    const PASS_THROUGH: Self = Self {
        consumed: false,
        committed: None,
    };

    const CONSUMED: Self = Self {
        consumed: true,
        committed: None,
    };
}

/// Gesture state: idle, or mid-gesture with the key currently under the
/// finger (`None` while dragged off every key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum GestureState {
    #[default]
    Idle,
    Pressing {
        current: Option<usize>,
    },
}

/// Per-panel gesture state machine.
///
/// Tracks touch-down/move/up against the panel's key rectangles and
/// decides press, drag, commit, and pass-through. Each panel owns its own
/// tracker; the two panels share no state.
///
/// The commit fires for the key under the finger at release time, not at
/// press time, so a press can be corrected by dragging before lifting.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    bounds: Vec<KeyBounds>,
    state: GestureState,
}

impl GestureTracker {
    /// Creates a tracker with no key rectangles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the key rectangles, cancelling any gesture in progress.
    ///
    /// Called on every panel resize and layer switch.
    pub fn set_bounds(&mut self, bounds: Vec<KeyBounds>) {
        self.bounds = bounds;
        self.state = GestureState::Idle;
    }

    /// Current key rectangles.
    #[must_use]
    pub fn bounds(&self) -> &[KeyBounds] {
        &self.bounds
    }

    /// The key currently shown as pressed, if any.
    #[must_use]
    pub fn pressed_key(&self) -> Option<&KeyBounds> {
        match self.state {
            GestureState::Pressing {
                current: Some(index),
            } => self.bounds.get(index),
            _ => None,
        }
    }

    /// Feeds one touch event through the state machine.
    ///
    /// - Down on a key: start tracking it, consume the event.
    /// - Down on empty space: stay idle, pass the event through.
    /// - Move mid-gesture: retarget to the key now under the finger
    ///   (possibly none); consumed while a key is tracked.
    /// - Up mid-gesture: commit the tracked key (if still over one) and
    ///   consume; a drag-off release commits nothing but the gesture was
    ///   still handled.
    /// - Move or up without a prior down: no-op.
    pub fn handle_touch(&mut self, event: TouchEvent) -> TouchOutcome {
        match (self.state, event.phase) {
            (GestureState::Idle, TouchPhase::Down) => {
                match self.index_at(event.x, event.y) {
                    Some(index) => {
                        self.state = GestureState::Pressing {
                            current: Some(index),
                        };
                        TouchOutcome::CONSUMED
                    }
                    None => TouchOutcome::PASS_THROUGH,
                }
            }
            (GestureState::Pressing { .. }, TouchPhase::Move) => {
                let current = self.index_at(event.x, event.y);
                self.state = GestureState::Pressing { current };
                TouchOutcome {
                    consumed: current.is_some(),
                    committed: None,
                }
            }
            (GestureState::Pressing { current }, TouchPhase::Up) => {
                self.state = GestureState::Idle;
                TouchOutcome {
                    consumed: true,
                    committed: current.and_then(|i| self.bounds.get(i)).map(|kb| kb.key.clone()),
                }
            }
            // Up or move without a prior down, or a second down mid-gesture
            _ => TouchOutcome::PASS_THROUGH,
        }
    }

    // Same first-match policy as [`find_key_at`], returning the index so
    // the tracked key survives later lookups without borrowing `bounds`.
    fn index_at(&self, x: f32, y: f32) -> Option<usize> {
        self.bounds.iter().position(|kb| kb.rect.contains(x, y))
    }
}
