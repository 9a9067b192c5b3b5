//! Engine facade wiring layout, gestures, and session control together.

use crate::models::{KeyBounds, LayerRegistry, PanelGeometry, PanelSide};
use crate::services::gesture::{GestureTracker, TouchEvent};
use crate::services::layout::compute_panel_bounds;
use crate::services::session::{OutputEvent, SessionController, SessionState};
use tracing::debug;

/// Result of routing one touch event through the engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineResponse {
    /// Whether the event was handled; unhandled events pass through to
    /// the window beneath the panel
    pub consumed: bool,
    /// Output event produced by a committed key, at most one per gesture
    pub output: Option<OutputEvent>,
    /// Whether the commit switched layers (bounds were recomputed)
    pub layer_changed: bool,
}

/// The split keyboard engine: two independent panels over one session.
///
/// Owns the session controller plus one gesture tracker and one geometry
/// per panel. Touch coordinates are panel-local; the host decides where
/// each panel sits on screen. All methods are synchronous and run on the
/// caller's thread.
#[derive(Debug, Clone)]
pub struct SplitKeyboard {
    controller: SessionController,
    left: GestureTracker,
    right: GestureTracker,
    left_geometry: PanelGeometry,
    right_geometry: PanelGeometry,
}

impl SplitKeyboard {
    /// Creates an engine over the given registry, starting on
    /// `initial_layer` (unknown names fall back to "default"). Panels
    /// start with zero size and produce no key rectangles until the first
    /// [`Self::resize_panel`] call.
    #[must_use]
    pub fn new(registry: LayerRegistry, initial_layer: &str) -> Self {
        let mut engine = Self {
            controller: SessionController::new(registry, initial_layer),
            left: GestureTracker::new(),
            right: GestureTracker::new(),
            left_geometry: PanelGeometry::new(0.0, 0.0, 0.0),
            right_geometry: PanelGeometry::new(0.0, 0.0, 0.0),
        };
        engine.recompute_bounds();
        engine
    }

    /// Engine over the built-in layers, starting on "default".
    #[must_use]
    pub fn with_builtin_layers() -> Self {
        Self::new(LayerRegistry::builtin(), crate::constants::DEFAULT_LAYER)
    }

    /// Updates one panel's pixel size, recomputing its key rectangles.
    ///
    /// Any gesture in progress on that panel is cancelled.
    pub fn resize_panel(&mut self, side: PanelSide, width: f32, height: f32) {
        debug!(side = side.as_str(), width, height, "panel resize");
        match side {
            PanelSide::Left => self.left_geometry = PanelGeometry::new(0.0, width, height),
            PanelSide::Right => self.right_geometry = PanelGeometry::new(0.0, width, height),
        }
        self.recompute_side(side);
    }

    /// Routes one touch event to the panel's gesture tracker and, on a
    /// commit, through the session controller.
    ///
    /// A commit that switches layers recomputes the key rectangles of
    /// both panels before this returns.
    pub fn handle_touch(&mut self, side: PanelSide, event: TouchEvent) -> EngineResponse {
        let outcome = self.tracker_mut(side).handle_touch(event);

        let Some(key) = outcome.committed else {
            return EngineResponse {
                consumed: outcome.consumed,
                output: None,
                layer_changed: false,
            };
        };

        let effect = self.controller.on_commit(&key);
        if effect.layer_changed {
            self.recompute_bounds();
        }

        EngineResponse {
            consumed: outcome.consumed,
            output: effect.output,
            layer_changed: effect.layer_changed,
        }
    }

    /// Key rectangles of one panel for the active layer.
    #[must_use]
    pub fn panel_bounds(&self, side: PanelSide) -> &[KeyBounds] {
        self.tracker(side).bounds()
    }

    /// The key currently pressed on one panel, if any.
    #[must_use]
    pub fn pressed_key(&self, side: PanelSide) -> Option<&KeyBounds> {
        self.tracker(side).pressed_key()
    }

    /// Name of the active layer.
    #[must_use]
    pub fn current_layer_name(&self) -> &str {
        &self.controller.state().current_layer
    }

    /// Whether the next character commit is shifted.
    #[must_use]
    pub fn is_shifted(&self) -> bool {
        self.controller.state().is_shifted
    }

    /// Switches layers directly (host-initiated, e.g. restoring persisted
    /// state). Unknown names are ignored.
    pub fn switch_to_layer(&mut self, name: &str) {
        if self.controller.switch_to_layer(name) {
            self.recompute_bounds();
        }
    }

    /// Starts a new input session: default layer, shift off.
    pub fn begin_session(&mut self) {
        self.controller.begin_session();
        self.recompute_bounds();
    }

    /// Ends the session, exposing the final state for persistence.
    #[must_use]
    pub fn end_session(&self) -> &SessionState {
        self.controller.end_session()
    }

    fn tracker(&self, side: PanelSide) -> &GestureTracker {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
        }
    }

    fn tracker_mut(&mut self, side: PanelSide) -> &mut GestureTracker {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
        }
    }

    fn recompute_side(&mut self, side: PanelSide) {
        let layer = self.controller.current_layer();
        let (rows, geometry) = match side {
            PanelSide::Left => (layer.rows(side), self.left_geometry),
            PanelSide::Right => (layer.rows(side), self.right_geometry),
        };
        let bounds = compute_panel_bounds(rows, &geometry);
        self.tracker_mut(side).set_bounds(bounds);
    }

    fn recompute_bounds(&mut self) {
        for side in PanelSide::ALL {
            self.recompute_side(side);
        }
    }
}
