//! Engine logic: layout math, gesture tracking, and session control.
//!
//! Services operate on the data models and hold whatever mutable state
//! the engine needs. Everything here is synchronous and single-threaded;
//! the two panels share no mutable state, and the session state is only
//! touched by the controller on the caller's thread.

pub mod engine;
pub mod gesture;
pub mod layout;
pub mod session;

// Re-export commonly used types and functions
pub use engine::{EngineResponse, SplitKeyboard};
pub use gesture::{GestureTracker, TouchEvent, TouchOutcome, TouchPhase};
pub use layout::{compute_panel_bounds, find_key_at};
pub use session::{CommitEffect, OutputEvent, SessionController, SessionState};
