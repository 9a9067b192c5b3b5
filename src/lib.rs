//! Splitboard engine library
//!
//! This library provides the core functionality for the Splitboard split
//! touch keyboard: declarative layer definitions, panel layout geometry,
//! touch hit-testing, the press/drag/release gesture state machine, and
//! layer/session control.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
#[cfg(feature = "ratatui")]
pub mod tui;
