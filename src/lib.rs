//! # Connect Four
//!
//! Rules engine and turn management for two-player Connect Four, with a
//! terminal UI built with Ratatui and a plain console mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, turn state machine
//! - [`ui`] — Terminal UI with animated drops, console front end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
