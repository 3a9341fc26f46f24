//! # Connect Four
//!
//! Console Connect Four for any number of players on a board of any size.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, move/outcome state machine
//! - [`input`] — Raw console text to validated column index
//! - [`ui`] — Board rendering and the interactive game loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
