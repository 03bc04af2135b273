//! Core types and definitions for the Citadel simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, commands, stat tables, state snapshots, events, and
//! constants. It has no dependency on the engine or any rendering
//! framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod stats;
pub mod types;
