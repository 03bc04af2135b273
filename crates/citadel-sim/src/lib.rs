//! Simulation engine for Citadel.
//!
//! Owns the parallel entity stores, runs the per-frame systems in a fixed
//! order, and produces `MatchSnapshot`s for the presentation layer.
//! Completely headless (no rendering dependency), enabling deterministic
//! testing.

pub mod engine;
pub mod match_setup;
pub mod placement;
pub mod store;
pub mod systems;

pub use citadel_core as core;
pub use engine::MatchEngine;
