//! Per-frame systems that operate on the entity stores.
//!
//! Systems are free functions over the stores and match state — they own
//! nothing. The engine runs them once per frame in a fixed order:
//! wave spawning, combat, cleanup, steering, kinematics, presentation
//! refresh, snapshot.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod presentation;
pub mod snapshot;
pub mod steering;
pub mod wave_spawner;
