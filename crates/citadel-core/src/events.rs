//! Events emitted by the simulation for audio and UI feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{OutpostKind, PlacementRejection, TankClass};

/// One-shot notifications drained into each frame's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave began spawning.
    WaveStarted { wave_number: u32 },
    /// A tank entered the field at the path start.
    TankSpawned { class: TankClass },
    /// A placement command succeeded.
    OutpostPlaced { kind: OutpostKind, position: Vec2 },
    /// A placement command was rejected; the store is unchanged.
    PlacementRejected {
        kind: OutpostKind,
        position: Vec2,
        reason: PlacementRejection,
    },
    /// An outpost fired at a tank.
    OutpostFired { kind: OutpostKind },
    /// A tank returned fire at an outpost.
    TankFired { class: TankClass },
    /// A tank was destroyed and evicted.
    TankDestroyed { class: TankClass },
    /// An outpost was destroyed and evicted.
    OutpostDestroyed { kind: OutpostKind },
    /// A tank reached the final waypoint; the match is over.
    ObjectiveReached,
    /// Every scheduled wave was cleared; the match is over.
    AllUnitsDefeated,
}
