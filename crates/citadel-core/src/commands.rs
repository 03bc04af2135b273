//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are validated and queued for processing at the start of the
//! next `advance` call.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::OutpostKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin (or restart) the match.
    StartMatch,
    /// Place an outpost of the given kind at a world position.
    /// Rejected placements emit a `PlacementRejected` event.
    PlaceOutpost { kind: OutpostKind, position: Vec2 },
    /// Select which outpost kind subsequent placements preview.
    /// Pure UI state; never touches the authoritative arrays.
    SelectOutpostKind { kind: OutpostKind },
    /// Clear the outpost selection.
    ClearSelection,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
