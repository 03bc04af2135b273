//! Placement validator — geometric feasibility of a new outpost.
//!
//! Pure query, no mutation. The presentation layer calls this both to
//! tint its placement preview and, through the engine, to gate the actual
//! placement command.

use glam::Vec2;

use citadel_core::constants::{OUTPOST_FOOTPRINT, PATH_CORRIDOR_HALF_WIDTH};
use citadel_core::enums::PlacementRejection;
use citadel_core::types::{distance_to_segment, Path, Rect};

use crate::store::OutpostStore;

/// Clearance required between an outpost center and the path polyline:
/// corridor half-width plus the footprint's half-diagonal, so no corner
/// of the base can poke into the corridor.
fn corridor_clearance() -> f32 {
    PATH_CORRIDOR_HALF_WIDTH + OUTPOST_FOOTPRINT * std::f32::consts::SQRT_2 / 2.0
}

/// Check whether an outpost may be placed at `position`.
///
/// Rejects candidates whose footprint would intrude into the path
/// corridor or overlap an existing outpost's footprint. Capacity is the
/// engine's concern, not geometry's.
pub fn validate(
    position: Vec2,
    path: &Path,
    outposts: &OutpostStore,
) -> Result<(), PlacementRejection> {
    let clearance = corridor_clearance();
    for (a, b) in path.segments() {
        if distance_to_segment(position, a, b) < clearance {
            return Err(PlacementRejection::BlocksPathCorridor);
        }
    }

    let candidate = Rect::from_center(position, OUTPOST_FOOTPRINT, OUTPOST_FOOTPRINT);
    for physics in outposts.physics() {
        let existing = Rect::from_center(physics.position, OUTPOST_FOOTPRINT, OUTPOST_FOOTPRINT);
        if candidate.overlaps(&existing) {
            return Err(PlacementRejection::OverlapsOutpost);
        }
    }

    Ok(())
}
