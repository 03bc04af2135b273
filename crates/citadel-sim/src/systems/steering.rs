//! Path-following steering — advances each tank's kinematic intent along
//! the waypoint path.
//!
//! Tanks cruise at a fixed speed, turn onto the next leg when they come
//! within the advance radius of the upcoming waypoint, and brake on final
//! approach to the objective. Arrival at the objective ends the match.

use citadel_core::constants::{
    BRAKING_FACTOR, OBJECTIVE_ARRIVAL_RADIUS, OBJECTIVE_BRAKE_RADIUS, STEERING_STRENGTH,
    TANK_CRUISE_SPEED, WAYPOINT_ADVANCE_RADIUS,
};
use citadel_core::types::{normalize_to, Path};

use crate::store::TankStore;

/// Steer every tank for one frame. Returns true when any tank has
/// reached the objective (the path's final waypoint).
#[must_use]
pub fn run(tanks: &mut TankStore, path: &Path) -> bool {
    let mut objective_reached = false;
    let last_index = path.len() - 1;

    for index in 0..tanks.len() {
        let physics = &mut tanks.physics_mut()[index];
        let to_objective = physics.position.distance(path.end());

        if to_objective < OBJECTIVE_BRAKE_RADIUS {
            // Final approach: bleed speed off instead of cruising.
            physics.acceleration = physics.velocity * BRAKING_FACTOR;
            if to_objective < OBJECTIVE_ARRIVAL_RADIUS {
                objective_reached = true;
            }
        } else {
            // Clamp speed, preserving direction.
            physics.velocity = normalize_to(physics.velocity, TANK_CRUISE_SPEED);
        }

        // Turn onto the next leg when close to the upcoming waypoint.
        // The last two waypoints have no leg beyond them, so advancement
        // stops once the lookahead would leave the path; braking above
        // takes over before that matters in a nominal run.
        let segment = tanks.logic()[index].path_segment;
        if segment + 2 <= last_index {
            let upcoming = path.waypoint(segment + 1);
            if tanks.physics()[index].position.distance(upcoming) < WAYPOINT_ADVANCE_RADIUS {
                let next_leg = path.waypoint(segment + 2) - upcoming;
                tanks.physics_mut()[index].acceleration =
                    normalize_to(next_leg, STEERING_STRENGTH);
                tanks.logic_mut()[index].path_segment = segment + 1;
            }
        }
    }

    objective_reached
}
