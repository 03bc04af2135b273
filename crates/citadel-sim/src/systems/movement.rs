//! Kinematic integration.
//!
//! Semi-implicit Euler: velocity absorbs acceleration first, then
//! position absorbs velocity, both scaled by the frame's measured
//! duration.

use crate::store::TankStore;

/// Integrate every tank's physics by one frame.
pub fn run(tanks: &mut TankStore, dt_secs: f32) {
    for physics in tanks.physics_mut() {
        physics.velocity += physics.acceleration * dt_secs;
        physics.position += physics.velocity * dt_secs;
    }
}
