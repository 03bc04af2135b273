//! Entity spawn factories.
//!
//! Builds the three aligned records for a new tank or outpost so callers
//! can hand them to the store in one `spawn` call.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use citadel_core::components::{
    OutpostLogic, OutpostPhysics, OutpostSprite, TankLogic, TankPhysics, TankSprite,
};
use citadel_core::constants::SPRITE_SCALE;
use citadel_core::enums::{OutpostKind, TankClass};
use citadel_core::types::{Path, Rect};

use crate::store::TankStore;

/// Spawn one tank of the given class at the path start.
///
/// Health starts at the class maximum and the fire cooldown is
/// pre-charged so the tank can shoot as soon as something is in range.
/// Velocity is a unit vector toward the second waypoint; the steering
/// system corrects its magnitude on the next frame. Returns false when
/// the store is at capacity (the spawn is skipped, nothing is created).
#[must_use]
pub fn spawn_tank(tanks: &mut TankStore, path: &Path, class: TankClass) -> bool {
    let stats = class.stats();
    let position = path.start();

    let logic = TankLogic {
        health: stats.max_health,
        secs_since_last_shot: stats.fire_cooldown_secs,
        class,
        path_segment: 0,
    };
    let physics = TankPhysics {
        position,
        velocity: (path.waypoint(1) - position).normalize_or_zero(),
        acceleration: Vec2::ZERO,
    };
    let sprite = TankSprite {
        atlas_source: stats.atlas_source,
        destination: Rect::new(
            position.x,
            position.y,
            stats.atlas_source.width * SPRITE_SCALE,
            stats.atlas_source.height * SPRITE_SCALE,
        ),
        angle_degrees: 0.0,
    };

    tanks.spawn(logic, physics, sprite)
}

/// Pick a tank class uniformly at random.
pub fn random_tank_class(rng: &mut ChaCha8Rng) -> TankClass {
    TankClass::ALL[rng.gen_range(0..TankClass::ALL.len())]
}

/// Build the three records for a freshly placed outpost.
///
/// The turret starts at a random facing; sprite rectangles are filled in
/// by the presentation refresh on the next frame.
pub fn make_outpost(
    kind: OutpostKind,
    position: Vec2,
    rng: &mut ChaCha8Rng,
) -> (OutpostLogic, OutpostPhysics, OutpostSprite) {
    let stats = kind.stats();

    let logic = OutpostLogic {
        health: stats.max_health,
        secs_since_last_shot: 0.0,
        kind,
    };
    let physics = OutpostPhysics {
        position,
        turret_direction: Vec2::from_angle(rng.gen_range(0.0..std::f32::consts::TAU)),
    };
    let sprite = OutpostSprite::default();

    (logic, physics, sprite)
}
