//! Presentation-state refresh — derives draw state from logic and physics.
//!
//! Runs after integration so sprites show this frame's positions. All
//! fields written here are write-once-per-frame outputs for the renderer;
//! gameplay never reads them back.

use citadel_core::constants::{
    OUTPOST_BASE_ATLAS, OUTPOST_FOOTPRINT, TANK_SPRITE_ANGLE_OFFSET, TREAD_FRAME_SECS,
    TREAD_FRAME_X_OFFSET, TREAD_MIN_SPEED, TURRET_DESTINATION_SIZE,
};
use citadel_core::types::Rect;

use crate::store::{OutpostStore, TankStore};

/// Tread animation clock, shared by every tank so all treads flip in
/// lockstep.
#[derive(Debug, Default)]
pub struct TreadAnimation {
    secs_since_last_tick: f32,
    frame_x_offset: f32,
}

impl TreadAnimation {
    /// Advance the clock, flipping between the two tread frames.
    fn tick(&mut self, dt_secs: f32) {
        if self.secs_since_last_tick > TREAD_FRAME_SECS {
            self.frame_x_offset = if self.frame_x_offset == 0.0 {
                TREAD_FRAME_X_OFFSET
            } else {
                0.0
            };
            self.secs_since_last_tick = 0.0;
        }
        self.secs_since_last_tick += dt_secs;
    }
}

/// Refresh all sprite records from the authoritative state.
pub fn run(
    tanks: &mut TankStore,
    outposts: &mut OutpostStore,
    tread: &mut TreadAnimation,
    dt_secs: f32,
) {
    tread.tick(dt_secs);

    for index in 0..tanks.len() {
        let physics = tanks.physics()[index];
        let class = tanks.logic()[index].class;
        let sprite = &mut tanks.sprites_mut()[index];

        // Treads only animate while the tank is actually moving.
        if physics.velocity.length() > TREAD_MIN_SPEED {
            sprite.atlas_source.x = class.stats().atlas_source.x + tread.frame_x_offset;
        }

        sprite.destination.x = physics.position.x;
        sprite.destination.y = physics.position.y;
        sprite.angle_degrees = physics.velocity.y.atan2(physics.velocity.x).to_degrees()
            + TANK_SPRITE_ANGLE_OFFSET;
    }

    for index in 0..outposts.len() {
        let physics = outposts.physics()[index];
        let kind = outposts.logic()[index].kind;
        let sprite = &mut outposts.sprites_mut()[index];

        sprite.base_atlas_source = OUTPOST_BASE_ATLAS;
        sprite.base_destination = Rect::new(
            physics.position.x,
            physics.position.y,
            OUTPOST_FOOTPRINT,
            OUTPOST_FOOTPRINT,
        );
        sprite.turret_atlas_source = kind.stats().turret_atlas_source;
        sprite.turret_destination = Rect::new(
            physics.position.x,
            physics.position.y,
            TURRET_DESTINATION_SIZE.0,
            TURRET_DESTINATION_SIZE.1,
        );
        sprite.turret_angle_degrees = physics
            .turret_direction
            .y
            .atan2(physics.turret_direction.x)
            .to_degrees();
    }
}
