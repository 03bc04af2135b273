//! Combat resolution — range detection, turret tracking, cooldown-gated
//! fire, damage application, and shot-animation bookkeeping.
//!
//! Outposts evaluate first, then tanks return fire. Target selection is
//! closest-in-range, which stays stable when eviction reorders the
//! stores. Damage lands instantly; the shot animation is a purely visual
//! record appended to the firer's pool.

use glam::Vec2;

use citadel_core::components::ShotAnimation;
use citadel_core::enums::{OutpostKind, TankClass};
use citadel_core::events::GameEvent;

use crate::store::{OutpostStore, ShotPool, TankStore};

/// Resolve one frame of combat, then advance every cooldown timer by
/// `dt_secs` unconditionally.
pub fn run(
    tanks: &mut TankStore,
    outposts: &mut OutpostStore,
    outpost_shots: &mut ShotPool<OutpostKind>,
    tank_shots: &mut ShotPool<TankClass>,
    dt_secs: f32,
    events: &mut Vec<GameEvent>,
) {
    outposts_fire(tanks, outposts, outpost_shots, events);
    tanks_fire(tanks, outposts, tank_shots, events);

    for logic in tanks.logic_mut() {
        logic.secs_since_last_shot += dt_secs;
    }
    for logic in outposts.logic_mut() {
        logic.secs_since_last_shot += dt_secs;
    }
}

/// Each outpost tracks and, cooldown permitting, shoots the closest tank
/// in range. At most one shot per outpost per frame.
fn outposts_fire(
    tanks: &mut TankStore,
    outposts: &mut OutpostStore,
    outpost_shots: &mut ShotPool<OutpostKind>,
    events: &mut Vec<GameEvent>,
) {
    for index in 0..outposts.len() {
        let kind = outposts.logic()[index].kind;
        let stats = kind.stats();
        let position = outposts.physics()[index].position;

        let Some(target) = closest_in_range(
            position,
            stats.range,
            tanks.physics().iter().map(|p| p.position),
        ) else {
            continue;
        };
        let target_position = tanks.physics()[target].position;

        // Rotate the turret a fraction of the way toward the target via
        // normalized vector interpolation, not raw angle arithmetic.
        let aim = (target_position - position).normalize_or_zero();
        let turret = &mut outposts.physics_mut()[index].turret_direction;
        let blended = turret.lerp(aim, stats.turret_track_rate);
        // Opposed vectors can cancel out; snap to the target direction.
        *turret = if blended.length_squared() > f32::EPSILON {
            blended.normalize()
        } else {
            aim
        };
        let turret_direction = *turret;

        let logic = &mut outposts.logic_mut()[index];
        if logic.secs_since_last_shot < stats.fire_cooldown_secs {
            continue;
        }
        logic.secs_since_last_shot = 0.0;

        tanks.logic_mut()[target].health -= stats.fire_damage;
        // A full pool drops the visual; the damage above already landed.
        let _ = outpost_shots.push(ShotAnimation {
            origin: position,
            target: target_position,
            aim_direction: turret_direction,
            remaining_secs: stats.shot_visual_secs,
            visual: kind,
        });
        events.push(GameEvent::OutpostFired { kind });
    }
}

/// Each tank with an elapsed cooldown shoots the closest outpost in range.
fn tanks_fire(
    tanks: &mut TankStore,
    outposts: &mut OutpostStore,
    tank_shots: &mut ShotPool<TankClass>,
    events: &mut Vec<GameEvent>,
) {
    for index in 0..tanks.len() {
        let class = tanks.logic()[index].class;
        let stats = class.stats();

        if tanks.logic()[index].secs_since_last_shot < stats.fire_cooldown_secs {
            continue;
        }

        let position = tanks.physics()[index].position;
        let Some(target) = closest_in_range(
            position,
            stats.fire_range,
            outposts.physics().iter().map(|p| p.position),
        ) else {
            continue;
        };
        let target_position = outposts.physics()[target].position;

        tanks.logic_mut()[index].secs_since_last_shot = 0.0;
        outposts.logic_mut()[target].health -= stats.fire_damage;
        let _ = tank_shots.push(ShotAnimation {
            origin: position,
            target: target_position,
            aim_direction: (target_position - position).normalize_or_zero(),
            remaining_secs: stats.shot_visual_secs,
            visual: class,
        });
        events.push(GameEvent::TankFired { class });
    }
}

/// Index of the closest position within `range`, if any.
fn closest_in_range(
    from: Vec2,
    range: f32,
    positions: impl Iterator<Item = Vec2>,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, position) in positions.enumerate() {
        let distance = from.distance(position);
        if distance >= range {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}
