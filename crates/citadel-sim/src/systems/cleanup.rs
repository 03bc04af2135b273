//! Cleanup system: evicts exhausted entities and expired shot animations.
//!
//! Evicts everything that qualifies in a single pass per frame. Removal
//! always goes through the stores' aligned `remove_at`, walking indices
//! in reverse so pending removals stay valid.

use citadel_core::enums::{OutpostKind, TankClass};
use citadel_core::events::GameEvent;

use crate::store::{OutpostStore, ShotPool, TankStore};

/// Evict dead entities, then age and evict shot animations.
pub fn run(
    tanks: &mut TankStore,
    outposts: &mut OutpostStore,
    outpost_shots: &mut ShotPool<OutpostKind>,
    tank_shots: &mut ShotPool<TankClass>,
    dt_secs: f32,
    events: &mut Vec<GameEvent>,
) {
    for index in (0..tanks.len()).rev() {
        if tanks.logic()[index].health < 0.0 {
            let class = tanks.logic()[index].class;
            tanks.remove_at(index);
            events.push(GameEvent::TankDestroyed { class });
        }
    }

    for index in (0..outposts.len()).rev() {
        if outposts.logic()[index].health < 0.0 {
            let kind = outposts.logic()[index].kind;
            outposts.remove_at(index);
            events.push(GameEvent::OutpostDestroyed { kind });
        }
    }

    age_and_evict(outpost_shots, dt_secs);
    age_and_evict(tank_shots, dt_secs);
}

/// Tick down every shot's remaining lifetime and drop the expired ones.
fn age_and_evict<V>(pool: &mut ShotPool<V>, dt_secs: f32) {
    for shot in pool.shots_mut() {
        shot.remaining_secs -= dt_secs;
    }
    for index in (0..pool.len()).rev() {
        if pool.shots()[index].remaining_secs < 0.0 {
            pool.remove_at(index);
        }
    }
}
