//! Snapshot building — flattens the parallel stores into the serializable
//! per-frame view handed to the presentation layer.

use citadel_core::components::WaveState;
use citadel_core::enums::{MatchPhase, MatchResult, OutpostKind, TankClass};
use citadel_core::events::GameEvent;
use citadel_core::state::{MatchSnapshot, OutpostView, ShotView, TankView};
use citadel_core::types::SimTime;

use crate::store::{OutpostStore, ShotPool, TankStore};

/// Build the complete match snapshot for this frame.
#[allow(clippy::too_many_arguments)]
pub fn build(
    time: SimTime,
    phase: MatchPhase,
    result: MatchResult,
    wave: WaveState,
    selected_kind: Option<OutpostKind>,
    tanks: &TankStore,
    outposts: &OutpostStore,
    outpost_shots: &ShotPool<OutpostKind>,
    tank_shots: &ShotPool<TankClass>,
    events: Vec<GameEvent>,
) -> MatchSnapshot {
    let tank_views = tanks
        .logic()
        .iter()
        .zip(tanks.physics())
        .zip(tanks.sprites())
        .map(|((logic, physics), sprite)| TankView {
            class: logic.class,
            health: logic.health,
            path_segment: logic.path_segment,
            position: physics.position,
            velocity: physics.velocity,
            atlas_source: sprite.atlas_source,
            destination: sprite.destination,
            angle_degrees: sprite.angle_degrees,
        })
        .collect();

    let outpost_views = outposts
        .logic()
        .iter()
        .zip(outposts.physics())
        .zip(outposts.sprites())
        .map(|((logic, physics), sprite)| OutpostView {
            kind: logic.kind,
            health: logic.health,
            position: physics.position,
            turret_direction: physics.turret_direction,
            base_atlas_source: sprite.base_atlas_source,
            base_destination: sprite.base_destination,
            turret_atlas_source: sprite.turret_atlas_source,
            turret_destination: sprite.turret_destination,
            turret_angle_degrees: sprite.turret_angle_degrees,
        })
        .collect();

    MatchSnapshot {
        time,
        phase,
        result,
        wave,
        selected_kind,
        tanks: tank_views,
        outposts: outpost_views,
        outpost_shots: shot_views(outpost_shots),
        tank_shots: shot_views(tank_shots),
        events,
    }
}

fn shot_views<V: Copy>(pool: &ShotPool<V>) -> Vec<ShotView<V>> {
    pool.shots()
        .iter()
        .map(|shot| ShotView {
            origin: shot.origin,
            target: shot.target,
            aim_direction: shot.aim_direction,
            remaining_secs: shot.remaining_secs,
            visual: shot.visual,
        })
        .collect()
}
