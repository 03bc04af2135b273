//! Wave spawning system — time- and count-gated creation of tanks.
//!
//! Wave n contains 2^n tanks. Within a wave, at most one tank spawns per
//! frame, and only once the previous spawn has moved a randomized spacing
//! distance away from the path start. When a wave finishes spawning, the
//! inter-wave countdown is armed; the next wave begins once it runs out.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use citadel_core::components::WaveState;
use citadel_core::constants::{SPAWN_SPACING_BASE, WAVE_DELAY_SECS};
use citadel_core::events::GameEvent;
use citadel_core::types::Path;

use crate::match_setup;
use crate::store::TankStore;

/// Advance the wave state machine by one frame.
pub fn run(
    tanks: &mut TankStore,
    wave: &mut WaveState,
    path: &Path,
    rng: &mut ChaCha8Rng,
    max_waves: Option<u32>,
    dt_secs: f32,
    events: &mut Vec<GameEvent>,
) {
    let exhausted = max_waves.is_some_and(|max| wave.wave_number >= max);
    if !exhausted {
        if wave.spawned_in_wave < wave.wave_size() {
            try_spawn(tanks, wave, path, rng, events);
        } else if wave.countdown_secs < 0.0 {
            wave.wave_number += 1;
            wave.spawned_in_wave = 0;
            if max_waves.is_none_or(|max| wave.wave_number < max) {
                tracing::info!(wave = wave.wave_number, "wave started");
                events.push(GameEvent::WaveStarted {
                    wave_number: wave.wave_number,
                });
            }
        }
    }

    // The countdown runs every frame regardless of branch taken.
    wave.countdown_secs -= dt_secs;
}

/// Spawn one tank if the spacing gate allows and capacity permits.
fn try_spawn(
    tanks: &mut TankStore,
    wave: &mut WaveState,
    path: &Path,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    // Spacing gate: the most recently spawned tank must have cleared a
    // randomized distance from the start, so spawns never stack.
    if let Some(last) = tanks.physics().last() {
        let threshold = SPAWN_SPACING_BASE * (1.0 + rng.gen::<f32>());
        if last.position.distance(path.start()) <= threshold {
            return;
        }
    }

    let class = match_setup::random_tank_class(rng);
    if !match_setup::spawn_tank(tanks, path, class) {
        // Store full: skip this frame, retry on the next.
        return;
    }

    wave.spawned_in_wave += 1;
    events.push(GameEvent::TankSpawned { class });

    if wave.spawned_in_wave == wave.wave_size() {
        wave.countdown_secs = WAVE_DELAY_SECS;
    }
}
