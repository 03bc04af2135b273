//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the entity stores, processes player commands, runs
//! all systems once per frame, and produces `MatchSnapshot`s. One engine
//! is one match's worth of state; constructing a new engine (or issuing
//! `StartMatch` again) resets everything.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use citadel_core::commands::PlayerCommand;
use citadel_core::components::WaveState;
use citadel_core::constants::{
    OUTPOST_CAPACITY, SHOT_POOL_CAPACITY, TANK_CAPACITY, WAVE_DELAY_SECS,
};
use citadel_core::enums::{
    MatchPhase, MatchResult, OutpostKind, PlacementRejection, TankClass,
};
use citadel_core::error::MatchSetupError;
use citadel_core::events::GameEvent;
use citadel_core::state::MatchSnapshot;
use citadel_core::types::{Path, SimTime};

use crate::match_setup;
use crate::placement;
use crate::store::{OutpostStore, ShotPool, TankStore};
use crate::systems;
use crate::systems::presentation::TreadAnimation;

/// Configuration for starting a new match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Waypoint path, in traversal order. Must have at least 3 points.
    pub waypoints: Vec<Vec2>,
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    /// Number of waves to schedule. `None` means endless play; with
    /// `Some(n)`, clearing every spawned tank after the final wave ends
    /// the match in the player's favor.
    pub max_waves: Option<u32>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            waypoints: default_waypoints(),
            seed: 42,
            max_waves: None,
        }
    }
}

/// The stock map (1920x1080 world units).
pub fn default_waypoints() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 100.0),
        Vec2::new(1800.0, 100.0),
        Vec2::new(1800.0, 700.0),
        Vec2::new(1400.0, 700.0),
        Vec2::new(1400.0, 400.0),
        Vec2::new(800.0, 400.0),
        Vec2::new(800.0, 700.0),
        Vec2::new(500.0, 700.0),
        Vec2::new(500.0, 400.0),
        Vec2::new(100.0, 400.0),
        Vec2::new(100.0, 980.0),
        Vec2::new(1400.0, 980.0),
    ]
}

/// The match engine. Owns all simulation state for one match.
pub struct MatchEngine {
    path: Path,
    tanks: TankStore,
    outposts: OutpostStore,
    outpost_shots: ShotPool<OutpostKind>,
    tank_shots: ShotPool<TankClass>,
    wave: WaveState,
    time: SimTime,
    phase: MatchPhase,
    result: MatchResult,
    max_waves: Option<u32>,
    seed: u64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    selected_kind: Option<OutpostKind>,
    tread: TreadAnimation,
}

impl MatchEngine {
    /// Create an engine for the given configuration.
    ///
    /// Fails only on configuration errors (an unusable path); everything
    /// at gameplay time is absorbed locally.
    pub fn new(config: MatchConfig) -> Result<Self, MatchSetupError> {
        let path = Path::new(config.waypoints)?;
        Ok(Self {
            path,
            tanks: TankStore::with_capacity(TANK_CAPACITY),
            outposts: OutpostStore::with_capacity(OUTPOST_CAPACITY),
            outpost_shots: ShotPool::with_capacity(SHOT_POOL_CAPACITY),
            tank_shots: ShotPool::with_capacity(SHOT_POOL_CAPACITY),
            wave: WaveState::default(),
            time: SimTime::default(),
            phase: MatchPhase::default(),
            result: MatchResult::default(),
            max_waves: config.max_waves,
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            selected_kind: None,
            tread: TreadAnimation::default(),
        })
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt_secs` measured elapsed
    /// time and return the resulting snapshot.
    pub fn advance(&mut self, dt_secs: f32) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Active {
            self.run_systems(dt_secs);
            self.time.advance(dt_secs);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            self.time,
            self.phase,
            self.result,
            self.wave,
            self.selected_kind,
            &self.tanks,
            &self.outposts,
            &self.outpost_shots,
            &self.tank_shots,
            events,
        )
    }

    /// Attempt to place an outpost, mutating the store only on success.
    ///
    /// Also the preview entry point: a `Err` return is what the UI renders
    /// as the red placement tint.
    pub fn try_place_outpost(
        &mut self,
        kind: OutpostKind,
        position: Vec2,
    ) -> Result<(), PlacementRejection> {
        if self.outposts.is_full() {
            return Err(PlacementRejection::CapacityExhausted);
        }
        placement::validate(position, &self.path, &self.outposts)?;

        let (logic, physics, sprite) = match_setup::make_outpost(kind, position, &mut self.rng);
        // Capacity was checked above; the spawn cannot fail.
        let _ = self.outposts.spawn(logic, physics, sprite);
        Ok(())
    }

    // --- Read access for the presentation layer ---

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn result(&self) -> MatchResult {
        self.result
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn wave(&self) -> WaveState {
        self.wave
    }

    pub fn selected_kind(&self) -> Option<OutpostKind> {
        self.selected_kind
    }

    pub fn tanks(&self) -> &TankStore {
        &self.tanks
    }

    pub fn outposts(&self) -> &OutpostStore {
        &self.outposts
    }

    pub fn outpost_shots(&self) -> &ShotPool<OutpostKind> {
        &self.outpost_shots
    }

    pub fn tank_shots(&self) -> &ShotPool<TankClass> {
        &self.tank_shots
    }

    /// Mutable store access for tests that need to stage exact states.
    #[cfg(test)]
    pub(crate) fn tanks_mut(&mut self) -> &mut TankStore {
        &mut self.tanks
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch => {
                if matches!(self.phase, MatchPhase::Pending | MatchPhase::Complete) {
                    self.reset();
                    self.phase = MatchPhase::Active;
                    tracing::info!(seed = self.seed, "match started");
                    self.events.push(GameEvent::WaveStarted { wave_number: 0 });
                }
            }
            PlayerCommand::Pause => {
                if self.phase == MatchPhase::Active {
                    self.phase = MatchPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == MatchPhase::Paused {
                    self.phase = MatchPhase::Active;
                }
            }
            PlayerCommand::PlaceOutpost { kind, position } => {
                if self.phase != MatchPhase::Active {
                    return;
                }
                match self.try_place_outpost(kind, position) {
                    Ok(()) => {
                        self.events.push(GameEvent::OutpostPlaced { kind, position });
                    }
                    Err(reason) => {
                        tracing::debug!(?reason, ?position, "placement rejected");
                        self.events.push(GameEvent::PlacementRejected {
                            kind,
                            position,
                            reason,
                        });
                    }
                }
            }
            PlayerCommand::SelectOutpostKind { kind } => {
                self.selected_kind = Some(kind);
            }
            PlayerCommand::ClearSelection => {
                self.selected_kind = None;
            }
        }
    }

    /// Run all systems in order for one frame.
    fn run_systems(&mut self, dt_secs: f32) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.tanks,
            &mut self.wave,
            &self.path,
            &mut self.rng,
            self.max_waves,
            dt_secs,
            &mut self.events,
        );
        // 2. Combat resolution
        systems::combat::run(
            &mut self.tanks,
            &mut self.outposts,
            &mut self.outpost_shots,
            &mut self.tank_shots,
            dt_secs,
            &mut self.events,
        );
        // 3. Lifecycle / eviction
        systems::cleanup::run(
            &mut self.tanks,
            &mut self.outposts,
            &mut self.outpost_shots,
            &mut self.tank_shots,
            dt_secs,
            &mut self.events,
        );
        // 4. Path-following steering
        let objective_reached = systems::steering::run(&mut self.tanks, &self.path);
        // 5. Physics integration
        systems::movement::run(&mut self.tanks, dt_secs);
        // 6. Presentation refresh
        systems::presentation::run(
            &mut self.tanks,
            &mut self.outposts,
            &mut self.tread,
            dt_secs,
        );

        if objective_reached {
            self.finish(MatchResult::ObjectiveReached, GameEvent::ObjectiveReached);
        } else if self.all_waves_cleared() {
            self.finish(MatchResult::AllUnitsDefeated, GameEvent::AllUnitsDefeated);
        }
    }

    /// With a bounded schedule: every wave has finished spawning and no
    /// tank survives. Endless matches never satisfy this.
    fn all_waves_cleared(&self) -> bool {
        let Some(max) = self.max_waves else {
            return false;
        };
        if !self.tanks.is_empty() {
            return false;
        }
        self.wave.wave_number >= max
            || (self.wave.wave_number == max.saturating_sub(1)
                && self.wave.spawned_in_wave == self.wave.wave_size())
    }

    fn finish(&mut self, result: MatchResult, event: GameEvent) {
        tracing::info!(
            frame = self.time.frame,
            elapsed_secs = self.time.elapsed_secs,
            ?result,
            "match over"
        );
        self.result = result;
        self.phase = MatchPhase::Complete;
        self.events.push(event);
    }

    /// Return every per-match accumulator to its initial state.
    fn reset(&mut self) {
        self.tanks.clear();
        self.outposts.clear();
        self.outpost_shots.clear();
        self.tank_shots.clear();
        self.wave = WaveState {
            countdown_secs: WAVE_DELAY_SECS,
            ..WaveState::default()
        };
        self.time = SimTime::default();
        self.result = MatchResult::Ongoing;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.events.clear();
        self.tread = TreadAnimation::default();
    }
}
