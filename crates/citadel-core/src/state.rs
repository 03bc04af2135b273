//! Match state snapshot — the complete visible state handed to the
//! presentation layer after each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::WaveState;
use crate::enums::{MatchPhase, MatchResult, OutpostKind, TankClass};
use crate::events::GameEvent;
use crate::types::{Rect, SimTime};

/// Complete match state produced by `advance` each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub result: MatchResult,
    pub wave: WaveState,
    /// UI selection echo; not authoritative simulation state.
    pub selected_kind: Option<OutpostKind>,
    pub tanks: Vec<TankView>,
    pub outposts: Vec<OutpostView>,
    pub outpost_shots: Vec<ShotView<OutpostKind>>,
    pub tank_shots: Vec<ShotView<TankClass>>,
    /// Events raised since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// One tank, logic + physics + presentation merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub class: TankClass,
    pub health: f32,
    pub path_segment: usize,
    pub position: Vec2,
    pub velocity: Vec2,
    pub atlas_source: Rect,
    pub destination: Rect,
    pub angle_degrees: f32,
}

/// One outpost, logic + physics + presentation merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutpostView {
    pub kind: OutpostKind,
    pub health: f32,
    pub position: Vec2,
    pub turret_direction: Vec2,
    pub base_atlas_source: Rect,
    pub base_destination: Rect,
    pub turret_atlas_source: Rect,
    pub turret_destination: Rect,
    pub turret_angle_degrees: f32,
}

/// One in-flight shot animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotView<V> {
    pub origin: Vec2,
    pub target: Vec2,
    pub aim_direction: Vec2,
    pub remaining_secs: f32,
    pub visual: V,
}
