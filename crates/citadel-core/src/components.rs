//! Entity state records kept in the parallel stores.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! Each entity class is described by three records (logic, physics,
//! sprite) held at the same index of three arrays; the store is the only
//! place allowed to grow or shrink them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{OutpostKind, TankClass};
use crate::types::Rect;

/// Gameplay state of one tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TankLogic {
    pub health: f32,
    /// Cooldown accumulator; firing is legal once this reaches the class
    /// cooldown. Pre-charged at spawn so the first shot needs no warm-up.
    pub secs_since_last_shot: f32,
    pub class: TankClass,
    /// Index of the path segment the tank is currently traversing.
    pub path_segment: usize,
}

/// Kinematic state of one tank.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TankPhysics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

/// Derived draw state of one tank. Written once per frame by the
/// presentation refresh; never read back by gameplay logic.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TankSprite {
    pub atlas_source: Rect,
    /// Center-anchored destination rectangle.
    pub destination: Rect,
    pub angle_degrees: f32,
}

/// Gameplay state of one outpost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutpostLogic {
    pub health: f32,
    pub secs_since_last_shot: f32,
    pub kind: OutpostKind,
}

/// Physical state of one outpost. Position is fixed after placement;
/// only the turret direction rotates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutpostPhysics {
    pub position: Vec2,
    /// Unit vector the turret currently faces.
    pub turret_direction: Vec2,
}

/// Derived draw state of one outpost.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OutpostSprite {
    pub base_atlas_source: Rect,
    /// Center-anchored base plate rectangle.
    pub base_destination: Rect,
    pub turret_atlas_source: Rect,
    /// Center-anchored turret rectangle.
    pub turret_destination: Rect,
    pub turret_angle_degrees: f32,
}

/// A transient visual record of one fired shot, decoupled from damage
/// application. `V` tags the firer's class so the presentation layer can
/// pick a style; the outpost pool carries `OutpostKind`, the tank pool
/// `TankClass`. Never read by gameplay logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotAnimation<V> {
    pub origin: Vec2,
    pub target: Vec2,
    /// Firing direction at the moment of the shot, for curve shaping.
    pub aim_direction: Vec2,
    pub remaining_secs: f32,
    pub visual: V,
}

/// Wave progression for one match.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveState {
    /// Current wave, starting at 0.
    pub wave_number: u32,
    /// Tanks already spawned in the current wave.
    pub spawned_in_wave: u32,
    /// Seconds until the next wave may begin; decremented every frame.
    pub countdown_secs: f32,
}

impl WaveState {
    /// Wave n contains 2^n tanks (saturating far beyond any playable wave).
    pub fn wave_size(&self) -> u32 {
        1u32.checked_shl(self.wave_number).unwrap_or(u32::MAX)
    }
}
