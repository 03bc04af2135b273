//! Enum-keyed stat tables for tanks and outposts.
//!
//! Every per-class constant lives here, indexed by the class enum, so
//! adding or auditing a class touches one row instead of scattered
//! branches at each use site.

use crate::enums::{OutpostKind, TankClass};
use crate::types::Rect;

/// Combat and presentation constants for one tank class.
#[derive(Debug, Clone, Copy)]
pub struct TankStats {
    /// Health a freshly spawned tank starts with.
    pub max_health: f32,
    /// Range within which the tank returns fire (units).
    pub fire_range: f32,
    /// Seconds between shots.
    pub fire_cooldown_secs: f32,
    /// Damage per shot applied to an outpost.
    pub fire_damage: f32,
    /// Lifetime of the shot animation this class produces.
    pub shot_visual_secs: f32,
    /// Hull sprite location in the texture atlas.
    pub atlas_source: Rect,
}

const TANK_STATS: [TankStats; 3] = [
    // Single (green hull)
    TankStats {
        max_health: 100.0,
        fire_range: 200.0,
        fire_cooldown_secs: 0.75,
        fire_damage: 15.0,
        shot_visual_secs: 0.3,
        atlas_source: Rect::new(0.0, 0.0, 63.0, 83.0),
    },
    // Double (blue hull)
    TankStats {
        max_health: 140.0,
        fire_range: 200.0,
        fire_cooldown_secs: 0.75,
        fire_damage: 15.0,
        shot_visual_secs: 0.4,
        atlas_source: Rect::new(0.0, 100.0, 62.0, 67.0),
    },
    // Pierce (red hull)
    TankStats {
        max_health: 80.0,
        fire_range: 200.0,
        fire_cooldown_secs: 0.75,
        fire_damage: 15.0,
        shot_visual_secs: 0.5,
        atlas_source: Rect::new(0.0, 182.0, 59.0, 68.0),
    },
];

impl TankClass {
    pub const fn stats(self) -> &'static TankStats {
        &TANK_STATS[self as usize]
    }
}

/// Combat and presentation constants for one outpost kind.
#[derive(Debug, Clone, Copy)]
pub struct OutpostStats {
    /// Health an outpost is placed with (uniform across kinds).
    pub max_health: f32,
    /// Target acquisition range (units).
    pub range: f32,
    /// Seconds between shots.
    pub fire_cooldown_secs: f32,
    /// Damage per shot applied to a tank.
    pub fire_damage: f32,
    /// Fraction of the angular difference the turret closes per update,
    /// not per second: slew speed scales with the caller's frame rate.
    pub turret_track_rate: f32,
    /// Lifetime of the shot animation this kind produces.
    pub shot_visual_secs: f32,
    /// Turret sprite location in the texture atlas.
    pub turret_atlas_source: Rect,
}

const OUTPOST_STATS: [OutpostStats; 3] = [
    // Simple
    OutpostStats {
        max_health: 100.0,
        range: 300.0,
        fire_cooldown_secs: 0.5,
        fire_damage: 10.0,
        turret_track_rate: 0.05,
        shot_visual_secs: 0.25,
        turret_atlas_source: Rect::new(0.0, 280.0, 30.0, 11.0),
    },
    // Double
    OutpostStats {
        max_health: 100.0,
        range: 300.0,
        fire_cooldown_secs: 1.5,
        fire_damage: 15.0,
        turret_track_rate: 0.025,
        shot_visual_secs: 0.4,
        turret_atlas_source: Rect::new(30.0, 280.0, 30.0, 11.0),
    },
    // Pierce — highest damage and the fastest turret slew.
    OutpostStats {
        max_health: 100.0,
        range: 300.0,
        fire_cooldown_secs: 1.5,
        fire_damage: 20.0,
        turret_track_rate: 0.1,
        shot_visual_secs: 0.6,
        turret_atlas_source: Rect::new(60.0, 280.0, 30.0, 11.0),
    },
];

impl OutpostKind {
    pub const fn stats(self) -> &'static OutpostStats {
        &OUTPOST_STATS[self as usize]
    }
}
