//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Tank hull class. Each class has its own stat-table row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TankClass {
    /// Baseline hull (green sprite).
    #[default]
    Single,
    /// Heavy hull, more health (blue sprite).
    Double,
    /// Light hull, fast to kill but hits the same (red sprite).
    Pierce,
}

impl TankClass {
    pub const ALL: [TankClass; 3] = [TankClass::Single, TankClass::Double, TankClass::Pierce];
}

/// Stationary defense variant placed by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutpostKind {
    /// Fast-cycling low-damage turret.
    #[default]
    Simple,
    /// Slow, heavier shells.
    Double,
    /// Slowest cooldown, highest damage, fastest turret slew.
    Pierce,
}

impl OutpostKind {
    pub const ALL: [OutpostKind; 3] =
        [OutpostKind::Simple, OutpostKind::Double, OutpostKind::Pierce];
}

/// Top-level match phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Constructed but not started.
    #[default]
    Pending,
    Active,
    Paused,
    /// Terminal; `MatchResult` says why.
    Complete,
}

/// Terminal signal of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    #[default]
    Ongoing,
    /// A tank reached the final waypoint.
    ObjectiveReached,
    /// Every scheduled wave spawned and the field is clear
    /// (only reachable with a bounded wave schedule).
    AllUnitsDefeated,
}

/// Why a placement command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementRejection {
    /// Candidate footprint intrudes into the path corridor.
    BlocksPathCorridor,
    /// Candidate footprint overlaps an existing outpost.
    OverlapsOutpost,
    /// The outpost store is full.
    CapacityExhausted,
}
