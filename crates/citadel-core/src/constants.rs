//! Simulation constants and tuning parameters.
//!
//! Per-class combat numbers live in the stat tables (`stats.rs`); this
//! module holds everything that is uniform across classes.

use crate::types::Rect;

// --- Capacities ---

/// Maximum live tanks. Wave n holds 2^n tanks, so this caps out at wave 7.
pub const TANK_CAPACITY: usize = 128;

/// Maximum placed outposts.
pub const OUTPOST_CAPACITY: usize = 32;

/// Maximum in-flight shot animations per pool.
pub const SHOT_POOL_CAPACITY: usize = 256;

// --- Steering ---

/// Cruise speed every tank is clamped to while traversing the path (units/s).
pub const TANK_CRUISE_SPEED: f32 = 150.0;

/// Magnitude of the acceleration applied when turning onto the next leg
/// (units/s^2), independent of leg length.
pub const STEERING_STRENGTH: f32 = 400.0;

/// Distance to the upcoming waypoint at which the segment index advances.
pub const WAYPOINT_ADVANCE_RADIUS: f32 = 60.0;

/// Distance to the final waypoint at which a tank starts braking.
pub const OBJECTIVE_BRAKE_RADIUS: f32 = 60.0;

/// Distance to the final waypoint at which the objective counts as reached.
pub const OBJECTIVE_ARRIVAL_RADIUS: f32 = 40.0;

/// Braking acceleration as a multiple of current velocity.
pub const BRAKING_FACTOR: f32 = -5.0;

// --- Waves ---

/// Delay between the end of one wave's spawning and the start of the next (s).
pub const WAVE_DELAY_SECS: f32 = 15.0;

/// Base spawn spacing; the actual gate is `SPAWN_SPACING_BASE * (1 + U[0,1))`
/// units between the path start and the most recently spawned tank.
pub const SPAWN_SPACING_BASE: f32 = 200.0;

// --- Placement ---

/// Half-width of the path corridor outposts must stay clear of
/// (the path renders 150 units thick).
pub const PATH_CORRIDOR_HALF_WIDTH: f32 = 75.0;

/// Side length of an outpost's square footprint (base sprite 125x125).
pub const OUTPOST_FOOTPRINT: f32 = 125.0;

// --- Presentation ---

/// Sprites are drawn at twice their atlas size.
pub const SPRITE_SCALE: f32 = 2.0;

/// Seconds between tread animation frames.
pub const TREAD_FRAME_SECS: f32 = 0.05;

/// Atlas x-offset of the alternate tread frame (frame A sits at 0).
pub const TREAD_FRAME_X_OFFSET: f32 = 100.0;

/// Speed below which a tank counts as stationary and its treads freeze.
pub const TREAD_MIN_SPEED: f32 = 1.0;

/// Atlas source of the outpost base plate.
pub const OUTPOST_BASE_ATLAS: Rect = Rect::new(0.0, 250.0, 26.0, 26.0);

/// Turret sprite destination size (width, height).
pub const TURRET_DESTINATION_SIZE: (f32, f32) = (150.0, 60.0);

/// Hull sprites point up in the atlas; rotate so 0 degrees faces +x.
pub const TANK_SPRITE_ANGLE_OFFSET: f32 = -90.0;
