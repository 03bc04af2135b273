//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Axis-aligned rectangle in world or atlas coordinates.
///
/// Atlas source rectangles and footprints treat `x`/`y` as the top-left
/// corner. Sprite destination rectangles store the entity center in
/// `x`/`y`; the renderer applies a half-extent origin when drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center` (top-left semantics).
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    /// Center point of a top-left-anchored rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Axis-aligned overlap test (top-left semantics, exclusive edges).
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Simulation time tracking.
///
/// Driven by the measured frame duration, not a fixed tick: the engine
/// accumulates whatever elapsed time the caller reports.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed frames.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one frame of the given duration.
    pub fn advance(&mut self, dt_secs: f32) {
        self.frame += 1;
        self.elapsed_secs += dt_secs;
    }
}

/// Distance from `point` to the segment `a`-`b`.
///
/// Projects the point onto the segment and clamps to the endpoints, so the
/// perpendicular-distance check and the endpoint-distance check collapse
/// into one expression. A zero-length segment degenerates to plain point
/// distance rather than dividing by zero.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Scale `v` to the given length, preserving direction.
/// The zero vector maps to zero.
pub fn normalize_to(v: Vec2, length: f32) -> Vec2 {
    v.normalize_or_zero() * length
}

/// The waypoint path tanks traverse, immutable for the duration of a match.
///
/// Steering looks two waypoints ahead, so a tank-bearing path needs at
/// least 3 points; `new` enforces that and rejects degenerate (zero-length)
/// segments up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<Vec2>,
}

impl Path {
    /// Minimum number of waypoints for steering to be well defined.
    pub const MIN_WAYPOINTS: usize = 3;

    pub fn new(waypoints: Vec<Vec2>) -> Result<Self, PathError> {
        if waypoints.len() < Self::MIN_WAYPOINTS {
            return Err(PathError::TooFewWaypoints(waypoints.len()));
        }
        for (index, pair) in waypoints.windows(2).enumerate() {
            if pair[0].distance_squared(pair[1]) <= f32::EPSILON {
                return Err(PathError::DegenerateSegment(index));
            }
        }
        Ok(Self { waypoints })
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoint(&self, index: usize) -> Vec2 {
        self.waypoints[index]
    }

    /// First waypoint — where tanks spawn.
    pub fn start(&self) -> Vec2 {
        self.waypoints[0]
    }

    /// Final waypoint — the objective.
    pub fn end(&self) -> Vec2 {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Consecutive waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.waypoints.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Distance from `point` to the nearest point on the polyline.
    pub fn distance_to_polyline(&self, point: Vec2) -> f32 {
        self.segments()
            .map(|(a, b)| distance_to_segment(point, a, b))
            .fold(f32::INFINITY, f32::min)
    }
}
