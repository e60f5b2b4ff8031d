//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the play field (pixels, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in pixels per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

/// Rectangular play field. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed logical time in milliseconds.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Unit vector pointing toward `other`, or zero when the points coincide.
    pub fn direction_to(&self, other: &Position) -> DVec2 {
        (other.as_dvec2() - self.as_dvec2()).normalize_or_zero()
    }

    /// Whether `other` lies strictly inside `range` of this position.
    pub fn is_within(&self, other: &Position, range: f64) -> bool {
        self.distance_to(other) < range
    }

    /// Advance by one tick of `velocity`.
    pub fn advanced(&self, velocity: &Velocity) -> Position {
        Position::new(self.x + velocity.vx, self.y + velocity.vy)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Velocity {
    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Velocity of magnitude `speed` along `direction` (expected to be a unit vector).
    pub fn along(direction: DVec2, speed: f64) -> Self {
        Self::new(direction.x * speed, direction.y * speed)
    }

    /// Velocity of magnitude `speed` along a heading in degrees, where 0° points
    /// up the screen and angles grow clockwise.
    pub fn from_heading(angle_deg: f64, speed: f64) -> Self {
        let radians = (angle_deg - 90.0).to_radians();
        Self::new(radians.cos() * speed, radians.sin() * speed)
    }

    pub fn speed(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.vx == 0.0 && self.vy == 0.0
    }

    pub fn scaled(&self, factor: f64) -> Velocity {
        Velocity::new(self.vx * factor, self.vy * factor)
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a position lies inside the field (edges inclusive).
    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Toroidal wrap: leaving one edge re-enters at the opposite edge.
    pub fn wrap(&self, pos: Position) -> Position {
        let mut x = pos.x;
        let mut y = pos.y;
        if x < 0.0 {
            x = self.width;
        } else if x > self.width {
            x = 0.0;
        }
        if y < 0.0 {
            y = self.height;
        } else if y > self.height {
            y = 0.0;
        }
        Position::new(x, y)
    }

    /// Clamp a position to the field shrunk by `margin` on every side.
    pub fn clamp(&self, pos: Position, margin: f64) -> Position {
        Position::new(
            pos.x.clamp(margin, (self.width - margin).max(margin)),
            pos.y.clamp(margin, (self.height - margin).max(margin)),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(
            crate::constants::CANVAS_WIDTH,
            crate::constants::CANVAS_HEIGHT,
        )
    }
}

impl SimTime {
    /// Milliseconds per tick.
    pub fn dt(&self) -> f64 {
        crate::constants::TICK_MS
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += self.dt();
    }

    /// Current logical clock reading in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.elapsed_ms
    }
}
