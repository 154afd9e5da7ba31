use std::f64::consts::TAU;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: Vec2) -> f64 {
        (*self - other).length()
    }

    /// Unit vector at `angle` radians.
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// A vertex of the node graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Vec2,
    /// Pixels per frame. Only its sign changes over the node's life.
    pub velocity: Vec2,
    pub radius: f64,
    /// Pulse phase in radians.
    pub phase: f64,
}

/// Upward-drifting circular particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub speed: f64,
    pub radius: f64,
    pub alpha: f64,
}

/// Upward-drifting rectangular spark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spark {
    pub position: Vec2,
    pub speed: f64,
    pub width: f64,
    pub height: f64,
    pub alpha: f64,
}

/// A light wedge sweeping from above the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub angle: f64,
    /// Half-width of the wedge in radians.
    pub spread: f64,
    /// Radians per frame.
    pub speed: f64,
    pub alpha: f64,
}

/// A dashed orbit with one satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub radius: f64,
    pub rotation: f64,
    pub speed: f64,
    pub dash: f64,
}

/// Static organic blob, an irregular ellipse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Silhouette {
    pub center: Vec2,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Radial scale per outline vertex.
    pub lobes: Vec<f64>,
}

impl Silhouette {
    pub fn outline(&self) -> Vec<Vec2> {
        let count = self.lobes.len();
        self.lobes
            .iter()
            .enumerate()
            .map(|(i, scale)| {
                let angle = TAU * i as f64 / count as f64;
                self.center
                    + Vec2::new(
                        angle.cos() * self.radius_x * scale,
                        angle.sin() * self.radius_y * scale,
                    )
            })
            .collect()
    }
}

/// Pixels per heartbeat on the faux ECG trace.
pub const ECG_PERIOD: f64 = 220.0;

/// Horizontally scrolling faux electrocardiogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcgTrace {
    pub offset: f64,
    pub speed: f64,
    pub baseline: f64,
    pub amplitude: f64,
}

impl EcgTrace {
    /// Vertical position of the trace at screen column `x`.
    pub fn sample(&self, x: f64) -> f64 {
        let t = (x + self.offset).rem_euclid(ECG_PERIOD) / ECG_PERIOD;
        self.baseline - self.amplitude * heartbeat(t)
    }
}

/// One PQRST complex over `t` in `[0, 1)`, peak 1.0 at the R wave.
fn heartbeat(t: f64) -> f64 {
    fn bump(t: f64, center: f64, width: f64, height: f64) -> f64 {
        let d = (t - center) / width;
        if d.abs() >= 1.0 {
            0.0
        } else {
            height * (1.0 - d * d)
        }
    }

    bump(t, 0.15, 0.05, 0.12) // P
        + bump(t, 0.30, 0.015, -0.15) // Q
        + bump(t, 0.33, 0.02, 1.0) // R
        + bump(t, 0.36, 0.015, -0.25) // S
        + bump(t, 0.55, 0.07, 0.2) // T
}

/// Vertical double helix with connecting rungs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Helix {
    pub center_x: f64,
    pub amplitude: f64,
    /// Vertical pixels per full turn.
    pub wavelength: f64,
    pub phase: f64,
    pub speed: f64,
    pub rung_spacing: f64,
}

/// One rung of the helix ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub left: Vec2,
    pub right: Vec2,
    /// `-1.0..=1.0`; positive when the left strand is in front.
    pub depth: f64,
}

impl Helix {
    pub fn strand_x(&self, y: f64, strand: f64) -> f64 {
        let angle = self.phase + y / self.wavelength * TAU;
        self.center_x + strand * self.amplitude * angle.sin()
    }

    pub fn rungs(&self, height: f64) -> Vec<Rung> {
        let count = (height / self.rung_spacing).ceil() as usize + 1;
        (0..count)
            .map(|i| {
                let y = i as f64 * self.rung_spacing;
                let angle = self.phase + y / self.wavelength * TAU;
                Rung {
                    left: Vec2::new(self.strand_x(y, 1.0), y),
                    right: Vec2::new(self.strand_x(y, -1.0), y),
                    depth: angle.cos(),
                }
            })
            .collect()
    }
}
