//! Geometry vectors and shape payloads
//!
//! Two point types, one per coordinate space: [`Vector2Mm`] for imported
//! millimeter data and [`Vector2Iu`] for the internal integer grid.
//! [`ShapeGeometry`] is the tagged payload of every graphical shape item.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point or displacement in millimeter space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2Mm {
    pub x: f64,
    pub y: f64,
}

impl Vector2Mm {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Vector2Mm) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Vector2Mm {
    type Output = Vector2Mm;

    fn add(self, rhs: Vector2Mm) -> Vector2Mm {
        Vector2Mm::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2Mm {
    type Output = Vector2Mm;

    fn sub(self, rhs: Vector2Mm) -> Vector2Mm {
        Vector2Mm::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2Mm {
    type Output = Vector2Mm;

    fn mul(self, factor: f64) -> Vector2Mm {
        Vector2Mm::new(self.x * factor, self.y * factor)
    }
}

/// A point on the internal integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector2Iu {
    pub x: i32,
    pub y: i32,
}

impl Vector2Iu {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Geometric payload of a shape item, in internal units.
///
/// Degenerate values (a zero-length segment, an empty vertex list) are
/// representable and valid; filtering them is a consumer concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeGeometry {
    /// Straight segment between two points.
    Segment { start: Vector2Iu, end: Vector2Iu },
    /// Full circle, optionally filled.
    Circle {
        center: Vector2Iu,
        radius: i32,
        filled: bool,
    },
    /// Circular arc from `start` around `center`, sweeping
    /// `sweep_degrees` counter-clockwise (negative sweeps clockwise).
    Arc {
        center: Vector2Iu,
        start: Vector2Iu,
        sweep_degrees: f64,
    },
    /// Closed polygon outline.
    Polygon { vertices: Vec<Vector2Iu> },
    /// Cubic Bezier span.
    Bezier {
        start: Vector2Iu,
        control1: Vector2Iu,
        control2: Vector2Iu,
        end: Vector2Iu,
    },
}

impl Default for ShapeGeometry {
    /// Zero-length segment at the origin, the state of a freshly
    /// allocated shape before geometry is assigned.
    fn default() -> Self {
        ShapeGeometry::Segment {
            start: Vector2Iu::default(),
            end: Vector2Iu::default(),
        }
    }
}
