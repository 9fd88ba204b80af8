use crate::error::GeometryError;
use crate::task::{Category, TaskId};
use derive_more::{AsRef, Deref};
use std::f64::consts::TAU;

/// Sweeps shorter than this are treated as zero-length.
pub const DEGENERATE_SWEEP: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn on_circle(center: Point, radius: f64, angle: f64) -> Self {
        Self::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn angle_from(&self, center: Point) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }
}

/// A drawable stroke along the wheel.
///
/// `end_angle` never precedes `start_angle`. A block crossing midnight ends on the next turn
/// (past `3 * PI / 2`) instead of at a smaller angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
    pub category: Option<Category>,
}

impl ArcSegment {
    pub fn clockwise(start_angle: f64, end_angle: f64, category: Option<Category>) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise: true,
            category,
        }
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn is_degenerate(&self) -> bool {
        self.sweep().abs() < DEGENERATE_SWEEP
    }

    /// Whether `angle` (any turn) falls within the swept range.
    pub fn contains_angle(&self, angle: f64) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let offset = (angle - self.start_angle).rem_euclid(TAU);
        offset <= self.sweep()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deref, AsRef)]
pub struct TaskArc {
    pub id: TaskId,
    #[deref]
    #[as_ref]
    pub segment: ArcSegment,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: usize,
    pub angle: f64,
    pub is_major: bool,
}

/// Placement of the current-time marker on the ring.
///
/// `rotation` turns the marker so its long axis points away from the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPose {
    pub angle: f64,
    pub position: Point,
    pub radius: f64,
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDimensions {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
}

impl WheelDimensions {
    pub fn new(center: Point, radius: f64, stroke_width: f64) -> Self {
        Self {
            center,
            radius,
            stroke_width,
        }
    }

    /// Largest ring that fits a `width` x `height` surface with the stroke inside it.
    pub fn fit(width: f64, height: f64, stroke_width: f64) -> Self {
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius: (width.min(height) - stroke_width) / 2.0,
            stroke_width,
        }
    }

    pub fn check(&self) -> Result<(), GeometryError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(self.radius) && usable(self.stroke_width) {
            Ok(())
        } else {
            Err(GeometryError::DegenerateGeometry {
                radius: self.radius,
                stroke_width: self.stroke_width,
            })
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.check().is_err()
    }

    /// Whether `point` lies on the stroked band of the ring.
    pub fn band_contains(&self, point: Point) -> bool {
        let half = self.stroke_width / 2.0;
        let dist = point.distance_to(self.center);
        dist >= self.radius - half && dist <= self.radius + half
    }
}
