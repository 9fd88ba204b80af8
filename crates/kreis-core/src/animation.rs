//! Caller-owned memory of the last drawn indicator, used to glide it to each new position.

use crate::geometry::{IndicatorPose, Point};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::time::{Duration, Instant};

pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(1000);

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Shortest signed turn from `from` to `to`, in `(-PI, PI]`.
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    let wrapped = (to - from).rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: IndicatorPose,
    delta: f64,
    target: IndicatorPose,
    started: Instant,
    duration: Duration,
}

impl Transition {
    fn progress(&self, at: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        at.saturating_duration_since(self.started).as_secs_f64() / self.duration.as_secs_f64()
    }

    fn sample(&self, at: Instant, center: Point) -> IndicatorPose {
        let t = self.progress(at);
        if t >= 1.0 {
            return self.target;
        }
        let eased = ease_out(t);
        let angle = self.from.angle + self.delta * eased;
        let radius = self.from.radius + (self.target.radius - self.from.radius) * eased;
        IndicatorPose {
            angle,
            position: Point::on_circle(center, radius, angle),
            radius,
            rotation: angle + FRAC_PI_2,
        }
    }
}

/// Moves the indicator along the ring (not across it) between successive poses.
#[derive(Debug, Clone)]
pub struct IndicatorAnimator {
    duration: Duration,
    center: Point,
    current: Option<IndicatorPose>,
    transition: Option<Transition>,
}

impl IndicatorAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            center: Point::default(),
            current: None,
            transition: None,
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Starts gliding from wherever the indicator is at `at` towards `target`.
    ///
    /// The first target, and any change of ring centre (a resize), snaps without animation.
    pub fn retarget(&mut self, target: IndicatorPose, center: Point, at: Instant) {
        let resized = center != self.center;
        self.center = center;

        let shown = match self.current {
            Some(_) if !resized => self.pose_at(at),
            _ => None,
        };

        self.current = Some(target);
        self.transition = shown
            .filter(|from| from.position != target.position || from.radius != target.radius)
            .map(|from| Transition {
                from,
                delta: shortest_delta(from.angle, target.angle),
                target,
                started: at,
                duration: self.duration,
            });
    }

    pub fn pose_at(&self, at: Instant) -> Option<IndicatorPose> {
        match &self.transition {
            Some(tr) => Some(tr.sample(at, self.center)),
            None => self.current,
        }
    }

    pub fn is_animating(&self, at: Instant) -> bool {
        self.transition.is_some_and(|tr| tr.progress(at) < 1.0)
    }
}

impl Default for IndicatorAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RadialLayoutEngine;
    use crate::time::{Ratio, TimeMapper, TimeOfDay};

    const EPS: f64 = 1e-9;

    fn pose(h: u8, m: u8) -> IndicatorPose {
        let ratio = TimeMapper::to_ratio(TimeOfDay::new(h, m).unwrap()).unwrap();
        RadialLayoutEngine::default().compute_indicator_pose(ratio, Point::default(), 100.0)
    }

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_shortest_delta() {
        assert!((shortest_delta(0.0, 0.5) - 0.5).abs() < EPS);
        assert!((shortest_delta(0.5, 0.0) + 0.5).abs() < EPS);
        assert!((shortest_delta(3.0 * PI / 2.0 - 0.01, -PI / 2.0) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_first_target_snaps() {
        let mut animator = IndicatorAnimator::default();
        let now = Instant::now();
        animator.retarget(pose(9, 0), Point::default(), now);
        assert!(!animator.is_animating(now));
        assert_eq!(animator.pose_at(now), Some(pose(9, 0)));
    }

    #[test]
    fn test_glides_then_lands() {
        let mut animator = IndicatorAnimator::default();
        let now = Instant::now();
        animator.retarget(pose(9, 0), Point::default(), now);
        animator.retarget(pose(12, 0), Point::default(), now);

        assert!(animator.is_animating(now));
        let start = animator.pose_at(now).unwrap();
        assert!((start.angle - pose(9, 0).angle).abs() < EPS);

        let mid = animator.pose_at(now + Duration::from_millis(500)).unwrap();
        assert!(mid.angle > pose(9, 0).angle && mid.angle < pose(12, 0).angle);
        // stays on the ring
        assert!((mid.position.distance_to(Point::default()) - 100.0).abs() < 1e-6);

        let end = now + Duration::from_millis(1000);
        assert!(!animator.is_animating(end));
        assert_eq!(animator.pose_at(end), Some(pose(12, 0)));
    }

    #[test]
    fn test_crosses_midnight_forward() {
        let mut animator = IndicatorAnimator::default();
        let now = Instant::now();
        animator.retarget(pose(23, 59), Point::default(), now);
        animator.retarget(pose(0, 0), Point::default(), now);

        let mid = animator.pose_at(now + Duration::from_millis(500)).unwrap();
        let before = pose(23, 59).angle;
        // moved forward by less than a minute's worth, never backwards around the dial
        assert!(mid.angle > before);
        assert!(mid.angle - before < TAU / 1440.0 + EPS);
    }

    #[test]
    fn test_resize_snaps() {
        let mut animator = IndicatorAnimator::default();
        let now = Instant::now();
        animator.retarget(pose(9, 0), Point::default(), now);
        let moved = RadialLayoutEngine::default().compute_indicator_pose(
            Ratio::new(0.5).unwrap(),
            Point::new(10.0, 10.0),
            50.0,
        );
        animator.retarget(moved, Point::new(10.0, 10.0), now);
        assert!(!animator.is_animating(now));
        assert_eq!(animator.pose_at(now), Some(moved));
    }
}
