//! Turns the current time and a task snapshot into everything the wheel draws.

use crate::error::GeometryError;
use crate::geometry::{ArcSegment, IndicatorPose, Point, TaskArc, Tick, WheelDimensions};
use crate::task::{TaskId, TaskInterval};
use crate::time::{REFERENCE_OFFSET, Ratio, TimeMapper, TimeOfDay};
use std::f64::consts::{FRAC_PI_2, TAU};

pub const DEFAULT_TICK_COUNT: usize = 24;
pub const DEFAULT_MAJOR_TICK_EVERY: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub tick_count: usize,
    pub major_tick_every: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            major_tick_every: DEFAULT_MAJOR_TICK_EVERY,
        }
    }
}

/// One frame's worth of wheel geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub ratio: Ratio,
    pub progress: ArcSegment,
    pub ticks: Vec<Tick>,
    pub tasks: Vec<TaskArc>,
    pub indicator: IndicatorPose,
    pub dimensions: WheelDimensions,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RadialLayoutEngine {
    options: LayoutOptions,
}

impl RadialLayoutEngine {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    pub fn compute_progress_arc(&self, ratio: Ratio) -> ArcSegment {
        ArcSegment::clockwise(REFERENCE_OFFSET, TimeMapper::to_angle(ratio), None)
    }

    pub fn compute_ticks(count: usize, major_every: usize) -> Vec<Tick> {
        let step = if count == 0 { 0.0 } else { TAU / count as f64 };
        (0..count)
            .map(|index| Tick {
                index,
                angle: REFERENCE_OFFSET + index as f64 * step,
                is_major: major_every != 0 && index % major_every == 0,
            })
            .collect()
    }

    pub fn ticks(&self) -> Vec<Tick> {
        Self::compute_ticks(self.options.tick_count, self.options.major_tick_every)
    }

    /// Arc for a single task. A block whose end is not after its start on the dial either
    /// crosses midnight (end moves to the next turn) or has no length at all.
    pub fn compute_task_arc(&self, task: &TaskInterval) -> Result<TaskArc, GeometryError> {
        task.validate()?;
        let start = TimeMapper::to_ratio(task.start)
            .map_err(|e| GeometryError::for_task(task.id, e))?;
        let end =
            TimeMapper::to_ratio(task.end).map_err(|e| GeometryError::for_task(task.id, e))?;

        let start_angle = TimeMapper::to_angle(start);
        let mut end_angle = TimeMapper::to_angle(end);
        if end < start {
            end_angle += TAU;
        }

        Ok(TaskArc {
            id: task.id,
            segment: ArcSegment::clockwise(start_angle, end_angle, Some(task.category)),
        })
    }

    /// Arcs for every well-formed task, in input order. Malformed tasks are logged and left out.
    pub fn compute_task_arcs(&self, tasks: &[TaskInterval]) -> Vec<TaskArc> {
        tasks
            .iter()
            .filter_map(|task| match self.compute_task_arc(task) {
                Ok(arc) => Some(arc),
                Err(e) => {
                    log::warn!("Skipping task '{}': {}", task.title, e);
                    None
                }
            })
            .collect()
    }

    pub fn compute_indicator_pose(&self, ratio: Ratio, center: Point, radius: f64) -> IndicatorPose {
        let angle = TimeMapper::to_angle(ratio);
        IndicatorPose {
            angle,
            position: Point::on_circle(center, radius, angle),
            radius,
            rotation: angle + FRAC_PI_2,
        }
    }

    pub fn layout(
        &self,
        now: TimeOfDay,
        tasks: &[TaskInterval],
        dimensions: WheelDimensions,
    ) -> Result<WheelLayout, GeometryError> {
        let ratio = TimeMapper::to_ratio(now)?;

        if let Err(e) = dimensions.check() {
            log::debug!("Empty layout: {}", e);
            return Ok(WheelLayout {
                ratio,
                progress: self.compute_progress_arc(Ratio::ZERO),
                ticks: Vec::new(),
                tasks: Vec::new(),
                indicator: self.compute_indicator_pose(ratio, dimensions.center, 0.0),
                dimensions,
            });
        }

        Ok(WheelLayout {
            ratio,
            progress: self.compute_progress_arc(ratio),
            ticks: self.ticks(),
            tasks: self.compute_task_arcs(tasks),
            indicator: self.compute_indicator_pose(ratio, dimensions.center, dimensions.radius),
            dimensions,
        })
    }

    /// Task under `point`, if the point is on the ring. Later arcs are drawn on top, so they
    /// win where blocks overlap.
    pub fn hit_test(layout: &WheelLayout, point: Point) -> Option<TaskId> {
        if layout.dimensions.is_degenerate() || !layout.dimensions.band_contains(point) {
            return None;
        }
        let angle = point.angle_from(layout.dimensions.center);
        layout
            .tasks
            .iter()
            .rev()
            .find(|arc| arc.contains_angle(angle))
            .map(|arc| arc.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Category;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn t(h: u8, m: u8) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    fn dims() -> WheelDimensions {
        WheelDimensions::new(Point::new(150.0, 150.0), 138.0, 24.0)
    }

    #[test]
    fn test_tick_layout() {
        let ticks = RadialLayoutEngine::compute_ticks(24, 6);
        assert_eq!(ticks.len(), 24);
        let majors: Vec<_> = ticks.iter().filter(|t| t.is_major).map(|t| t.index).collect();
        assert_eq!(majors, vec![0, 6, 12, 18]);
        assert!((ticks[0].angle + PI / 2.0).abs() < EPS);
        for pair in ticks.windows(2) {
            assert!((pair[1].angle - pair[0].angle - TAU / 24.0).abs() < EPS);
        }
    }

    #[test]
    fn test_tick_edge_cases() {
        assert!(RadialLayoutEngine::compute_ticks(0, 6).is_empty());
        assert!(
            RadialLayoutEngine::compute_ticks(12, 0)
                .iter()
                .all(|t| !t.is_major)
        );
    }

    #[test]
    fn test_indicator_pose() {
        let engine = RadialLayoutEngine::default();
        let pose = engine.compute_indicator_pose(Ratio::new(0.25).unwrap(), Point::default(), 10.0);
        assert!(pose.angle.abs() < EPS);
        assert!((pose.position.x - 10.0).abs() < EPS);
        assert!(pose.position.y.abs() < EPS);
        assert!((pose.rotation - PI / 2.0).abs() < EPS);

        let midnight = engine.compute_indicator_pose(Ratio::ZERO, Point::default(), 10.0);
        assert!((midnight.position.y + 10.0).abs() < EPS);
        assert!(midnight.rotation.abs() < EPS);
    }

    #[test]
    fn test_layout_rejects_bad_now() {
        let engine = RadialLayoutEngine::default();
        let err = engine
            .layout(TimeOfDay { hour: 24, minute: 0 }, &[], dims())
            .unwrap_err();
        assert_eq!(err, GeometryError::HourOutOfRange(24));
    }

    #[test]
    fn test_layout_degenerate_dimensions_is_empty() {
        let engine = RadialLayoutEngine::default();
        let tasks = vec![TaskInterval::new("Work", Category::Work, t(9, 0), t(17, 0))];
        let flat = WheelDimensions::new(Point::new(5.0, 5.0), 0.0, 24.0);
        let layout = engine.layout(t(12, 0), &tasks, flat).unwrap();
        assert!(layout.ticks.is_empty());
        assert!(layout.tasks.is_empty());
        assert!(layout.progress.is_degenerate());
        assert_eq!(layout.indicator.position, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_layout_full_frame() {
        let engine = RadialLayoutEngine::default();
        let tasks = vec![
            TaskInterval::new("Work", Category::Work, t(9, 0), t(17, 0)),
            TaskInterval::new("Sleep", Category::Sleep, t(23, 0), t(7, 0)),
        ];
        let layout = engine.layout(t(12, 0), &tasks, dims()).unwrap();
        assert_eq!(layout.ticks.len(), 24);
        assert_eq!(layout.tasks.len(), 2);
        assert!((layout.progress.sweep() - PI).abs() < EPS);
        assert!((layout.indicator.position.y - (150.0 + 138.0)).abs() < EPS);
    }

    #[test]
    fn test_hit_test() {
        let engine = RadialLayoutEngine::default();
        let work = TaskInterval::new("Work", Category::Work, t(9, 0), t(17, 0));
        let lunch = TaskInterval::new("Lunch", Category::Personal, t(12, 0), t(13, 0));
        let sleep = TaskInterval::new("Sleep", Category::Sleep, t(23, 0), t(7, 0));
        let tasks = vec![work.clone(), lunch.clone(), sleep.clone()];
        let layout = engine.layout(t(8, 0), &tasks, dims()).unwrap();
        let d = layout.dimensions;

        let at = |time: TimeOfDay, r: f64| {
            Point::on_circle(d.center, r, TimeMapper::time_to_angle(time).unwrap())
        };

        assert_eq!(RadialLayoutEngine::hit_test(&layout, at(t(10, 0), d.radius)), Some(work.id));
        // lunch is drawn after work, so it sits on top
        assert_eq!(
            RadialLayoutEngine::hit_test(&layout, at(t(12, 30), d.radius)),
            Some(lunch.id)
        );
        assert_eq!(RadialLayoutEngine::hit_test(&layout, at(t(0, 0), d.radius)), Some(sleep.id));
        assert_eq!(RadialLayoutEngine::hit_test(&layout, at(t(20, 0), d.radius)), None);
        assert_eq!(RadialLayoutEngine::hit_test(&layout, at(t(10, 0), 40.0)), None);
    }
}
