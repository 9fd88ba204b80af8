use kreis_core::animation::IndicatorAnimator;
use kreis_core::config::Config;
use kreis_core::geometry::{IndicatorPose, Point, WheelDimensions};
use kreis_core::layout::{RadialLayoutEngine, WheelLayout};
use kreis_core::selection::Selection;
use kreis_core::task::{TaskId, TaskInterval, TaskList};
use kreis_core::time::TimeOfDay;
use std::time::Instant;

/// Everything the wheel widget remembers between frames.
///
/// Geometry is recomputed from scratch whenever an input changes; only the previous indicator
/// pose (inside the animator) and the tapped task survive across recomputations.
pub struct WheelState {
    pub config: Config,
    pub tasks: TaskList,
    pub now: TimeOfDay,
    pub selection: Selection,
    engine: RadialLayoutEngine,
    animator: IndicatorAnimator,
    layout: Option<WheelLayout>,
    dirty: bool,
}

impl WheelState {
    pub fn new(config: Config, tasks: TaskList) -> Self {
        Self {
            engine: RadialLayoutEngine::new(config.wheel.layout_options()),
            animator: IndicatorAnimator::new(config.wheel.animation()),
            config,
            tasks,
            now: TimeOfDay::now(),
            selection: Selection::default(),
            layout: None,
            dirty: true,
        }
    }

    pub fn set_config(&mut self, config: Config) {
        self.engine = RadialLayoutEngine::new(config.wheel.layout_options());
        self.animator.set_duration(config.wheel.animation());
        self.config = config;
        self.dirty = true;
    }

    /// Clock heartbeat. Returns true when something visible changed.
    pub fn tick(&mut self, now: TimeOfDay, at: Instant) -> bool {
        let expired = self.selection.tick(at);
        if now != self.now {
            self.now = now;
            self.dirty = true;
        }
        expired || self.dirty
    }

    pub fn add_task(&mut self, task: TaskInterval) {
        log::info!(
            "Added {} block '{}' {}-{}",
            task.category,
            task.title,
            task.start,
            task.end
        );
        self.tasks.add(task);
        self.dirty = true;
    }

    /// Brings the layout up to date for a `width` x `height` surface.
    pub fn relayout(&mut self, width: f64, height: f64, at: Instant) -> Option<&WheelLayout> {
        let dims = WheelDimensions::fit(width, height, self.config.wheel.line_width);
        let stale = self.dirty || self.layout.as_ref().is_none_or(|l| l.dimensions != dims);

        if stale {
            match self.engine.layout(self.now, self.tasks.as_slice(), dims) {
                Ok(layout) => {
                    let moved = self
                        .layout
                        .as_ref()
                        .is_none_or(|old| old.indicator != layout.indicator);
                    if moved {
                        self.animator.retarget(layout.indicator, dims.center, at);
                    }
                    self.layout = Some(layout);
                }
                Err(e) => log::error!("Layout failed for {}: {}", self.now, e),
            }
            self.dirty = false;
        }

        self.layout.as_ref()
    }

    pub fn layout(&self) -> Option<&WheelLayout> {
        self.layout.as_ref()
    }

    pub fn indicator(&self, at: Instant) -> Option<IndicatorPose> {
        self.animator
            .pose_at(at)
            .or_else(|| self.layout.as_ref().map(|l| l.indicator))
    }

    pub fn is_animating(&self, at: Instant) -> bool {
        self.animator.is_animating(at)
    }

    /// Taps on a block show it in the middle; taps elsewhere go back to the clock.
    pub fn click(&mut self, point: Point, at: Instant) -> Option<TaskId> {
        let hit = self
            .layout
            .as_ref()
            .and_then(|l| RadialLayoutEngine::hit_test(l, point));

        match hit {
            Some(id) => self.selection.show(id, at, self.config.selection.hold()),
            None => self.selection.clear(),
        }
        hit
    }

    pub fn selected_task(&self, at: Instant) -> Option<&TaskInterval> {
        self.selection
            .showing(at)
            .and_then(|id| self.tasks.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kreis_core::task::Category;
    use kreis_core::time::TimeMapper;
    use std::time::Duration;

    fn t(h: u8, m: u8) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    fn state_at(now: TimeOfDay) -> WheelState {
        let mut state = WheelState::new(Config::default(), TaskList::new());
        state.now = now;
        state
    }

    #[test]
    fn test_minute_change_marks_dirty() {
        let at = Instant::now();
        let mut state = state_at(t(9, 0));
        state.relayout(300.0, 300.0, at);
        assert!(!state.tick(t(9, 0), at));
        assert!(state.tick(t(9, 1), at));
        let ratio = state.relayout(300.0, 300.0, at).map(|l| l.ratio);
        assert_eq!(ratio, TimeMapper::to_ratio(t(9, 1)).ok());
    }

    #[test]
    fn test_indicator_glides_after_minute_change() {
        let at = Instant::now();
        let mut state = state_at(t(9, 0));
        state.relayout(300.0, 300.0, at);
        assert!(!state.is_animating(at));

        state.tick(t(9, 30), at);
        state.relayout(300.0, 300.0, at);
        assert!(state.is_animating(at));
        assert!(!state.is_animating(at + Duration::from_secs(2)));
    }

    #[test]
    fn test_click_selects_and_expires() {
        let at = Instant::now();
        let mut state = state_at(t(8, 0));
        let task = TaskInterval::new("Deep work", Category::Work, t(9, 0), t(12, 0));
        let id = task.id;
        state.add_task(task);
        let layout = state.relayout(300.0, 300.0, at).cloned().unwrap();

        let d = layout.dimensions;
        let angle = TimeMapper::time_to_angle(t(10, 0)).unwrap();
        let on_block = Point::on_circle(d.center, d.radius, angle);

        assert_eq!(state.click(on_block, at), Some(id));
        assert_eq!(state.selected_task(at).map(|t| t.id), Some(id));
        assert!(state.tick(state.now, at + Duration::from_secs(3)));
        assert!(state.selected_task(at + Duration::from_secs(3)).is_none());

        state.click(on_block, at);
        assert_eq!(state.click(d.center, at), None);
        assert!(state.selected_task(at).is_none());
    }
}
