use kreis_core::error::ErrorKind;
use kreis_core::geometry::{Point, WheelDimensions};
use kreis_core::layout::RadialLayoutEngine;
use kreis_core::task::{Category, TaskInterval};
use kreis_core::time::{Ratio, TimeMapper, TimeOfDay};
use std::f64::consts::{PI, TAU};

const EPS: f64 = 1e-9;

fn t(h: u8, m: u8) -> TimeOfDay {
    TimeOfDay::new(h, m).unwrap()
}

fn task(category: Category, start: TimeOfDay, end: TimeOfDay) -> TaskInterval {
    TaskInterval::new(category.to_string(), category, start, end)
}

#[test]
fn test_ratio_is_monotonic_over_the_day() {
    let mut prev = -1.0;
    for hour in 0..24 {
        for minute in 0..60 {
            let r = TimeMapper::to_ratio(t(hour, minute)).unwrap().value();
            assert!((0.0..1.0).contains(&r));
            assert!(r >= prev, "{hour:02}:{minute:02} went backwards");
            prev = r;
        }
    }
    assert_eq!(TimeMapper::to_ratio(t(0, 0)).unwrap().value(), 0.0);
    assert!((TimeMapper::to_ratio(t(23, 59)).unwrap().value() - 1439.0 / 1440.0).abs() < EPS);
}

#[test]
fn test_angle_round_trip() {
    for i in 0..10_000 {
        let r = Ratio::new(i as f64 / 10_000.0).unwrap();
        let back = TimeMapper::angle_to_ratio(TimeMapper::to_angle(r)).unwrap();
        assert!((back.value() - r.value()).abs() < 1e-6, "{r} -> {back}");
    }
    let near_end = Ratio::new(0.999_999_9).unwrap();
    let back = TimeMapper::angle_to_ratio(TimeMapper::to_angle(near_end)).unwrap();
    assert!((back.value() - near_end.value()).abs() < 1e-6);
}

#[test]
fn test_hour_ticks() {
    let ticks = RadialLayoutEngine::compute_ticks(24, 6);
    assert_eq!(ticks.len(), 24);
    assert_eq!(ticks.iter().filter(|t| t.is_major).count(), 4);
    for idx in [0, 6, 12, 18] {
        assert!(ticks[idx].is_major);
    }
    for pair in ticks.windows(2) {
        assert!((pair[1].angle - pair[0].angle - TAU / 24.0).abs() < EPS);
    }
    assert_eq!(RadialLayoutEngine::default().ticks(), ticks);
}

#[test]
fn test_morning_block_sweep() {
    let engine = RadialLayoutEngine::default();
    let arc = engine
        .compute_task_arc(&task(Category::Work, t(9, 0), t(12, 30)))
        .unwrap();
    assert!(arc.clockwise);
    assert_eq!(arc.category, Some(Category::Work));
    assert!((arc.sweep() - 3.5 / 24.0 * TAU).abs() < EPS);
}

#[test]
fn test_zero_duration_block_is_not_a_full_circle() {
    let engine = RadialLayoutEngine::default();
    let arc = engine
        .compute_task_arc(&task(Category::Personal, t(10, 0), t(10, 0)))
        .unwrap();
    assert!(arc.is_degenerate());
    assert_eq!(arc.sweep(), 0.0);
}

#[test]
fn test_block_across_midnight_sweeps_forward() {
    let engine = RadialLayoutEngine::default();
    let arc = engine
        .compute_task_arc(&task(Category::Sleep, t(23, 0), t(0, 30)))
        .unwrap();
    assert!(arc.sweep() > 0.0);
    assert!((arc.sweep() - 1.5 / 24.0 * TAU).abs() < EPS);
    assert!(arc.end_angle > arc.start_angle);
}

#[test]
fn test_progress_arc() {
    let engine = RadialLayoutEngine::default();

    let empty = engine.compute_progress_arc(Ratio::ZERO);
    assert!(empty.is_degenerate());
    assert!((empty.start_angle + PI / 2.0).abs() < EPS);
    assert_eq!(empty.category, None);

    let half = engine.compute_progress_arc(Ratio::new(0.5).unwrap());
    assert!((half.sweep() - PI).abs() < EPS);
    assert!((half.end_angle - PI / 2.0).abs() < EPS);
}

#[test]
fn test_malformed_task_is_isolated() {
    let engine = RadialLayoutEngine::default();
    let good_before = task(Category::Routine, t(7, 0), t(8, 0));
    let mut bad = task(Category::Work, t(9, 0), t(10, 0));
    bad.start = TimeOfDay { hour: 25, minute: 0 };
    let good_after = task(Category::Personal, t(18, 0), t(19, 0));

    let arcs = engine.compute_task_arcs(&[good_before.clone(), bad.clone(), good_after.clone()]);
    let ids: Vec<_> = arcs.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![good_before.id, good_after.id]);
    assert!(engine.compute_task_arc(&bad).is_err());

    let layout = engine
        .layout(
            t(12, 0),
            &[bad, good_after.clone()],
            WheelDimensions::new(Point::new(100.0, 100.0), 80.0, 24.0),
        )
        .unwrap();
    assert_eq!(layout.tasks.len(), 1);
    assert_eq!(layout.tasks[0].id, good_after.id);
}

#[test]
fn test_untitled_task_is_skipped() {
    let engine = RadialLayoutEngine::default();
    let untitled = TaskInterval::new("", Category::Work, t(9, 0), t(10, 0));
    let titled = task(Category::Work, t(11, 0), t(12, 0));

    let arcs = engine.compute_task_arcs(&[untitled.clone(), titled.clone()]);
    assert_eq!(arcs.len(), 1);
    assert_eq!(arcs[0].id, titled.id);
    assert_eq!(
        engine.compute_task_arc(&untitled).map_err(|e| e.kind()),
        Err(ErrorKind::InvalidInput)
    );
}

#[test]
fn test_unsorted_input_is_tolerated() {
    let engine = RadialLayoutEngine::default();
    let late = task(Category::Sleep, t(22, 0), t(6, 0));
    let early = task(Category::Work, t(8, 0), t(9, 0));
    let arcs = engine.compute_task_arcs(&[late.clone(), early.clone()]);
    assert_eq!(arcs.len(), 2);
    assert_eq!(arcs[0].id, late.id);
    assert!((arcs[0].sweep() - 8.0 / 24.0 * TAU).abs() < EPS);
    assert!((arcs[1].sweep() - TAU / 24.0).abs() < EPS);
}
