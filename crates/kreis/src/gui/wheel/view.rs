use super::state::WheelState;
use super::{
    CAPTION_FONT_SIZE, CLOCK_FONT_SIZE, FONT_FACE, SHADOW_ALPHA, SHADOW_OFFSET, TASK_FONT_SIZE,
    UNSELECTED_FADE,
};
use crate::gui::theme::{ThemeColors, set_source};
use cairo::Context;
use kreis_core::colors::faded;
use kreis_core::config::WheelConfig;
use kreis_core::geometry::{ArcSegment, IndicatorPose, Point, Tick, WheelDimensions};
use kreis_core::task::TaskInterval;
use palette::Srgba;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::time::Instant;

struct RingPainter<'a> {
    cr: &'a Context,
    dims: WheelDimensions,
    cfg: &'a WheelConfig,
}

impl<'a> RingPainter<'a> {
    fn new(cr: &'a Context, dims: WheelDimensions, cfg: &'a WheelConfig) -> Self {
        Self { cr, dims, cfg }
    }

    fn track(&self, color: Srgba<f64>) -> Result<(), cairo::Error> {
        self.stroke_arc(0.0, TAU, color)
    }

    /// Zero-length arcs are skipped rather than drawn as a dot.
    fn arc(&self, segment: &ArcSegment, color: Srgba<f64>) -> Result<(), cairo::Error> {
        if segment.is_degenerate() {
            return Ok(());
        }
        self.stroke_arc(segment.start_angle, segment.end_angle, color)
    }

    fn stroke_arc(&self, start: f64, end: f64, color: Srgba<f64>) -> Result<(), cairo::Error> {
        set_source(self.cr, color);
        self.cr.set_line_width(self.dims.stroke_width);
        self.cr.set_line_cap(cairo::LineCap::Butt);
        self.cr.new_sub_path();
        // cairo sweeps towards increasing angles, which is clockwise on a y-down surface
        self.cr.arc(
            self.dims.center.x,
            self.dims.center.y,
            self.dims.radius,
            start,
            end,
        );
        self.cr.stroke()
    }

    fn tick(&self, tick: &Tick, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (length, color) = if tick.is_major {
            (self.cfg.major_tick_length, colors.ink)
        } else {
            (self.cfg.minor_tick_length, colors.minor_tick)
        };
        let at = Point::on_circle(
            self.dims.center,
            self.dims.radius - self.cfg.tick_inset,
            tick.angle,
        );
        self.bar(at, tick.angle + FRAC_PI_2, self.cfg.tick_width, length, color)
    }

    fn indicator(&self, pose: &IndicatorPose, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (w, len) = (self.cfg.indicator_width, self.cfg.indicator_length);
        let shadow = Point::new(pose.position.x + SHADOW_OFFSET, pose.position.y + SHADOW_OFFSET);
        self.bar(shadow, pose.rotation, w, len, faded(colors.ink, SHADOW_ALPHA))?;
        self.bar(pose.position, pose.rotation, w, len, colors.ink)
    }

    /// A `width` x `length` bar centred on `at`, its length along `rotation`'s radial axis.
    fn bar(
        &self,
        at: Point,
        rotation: f64,
        width: f64,
        length: f64,
        color: Srgba<f64>,
    ) -> Result<(), cairo::Error> {
        self.cr.save()?;
        self.cr.translate(at.x, at.y);
        self.cr.rotate(rotation);
        set_source(self.cr, color);
        self.cr.rectangle(-width / 2.0, -length / 2.0, width, length);
        self.cr.fill()?;
        self.cr.restore()
    }
}

fn draw_centered_text(
    cr: &Context,
    center: Point,
    dy: f64,
    text: &str,
    size: f64,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    set_source(cr, color);
    cr.select_font_face(FONT_FACE, cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(size);
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(
            center.x - ext.width() / 2.0 - ext.x_bearing(),
            center.y + dy + ext.height() / 2.0,
        );
        cr.show_text(text)?;
    }
    Ok(())
}

fn draw_center(
    cr: &Context,
    center: Point,
    state: &WheelState,
    selected: Option<&TaskInterval>,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    match selected {
        Some(task) => {
            draw_centered_text(cr, center, -10.0, &task.title, TASK_FONT_SIZE, colors.ink)?;
            let span = format!("{} - {}", task.start, task.end);
            draw_centered_text(
                cr,
                center,
                14.0,
                &span,
                CAPTION_FONT_SIZE,
                task.category.color(),
            )
        }
        None => draw_centered_text(
            cr,
            center,
            0.0,
            &state.now.to_string(),
            CLOCK_FONT_SIZE,
            colors.ink,
        ),
    }
}

pub fn draw(
    cr: &Context,
    state: &WheelState,
    colors: &ThemeColors,
    at: Instant,
) -> Result<(), cairo::Error> {
    set_source(cr, colors.background);
    cr.paint()?;

    let Some(layout) = state.layout() else {
        return Ok(());
    };
    if layout.dimensions.is_degenerate() {
        return Ok(());
    }

    let painter = RingPainter::new(cr, layout.dimensions, &state.config.wheel);
    let selected = state.selected_task(at);

    painter.track(colors.track)?;
    // progress goes under the blocks
    painter.arc(&layout.progress, colors.progress)?;

    for arc in &layout.tasks {
        let base = arc.category.map(|c| c.color()).unwrap_or(colors.progress);
        let color = match selected {
            Some(task) if task.id != arc.id => faded(base, UNSELECTED_FADE),
            _ => base,
        };
        painter.arc(arc, color)?;
    }

    for tick in &layout.ticks {
        painter.tick(tick, colors)?;
    }

    if let Some(pose) = state.indicator(at) {
        painter.indicator(&pose, colors)?;
    }

    draw_center(cr, layout.dimensions.center, state, selected, colors)
}
