use clap::{Parser, Subcommand};
use kreis_core::config;
use kreis_core::geometry::{Point, WheelDimensions};
use kreis_core::layout::{RadialLayoutEngine, WheelLayout};
use kreis_core::task::{TaskDraft, TaskList};
use kreis_core::time::{TimeMapper, TimeOfDay};

#[derive(Parser, Debug)]
#[command(name = "kreis-layout", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print the day fraction and wheel angle of a time
    Ratio {
        /// Time as HH:MM
        time: TimeOfDay,
    },
    /// Print the full wheel geometry for a time and a set of tasks
    Layout {
        /// Current time as HH:MM (defaults to the local clock)
        #[arg(short, long)]
        now: Option<TimeOfDay>,

        /// A task as CATEGORY,START,END,TITLE (repeatable)
        #[arg(short, long = "task")]
        tasks: Vec<String>,

        /// Ring radius in pixels
        #[arg(short, long, default_value_t = 138.0)]
        radius: f64,

        /// Stroke width in pixels (defaults to the configured line width)
        #[arg(short, long)]
        stroke: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ratio { time } => {
            let ratio = TimeMapper::to_ratio(time)?;
            let angle = TimeMapper::to_angle(ratio);
            println!(
                "{time}  ratio {:.6}  angle {:.4} rad ({:.2} deg)",
                ratio.value(),
                angle,
                angle.to_degrees()
            );
            Ok(())
        }
        Commands::Layout {
            now,
            tasks,
            radius,
            stroke,
        } => {
            let cfg = config::load_or_default();
            let stroke = stroke.unwrap_or(cfg.wheel.line_width);
            let engine = RadialLayoutEngine::new(cfg.wheel.layout_options());
            let list = parse_tasks(&tasks);
            let dims = WheelDimensions::new(Point::new(radius, radius), radius, stroke);
            let layout = engine.layout(now.unwrap_or_else(TimeOfDay::now), list.as_slice(), dims)?;
            print_layout(&layout, &list);
            Ok(())
        }
    }
}

fn parse_tasks(raw: &[String]) -> TaskList {
    raw.iter()
        .filter_map(|s| {
            s.parse::<TaskDraft>()
                .and_then(TaskDraft::into_task)
                .inspect_err(|e| eprintln!("skipping task `{s}`: {e}"))
                .ok()
        })
        .collect()
}

fn print_layout(layout: &WheelLayout, tasks: &TaskList) {
    let now = TimeMapper::ratio_to_time(layout.ratio);
    println!("now {now}  ratio {:.6}", layout.ratio.value());
    println!(
        "progress  {:>8.4} -> {:>8.4}  sweep {:.4}",
        layout.progress.start_angle,
        layout.progress.end_angle,
        layout.progress.sweep()
    );
    println!(
        "indicator ({:.2}, {:.2})  rotation {:.4}",
        layout.indicator.position.x, layout.indicator.position.y, layout.indicator.rotation
    );

    for tick in &layout.ticks {
        println!(
            "tick {:>2}{} {:>8.4}",
            tick.index,
            if tick.is_major { "*" } else { " " },
            tick.angle
        );
    }

    for arc in &layout.tasks {
        let Some(task) = tasks.get(arc.id) else {
            continue;
        };
        println!(
            "task {}-{} {:<8} {:>8.4} -> {:>8.4}  sweep {:.4}  {}",
            task.start,
            task.end,
            task.category,
            arc.start_angle,
            arc.end_angle,
            arc.sweep(),
            task.title
        );
    }
}
