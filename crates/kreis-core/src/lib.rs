pub mod animation;
pub mod colors;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod selection;
pub mod task;
pub mod time;

pub use error::{ErrorKind, GeometryError};
pub use geometry::{ArcSegment, IndicatorPose, Point, TaskArc, Tick, WheelDimensions};
pub use layout::{LayoutOptions, RadialLayoutEngine, WheelLayout};
pub use task::{Category, TaskDraft, TaskId, TaskInterval, TaskList};
pub use time::{Ratio, TimeMapper, TimeOfDay};
