pub mod state;
pub mod view;

pub use state::WheelState;
pub use view::draw;

pub const WHEEL_SIZE: i32 = 300;
pub const SHADOW_OFFSET: f64 = 2.0;
pub const SHADOW_ALPHA: f64 = 0.3;
pub const UNSELECTED_FADE: f64 = 0.35; // blocks other than the tapped one
pub const CLOCK_FONT_SIZE: f64 = 28.0;
pub const TASK_FONT_SIZE: f64 = 16.0;
pub const CAPTION_FONT_SIZE: f64 = 12.0;
pub const FONT_FACE: &str = "Futura";
