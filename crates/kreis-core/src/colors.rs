//! Bauhaus palette used across the wheel and the add-task form.

use crate::task::Category;
use palette::Srgba;

pub const BACKGROUND: Srgba<f64> = Srgba::new(0.96, 0.96, 0.94, 1.0);
pub const INK: Srgba<f64> = Srgba::new(0.10, 0.10, 0.10, 1.0);
pub const RED: Srgba<f64> = Srgba::new(0.82, 0.17, 0.17, 1.0);
pub const BLUE: Srgba<f64> = Srgba::new(0.17, 0.42, 0.82, 1.0);
pub const YELLOW: Srgba<f64> = Srgba::new(0.91, 0.66, 0.14, 1.0);

pub const TRACK: Srgba<f64> = with_alpha(INK, 0.1);
pub const PROGRESS: Srgba<f64> = BLUE;
pub const MINOR_TICK: Srgba<f64> = with_alpha(INK, 0.5);

const fn with_alpha(color: Srgba<f64>, alpha: f64) -> Srgba<f64> {
    Srgba::new(color.color.red, color.color.green, color.color.blue, alpha)
}

impl Category {
    pub fn color(&self) -> Srgba<f64> {
        match self {
            Self::Work => BLUE,
            Self::Personal => RED,
            Self::Routine => YELLOW,
            Self::Sleep => with_alpha(INK, 0.3),
        }
    }
}

/// Fades `color` to `factor` of its alpha, used for blocks that are not selected.
pub fn faded(color: Srgba<f64>, factor: f64) -> Srgba<f64> {
    with_alpha(color, color.alpha * factor.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_category_has_distinct_color() {
        let colors: Vec<_> = Category::iter().map(|c| c.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Category::Sleep.color().alpha, 0.3);
    }

    #[test]
    fn test_faded() {
        let c = faded(BLUE, 0.4);
        assert_eq!(c.alpha, 0.4);
        assert_eq!(c.color, BLUE.color);
        assert_eq!(faded(BLUE, 3.0).alpha, 1.0);
    }
}
