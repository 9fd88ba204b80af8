use crate::task::TaskId;
use strum::Display as StrumDisplay;
use thiserror::Error;

/// Broad classification of a [`GeometryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    DegenerateGeometry,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("hour {0} is out of range (expected 0..=23)")]
    HourOutOfRange(u8),
    #[error("minute {0} is out of range (expected 0..=59)")]
    MinuteOutOfRange(u8),
    #[error("ratio {0} is outside [0, 1)")]
    RatioOutOfRange(f64),
    #[error("angle {0} is not finite")]
    NonFiniteAngle(f64),
    #[error("task title is blank")]
    BlankTitle,
    #[error("task {id} is malformed: {source}")]
    InvalidTask {
        id: TaskId,
        #[source]
        source: Box<GeometryError>,
    },
    #[error("render target is degenerate (radius {radius}, stroke width {stroke_width})")]
    DegenerateGeometry { radius: f64, stroke_width: f64 },
}

impl GeometryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DegenerateGeometry { .. } => ErrorKind::DegenerateGeometry,
            _ => ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn for_task(id: TaskId, source: GeometryError) -> Self {
        Self::InvalidTask {
            id,
            source: Box::new(source),
        }
    }
}
