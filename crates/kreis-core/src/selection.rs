use crate::task::TaskId;
use std::time::{Duration, Instant};

pub const DEFAULT_HOLD: Duration = Duration::from_secs(3);

/// What the centre of the wheel shows: the clock, or a tapped task until it times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Clock,
    ShowingTask { id: TaskId, expires_at: Instant },
}

impl Selection {
    pub fn show(&mut self, id: TaskId, now: Instant, hold: Duration) {
        *self = Self::ShowingTask {
            id,
            expires_at: now + hold,
        };
    }

    pub fn clear(&mut self) {
        *self = Self::Clock;
    }

    /// Falls back to the clock once the hold has run out. Returns true if that happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        match *self {
            Self::ShowingTask { expires_at, .. } if now >= expires_at => {
                *self = Self::Clock;
                true
            }
            _ => false,
        }
    }

    pub fn showing(&self, now: Instant) -> Option<TaskId> {
        match *self {
            Self::ShowingTask { id, expires_at } if now < expires_at => Some(id),
            _ => None,
        }
    }
}
