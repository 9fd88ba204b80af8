use crate::error::GeometryError;
use crate::time::{MINUTES_PER_CYCLE, TimeOfDay};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;
use uuid::Uuid;

/// Fixed set of task categories, in the order the add-task form offers them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
    AsRefStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    #[strum(serialize = "work", serialize = "w")]
    Work,
    #[strum(serialize = "personal", serialize = "p")]
    Personal,
    #[strum(serialize = "routine", serialize = "r")]
    Routine,
    #[strum(serialize = "sleep", serialize = "s")]
    Sleep,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// A scheduled block on the wheel.
///
/// `end` earlier than `start` means the block runs past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInterval {
    pub id: TaskId,
    pub title: String,
    pub category: Category,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TaskInterval {
    pub fn new(
        title: impl Into<String>,
        category: Category,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            category,
            start,
            end,
        }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.title.trim().is_empty() {
            return Err(GeometryError::for_task(self.id, GeometryError::BlankTitle));
        }
        self.start
            .validate()
            .and_then(|_| self.end.validate())
            .map_err(|e| GeometryError::for_task(self.id, e))
    }

    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    pub fn duration_minutes(&self) -> u32 {
        let (start, end) = (
            self.start.minutes_since_midnight(),
            self.end.minutes_since_midnight(),
        );
        (end + MINUTES_PER_CYCLE - start) % MINUTES_PER_CYCLE
    }
}

/// In-memory task store, kept sorted by start time.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<TaskInterval>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: TaskInterval) {
        // insert after any task with the same start so equal starts keep insertion order
        let idx = self.tasks.partition_point(|t| t.start <= task.start);
        log::debug!("Adding task '{}' at position {}", task.title, idx);
        self.tasks.insert(idx, task);
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskInterval> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn as_slice(&self) -> &[TaskInterval] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskInterval> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl FromIterator<TaskInterval> for TaskList {
    fn from_iter<I: IntoIterator<Item = TaskInterval>>(iter: I) -> Self {
        let mut list = Self::new();
        iter.into_iter().for_each(|t| list.add(t));
        list
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskInterval;
    type IntoIter = std::slice::Iter<'a, TaskInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("expected CATEGORY,START,END,TITLE, got `{0}`")]
    Format(String),
    #[error(transparent)]
    Time(#[from] crate::time::ParseTimeError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Contents of the add-task form before they are committed to the list.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub category: Category,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

pub const DEFAULT_TASK_MINUTES: i64 = 60;

impl TaskDraft {
    /// A blank work block starting at `now` and lasting an hour.
    pub fn starting_at(now: TimeOfDay) -> Self {
        Self {
            title: String::new(),
            category: Category::default(),
            start: now,
            end: now.add_minutes(DEFAULT_TASK_MINUTES),
        }
    }

    pub fn into_task(self) -> Result<TaskInterval, TaskError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        self.start.validate()?;
        self.end.validate()?;
        Ok(TaskInterval::new(title, self.category, self.start, self.end))
    }
}

/// Parses `CATEGORY,START,END,TITLE`, e.g. `work,09:00,12:30,Deep work`.
impl FromStr for TaskDraft {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(4, ',');
        let (Some(category), Some(start), Some(end), Some(title)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TaskError::Format(s.to_string()));
        };

        Ok(Self {
            title: title.trim().to_string(),
            category: category
                .trim()
                .parse()
                .map_err(|_| TaskError::UnknownCategory(category.trim().to_string()))?,
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}
