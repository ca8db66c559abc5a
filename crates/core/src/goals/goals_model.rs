//! Goals domain models.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::GOAL_TARGET_DAYS;
use crate::errors::{Result, ValidationError};

/// Lifecycle status of a goal.
///
/// The set is open: the store may hold statuses this crate does not know,
/// which are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Other(String),
}

impl GoalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for GoalStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => GoalStatus::Active,
            "completed" => GoalStatus::Completed,
            _ => GoalStatus::Other(value),
        }
    }
}

impl From<GoalStatus> for String {
    fn from(status: GoalStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Domain model representing a goal together with its tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: GoalStatus,
    pub target_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    /// Ordered oldest-created-first.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Goal {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }

    /// Fraction of completed tasks, 0 when the goal has no tasks.
    pub fn progress(&self) -> f64 {
        let total = self.task_count();
        if total == 0 {
            return 0.0;
        }
        self.completed_task_count() as f64 / total as f64
    }

    /// Progress as a percentage rounded to the nearest integer.
    pub fn progress_percent(&self) -> u8 {
        (self.progress() * 100.0).round() as u8
    }

    /// True once every task of a goal with at least one task is done.
    pub fn is_fully_completed(&self) -> bool {
        self.task_count() > 0 && self.completed_task_count() == self.task_count()
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}

/// Domain model representing a task of a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub goal_id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub due_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
}

impl NewGoal {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// Validates the input and builds the row to insert for `user_id`.
    ///
    /// The title is trimmed and must not be empty. A blank description is
    /// stored as `None`. The target date is `GOAL_TARGET_DAYS` after `now`.
    pub fn into_insert(self, user_id: &str, now: DateTime<Utc>) -> Result<GoalInsert> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(GoalInsert {
            user_id: user_id.to_string(),
            title: title.to_string(),
            description,
            target_date: default_target_date(now),
        })
    }
}

/// Row written to the store when a goal is created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalInsert {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_date: NaiveDate,
}

/// Computes the default target date of a goal created at `now`.
pub fn default_target_date(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::days(GOAL_TARGET_DAYS)).date_naive()
}

/// Fields written when a task's completion flag changes.
///
/// `completed_at` is set exactly when `is_completed` is true.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompletionUpdate {
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskCompletionUpdate {
    /// Builds the update that inverts `current`.
    pub fn toggled_from(current: bool, now: DateTime<Utc>) -> Self {
        let is_completed = !current;
        Self {
            is_completed,
            completed_at: is_completed.then_some(now),
        }
    }
}

/// Request sent to the task-generation service after a goal is created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskGenerationRequest {
    pub goal_id: String,
    pub goal_title: String,
}

/// Cached goal list of the current user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalsSnapshot {
    pub user_id: Option<String>,
    pub goals: Vec<Goal>,
    /// Set when the last re-read failed and `goals` may lag behind the store.
    pub is_stale: bool,
}

impl GoalsSnapshot {
    pub fn for_user(user_id: Option<String>) -> Self {
        Self {
            user_id,
            goals: Vec::new(),
            is_stale: false,
        }
    }

    pub fn find_task(&self, goal_id: &str, task_id: &str) -> Option<&Task> {
        self.goals
            .iter()
            .find(|g| g.id == goal_id)
            .and_then(|g| g.find_task(task_id))
    }
}
