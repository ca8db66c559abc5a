//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after mutations and background jobs.
///
/// Views subscribe to these through a [`super::DomainEventSink`] to learn when
/// the goal snapshot changed or when a task-generation job finished.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal row was inserted.
    GoalCreated { user_id: String, goal_id: String },

    /// A task completion flag was written.
    TaskToggled {
        goal_id: String,
        task_id: String,
        is_completed: bool,
    },

    /// The goal snapshot was re-read from the store.
    GoalsRefreshed { user_id: String, goal_count: usize },

    /// A task-generation job for a goal ended.
    TaskGenerationFinished {
        goal_id: String,
        outcome: TaskGenerationOutcome,
    },
}

/// Result of a task-generation job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskGenerationOutcome {
    Completed,
    Failed { reason: String },
}

impl TaskGenerationOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskGenerationOutcome::Completed)
    }
}

impl DomainEvent {
    /// Creates a GoalCreated event.
    pub fn goal_created(user_id: impl Into<String>, goal_id: impl Into<String>) -> Self {
        Self::GoalCreated {
            user_id: user_id.into(),
            goal_id: goal_id.into(),
        }
    }

    /// Creates a TaskToggled event.
    pub fn task_toggled(
        goal_id: impl Into<String>,
        task_id: impl Into<String>,
        is_completed: bool,
    ) -> Self {
        Self::TaskToggled {
            goal_id: goal_id.into(),
            task_id: task_id.into(),
            is_completed,
        }
    }

    /// Creates a GoalsRefreshed event.
    pub fn goals_refreshed(user_id: impl Into<String>, goal_count: usize) -> Self {
        Self::GoalsRefreshed {
            user_id: user_id.into(),
            goal_count,
        }
    }

    /// Creates a TaskGenerationFinished event.
    pub fn task_generation_finished(
        goal_id: impl Into<String>,
        outcome: TaskGenerationOutcome,
    ) -> Self {
        Self::TaskGenerationFinished {
            goal_id: goal_id.into(),
            outcome,
        }
    }
}
