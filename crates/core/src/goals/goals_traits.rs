//! Goal repository, task-generation and service traits.
//!
//! These traits define the contract for goal operations without any
//! transport-specific types, allowing different store implementations.

use async_trait::async_trait;

use super::goals_model::{
    Goal, GoalInsert, GoalsSnapshot, NewGoal, Task, TaskCompletionUpdate, TaskGenerationRequest,
};
use crate::errors::Result;

/// Trait defining the contract for the remote goal store.
///
/// Each method is a single filtered read or a single-row write.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Lists the goals owned by `user_id`, newest-created-first.
    ///
    /// Returned goals carry an empty task list.
    async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>>;

    /// Lists the tasks of a goal, oldest-created-first.
    async fn list_tasks(&self, goal_id: &str) -> Result<Vec<Task>>;

    /// Inserts a goal and returns the stored row.
    async fn insert_goal(&self, goal: GoalInsert) -> Result<Goal>;

    /// Writes the completion fields of a task.
    async fn update_task_completion(
        &self,
        task_id: &str,
        update: TaskCompletionUpdate,
    ) -> Result<()>;
}

/// Trait for the external service that materializes tasks for a new goal.
#[async_trait]
pub trait TaskGeneratorTrait: Send + Sync {
    /// Asks the service to create task rows for a goal.
    ///
    /// Only success or failure is observed; generated tasks are read back
    /// from the store.
    async fn generate_tasks(&self, request: TaskGenerationRequest) -> Result<()>;
}

/// Trait for goal synchronizer operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Re-reads all goals and tasks of `user_id` into the snapshot.
    async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>>;

    /// Creates a goal, submits task generation and re-reads the snapshot.
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;

    /// Inverts the completion flag of a task found in the snapshot.
    async fn toggle_task(&self, task_id: &str, goal_id: &str) -> Result<()>;

    /// Re-reads the snapshot for its current user.
    async fn refresh(&self) -> Result<Vec<Goal>>;

    /// Returns the cached snapshot.
    fn snapshot(&self) -> GoalsSnapshot;

    /// Drops the snapshot when the authenticated user changes.
    fn switch_user(&self, user_id: Option<&str>);
}
