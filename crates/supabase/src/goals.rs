use async_trait::async_trait;
use log::debug;
use reqwest::Method;

use lifeguide_core::errors::{DataAccessError, Result};
use lifeguide_core::goals::{
    Goal, GoalInsert, GoalRepositoryTrait, Task, TaskCompletionUpdate,
};

use crate::client::{RouteKind, SupabaseClient};
use crate::models::{GoalInsertRow, GoalRow, TaskCompletionRow, TaskRow};

/// Goal store on the `goals` and `tasks` tables.
#[derive(Debug, Clone)]
pub struct SupabaseGoalRepository {
    client: SupabaseClient,
}

impl SupabaseGoalRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GoalRepositoryTrait for SupabaseGoalRepository {
    async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let filter = format!("eq.{}", user_id);
        let url = self.client.rest_url(
            "goals",
            &[("user_id", filter.as_str()), ("order", "created_at.desc")],
        );
        let rows: Vec<GoalRow> = self.client.get(&url, RouteKind::Rest, None).await?;
        Ok(rows.into_iter().map(Goal::from).collect())
    }

    async fn list_tasks(&self, goal_id: &str) -> Result<Vec<Task>> {
        let filter = format!("eq.{}", goal_id);
        let url = self.client.rest_url(
            "tasks",
            &[("goal_id", filter.as_str()), ("order", "created_at.asc")],
        );
        let rows: Vec<TaskRow> = self.client.get(&url, RouteKind::Rest, None).await?;
        debug!("[Supabase] {} tasks for goal {}", rows.len(), goal_id);
        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn insert_goal(&self, goal: GoalInsert) -> Result<Goal> {
        let url = self.client.rest_url("goals", &[]);
        let rows: Vec<GoalRow> = self
            .client
            .post(&url, RouteKind::Rest, &GoalInsertRow::from(goal), None)
            .await?;
        rows.into_iter().next().map(Goal::from).ok_or_else(|| {
            DataAccessError::InvalidResponse("insert returned no row".to_string()).into()
        })
    }

    async fn update_task_completion(
        &self,
        task_id: &str,
        update: TaskCompletionUpdate,
    ) -> Result<()> {
        let filter = format!("eq.{}", task_id);
        let url = self.client.rest_url("tasks", &[("id", filter.as_str())]);
        self.client
            .send(
                Method::PATCH,
                &url,
                RouteKind::Rest,
                Some(&TaskCompletionRow::from(update)),
                None,
            )
            .await
    }
}
