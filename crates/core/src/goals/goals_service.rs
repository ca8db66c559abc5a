use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use futures::future::try_join_all;
use log::{debug, info, warn};

use super::goals_model::{
    Goal, GoalsSnapshot, NewGoal, TaskCompletionUpdate, TaskGenerationRequest,
};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait, TaskGeneratorTrait};
use crate::errors::{AuthError, Result};
use crate::events::{DomainEvent, DomainEventSink, TaskGenerationOutcome};

/// Reads every goal of `user_id` and attaches its tasks.
///
/// Goals come back newest-created-first and tasks oldest-created-first, even
/// if the store ignored the requested order.
async fn fetch_goals_with_tasks(
    repository: &dyn GoalRepositoryTrait,
    user_id: &str,
) -> Result<Vec<Goal>> {
    let mut goals = repository.list_goals(user_id).await?;
    let task_lists = try_join_all(goals.iter().map(|g| repository.list_tasks(&g.id))).await?;

    for (goal, mut tasks) in goals.iter_mut().zip(task_lists) {
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        goal.tasks = tasks;
    }
    goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(goals)
}

/// State shared between the service and the task-generation jobs it spawns.
#[derive(Clone)]
struct SnapshotSync {
    repository: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    snapshot: Arc<RwLock<GoalsSnapshot>>,
}

impl SnapshotSync {
    fn read(&self) -> RwLockReadGuard<'_, GoalsSnapshot> {
        self.snapshot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GoalsSnapshot> {
        self.snapshot.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Scopes the snapshot to `user_id`, dropping it on user change.
    fn scope_to(&self, user_id: Option<&str>) {
        let mut snapshot = self.write();
        if snapshot.user_id.as_deref() != user_id {
            debug!("Goal snapshot invalidated for user change");
            *snapshot = GoalsSnapshot::for_user(user_id.map(str::to_string));
        }
    }

    /// Replaces the snapshot with a full re-read of the store.
    ///
    /// On failure the previous goals stay in place and are flagged stale.
    /// A response for a user that is no longer current is discarded.
    async fn reload(&self, user_id: &str) -> Result<Vec<Goal>> {
        match fetch_goals_with_tasks(self.repository.as_ref(), user_id).await {
            Ok(goals) => {
                {
                    let mut snapshot = self.write();
                    if snapshot.user_id.as_deref() == Some(user_id) {
                        snapshot.goals = goals.clone();
                        snapshot.is_stale = false;
                    } else {
                        debug!("Discarding goal list fetched for a previous user");
                    }
                }
                info!("Fetched {} goals", goals.len());
                self.event_sink
                    .emit(DomainEvent::goals_refreshed(user_id, goals.len()));
                Ok(goals)
            }
            Err(e) => {
                let mut snapshot = self.write();
                if snapshot.user_id.as_deref() == Some(user_id) {
                    snapshot.is_stale = true;
                }
                Err(e)
            }
        }
    }

    /// Re-reads after a successful write. The write already succeeded, so a
    /// failed read only leaves the snapshot stale.
    async fn reload_after_write(&self, user_id: &str) {
        if let Err(e) = self.reload(user_id).await {
            warn!("Failed to re-read goals after write: {}", e);
        }
    }
}

/// Goal/task synchronizer.
///
/// Owns the in-memory goal snapshot of the current user. Every mutation is
/// followed by a full re-read of goals and tasks instead of patching the cache.
pub struct GoalService {
    sync: SnapshotSync,
    task_generator: Arc<dyn TaskGeneratorTrait>,
}

impl GoalService {
    pub fn new(
        repository: Arc<dyn GoalRepositoryTrait>,
        task_generator: Arc<dyn TaskGeneratorTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            sync: SnapshotSync {
                repository,
                event_sink,
                snapshot: Arc::new(RwLock::new(GoalsSnapshot::default())),
            },
            task_generator,
        }
    }

    /// Launches the task-generation job for a freshly created goal.
    ///
    /// The job re-reads the snapshot once the service reports success and
    /// always ends with a `TaskGenerationFinished` event.
    fn submit_task_generation(&self, user_id: &str, goal: &Goal) {
        let request = TaskGenerationRequest {
            goal_id: goal.id.clone(),
            goal_title: goal.title.clone(),
        };
        let sync = self.sync.clone();

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(
                "No async runtime available, task generation for goal {} skipped",
                request.goal_id
            );
            sync.event_sink.emit(DomainEvent::task_generation_finished(
                request.goal_id,
                TaskGenerationOutcome::Failed {
                    reason: "no async runtime".to_string(),
                },
            ));
            return;
        };

        let generator = self.task_generator.clone();
        let user_id = user_id.to_string();
        runtime.spawn(async move {
            let goal_id = request.goal_id.clone();
            let outcome = match generator.generate_tasks(request).await {
                Ok(()) => {
                    debug!("Task generation finished for goal {}", goal_id);
                    TaskGenerationOutcome::Completed
                }
                Err(e) => {
                    warn!("Error generating tasks for goal {}: {}", goal_id, e);
                    TaskGenerationOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            if outcome.is_completed() {
                sync.reload_after_write(&user_id).await;
            }
            sync.event_sink
                .emit(DomainEvent::task_generation_finished(goal_id, outcome));
        });
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.sync.scope_to(Some(user_id));
        self.sync.reload(user_id).await
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let insert = new_goal.into_insert(user_id, Utc::now())?;
        self.sync.scope_to(Some(user_id));

        let goal = self.sync.repository.insert_goal(insert).await?;
        info!("Created goal {}", goal.id);
        self.sync
            .event_sink
            .emit(DomainEvent::goal_created(user_id, goal.id.clone()));

        // Re-read before the job starts so this read can never land after the
        // job's own re-read.
        self.sync.reload_after_write(user_id).await;
        self.submit_task_generation(user_id, &goal);
        Ok(goal)
    }

    async fn toggle_task(&self, task_id: &str, goal_id: &str) -> Result<()> {
        let (user_id, current) = {
            let snapshot = self.sync.read();
            match snapshot.find_task(goal_id, task_id) {
                Some(task) => (snapshot.user_id.clone(), task.is_completed),
                None => {
                    debug!(
                        "Task {} of goal {} not in snapshot, toggle ignored",
                        task_id, goal_id
                    );
                    return Ok(());
                }
            }
        };

        let update = TaskCompletionUpdate::toggled_from(current, Utc::now());
        let is_completed = update.is_completed;
        self.sync
            .repository
            .update_task_completion(task_id, update)
            .await?;
        self.sync
            .event_sink
            .emit(DomainEvent::task_toggled(goal_id, task_id, is_completed));

        if let Some(user_id) = user_id {
            self.sync.reload_after_write(&user_id).await;
        }
        Ok(())
    }

    async fn refresh(&self) -> Result<Vec<Goal>> {
        let user_id = self
            .sync
            .read()
            .user_id
            .clone()
            .ok_or(AuthError::NotAuthenticated)?;
        self.sync.reload(&user_id).await
    }

    fn snapshot(&self) -> GoalsSnapshot {
        self.sync.read().clone()
    }

    fn switch_user(&self, user_id: Option<&str>) {
        self.sync.scope_to(user_id);
    }
}
