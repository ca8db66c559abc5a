//! Shared in-memory fakes for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::{mpsc, Notify};

use lifeguide_core::auth::{AuthProviderTrait, AuthSession, AuthUser, SignInRequest, SignUpRequest};
use lifeguide_core::errors::{AuthError, DataAccessError, Error, Result};
use lifeguide_core::events::{DomainEvent, TaskGenerationOutcome};
use lifeguide_core::goals::{
    Goal, GoalInsert, GoalRepositoryTrait, GoalStatus, Task, TaskCompletionUpdate,
    TaskGenerationRequest, TaskGeneratorTrait,
};
use lifeguide_core::quiz::{NewQuizResult, QuizResultRepositoryTrait};

pub const USER_ID: &str = "user-rina";
pub const OTHER_USER_ID: &str = "user-budi";

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, hour, minute, 0).unwrap()
}

#[derive(Default)]
struct StoreState {
    goals: Vec<Goal>,
    tasks: Vec<Task>,
    next_id: usize,
    reads: usize,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

/// Goal store backed by vectors. Reads come back in insertion order so the
/// service has to apply the ordering itself.
#[derive(Default)]
pub struct InMemoryGoalRepository {
    state: Mutex<StoreState>,
}

impl InMemoryGoalRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed_goal(&self, id: &str, user_id: &str, title: &str, created_at: DateTime<Utc>) {
        self.state.lock().unwrap().goals.push(Goal {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            description: None,
            status: GoalStatus::Active,
            target_date: created_at.date_naive(),
            created_at,
            tasks: Vec::new(),
        });
    }

    pub fn seed_task(&self, id: &str, goal_id: &str, created_at: DateTime<Utc>) {
        self.state.lock().unwrap().tasks.push(Task {
            id: id.to_string(),
            goal_id: goal_id.to_string(),
            title: format!("Langkah {}", id),
            description: None,
            is_completed: false,
            due_date: None,
            completed_at: None,
            created_at,
        });
    }

    pub fn task(&self, id: &str) -> Option<Task> {
        self.state
            .lock()
            .unwrap()
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Number of goal-list reads served so far.
    pub fn reads(&self) -> usize {
        self.state.lock().unwrap().reads
    }

    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }

    fn unreachable() -> Error {
        DataAccessError::Unreachable("store offline".to_string()).into()
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryGoalRepository {
    async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(Self::unreachable());
        }
        state.reads += 1;
        Ok(state
            .goals
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_tasks(&self, goal_id: &str) -> Result<Vec<Task>> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(Self::unreachable());
        }
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.goal_id == goal_id)
            .cloned()
            .collect())
    }

    async fn insert_goal(&self, goal: GoalInsert) -> Result<Goal> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(Self::unreachable());
        }
        state.writes += 1;
        state.next_id += 1;
        let stored = Goal {
            id: format!("goal-{}", state.next_id),
            user_id: goal.user_id,
            title: goal.title,
            description: goal.description,
            status: GoalStatus::Active,
            target_date: goal.target_date,
            created_at: Utc::now(),
            tasks: Vec::new(),
        };
        state.goals.push(stored.clone());
        Ok(stored)
    }

    async fn update_task_completion(
        &self,
        task_id: &str,
        update: TaskCompletionUpdate,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(Self::unreachable());
        }
        state.writes += 1;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| DataAccessError::NotFound(task_id.to_string()))?;
        task.is_completed = update.is_completed;
        task.completed_at = update.completed_at;
        Ok(())
    }
}

/// Task generator that writes three tasks into the store once its gate
/// opens, or fails.
pub struct FakeTaskGenerator {
    repository: Arc<InMemoryGoalRepository>,
    gate: Arc<Notify>,
    fail: bool,
    requests: Mutex<Vec<TaskGenerationRequest>>,
    reads_at_request: Mutex<Vec<usize>>,
}

impl FakeTaskGenerator {
    pub fn new(repository: Arc<InMemoryGoalRepository>) -> Arc<Self> {
        Arc::new(Self {
            repository,
            gate: Arc::new(Notify::new()),
            fail: false,
            requests: Mutex::new(Vec::new()),
            reads_at_request: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(repository: Arc<InMemoryGoalRepository>) -> Arc<Self> {
        Arc::new(Self {
            repository,
            gate: Arc::new(Notify::new()),
            fail: true,
            requests: Mutex::new(Vec::new()),
            reads_at_request: Mutex::new(Vec::new()),
        })
    }

    /// Lets one pending (or the next) generation run.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn requests(&self) -> Vec<TaskGenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Goal-list reads the store had served when each generation started.
    pub fn reads_at_request(&self) -> Vec<usize> {
        self.reads_at_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskGeneratorTrait for FakeTaskGenerator {
    async fn generate_tasks(&self, request: TaskGenerationRequest) -> Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        self.reads_at_request
            .lock()
            .unwrap()
            .push(self.repository.reads());
        self.gate.notified().await;
        if self.fail {
            return Err(Error::ServiceDegraded("generator returned 500".to_string()));
        }
        let now = Utc::now();
        for i in 0..3 {
            self.repository.seed_task(
                &format!("{}-task-{}", request.goal_id, i),
                &request.goal_id,
                now + chrono::Duration::seconds(i),
            );
        }
        Ok(())
    }
}

/// Waits for the task-generation completion event, skipping other events.
pub async fn next_generation_outcome(
    rx: &mut mpsc::UnboundedReceiver<DomainEvent>,
) -> (String, TaskGenerationOutcome) {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match rx.recv().await {
                Some(DomainEvent::TaskGenerationFinished { goal_id, outcome }) => {
                    return (goal_id, outcome)
                }
                Some(_) => continue,
                None => panic!("event channel closed"),
            }
        }
    })
    .await
    .expect("task generation did not finish")
}

/// Auth provider with a fixed token table.
#[derive(Default)]
pub struct FakeAuthProvider {
    users: HashMap<String, AuthUser>,
}

impl FakeAuthProvider {
    pub fn with_user(token: &str, user_id: &str) -> Arc<Self> {
        let mut users = HashMap::new();
        users.insert(
            token.to_string(),
            AuthUser {
                id: user_id.to_string(),
                email: Some(format!("{}@sekolah.id", user_id)),
                full_name: None,
            },
        );
        Arc::new(Self { users })
    }
}

#[async_trait]
impl AuthProviderTrait for FakeAuthProvider {
    async fn sign_in(&self, _request: SignInRequest) -> Result<AuthSession> {
        Err(AuthError::InvalidCredential("not supported".to_string()).into())
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthUser> {
        request.validate()?;
        Err(AuthError::InvalidCredential("not supported".to_string()).into())
    }

    async fn sign_out(&self, _access_token: &str) -> Result<()> {
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        self.users
            .get(access_token)
            .cloned()
            .ok_or_else(|| AuthError::InvalidCredential("invalid JWT".to_string()).into())
    }
}

/// Quiz result store keeping rows in memory.
#[derive(Default)]
pub struct InMemoryQuizResultRepository {
    rows: Mutex<Vec<NewQuizResult>>,
    fail: bool,
}

impl InMemoryQuizResultRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn rows(&self) -> Vec<NewQuizResult> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizResultRepositoryTrait for InMemoryQuizResultRepository {
    async fn insert_result(&self, result: NewQuizResult) -> Result<()> {
        if self.fail {
            return Err(DataAccessError::RequestFailed {
                status: 500,
                message: "insert failed".to_string(),
            }
            .into());
        }
        self.rows.lock().unwrap().push(result);
        Ok(())
    }
}
