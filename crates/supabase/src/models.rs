//! Wire rows of the Supabase tables and auth responses.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use lifeguide_core::auth::{AuthSession, AuthUser};
use lifeguide_core::goals::{Goal, GoalInsert, GoalStatus, Task, TaskCompletionUpdate};
use lifeguide_core::quiz::NewQuizResult;

#[derive(Debug, Clone, Deserialize)]
pub struct GoalRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub target_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<GoalRow> for Goal {
    fn from(row: GoalRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            description: row.description,
            status: row.status.map(GoalStatus::from).unwrap_or_default(),
            target_date: row.target_date,
            created_at: row.created_at,
            tasks: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GoalInsertRow {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_date: NaiveDate,
    pub status: &'static str,
}

impl From<GoalInsert> for GoalInsertRow {
    fn from(goal: GoalInsert) -> Self {
        Self {
            user_id: goal.user_id,
            title: goal.title,
            description: goal.description,
            target_date: goal.target_date,
            status: "active",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskRow {
    pub id: String,
    pub goal_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            goal_id: row.goal_id,
            title: row.title,
            description: row.description,
            is_completed: row.is_completed,
            due_date: row.due_date,
            completed_at: row.completed_at,
            created_at: row.created_at,
        }
    }
}

/// Patch body of a task toggle. `completed_at` is sent as `null` when
/// un-completing.
#[derive(Debug, Serialize)]
pub struct TaskCompletionRow {
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<TaskCompletionUpdate> for TaskCompletionRow {
    fn from(update: TaskCompletionUpdate) -> Self {
        Self {
            is_completed: update.is_completed,
            completed_at: update.completed_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResultRow {
    pub user_id: String,
    pub answers: serde_json::Map<String, serde_json::Value>,
    pub career_suggestions: Vec<String>,
}

impl From<NewQuizResult> for QuizResultRow {
    fn from(result: NewQuizResult) -> Self {
        Self {
            user_id: result.user_id,
            answers: result.answers,
            career_suggestions: result.career_suggestions,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GoTrueUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Option<UserMetadata>,
}

impl From<GoTrueUser> for AuthUser {
    fn from(user: GoTrueUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.user_metadata.and_then(|m| m.full_name),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GoTrueSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: GoTrueUser,
}

impl From<GoTrueSession> for AuthSession {
    fn from(session: GoTrueSession) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
            user: session.user.into(),
        }
    }
}

/// Sign-up answers with a session when e-mail confirmation is off and with
/// the bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(GoTrueSession),
    User(GoTrueUser),
}

impl SignUpResponse {
    pub fn into_parts(self) -> (AuthUser, Option<String>) {
        match self {
            SignUpResponse::Session(session) => {
                (session.user.into(), Some(session.access_token))
            }
            SignUpResponse::User(user) => (user.into(), None),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignUpMetadata<'a> {
    pub full_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignUpBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignUpMetadata<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_row_from_postgrest() {
        let json = r#"{
            "id": "9b1c",
            "user_id": "u-1",
            "title": "Belajar Python",
            "description": null,
            "status": "active",
            "target_date": "2024-07-31",
            "created_at": "2024-07-01T08:00:00.123456+00:00",
            "updated_at": "2024-07-01T08:00:00.123456+00:00"
        }"#;
        let goal: Goal = serde_json::from_str::<GoalRow>(json).unwrap().into();
        assert_eq!(goal.status, GoalStatus::Active);
        assert_eq!(goal.target_date, NaiveDate::from_ymd_opt(2024, 7, 31).unwrap());
        assert!(goal.tasks.is_empty());
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let json = r#"{"id":"g","user_id":"u","title":"t","status":"paused",
            "target_date":"2024-07-31","created_at":"2024-07-01T08:00:00Z"}"#;
        let goal: Goal = serde_json::from_str::<GoalRow>(json).unwrap().into();
        assert_eq!(goal.status, GoalStatus::Other("paused".to_string()));
    }

    #[test]
    fn test_task_completion_row_serializes_null() {
        let row = TaskCompletionRow {
            is_completed: false,
            completed_at: None,
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"is_completed":false,"completed_at":null}"#
        );
    }

    #[test]
    fn test_sign_up_response_shapes() {
        let bare = r#"{"id":"u-1","email":"a@b.id","user_metadata":{"full_name":"Rina"}}"#;
        let (user, token) = serde_json::from_str::<SignUpResponse>(bare)
            .unwrap()
            .into_parts();
        assert_eq!(user.full_name.as_deref(), Some("Rina"));
        assert!(token.is_none());

        let session = r#"{"access_token":"jwt","user":{"id":"u-1"}}"#;
        let (user, token) = serde_json::from_str::<SignUpResponse>(session)
            .unwrap()
            .into_parts();
        assert_eq!(user.id, "u-1");
        assert_eq!(token.as_deref(), Some("jwt"));
    }
}
