/// Days between goal creation and its default target date
pub const GOAL_TARGET_DAYS: i64 = 30;

/// Number of active goals shown on the home dashboard
pub const DASHBOARD_ACTIVE_GOALS_LIMIT: usize = 3;

/// Number of tasks due today shown on the home dashboard
pub const DASHBOARD_TODAY_TASKS_LIMIT: usize = 4;

/// Number of transcript messages sent to the chat service as context
pub const CHAT_HISTORY_LIMIT: usize = 4;

/// Maximum number of messages kept in a chat transcript
pub const DEFAULT_TRANSCRIPT_LIMIT: usize = 100;

/// Number of questions in the interest quiz
pub const QUIZ_QUESTION_COUNT: usize = 5;

/// Careers shown for a quiz result
pub const QUIZ_CAREER_DISPLAY_LIMIT: usize = 3;

/// Minimum password length accepted at sign-up
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Display name used when the profile has neither a name nor an e-mail
pub const DEFAULT_DISPLAY_NAME: &str = "Sobat";
