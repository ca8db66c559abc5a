//! Aggregates shown on the home dashboard and the goal page.

use chrono::{Datelike, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use super::goals_model::{Goal, GoalStatus, Task};
use crate::constants::{
    DASHBOARD_ACTIVE_GOALS_LIMIT, DASHBOARD_TODAY_TASKS_LIMIT, DEFAULT_DISPLAY_NAME,
};

/// Motivational lines rotated on the home dashboard.
pub const MOTIVATIONAL_QUOTES: [&str; 5] = [
    "Masa depan dimulai dari langkah kecil hari ini! 🌟",
    "Setiap usaha yang kamu lakukan tidak akan sia-sia 💪",
    "Kamu lebih kuat dari yang kamu pikirkan! 🚀",
    "Hari ini adalah kesempatan baru untuk berkembang 🌱",
    "Impianmu layak untuk diperjuangkan! ✨",
];

/// Task and goal counters over a goal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalsSummary {
    pub total_goals: usize,
    pub completed_goals: usize,
    pub active_goals: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub remaining_tasks: usize,
    /// Completed tasks over all tasks, as a rounded percentage.
    pub overall_progress: u8,
}

impl GoalsSummary {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let total_tasks: usize = goals.iter().map(Goal::task_count).sum();
        let completed_tasks: usize = goals.iter().map(Goal::completed_task_count).sum();
        let overall_progress = if total_tasks > 0 {
            ((completed_tasks as f64 / total_tasks as f64) * 100.0).round() as u8
        } else {
            0
        };

        Self {
            total_goals: goals.len(),
            completed_goals: goals
                .iter()
                .filter(|g| g.status == GoalStatus::Completed)
                .count(),
            active_goals: goals
                .iter()
                .filter(|g| g.status == GoalStatus::Active)
                .count(),
            total_tasks,
            completed_tasks,
            remaining_tasks: total_tasks - completed_tasks,
            overall_progress,
        }
    }
}

/// Greeting by local hour of day.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Selamat Pagi",
        12..=17 => "Selamat Siang",
        _ => "Selamat Malam",
    }
}

/// Quote of the day; stable for a given date.
pub fn quote_for_date(date: NaiveDate) -> &'static str {
    MOTIVATIONAL_QUOTES[date.ordinal0() as usize % MOTIVATIONAL_QUOTES.len()]
}

/// Name shown in the greeting: first word of the full name, else the
/// e-mail local part, else a friendly default.
pub fn display_name(full_name: Option<&str>, email: Option<&str>) -> String {
    full_name
        .and_then(|n| n.split_whitespace().next())
        .or_else(|| {
            email
                .and_then(|e| e.split('@').next())
                .filter(|local| !local.is_empty())
        })
        .unwrap_or(DEFAULT_DISPLAY_NAME)
        .to_string()
}

/// Everything the home dashboard renders from the goal snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub greeting: String,
    pub display_name: String,
    pub quote: String,
    /// First active goals in snapshot order.
    pub active_goals: Vec<Goal>,
    /// Tasks due on the given day across all goals.
    pub today_tasks: Vec<Task>,
    pub summary: GoalsSummary,
}

impl DashboardOverview {
    /// Builds the dashboard for the local time `now`.
    pub fn build<T>(
        goals: &[Goal],
        now: T,
        full_name: Option<&str>,
        email: Option<&str>,
    ) -> Self
    where
        T: Datelike + Timelike,
    {
        let today = NaiveDate::from_ymd_opt(now.year(), now.month(), now.day())
            .unwrap_or_default();

        let active_goals = goals
            .iter()
            .filter(|g| g.status == GoalStatus::Active)
            .take(DASHBOARD_ACTIVE_GOALS_LIMIT)
            .cloned()
            .collect();

        let today_tasks = goals
            .iter()
            .flat_map(|g| g.tasks.iter())
            .filter(|t| t.due_date == Some(today))
            .take(DASHBOARD_TODAY_TASKS_LIMIT)
            .cloned()
            .collect();

        Self {
            greeting: greeting_for_hour(now.hour()).to_string(),
            display_name: display_name(full_name, email),
            quote: quote_for_date(today).to_string(),
            active_goals,
            today_tasks,
            summary: GoalsSummary::from_goals(goals),
        }
    }
}
