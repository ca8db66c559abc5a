//! Goals module - domain models, the goal/task synchronizer, and dashboard
//! aggregates.

mod goals_model;
mod goals_service;
mod goals_summary;
mod goals_traits;

pub use goals_model::{
    default_target_date, Goal, GoalInsert, GoalStatus, GoalsSnapshot, NewGoal, Task,
    TaskCompletionUpdate, TaskGenerationRequest,
};
pub use goals_service::GoalService;
pub use goals_summary::{
    display_name, greeting_for_hour, quote_for_date, DashboardOverview, GoalsSummary,
    MOTIVATIONAL_QUOTES,
};
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait, TaskGeneratorTrait};
