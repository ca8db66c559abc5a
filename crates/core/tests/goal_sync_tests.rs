//! Integration tests for the goal/task synchronizer.

mod common;

use std::sync::Arc;

use chrono::Duration;

use common::*;
use lifeguide_core::errors::{AuthError, Error, ValidationError};
use lifeguide_core::events::{
    ChannelDomainEventSink, DomainEvent, MockDomainEventSink, NoOpDomainEventSink,
    TaskGenerationOutcome,
};
use lifeguide_core::goals::{GoalService, GoalServiceTrait, NewGoal};

fn service_with(repository: Arc<InMemoryGoalRepository>) -> (GoalService, Arc<FakeTaskGenerator>) {
    let generator = FakeTaskGenerator::new(repository.clone());
    let service = GoalService::new(
        repository,
        generator.clone(),
        Arc::new(NoOpDomainEventSink),
    );
    (service, generator)
}

fn seeded_repository() -> Arc<InMemoryGoalRepository> {
    let repository = InMemoryGoalRepository::new();
    repository.seed_goal("goal-old", USER_ID, "Lulus ujian", at(8, 0));
    repository.seed_goal("goal-new", USER_ID, "Belajar gitar", at(9, 0));
    repository.seed_goal("goal-other", OTHER_USER_ID, "Ikut lomba", at(10, 0));
    repository.seed_task("t-late", "goal-old", at(8, 30));
    repository.seed_task("t-early", "goal-old", at(8, 10));
    repository
}

#[tokio::test]
async fn test_list_goals_orders_goals_and_tasks() {
    let (service, _) = service_with(seeded_repository());

    let goals = service.list_goals(USER_ID).await.unwrap();

    let ids: Vec<&str> = goals.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["goal-new", "goal-old"]);
    let task_ids: Vec<&str> = goals[1].tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(task_ids, vec!["t-early", "t-late"]);

    let snapshot = service.snapshot();
    assert_eq!(snapshot.user_id.as_deref(), Some(USER_ID));
    assert_eq!(snapshot.goals, goals);
    assert!(!snapshot.is_stale);
}

#[tokio::test]
async fn test_create_goal_defaults_and_generated_tasks() {
    let repository = InMemoryGoalRepository::new();
    let generator = FakeTaskGenerator::new(repository.clone());
    let (sink, mut rx) = ChannelDomainEventSink::channel();
    let service = GoalService::new(repository.clone(), generator.clone(), Arc::new(sink));

    let goal = service
        .create_goal(USER_ID, NewGoal::new("  Belajar Python ", ""))
        .await
        .unwrap();

    assert_eq!(goal.title, "Belajar Python");
    assert_eq!(goal.description, None);
    assert_eq!(
        goal.target_date,
        (goal.created_at + Duration::days(30)).date_naive()
    );
    assert!(goal.tasks.is_empty());
    assert!(service.snapshot().goals[0].tasks.is_empty());

    generator.release();
    let (goal_id, outcome) = next_generation_outcome(&mut rx).await;
    assert_eq!(goal_id, goal.id);
    assert_eq!(outcome, TaskGenerationOutcome::Completed);

    let requests = generator.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].goal_id, goal.id);
    assert_eq!(requests[0].goal_title, "Belajar Python");

    let snapshot = service.snapshot();
    assert_eq!(snapshot.goals.len(), 1);
    assert_eq!(snapshot.goals[0].tasks.len(), 3);
    assert_eq!(snapshot.goals[0].progress_percent(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_generated_tasks_visible_when_generation_finishes() {
    let repository = InMemoryGoalRepository::new();
    let generator = FakeTaskGenerator::new(repository.clone());
    let (sink, mut rx) = ChannelDomainEventSink::channel();
    let service = GoalService::new(repository.clone(), generator.clone(), Arc::new(sink));
    generator.release();

    let goal = service
        .create_goal(USER_ID, NewGoal::new("Belajar Python", ""))
        .await
        .unwrap();
    let (goal_id, outcome) = next_generation_outcome(&mut rx).await;
    assert_eq!(goal_id, goal.id);
    assert_eq!(outcome, TaskGenerationOutcome::Completed);

    // The creation re-read is done before generation starts, so it cannot
    // overwrite the job's re-read.
    assert_eq!(generator.reads_at_request(), vec![1]);
    let snapshot = service.snapshot();
    assert_eq!(snapshot.goals[0].tasks.len(), 3);
    assert!(!snapshot.is_stale);
}

#[tokio::test]
async fn test_create_goal_emits_created_event() {
    let repository = InMemoryGoalRepository::new();
    let sink = Arc::new(MockDomainEventSink::new());
    let generator = FakeTaskGenerator::new(repository.clone());
    let service = GoalService::new(repository, generator, sink.clone());

    let goal = service
        .create_goal(USER_ID, NewGoal::new("Belajar Python", "Dasar-dasar"))
        .await
        .unwrap();

    let events = sink.events();
    assert_eq!(
        events[0],
        DomainEvent::goal_created(USER_ID, goal.id.clone())
    );
    assert!(events.contains(&DomainEvent::goals_refreshed(USER_ID, 1)));
}

#[tokio::test]
async fn test_blank_title_never_reaches_store() {
    let repository = InMemoryGoalRepository::new();
    let (service, generator) = service_with(repository.clone());

    for title in ["", "   ", "\t\n"] {
        let err = service
            .create_goal(USER_ID, NewGoal::new(title, "deskripsi"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
    }

    assert_eq!(repository.writes(), 0);
    assert!(generator.requests().is_empty());
}

#[tokio::test]
async fn test_generation_failure_does_not_fail_creation() {
    let repository = InMemoryGoalRepository::new();
    let generator = FakeTaskGenerator::failing(repository.clone());
    let (sink, mut rx) = ChannelDomainEventSink::channel();
    let service = GoalService::new(repository, generator.clone(), Arc::new(sink));

    let goal = service
        .create_goal(USER_ID, NewGoal::new("Belajar Python", ""))
        .await
        .unwrap();

    generator.release();
    let (goal_id, outcome) = next_generation_outcome(&mut rx).await;
    assert_eq!(goal_id, goal.id);
    assert!(matches!(outcome, TaskGenerationOutcome::Failed { .. }));
    assert!(service.snapshot().goals[0].tasks.is_empty());
}

#[tokio::test]
async fn test_insert_failure_is_data_access_error() {
    let repository = InMemoryGoalRepository::new();
    repository.set_fail_writes(true);
    let (service, generator) = service_with(repository);

    let err = service
        .create_goal(USER_ID, NewGoal::new("Belajar Python", ""))
        .await
        .unwrap_err();

    assert!(err.is_data_access());
    assert!(generator.requests().is_empty());
}

#[tokio::test]
async fn test_toggle_twice_restores_flag() {
    let repository = seeded_repository();
    let (service, _) = service_with(repository.clone());
    service.list_goals(USER_ID).await.unwrap();

    service.toggle_task("t-early", "goal-old").await.unwrap();
    let task = repository.task("t-early").unwrap();
    assert!(task.is_completed);
    assert!(task.completed_at.is_some());
    let cached = service.snapshot();
    assert!(cached.find_task("goal-old", "t-early").unwrap().is_completed);
    assert_eq!(cached.goals[1].progress_percent(), 50);

    service.toggle_task("t-early", "goal-old").await.unwrap();
    let task = repository.task("t-early").unwrap();
    assert!(!task.is_completed);
    assert_eq!(task.completed_at, None);
    assert_eq!(repository.writes(), 2);
}

#[tokio::test]
async fn test_toggle_unknown_task_is_noop() {
    let repository = seeded_repository();
    let (service, _) = service_with(repository.clone());
    service.list_goals(USER_ID).await.unwrap();

    service.toggle_task("t-missing", "goal-old").await.unwrap();
    service.toggle_task("t-early", "goal-new").await.unwrap();

    assert_eq!(repository.writes(), 0);
}

#[tokio::test]
async fn test_toggle_write_failure_leaves_snapshot() {
    let repository = seeded_repository();
    let (service, _) = service_with(repository.clone());
    service.list_goals(USER_ID).await.unwrap();
    let before = service.snapshot();

    repository.set_fail_writes(true);
    let err = service.toggle_task("t-early", "goal-old").await.unwrap_err();

    assert!(err.is_data_access());
    assert_eq!(service.snapshot(), before);
}

#[tokio::test]
async fn test_read_failure_keeps_stale_snapshot() {
    let repository = seeded_repository();
    let (service, _) = service_with(repository.clone());
    let goals = service.list_goals(USER_ID).await.unwrap();

    repository.set_fail_reads(true);
    let err = service.refresh().await.unwrap_err();
    assert!(err.is_data_access());

    let snapshot = service.snapshot();
    assert_eq!(snapshot.goals, goals);
    assert!(snapshot.is_stale);

    repository.set_fail_reads(false);
    service.refresh().await.unwrap();
    assert!(!service.snapshot().is_stale);
}

#[tokio::test]
async fn test_write_succeeds_when_reread_fails() {
    let repository = seeded_repository();
    let (service, _) = service_with(repository.clone());
    service.list_goals(USER_ID).await.unwrap();

    repository.set_fail_reads(true);
    service.toggle_task("t-late", "goal-old").await.unwrap();

    assert!(repository.task("t-late").unwrap().is_completed);
    let snapshot = service.snapshot();
    assert!(snapshot.is_stale);
    assert!(!snapshot.find_task("goal-old", "t-late").unwrap().is_completed);
}

#[tokio::test]
async fn test_user_switch_invalidates_snapshot() {
    let (service, _) = service_with(seeded_repository());
    service.list_goals(USER_ID).await.unwrap();

    service.switch_user(Some(USER_ID));
    assert_eq!(service.snapshot().goals.len(), 2);

    service.switch_user(Some(OTHER_USER_ID));
    let snapshot = service.snapshot();
    assert_eq!(snapshot.user_id.as_deref(), Some(OTHER_USER_ID));
    assert!(snapshot.goals.is_empty());

    let goals = service.refresh().await.unwrap();
    assert_eq!(goals[0].id, "goal-other");

    service.switch_user(None);
    assert!(matches!(
        service.refresh().await.unwrap_err(),
        Error::Auth(AuthError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn test_listing_another_user_replaces_snapshot() {
    let (service, _) = service_with(seeded_repository());
    service.list_goals(USER_ID).await.unwrap();

    let goals = service.list_goals(OTHER_USER_ID).await.unwrap();
    assert_eq!(goals.len(), 1);
    assert!(service
        .snapshot()
        .goals
        .iter()
        .all(|g| g.user_id == OTHER_USER_ID));
}
