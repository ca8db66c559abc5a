//! LifeGuide Supabase - Remote store, edge functions and auth over HTTP.
//!
//! This crate implements the repository and service traits of
//! `lifeguide-core` against a Supabase project: PostgREST tables for goals,
//! tasks and quiz results, edge functions for task generation and chat, and
//! GoTrue for authentication.

pub mod auth;
pub mod client;
pub mod config;
pub mod functions;
pub mod goals;
mod models;
pub mod quiz;

pub use auth::SupabaseAuthProvider;
pub use client::{RouteKind, SupabaseClient};
pub use config::SupabaseConfig;
pub use functions::{SupabaseChatService, SupabaseTaskGenerator};
pub use goals::SupabaseGoalRepository;
pub use quiz::SupabaseQuizResultRepository;
