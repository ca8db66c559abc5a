//! LifeGuide Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of LifeGuide: the goal/task
//! synchronizer, the interest quiz scorers, the chat relay and the
//! per-session view state. It is transport-agnostic and defines traits that
//! are implemented by the `lifeguide-supabase` crate.

pub mod auth;
pub mod chat;
pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod notices;
pub mod quiz;
pub mod role_models;
pub mod session;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
