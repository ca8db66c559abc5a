//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events after
//! mutations of the goal snapshot and after background task-generation jobs.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
