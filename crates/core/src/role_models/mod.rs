//! Role models - static catalog of Indonesian role models and the per-session
//! browsing state.

mod role_model_browser;
mod role_models_model;

pub use role_model_browser::RoleModelBrowser;
pub use role_models_model::{CategoryFilter, RoleModel, RoleModelCategory, ROLE_MODELS};
