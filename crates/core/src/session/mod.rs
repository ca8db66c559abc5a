//! Navigation and per-session view state.

mod app_session;
mod navigation;

pub use app_session::AppSession;
pub use navigation::NavigationTab;
