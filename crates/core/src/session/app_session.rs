use log::debug;

use super::navigation::NavigationTab;
use crate::chat::ChatSession;
use crate::quiz::QuizSession;
use crate::role_models::RoleModelBrowser;

/// Per-session view state: one instance per signed-in user.
#[derive(Debug, Clone, Default)]
pub struct AppSession {
    pub active_tab: NavigationTab,
    pub quiz: QuizSession,
    pub chat: ChatSession,
    pub role_models: RoleModelBrowser,
}

impl AppSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches tabs by id, falling back to the home tab.
    pub fn navigate(&mut self, tab_id: &str) -> NavigationTab {
        self.active_tab = NavigationTab::from_id(tab_id);
        debug!("Navigated to {}", self.active_tab);
        self.active_tab
    }

    /// Clears every piece of session state. Used on sign-out.
    pub fn reset(&mut self) {
        self.active_tab = NavigationTab::default();
        self.quiz.reset();
        self.chat.reset();
        self.role_models.reset();
    }
}
