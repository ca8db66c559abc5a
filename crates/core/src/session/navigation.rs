use serde::{Deserialize, Serialize};

/// Bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationTab {
    #[default]
    Beranda,
    TesMinat,
    GoalSaya,
    AsistenAi,
    RoleModel,
}

impl NavigationTab {
    pub const ALL: [NavigationTab; 5] = [
        NavigationTab::Beranda,
        NavigationTab::TesMinat,
        NavigationTab::GoalSaya,
        NavigationTab::AsistenAi,
        NavigationTab::RoleModel,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NavigationTab::Beranda => "beranda",
            NavigationTab::TesMinat => "tes-minat",
            NavigationTab::GoalSaya => "goal-saya",
            NavigationTab::AsistenAi => "asisten-ai",
            NavigationTab::RoleModel => "role-model",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavigationTab::Beranda => "Beranda",
            NavigationTab::TesMinat => "Tes Minat",
            NavigationTab::GoalSaya => "Goal Saya",
            NavigationTab::AsistenAi => "Asisten AI",
            NavigationTab::RoleModel => "Role Model",
        }
    }

    /// Unknown ids land on the home tab.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == id)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for NavigationTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
