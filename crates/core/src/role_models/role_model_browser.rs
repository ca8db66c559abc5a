use std::collections::BTreeSet;

use serde::Serialize;

use super::role_models_model::{CategoryFilter, RoleModel, ROLE_MODELS};

/// Category filter and favourites of the role model page for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleModelBrowser {
    filter: CategoryFilter,
    favorites: BTreeSet<u32>,
}

impl RoleModelBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Catalog entries matching the selected filter, in catalog order.
    pub fn filtered(&self) -> Vec<&'static RoleModel> {
        ROLE_MODELS
            .iter()
            .filter(|m| self.filter.matches(m.category))
            .collect()
    }

    /// Adds or removes a favourite; returns whether it is now a favourite.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    pub fn favorites(&self) -> Vec<&'static RoleModel> {
        ROLE_MODELS
            .iter()
            .filter(|m| self.favorites.contains(&m.id))
            .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role_models::RoleModelCategory;

    #[test]
    fn test_filter_by_category() {
        let mut browser = RoleModelBrowser::new();
        assert_eq!(browser.filtered().len(), 6);

        browser.select(CategoryFilter::from_id("kreatif"));
        let names: Vec<&str> = browser.filtered().iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Raditya Dika", "Teman Macet"]);

        browser.select(CategoryFilter::Only(RoleModelCategory::Teknologi));
        assert_eq!(browser.filtered()[0].name, "B.J. Habibie");
    }

    #[test]
    fn test_unknown_filter_id_selects_all() {
        assert_eq!(CategoryFilter::from_id("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_id("olahraga"), CategoryFilter::All);
    }

    #[test]
    fn test_toggle_favorite_and_reset() {
        let mut browser = RoleModelBrowser::new();
        assert!(browser.toggle_favorite(2));
        assert!(browser.toggle_favorite(5));
        assert!(browser.is_favorite(2));
        assert!(!browser.toggle_favorite(2));
        assert!(!browser.is_favorite(2));
        assert_eq!(browser.favorites()[0].name, "Gita Savitri");

        browser.select(CategoryFilter::Only(RoleModelCategory::Bisnis));
        browser.reset();
        assert_eq!(browser, RoleModelBrowser::new());
    }
}
