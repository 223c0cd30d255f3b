//! Vocabulary catalog and eligibility filters.

use crate::error::Result;
use crate::types::{Category, DisplayMode, FocusMode, Item};
use serde::{Deserialize, Serialize};

/// Static vocabulary dataset, loaded once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<Item>,
}

/// One row of the "selected words" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: String,
    pub japanese: String,
    pub en: String,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse a dataset document of the form `{ "items": [...] }`.
    pub fn from_json(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content)?;
        Ok(catalog)
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items matching the category, narrowed to irregular readings when the
    /// focus mode asks for it. May be empty.
    pub fn eligible_items(&self, category: Category, focus: FocusMode) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .filter(|item| focus == FocusMode::All || item.irregular)
            .collect()
    }

    /// Owned copy of the eligible pool, for handing to a quiz session.
    pub fn eligible_pool(&self, category: Category, focus: FocusMode) -> Vec<Item> {
        self.eligible_items(category, focus)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Whether the irregular-only focus mode makes sense for a category.
    pub fn focus_mode_available(&self, category: Category) -> bool {
        self.items
            .iter()
            .any(|item| item.category == category && item.irregular)
    }

    /// Display rows for the eligible pool.
    pub fn selected_words(
        &self,
        category: Category,
        focus: FocusMode,
        display: DisplayMode,
    ) -> Vec<WordEntry> {
        self.eligible_items(category, focus)
            .into_iter()
            .map(|item| WordEntry {
                id: item.id.clone(),
                japanese: item.japanese(display),
                en: item.en.clone(),
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_catalog;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eligible_items_by_category() {
        let catalog = sample_catalog();
        let months = catalog.eligible_items(Category::Months, FocusMode::All);
        assert_eq!(months.len(), 3);
        assert!(months.iter().all(|i| i.category == Category::Months));
    }

    #[test]
    fn test_irregular_focus_only_returns_irregular() {
        let catalog = sample_catalog();
        let months = catalog.eligible_items(Category::Months, FocusMode::Irregular);
        let ids: Vec<&str> = months.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["month_4", "month_7"]);
    }

    #[test]
    fn test_irregular_focus_empty_when_none_exist() {
        let catalog = sample_catalog();
        assert!(catalog
            .eligible_items(Category::Weekdays, FocusMode::Irregular)
            .is_empty());
        assert!(catalog
            .eligible_items(Category::FullDate, FocusMode::All)
            .is_empty());
    }

    #[test]
    fn test_focus_mode_available() {
        let catalog = sample_catalog();
        assert!(catalog.focus_mode_available(Category::Months));
        assert!(catalog.focus_mode_available(Category::DayOfMonth));
        assert!(!catalog.focus_mode_available(Category::Weekdays));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"items":[
            {"id":"day_4","category":"day_of_month","en":"4th","jp_kana":"よっか","jp_kanji":"四日","irregular":true,"day":4}
        ]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.items.len(), 1);
        assert_eq!(catalog.get("day_4").and_then(|i| i.day), Some(4));
        assert!(catalog.get("day_5").is_none());
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let json = r#"{"items":[{"id":"x","category":"years","en":"x","jp_kana":"x"}]}"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_selected_words_uses_display_mode() {
        let catalog = sample_catalog();
        let words = catalog.selected_words(Category::DayOfMonth, FocusMode::Irregular, DisplayMode::Both);
        assert_eq!(
            words,
            vec![WordEntry {
                id: "day_1".to_string(),
                japanese: "ついたち (一日)".to_string(),
                en: "1st".to_string(),
            }]
        );
    }
}
