use crate::items::{Item, SortOrder};

/// Items as the list screen shows them: filtered by search, then sorted.
#[derive(Debug, Clone)]
pub struct ListState {
    pub items: Vec<Item>,
    pub sort_order: SortOrder,
    pub search_query: String,
}

impl ListState {
    pub fn new(items: Vec<Item>, sort_order: SortOrder) -> Self {
        Self {
            items,
            sort_order,
            search_query: String::new(),
        }
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into().trim().to_string();
        self
    }

    pub fn visible_items(&self) -> Vec<Item> {
        let mut visible: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.matches_query(&self.search_query))
            .cloned()
            .collect();
        self.sort_order.sort(&mut visible);
        visible
    }
}
