use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CatalogListState {
    pub search_query: String,
    /// Номер страницы (1-based)
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            page: 1,
            page_size: 20,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}
