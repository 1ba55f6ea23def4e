use contracts::domain::incident::{Incident, IncidentStatus};
use contracts::shared::paging::total_pages_for;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct IncidentsListState {
    /// Строки текущей страницы (после фильтра, сортировки и среза)
    pub items: Vec<Incident>,
    pub search_query: String,
    pub status_filter: Option<IncidentStatus>,
    pub sort_field: String,
    pub sort_ascending: bool,
    /// Номер страницы (1-based)
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for IncidentsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: None,
            sort_field: "reported_at".to_string(),
            sort_ascending: false,
            page: 1,
            page_size: 20,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state() -> RwSignal<IncidentsListState> {
    RwSignal::new(IncidentsListState::default())
}

/// Пересчёт числа страниц с прижатием текущей страницы к границе.
///
/// После сужения фильтра текущая страница может оказаться за концом
/// списка — тогда она прижимается к последней странице.
pub fn recalc_pagination(state: &mut IncidentsListState) {
    state.total_pages = total_pages_for(state.total_count, state.page_size);
    if state.page > state.total_pages {
        state.page = state.total_pages;
    }
    if state.page == 0 {
        state.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recalc_keeps_valid_page() {
        let mut state = IncidentsListState {
            total_count: 45,
            page_size: 20,
            page: 2,
            ..Default::default()
        };
        recalc_pagination(&mut state);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_recalc_clamps_page_after_filter_shrink() {
        let mut state = IncidentsListState {
            total_count: 5,
            page_size: 20,
            page: 7,
            ..Default::default()
        };
        recalc_pagination(&mut state);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_recalc_empty_list_is_single_page() {
        let mut state = IncidentsListState {
            total_count: 0,
            page_size: 20,
            page: 0,
            ..Default::default()
        };
        recalc_pagination(&mut state);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 1);
    }
}
