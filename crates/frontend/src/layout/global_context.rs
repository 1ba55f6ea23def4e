use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Разделы приложения: витрина и админка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Catalog,
    AdminSubcategories,
    AdminIncidents,
}

impl Section {
    pub fn key(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::AdminSubcategories => "admin-subcategories",
            Section::AdminIncidents => "admin-incidents",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        match key {
            "home" => Some(Section::Home),
            "catalog" => Some(Section::Catalog),
            "admin-subcategories" => Some(Section::AdminSubcategories),
            "admin-incidents" => Some(Section::AdminIncidents),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::AdminSubcategories => "Подкатегории",
            Section::AdminIncidents => "Инциденты",
        }
    }

    pub fn all() -> [Section; 4] {
        [
            Section::Home,
            Section::Catalog,
            Section::AdminSubcategories,
            Section::AdminIncidents,
        ]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Home),
        }
    }

    pub fn navigate(&self, section: Section) {
        leptos::logging::log!("navigate: section='{}'", section.key());
        self.active.set(section);
    }

    /// Синхронизация активного раздела с query-параметром `?section=`.
    ///
    /// Вызывается один раз при создании корневого компонента: читает URL,
    /// затем подписывается на изменения и пишет их обратно через
    /// `history.replaceState` (без перезагрузки страницы).
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(section) = params.get("section").and_then(|k| Section::from_key(k)) {
            self.active.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "section".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Пишем в историю только при реальном изменении URL
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key_roundtrip() {
        for section in Section::all() {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("unknown"), None);
    }
}
