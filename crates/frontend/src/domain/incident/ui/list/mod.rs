mod state;

use contracts::domain::incident::{Incident, IncidentStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::incident::api;
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::{format_datetime, format_datetime_opt};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, SearchInput, Sortable};
use state::{create_state, recalc_pagination};

fn status_rank(status: IncidentStatus) -> u8 {
    match status {
        IncidentStatus::Open => 0,
        IncidentStatus::InProgress => 1,
        IncidentStatus::Resolved => 2,
        IncidentStatus::Closed => 3,
    }
}

impl Sortable for Incident {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "title" => self
                .title
                .to_lowercase()
                .cmp(&other.title.to_lowercase()),
            "status" => status_rank(self.status).cmp(&status_rank(other.status)),
            "source" => self.source.cmp(&other.source),
            "assignee" => self
                .assignee
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.assignee.as_deref().unwrap_or("").to_lowercase()),
            "reported_at" => self.reported_at.cmp(&other.reported_at),
            _ => self.number.cmp(&other.number),
        }
    }
}

const COLUMNS: &[(&str, &str)] = &[
    ("number", "Номер"),
    ("title", "Тема"),
    ("status", "Статус"),
    ("source", "Источник"),
    ("assignee", "Исполнитель"),
    ("reported_at", "Зарегистрирован"),
];

/// Админка: список инцидентов с фильтрами, сортировкой и оконной пагинацией.
///
/// Данные забираются целиком, фильтрация и срез страницы — на клиенте.
#[component]
pub fn IncidentsList() -> impl IntoView {
    let state = create_state();
    let all_incidents: RwSignal<Vec<Incident>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let refresh_view = move || {
        let query = state.with_untracked(|s| s.search_query.to_lowercase());
        let status_filter = state.with_untracked(|s| s.status_filter);
        let mut data = all_incidents.get_untracked();

        if !query.is_empty() {
            data.retain(|i| {
                i.number.to_lowercase().contains(&query)
                    || i.title.to_lowercase().contains(&query)
                    || i.source.to_lowercase().contains(&query)
                    || i.assignee
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
            });
        }
        if let Some(status) = status_filter {
            data.retain(|i| i.status == status);
        }

        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            recalc_pagination(s);
            let start = (s.page - 1) * s.page_size;
            let end = (start + s.page_size).min(data.len());
            s.items = data.get(start..end).unwrap_or(&[]).to_vec();
        });
    };

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_incidents().await {
                Ok(data) => {
                    all_incidents.set(data);
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    spawn_local(async move {
        load();
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
        refresh_view();
    };

    let handle_search = Callback::new(move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 1;
        });
        refresh_view();
    });

    let handle_status_filter = move |value: String| {
        state.update(|s| {
            s.status_filter = IncidentStatus::from_key(&value);
            s.page = 1;
        });
        refresh_view();
    };

    let handle_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    });

    let handle_page_size_change = Callback::new(move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 1;
        });
        refresh_view();
    });

    let handle_status_change = move |incident_id: String, value: String| {
        let Some(status) = IncidentStatus::from_key(&value) else {
            return;
        };
        spawn_local(async move {
            match api::update_status(&incident_id, status).await {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div>
            // Toolbar
            <div style="display: flex; gap: 10px; align-items: center; margin-bottom: 12px; flex-wrap: wrap;">
                <h2 style="margin: 0; font-size: 18px;">{"Инциденты"}</h2>
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                    on_change=handle_search
                    placeholder="Поиск по номеру, теме, исполнителю..."
                />
                <select
                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    on:change=move |ev| handle_status_filter(event_target_value(&ev))
                >
                    <option value="">{"Все статусы"}</option>
                    {IncidentStatus::all().into_iter().map(|status| view! {
                        <option value=status.key()>{status.display_text()}</option>
                    }).collect_view()}
                </select>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>
                <span style="margin-left: auto; font-size: 14px; color: #666;">
                    {"Найдено: "}
                    <strong style="color: #333;">{move || state.with(|s| s.total_count)}</strong>
                </span>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin-bottom: 8px; font-size: 15px;">{e}</div>
            })}

            {move || if loading.get() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">{"⏳ Загрузка..."}</div> }.into_any()
            } else {
                view! {
                    <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                        <thead>
                            <tr style="border-bottom: 2px solid #ddd; text-align: left;">
                                {COLUMNS.iter().map(|&(field, title)| {
                                    view! {
                                        <th
                                            style="padding: 10px 8px; cursor: pointer; user-select: none;"
                                            on:click=move |_| toggle_sort(field)
                                        >
                                            {title}
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                                        </th>
                                    }
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let items = state.with(|s| s.items.clone());
                                if items.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" style="text-align: center; padding: 20px; color: #888;">
                                                {"Инцидентов не найдено"}
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    items.into_iter().enumerate().map(|(idx, incident)| {
                                        let bg_color = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                                        let incident_id = incident.to_string_id();
                                        let current_status = incident.status;
                                        view! {
                                            <tr style=format!("background: {}; border-bottom: 1px solid #eee;", bg_color)>
                                                <td style="padding: 8px; white-space: nowrap;">{incident.number.clone()}</td>
                                                <td style="padding: 8px;" title=incident.description.clone()>{incident.title.clone()}</td>
                                                <td style="padding: 8px;">
                                                    <span class=current_status.css_class()>
                                                        {current_status.display_text()}
                                                    </span>
                                                    <select
                                                        style="margin-left: 8px; padding: 2px 4px; font-size: 13px; border: 1px solid #ddd; border-radius: 4px;"
                                                        title="Сменить статус"
                                                        on:change=move |ev| handle_status_change(
                                                            incident_id.clone(),
                                                            event_target_value(&ev),
                                                        )
                                                    >
                                                        {IncidentStatus::all().into_iter().map(|status| view! {
                                                            <option
                                                                value=status.key()
                                                                selected=status == current_status
                                                            >
                                                                {status.display_text()}
                                                            </option>
                                                        }).collect_view()}
                                                    </select>
                                                </td>
                                                <td style="padding: 8px;">{incident.source.clone()}</td>
                                                <td style="padding: 8px;">{incident.assignee.clone().unwrap_or_else(|| "—".to_string())}</td>
                                                <td style="padding: 8px; white-space: nowrap;" title=format!("Решён: {}", format_datetime_opt(&incident.resolved_at))>
                                                    {format_datetime(&incident.reported_at)}
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }
                            }}
                        </tbody>
                    </table>
                }.into_any()
            }}

            <div style="margin-top: 12px;">
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=handle_page_change
                    on_page_size_change=handle_page_size_change
                />
            </div>
        </div>
    }
}
