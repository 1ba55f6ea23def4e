use contracts::domain::category::Category;
use contracts::domain::subcategory::Subcategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

use super::form::SubcategoryForm;
use crate::domain::catalog::api as catalog_api;
use crate::domain::subcategory::api;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;

/// Админка: список подкатегорий с созданием, редактированием и удалением
#[component]
pub fn SubcategoriesList() -> impl IntoView {
    let subcategories: RwSignal<Vec<Subcategory>> = RwSignal::new(Vec::new());
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    // Модальное окно формы; Some(None) — создание, Some(Some(x)) — правка
    let editing: RwSignal<Option<Option<Subcategory>>> = RwSignal::new(None);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_subcategories().await {
                Ok(data) => {
                    subcategories.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    // Загрузка при монтировании: справочник категорий и сами подкатегории
    spawn_local(async move {
        match catalog_api::fetch_categories().await {
            Ok(data) => categories.set(data),
            Err(e) => set_error.set(Some(e)),
        }
        load();
    });

    let handle_delete = move |subcategory: &Subcategory| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Удалить подкатегорию «{}»?", subcategory.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let id = subcategory.to_string_id();
        spawn_local(async move {
            match api::delete_subcategory(&id).await {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let category_names = move || -> HashMap<String, String> {
        categories
            .get()
            .iter()
            .map(|c| (c.to_string_id(), c.name.clone()))
            .collect()
    };

    view! {
        <div>
            // Toolbar
            <div style="display: flex; gap: 10px; align-items: center; margin-bottom: 12px;">
                <h2 style="margin: 0; font-size: 18px;">{"Подкатегории каталога"}</h2>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| editing.set(Some(None))
                >
                    {icon("plus")}
                    {"Создать подкатегорию"}
                </button>
                <span style="margin-left: auto; font-size: 14px; color: #666;">
                    {"Всего: "}
                    <strong style="color: #333;">{move || subcategories.get().len()}</strong>
                </span>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin-bottom: 8px; font-size: 15px;">{e}</div>
            })}

            {move || if loading.get() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">{"⏳ Загрузка..."}</div> }.into_any()
            } else {
                let items = subcategories.get();
                let names = category_names();
                view! {
                    <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                        <thead>
                            <tr style="border-bottom: 2px solid #ddd; text-align: left;">
                                <th style="padding: 10px 8px;">{"Наименование"}</th>
                                <th style="padding: 10px 8px;">{"Код"}</th>
                                <th style="padding: 10px 8px;">{"Категория"}</th>
                                <th style="padding: 10px 8px; text-align: right;">{"Товаров"}</th>
                                <th style="padding: 10px 8px;">{"Активна"}</th>
                                <th style="padding: 10px 8px;">{"Изменена"}</th>
                                <th style="padding: 10px 8px; width: 80px;"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {if items.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" style="text-align: center; padding: 20px; color: #888;">
                                            {"Подкатегорий пока нет"}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().enumerate().map(|(idx, subcategory)| {
                                    let bg_color = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                                    let category_name = names
                                        .get(&subcategory.category_id)
                                        .cloned()
                                        .unwrap_or_else(|| "—".to_string());
                                    let for_edit = subcategory.clone();
                                    let for_delete = subcategory.clone();
                                    view! {
                                        <tr style=format!("background: {}; border-bottom: 1px solid #eee;", bg_color)>
                                            <td style="padding: 8px;">{subcategory.name.clone()}</td>
                                            <td style="padding: 8px;">{subcategory.code.clone()}</td>
                                            <td style="padding: 8px;">{category_name}</td>
                                            <td style="padding: 8px; text-align: right;">{subcategory.product_count}</td>
                                            <td style="padding: 8px;">{if subcategory.is_active { "да" } else { "нет" }}</td>
                                            <td style="padding: 8px;">{format_datetime_opt(&subcategory.updated_at)}</td>
                                            <td style="padding: 8px; white-space: nowrap;">
                                                <button
                                                    style="background: none; border: none; cursor: pointer; padding: 4px; color: #666;"
                                                    title="Редактировать"
                                                    on:click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    style="background: none; border: none; cursor: pointer; padding: 4px; color: #c33;"
                                                    title="Удалить"
                                                    on:click=move |_| handle_delete(&for_delete)
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                }.into_any()
            }}

            // Модальное окно формы
            {move || editing.get().map(|existing| view! {
                <div class="modal-overlay" style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 100;">
                    <div class="modal-content" style="background: #fff; border-radius: 8px; padding: 20px; max-height: 90vh; overflow-y: auto;">
                        <SubcategoryForm
                            existing=existing
                            categories=categories.get()
                            on_saved=Callback::new(move |_| { editing.set(None); load(); })
                            on_cancel=Callback::new(move |_| editing.set(None))
                        />
                    </div>
                </div>
            })}
        </div>
    }
}
