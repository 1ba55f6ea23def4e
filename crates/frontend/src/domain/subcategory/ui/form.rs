use contracts::domain::category::Category;
use contracts::domain::subcategory::{Subcategory, SubcategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::subcategory::api;

/// Форма создания/редактирования подкатегории.
///
/// Валидация выполняется на клиенте через `Subcategory::validate()` до
/// обращения к серверу; ошибка показывается над кнопками.
#[component]
pub fn SubcategoryForm(
    /// Редактируемая подкатегория; None — режим создания
    existing: Option<Subcategory>,
    /// Справочник категорий для выбора родителя
    categories: Vec<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = existing.is_some();
    let existing_id = existing.as_ref().map(|s| s.to_string_id());

    let (name, set_name) = signal(existing.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let (code, set_code) = signal(existing.as_ref().map(|s| s.code.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        existing
            .as_ref()
            .map(|s| s.description.clone())
            .unwrap_or_default(),
    );
    let (category_id, set_category_id) = signal(
        existing
            .as_ref()
            .map(|s| s.category_id.clone())
            .unwrap_or_default(),
    );
    let (sort_order, set_sort_order) = signal(
        existing
            .as_ref()
            .map(|s| s.sort_order.to_string())
            .unwrap_or_else(|| "0".to_string()),
    );
    let (is_active, set_is_active) = signal(existing.as_ref().map(|s| s.is_active).unwrap_or(true));

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let handle_save = move |_| {
        set_error.set(None);

        let dto = SubcategoryDto {
            id: existing_id.clone(),
            code: Some(code.get()),
            name: name.get(),
            description: Some(description.get()),
            category_id: Some(category_id.get()),
            sort_order: sort_order.get().trim().parse().ok(),
            is_active: Some(is_active.get()),
        };

        // Проверяем агрегат до похода на сервер
        let mut draft = Subcategory::new_for_insert(String::new(), dto.name.clone(), String::new());
        draft.update(&dto);
        if let Err(e) = draft.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        spawn_local(async move {
            let result = if is_edit {
                api::update_subcategory(dto).await
            } else {
                api::create_subcategory(dto).await.map(|_| ())
            };
            set_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px; min-width: 420px;">
            <h3 style="margin: 0;">
                {if is_edit { "Редактирование подкатегории" } else { "Новая подкатегория" }}
            </h3>

            <label style="display: flex; flex-direction: column; gap: 4px; font-size: 14px;">
                {"Наименование *"}
                <input
                    type="text"
                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>

            <label style="display: flex; flex-direction: column; gap: 4px; font-size: 14px;">
                {"Код"}
                <input
                    type="text"
                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    prop:value=move || code.get()
                    on:input=move |ev| set_code.set(event_target_value(&ev))
                />
            </label>

            <label style="display: flex; flex-direction: column; gap: 4px; font-size: 14px;">
                {"Родительская категория *"}
                <select
                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    on:change=move |ev| set_category_id.set(event_target_value(&ev))
                    prop:value=move || category_id.get()
                >
                    <option value="">{"— не выбрана —"}</option>
                    {categories.iter().map(|category| {
                        let id = category.to_string_id();
                        let id_for_selected = id.clone();
                        view! {
                            <option
                                value=id
                                selected=move || category_id.get() == id_for_selected
                            >
                                {category.name.clone()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>

            <label style="display: flex; flex-direction: column; gap: 4px; font-size: 14px;">
                {"Описание"}
                <textarea
                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; min-height: 60px;"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div style="display: flex; gap: 16px; align-items: center;">
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 14px; width: 120px;">
                    {"Порядок"}
                    <input
                        type="number"
                        style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                        prop:value=move || sort_order.get()
                        on:input=move |ev| set_sort_order.set(event_target_value(&ev))
                    />
                </label>
                <label style="display: inline-flex; align-items: center; gap: 6px; cursor: pointer; font-size: 14px; margin-top: 18px;">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                    />
                    {"Активна"}
                </label>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; font-size: 14px;">{e}</div>
            })}

            <div style="display: flex; gap: 8px; justify-content: flex-end;">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                    disabled=move || saving.get()
                >
                    {"Отмена"}
                </button>
                <button
                    class="button button--primary"
                    on:click=handle_save
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                </button>
            </div>
        </div>
    }
}
