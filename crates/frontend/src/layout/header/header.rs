use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Верхняя навигация витрины: бренд + разделы (витрина и админка)
#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let nav_button = move |section: Section| {
        let is_admin = matches!(
            section,
            Section::AdminSubcategories | Section::AdminIncidents
        );
        view! {
            <button
                class="nav-link"
                style=move || format!(
                    "background: none; border: none; cursor: pointer; padding: 8px 12px; font-size: 15px; border-bottom: 2px solid {}; color: {};",
                    if ctx.active.get() == section { "#2196F3" } else { "transparent" },
                    if is_admin { "#888" } else { "#333" }
                )
                on:click=move |_| ctx.navigate(section)
            >
                {if is_admin { Some(icon("alert")) } else { None }}
                {section.title()}
            </button>
        }
    };

    view! {
        <header data-zone="header" style="display: flex; align-items: center; gap: 8px; padding: 10px 16px; border-bottom: 1px solid #ddd; background: #fff;">
            <span
                style="display: inline-flex; align-items: center; gap: 8px; font-size: 18px; font-weight: 600; margin-right: 24px; cursor: pointer;"
                on:click=move |_| ctx.navigate(Section::Home)
            >
                {icon("store")}
                {"Аквамарин"}
            </span>

            {Section::all().into_iter().map(nav_button).collect_view()}
        </header>
    }
}
