use crate::shared::components::pagination_window::{
    page_change_allowed, page_window, PageMarker, DEFAULT_DELTA,
};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - reusable windowed pagination controls
///
/// Renders first/prev/next/last buttons, the page-number window with
/// ellipsis separators and a page-size selector.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes; only in-range targets are reported
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Neighbours shown on each side of the current page (optional)
    #[prop(optional)]
    delta: Option<usize>,

    /// Available page size options (optional, defaults to [20, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let delta = delta.unwrap_or(DEFAULT_DELTA);
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![20, 50, 100]);

    // Запрос страницы вне [1, total] или текущей страницы — тихий no-op
    let request_page = move |target: usize| {
        if page_change_allowed(target, current_page.get(), total_pages.get()) {
            on_page_change.run(target);
        }
    };

    view! {
        // Для единственной страницы навигация не рендерится вовсе
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| request_page(1)
                    disabled=move || current_page.get() <= 1
                    title="Первая страница"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            request_page(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Предыдущая страница"
                >
                    {icon("chevron-left")}
                </button>

                {move || {
                    let current = current_page.get();
                    let total = total_pages.get();
                    page_window(current, total, delta)
                        .into_iter()
                        .map(|marker| match marker {
                            PageMarker::Page(page) => view! {
                                <button
                                    class=format!(
                                        "pagination-btn pagination-btn--page{}",
                                        if page == current { " pagination-btn--current" } else { "" }
                                    )
                                    on:click=move |_| request_page(page)
                                    disabled=page == current
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any(),
                            PageMarker::Ellipsis => view! {
                                <span class="pagination-ellipsis">{"…"}</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}

                <button
                    class="pagination-btn"
                    on:click=move |_| request_page(current_page.get() + 1)
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Следующая страница"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| request_page(total_pages.get())
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Последняя страница"
                >
                    {icon("chevrons-right")}
                </button>

                <span class="pagination-info">
                    {move || format!("Всего записей: {}", total_count.get())}
                </span>

                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(50);
                        on_page_size_change.run(val);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </Show>
    }
}
