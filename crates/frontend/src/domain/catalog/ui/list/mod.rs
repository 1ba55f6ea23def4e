mod state;

use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::catalog::api;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::number_format::format_price;
use state::create_state;

/// Витрина каталога: поиск, сетка карточек товаров, постраничная навигация.
///
/// Выборка серверная: на каждую страницу уходит отдельный запрос с
/// параметрами page/pageSize/search.
#[component]
pub fn CatalogList() -> impl IntoView {
    let state = create_state();
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load = move || {
        let (page, page_size, search) =
            state.with_untracked(|s| (s.page, s.page_size, s.search_query.clone()));
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products(page, page_size, &search).await {
                Ok(response) => {
                    products.set(response.items);
                    state.update(|s| {
                        s.total_count = response.total_count;
                        s.total_pages = response.total_pages;
                        // Сервер мог ужать номер страницы (например после
                        // сужения фильтра)
                        s.page = response.page.max(1);
                    });
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    // Первая загрузка при монтировании
    spawn_local(async move {
        load();
    });

    let handle_search = Callback::new(move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 1;
        });
        load();
    });

    let handle_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
        load();
    });

    let handle_page_size_change = Callback::new(move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 1;
        });
        load();
    });

    view! {
        <div>
            // Toolbar
            <div style="display: flex; gap: 10px; align-items: center; margin-bottom: 12px;">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                    on_change=handle_search
                    placeholder="Поиск по каталогу..."
                />
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>
                <span style="margin-left: auto; font-size: 14px; color: #666;">
                    {"Найдено товаров: "}
                    <strong style="color: #333;">{move || state.with(|s| s.total_count)}</strong>
                </span>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin-bottom: 8px; font-size: 15px;">{e}</div>
            })}

            {move || if loading.get() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">{"⏳ Загрузка..."}</div> }.into_any()
            } else {
                let items = products.get();
                if items.is_empty() {
                    view! {
                        <div style="text-align: center; padding: 40px; color: #888;">
                            {"По запросу ничего не найдено"}
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;">
                            {items.into_iter().map(|product| view! {
                                <ProductCard product=product />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}

            <div style="margin-top: 16px;">
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=handle_page_change
                    on_page_size_change=handle_page_size_change
                    page_size_options=vec![20, 40, 60]
                />
            </div>
        </div>
    }
}

/// Карточка товара в сетке каталога
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let discount = product.discount_percent();
    let old_price = product.old_price;
    let in_stock = product.in_stock;

    view! {
        <div style="border: 1px solid #eee; border-radius: 8px; padding: 12px; background: #fff; display: flex; flex-direction: column; gap: 8px;">
            <div style="position: relative; aspect-ratio: 1; background: #f5f5f5; border-radius: 6px; overflow: hidden;">
                {(!product.image_url.is_empty()).then(|| view! {
                    <img
                        src=product.image_url.clone()
                        alt=product.name.clone()
                        style="width: 100%; height: 100%; object-fit: cover;"
                    />
                })}
                {discount.map(|d| view! {
                    <span style="position: absolute; top: 8px; left: 8px; background: #e53935; color: white; font-size: 13px; padding: 2px 6px; border-radius: 4px;">
                        {format!("-{}%", d)}
                    </span>
                })}
            </div>
            <div style="font-size: 15px; min-height: 40px;" title=product.name.clone()>
                {product.name.clone()}
            </div>
            <div style="display: flex; align-items: baseline; gap: 8px;">
                <span style="font-size: 17px; font-weight: 600;">{format_price(product.price)}</span>
                {old_price.map(|p| view! {
                    <span style="font-size: 14px; color: #999; text-decoration: line-through;">
                        {format_price(p)}
                    </span>
                })}
            </div>
            {(!in_stock).then(|| view! {
                <span style="font-size: 13px; color: #c33;">{"Нет в наличии"}</span>
            })}
        </div>
    }
}
