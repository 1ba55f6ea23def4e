use crate::domain::catalog::ui::CatalogList;
use crate::domain::incident::ui::IncidentsList;
use crate::domain::promo::ui::PromoStrip;
use crate::domain::subcategory::ui::SubcategoriesList;
use crate::layout::global_context::{AppGlobalContext, Section};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize URL sync once when the root component is created
    ctx.init_router_integration();

    view! {
        <Shell
            content=move || match ctx.active.get() {
                Section::Home => view! {
                    <PromoStrip />
                    <CatalogList />
                }.into_any(),
                Section::Catalog => view! { <CatalogList /> }.into_any(),
                Section::AdminSubcategories => view! { <SubcategoriesList /> }.into_any(),
                Section::AdminIncidents => view! { <IncidentsList /> }.into_any(),
            }
        />
    }
}
