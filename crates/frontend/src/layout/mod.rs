pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Каркас страницы витрины.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <header::Header />
        <main class="page-content" style="min-height: calc(100vh - 160px); padding: 16px;">
            // content читает активный раздел, поэтому вызывается реактивно
            {move || content()}
        </main>
        <footer::Footer />
    }
}
