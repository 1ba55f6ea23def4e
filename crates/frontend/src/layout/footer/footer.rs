use crate::shared::api_utils::api_url;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Сервер: доступен",
            ServerStatus::Offline => "Сервер: недоступен",
            ServerStatus::Checking => "Сервер: проверка...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

struct LinkColumn {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const LINK_COLUMNS: &[LinkColumn] = &[
    LinkColumn {
        title: "Покупателям",
        links: &[
            ("Доставка и оплата", "/delivery"),
            ("Возврат товара", "/returns"),
            ("Вопросы и ответы", "/faq"),
        ],
    },
    LinkColumn {
        title: "Компания",
        links: &[
            ("О магазине", "/about"),
            ("Контакты", "/contacts"),
            ("Вакансии", "/jobs"),
        ],
    },
    LinkColumn {
        title: "Поддержка",
        links: &[
            ("Служба поддержки", "/support"),
            ("Политика конфиденциальности", "/privacy"),
        ],
    },
];

/// Подвал витрины: колонки ссылок и индикатор доступности сервера
#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    let check_server = move || {
        status.set(ServerStatus::Checking);

        spawn_local(async move {
            let result = ping_server().await;
            status.set(if result {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    };

    // Запускаем проверку при монтировании
    Effect::new(move |_| {
        check_server();
    });

    view! {
        <footer data-zone="footer" style="border-top: 1px solid #ddd; background: #fafafa; padding: 16px; font-size: 14px;">
            <div style="display: flex; gap: 48px; flex-wrap: wrap;">
                {LINK_COLUMNS.iter().map(|column| view! {
                    <div>
                        <div style="font-weight: 600; margin-bottom: 8px;">{column.title}</div>
                        <ul style="list-style: none; margin: 0; padding: 0;">
                            {column.links.iter().map(|(label, href)| view! {
                                <li style="margin-bottom: 4px;">
                                    <a href=*href style="color: #555; text-decoration: none;">{*label}</a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>
            <div class="status-bar" style="margin-top: 12px; color: #888;">
                <span class=move || status.get().css_class()>
                    {move || status.get().display_text()}
                </span>
            </div>
        </footer>
    }
}

async fn ping_server() -> bool {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return false,
    };

    let request = match web_sys::Request::new_with_str(&api_url("/health")) {
        Ok(r) => r,
        Err(_) => return false,
    };

    let _ = request.headers().set("Accept", "application/json");

    let promise = window.fetch_with_request(&request);
    let response = match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(r) => r,
        Err(_) => return false,
    };

    let response: web_sys::Response = match response.dyn_into() {
        Ok(r) => r,
        Err(_) => return false,
    };

    response.ok()
}
