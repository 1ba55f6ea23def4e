use contracts::domain::promo::PromoBanner;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::promo::api;

/// Интервал смены баннера-героя
const ROTATE_MS: u32 = 7000;

/// Полоса промо-баннеров на главной: живой баннер-«герой» сверху,
/// остальные — плитки поменьше. Герой циклически сменяется по таймеру.
/// Просроченные и выключенные баннеры не показываются.
#[component]
pub fn PromoStrip() -> impl IntoView {
    let banners: RwSignal<Vec<PromoBanner>> = RwSignal::new(Vec::new());
    let hero_idx: RwSignal<usize> = RwSignal::new(0);

    spawn_local(async move {
        match api::fetch_banners().await {
            Ok(data) => {
                let now = chrono::Utc::now();
                let mut live: Vec<PromoBanner> =
                    data.into_iter().filter(|b| b.is_live(now)).collect();
                live.sort_by_key(|b| b.sort_order);
                let count = live.len();
                banners.set(live);

                if count > 1 {
                    loop {
                        TimeoutFuture::new(ROTATE_MS).await;
                        let rotated = hero_idx.try_update(|idx| *idx = (*idx + 1) % count);
                        // None — компонент размонтирован, сигнал освобождён
                        if rotated.is_none() {
                            break;
                        }
                    }
                }
            }
            Err(e) => {
                // Баннеры — необязательное украшение, ошибку не показываем
                leptos::logging::log!("promo banners unavailable: {}", e);
            }
        }
    });

    view! {
        {move || {
            let items = banners.get();
            if items.is_empty() {
                return view! { <></> }.into_any();
            }
            let hero_pos = hero_idx.get() % items.len();
            let hero = items[hero_pos].clone();
            let rest: Vec<PromoBanner> = items
                .into_iter()
                .enumerate()
                .filter(|(i, _)| *i != hero_pos)
                .map(|(_, b)| b)
                .collect();

            view! {
                <div style="margin-bottom: 20px;">
                    <a
                        href=hero.link_url.clone()
                        style=format!(
                            "display: block; border-radius: 10px; padding: 32px; margin-bottom: 12px; color: white; text-decoration: none; background: #3949ab center/cover url('{}');",
                            hero.image_url
                        )
                    >
                        <div style="font-size: 24px; font-weight: 700;">{hero.title.clone()}</div>
                        <div style="font-size: 16px; opacity: 0.9;">{hero.subtitle.clone()}</div>
                    </a>
                    {(!rest.is_empty()).then(|| view! {
                        <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 12px;">
                            {rest.into_iter().map(|banner| view! {
                                <a
                                    href=banner.link_url.clone()
                                    style=format!(
                                        "display: block; border-radius: 8px; padding: 16px; color: white; text-decoration: none; background: #5c6bc0 center/cover url('{}');",
                                        banner.image_url
                                    )
                                >
                                    <div style="font-size: 16px; font-weight: 600;">{banner.title.clone()}</div>
                                    <div style="font-size: 13px; opacity: 0.9;">{banner.subtitle.clone()}</div>
                                </a>
                            }).collect_view()}
                        </div>
                    })}
                </div>
            }.into_any()
        }}
    }
}
