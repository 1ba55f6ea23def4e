use contracts::domain::promo::PromoBanner;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch promo banners; liveness filtering happens on the client
pub async fn fetch_banners() -> Result<Vec<PromoBanner>, String> {
    let response = Request::get(&format!("{}/api/catalog/banners", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch banners: {}", response.status()));
    }

    response
        .json::<Vec<PromoBanner>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
