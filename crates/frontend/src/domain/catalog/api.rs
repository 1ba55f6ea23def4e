use contracts::domain::category::Category;
use contracts::domain::product::Product;
use contracts::shared::paging::PagedResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch one page of the catalog; the backend does filtering and paging
pub async fn fetch_products(
    page: usize,
    page_size: usize,
    search: &str,
) -> Result<PagedResponse<Product>, String> {
    let mut url = format!(
        "{}/api/catalog/products?page={}&pageSize={}",
        api_base(),
        page,
        page_size
    );
    let search = search.trim();
    if !search.is_empty() {
        url.push_str(&format!("&search={}", urlencoding::encode(search)));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    response
        .json::<PagedResponse<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch catalog categories (reference data for selects and navigation)
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&format!("{}/api/catalog/categories", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: {}", response.status()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
