use contracts::domain::subcategory::{Subcategory, SubcategoryDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch all subcategories
pub async fn fetch_subcategories() -> Result<Vec<Subcategory>, String> {
    let response = Request::get(&format!("{}/api/admin/subcategories", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch subcategories: {}",
            response.status()
        ));
    }

    response
        .json::<Vec<Subcategory>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new subcategory, returns the new id
pub async fn create_subcategory(dto: SubcategoryDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/admin/subcategories", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to create subcategory: {}",
            response.status()
        ));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Update subcategory
pub async fn update_subcategory(dto: SubcategoryDto) -> Result<(), String> {
    let id = dto.id.clone().ok_or("Subcategory id is missing")?;

    let response = Request::put(&format!("{}/api/admin/subcategories/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to update subcategory: {}",
            response.status()
        ));
    }

    Ok(())
}

/// Delete subcategory
pub async fn delete_subcategory(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/admin/subcategories/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to delete subcategory: {}",
            response.status()
        ));
    }

    Ok(())
}
