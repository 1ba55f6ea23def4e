use contracts::domain::incident::{Incident, IncidentStatus};
use gloo_net::http::Request;
use serde_json::json;

use crate::shared::api_utils::api_base;

/// Fetch all incidents; filtering, sorting and paging happen on the client
pub async fn fetch_incidents() -> Result<Vec<Incident>, String> {
    let response = Request::get(&format!("{}/api/admin/incidents", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch incidents: {}", response.status()));
    }

    response
        .json::<Vec<Incident>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Change incident status
pub async fn update_status(id: &str, status: IncidentStatus) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/admin/incidents/{}/status", api_base(), id))
        .json(&json!({ "status": status }))
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to update incident status: {}",
            response.status()
        ));
    }

    Ok(())
}
