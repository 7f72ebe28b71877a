use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_overview::{parse_summary, DashboardSummary};
use gloo_net::http::Request;

/// Получить сводку показателей за период
pub async fn fetch_summary(date_from: &str, date_to: &str) -> Result<DashboardSummary, String> {
    let url = api_url(&format!(
        "/api/dashboard?from={}&to={}",
        date_from, date_to
    ));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    parse_summary(&text).map_err(|e| format!("Failed to parse response: {}", e))
}
