use crate::shared::api_utils::api_url;
use contracts::api::parse_sales;
use contracts::domain::a002_sale::Sale;
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;

/// Получить коллекцию продаж целиком
pub async fn fetch_sales() -> Result<Vec<Sale>, String> {
    let url = api_url(&format!("/api/{}", Sale::collection_name()));

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
    let parsed = parse_sales(&text).map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(parsed.sales)
}
