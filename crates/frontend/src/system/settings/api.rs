//! Загрузка справочников настроек.
//!
//! Справочники приходят плоскими массивами (без конвертов); каждая запись
//! прогоняется через validate() своего агрегата.

use crate::shared::api_utils::api_url;
use contracts::domain::a003_sales_channel::SalesChannel;
use contracts::domain::a004_payment_method::PaymentMethod;
use contracts::domain::a005_supplier::Supplier;
use contracts::domain::a006_warehouse::Warehouse;
use contracts::domain::a007_erp_connection::ErpConnection;
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

async fn fetch_collection<T: DeserializeOwned>(collection: &str) -> Result<Vec<T>, String> {
    let url = api_url(&format!("/api/{}", collection));

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
    serde_json::from_str::<Vec<T>>(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_channels() -> Result<Vec<SalesChannel>, String> {
    let items = fetch_collection::<SalesChannel>(SalesChannel::collection_name()).await?;
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}

pub async fn fetch_payment_methods() -> Result<Vec<PaymentMethod>, String> {
    let items = fetch_collection::<PaymentMethod>(PaymentMethod::collection_name()).await?;
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    let items = fetch_collection::<Supplier>(Supplier::collection_name()).await?;
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}

pub async fn fetch_warehouses() -> Result<Vec<Warehouse>, String> {
    let items = fetch_collection::<Warehouse>(Warehouse::collection_name()).await?;
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}

pub async fn fetch_erp_connections() -> Result<Vec<ErpConnection>, String> {
    let items = fetch_collection::<ErpConnection>(ErpConnection::collection_name()).await?;
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}
