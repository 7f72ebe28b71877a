//! Типизированные конверты ответов mock REST API.
//!
//! Коллекции приходят в тегированных обертках `{"products": [...]}` и
//! `{"sales": [...]}`. Конверты строгие: неизвестное поле на верхнем уровне
//! или битая запись внутри — это ошибка разбора, а не "undefined" дальше
//! по коду.

use crate::domain::a001_product::Product;
use crate::domain::a002_sale::Sale;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

impl ProductsResponse {
    pub fn validate(&self) -> Result<(), String> {
        for product in &self.products {
            product.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalesResponse {
    pub sales: Vec<Sale>,
}

impl SalesResponse {
    pub fn validate(&self) -> Result<(), String> {
        for sale in &self.sales {
            sale.validate()?;
        }
        Ok(())
    }
}

/// Разобрать и провалидировать ответ `/api/products`
pub fn parse_products(text: &str) -> anyhow::Result<ProductsResponse> {
    let response: ProductsResponse =
        serde_json::from_str(text).context("malformed products payload")?;
    response.validate().map_err(anyhow::Error::msg)?;
    Ok(response)
}

/// Разобрать и провалидировать ответ `/api/sales`
pub fn parse_sales(text: &str) -> anyhow::Result<SalesResponse> {
    let response: SalesResponse = serde_json::from_str(text).context("malformed sales payload")?;
    response.validate().map_err(anyhow::Error::msg)?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTS_OK: &str = r#"{
        "products": [
            {
                "id": "6f1c1b2a-9c1d-4e2f-8a3b-5d6e7f8a9b0c",
                "code": "PRD-001",
                "description": "Café 1kg",
                "sku": "CAF-1KG",
                "stockLevel": 42,
                "marginPct": 31.5,
                "totalProfit": 1250.0,
                "salesHistory": [3.0, 5.0, 4.0, 8.0]
            }
        ]
    }"#;

    const SALES_OK: &str = r#"{
        "sales": [
            {
                "id": "0a6d3f44-1b2c-4d5e-9f00-112233445566",
                "code": "SAL-2025-001",
                "description": "Заказ интернет-магазина",
                "client": { "id": "c-17", "name": "Sweet Beans GmbH" },
                "saleDate": "2025-06-14",
                "items": [
                    { "name": "Café 1kg", "quantity": 2, "unitCost": 11.4, "totalCost": 22.8 }
                ],
                "financials": { "invoiced": 39.8 }
            }
        ]
    }"#;

    #[test]
    fn products_roundtrip() {
        let parsed = parse_products(PRODUCTS_OK).expect("well-formed payload");
        assert_eq!(parsed.products.len(), 1);
        assert_eq!(parsed.products[0].sku, "CAF-1KG");
        assert_eq!(parsed.products[0].sales_history.len(), 4);
        // метаданные опциональны в mock-ответе
        assert!(!parsed.products[0].base.metadata.is_deleted);
    }

    #[test]
    fn sales_roundtrip() {
        let parsed = parse_sales(SALES_OK).expect("well-formed payload");
        let sale = &parsed.sales[0];
        assert_eq!(sale.client.name, "Sweet Beans GmbH");
        assert_eq!(sale.total_quantity(), 2);
        assert_eq!(sale.sale_date.to_string(), "2025-06-14");
    }

    #[test]
    fn unknown_top_level_field_is_rejected() {
        let text = r#"{ "products": [], "total": 0 }"#;
        assert!(parse_products(text).is_err());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        // нет sku
        let text = r#"{
            "products": [
                {
                    "id": "6f1c1b2a-9c1d-4e2f-8a3b-5d6e7f8a9b0c",
                    "code": "PRD-001",
                    "description": "Café 1kg",
                    "stockLevel": 1,
                    "marginPct": 10.0,
                    "totalProfit": 0.0
                }
            ]
        }"#;
        assert!(parse_products(text).is_err());
    }

    #[test]
    fn invalid_row_fails_validation() {
        // продажа без строк проходит serde, но режется validate()
        let text = r#"{
            "sales": [
                {
                    "id": "0a6d3f44-1b2c-4d5e-9f00-112233445566",
                    "code": "SAL-2025-002",
                    "description": "",
                    "client": { "id": "c-17", "name": "Sweet Beans GmbH" },
                    "saleDate": "2025-06-14",
                    "items": [],
                    "financials": { "invoiced": 0.0 }
                }
            ]
        }"#;
        assert!(parse_sales(text).is_err());
    }

    #[test]
    fn bad_date_is_rejected() {
        let text = SALES_OK.replace("2025-06-14", "14.06.2025");
        assert!(parse_sales(&text).is_err());
    }
}
