use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для товара каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Товар каталога (агрегат)
///
/// `base.description` — торговое наименование товара.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    /// Артикул (SKU)
    pub sku: String,

    /// Остаток на складах, шт.
    #[serde(rename = "stockLevel")]
    pub stock_level: i32,

    /// Маржинальность, %
    #[serde(rename = "marginPct")]
    pub margin_pct: f64,

    /// Накопленная прибыль по товару
    #[serde(rename = "totalProfit")]
    pub total_profit: f64,

    /// История продаж — последние числовые замеры (для спарклайна)
    #[serde(rename = "salesHistory", default)]
    pub sales_history: Vec<f64>,
}

impl Product {
    pub fn new_for_insert(
        code: String,
        description: String,
        sku: String,
        stock_level: i32,
        margin_pct: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProductId::new_v4(), code, description),
            sku,
            stock_level,
            margin_pct,
            total_profit: 0.0,
            sales_history: Vec::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.sku.trim().is_empty() {
            return Err("Артикул обязателен".into());
        }
        if self.stock_level < 0 {
            return Err("Остаток не может быть отрицательным".into());
        }
        if !self.margin_pct.is_finite() {
            return Err("Маржа должна быть числом".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;
    fn id(&self) -> Self::Id {
        self.base.id
    }
    fn code(&self) -> &str {
        &self.base.code
    }
    fn description(&self) -> &str {
        &self.base.description
    }
    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }
    fn aggregate_index() -> &'static str {
        "a001"
    }
    fn collection_name() -> &'static str {
        "products"
    }
    fn element_name() -> &'static str {
        "Товар"
    }
    fn list_name() -> &'static str {
        "Каталог товаров"
    }
    fn origin() -> Origin {
        Origin::Shop
    }
}
