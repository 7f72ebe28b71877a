use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для продажи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleId(pub Uuid);

impl SaleId {
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

impl AggregateId for SaleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SaleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Ссылка на клиента внутри продажи (денормализована для фильтрации по имени)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: String,
    pub name: String,
}

/// Строка продажи
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    /// Наименование позиции
    pub name: String,
    /// Количество
    pub quantity: i32,
    /// Себестоимость единицы
    #[serde(rename = "unitCost")]
    pub unit_cost: f64,
    /// Себестоимость строки
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
}

/// Финансовый блок продажи
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleFinancials {
    /// Выставлено по счету
    pub invoiced: f64,
}

/// Продажа (агрегат)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    #[serde(flatten)]
    pub base: BaseAggregate<SaleId>,

    /// Клиент
    pub client: ClientRef,

    /// Дата продажи (YYYY-MM-DD)
    #[serde(with = "serde_date")]
    #[serde(rename = "saleDate")]
    pub sale_date: chrono::NaiveDate,

    /// Строки продажи (порядок значим)
    pub items: Vec<SaleLine>,

    /// Финансы
    pub financials: SaleFinancials,
}

impl Sale {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Имя клиента содержит подстроку? Сравнение case-insensitive,
    /// `needle_lower` должен быть уже приведен к нижнему регистру.
    pub fn client_name_contains(&self, needle_lower: &str) -> bool {
        self.client.name.to_lowercase().contains(needle_lower)
    }

    /// Хоть одна позиция содержит подстроку в наименовании?
    pub fn any_item_contains(&self, needle_lower: &str) -> bool {
        self.items
            .iter()
            .any(|line| line.name.to_lowercase().contains(needle_lower))
    }

    /// Суммарное количество по всем строкам
    pub fn total_quantity(&self) -> i32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Суммарная себестоимость по всем строкам
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|line| line.total_cost).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.client.name.trim().is_empty() {
            return Err("Клиент обязателен".into());
        }
        if self.items.is_empty() {
            return Err("Продажа без строк не допускается".into());
        }
        for line in &self.items {
            if line.name.trim().is_empty() {
                return Err("Наименование позиции не может быть пустым".into());
            }
            if line.quantity < 0 {
                return Err("Количество не может быть отрицательным".into());
            }
        }
        // Сумма счета может быть нулевой (не выставлен), но не отрицательной
        if self.financials.invoiced < 0.0 {
            return Err("Сумма счета не может быть отрицательной".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Sale {
    type Id = SaleId;
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
        "a002"
    }
    fn collection_name() -> &'static str {
        "sales"
    }
    fn element_name() -> &'static str {
        "Продажа"
    }
    fn list_name() -> &'static str {
        "Продажи"
    }
    fn origin() -> Origin {
        Origin::Shop
    }
}

// Local serde helper for NaiveDate as YYYY-MM-DD
mod serde_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.format(FORMAT).to_string();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
