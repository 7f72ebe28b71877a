use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Поставщик (агрегат)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(flatten)]
    pub base: BaseAggregate<SupplierId>,

    #[serde(rename = "contactEmail")]
    pub contact_email: String,

    pub phone: String,

    /// Срок поставки, дней
    #[serde(rename = "leadTimeDays")]
    pub lead_time_days: i32,
}

impl Supplier {
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название поставщика не может быть пустым".into());
        }
        if self.lead_time_days < 0 {
            return Err("Срок поставки не может быть отрицательным".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;
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
        "a005"
    }
    fn collection_name() -> &'static str {
        "suppliers"
    }
    fn element_name() -> &'static str {
        "Поставщик"
    }
    fn list_name() -> &'static str {
        "Поставщики"
    }
    fn origin() -> Origin {
        Origin::Manual
    }
}
