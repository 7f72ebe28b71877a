use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarehouseId(pub Uuid);

impl WarehouseId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for WarehouseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(WarehouseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Склад (агрегат)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    #[serde(flatten)]
    pub base: BaseAggregate<WarehouseId>,

    /// Адрес/локация
    pub location: String,

    /// Вместимость, единиц хранения
    pub capacity: i32,
}

impl Warehouse {
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название склада не может быть пустым".into());
        }
        if self.capacity < 0 {
            return Err("Вместимость не может быть отрицательной".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Warehouse {
    type Id = WarehouseId;
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
        "a006"
    }
    fn collection_name() -> &'static str {
        "warehouses"
    }
    fn element_name() -> &'static str {
        "Склад"
    }
    fn list_name() -> &'static str {
        "Склады"
    }
    fn origin() -> Origin {
        Origin::Manual
    }
}
