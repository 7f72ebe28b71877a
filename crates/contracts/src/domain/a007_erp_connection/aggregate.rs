use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErpConnectionId(pub Uuid);

impl ErpConnectionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ErpConnectionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ErpConnectionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Тип внешней ERP-системы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErpSystem {
    #[serde(rename = "1c")]
    C1,
    Sap,
    Odoo,
}

impl ErpSystem {
    pub fn display_name(&self) -> &'static str {
        match self {
            ErpSystem::C1 => "1С:Предприятие",
            ErpSystem::Sap => "SAP",
            ErpSystem::Odoo => "Odoo",
        }
    }
}

/// Подключение к ERP (агрегат)
///
/// Чисто презентационная сущность: UI показывает список подключений,
/// но сетевой протокол интеграции на клиенте не реализуется.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErpConnection {
    #[serde(flatten)]
    pub base: BaseAggregate<ErpConnectionId>,

    pub system: ErpSystem,

    #[serde(rename = "baseUrl")]
    pub base_url: String,

    pub active: bool,
}

impl ErpConnection {
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название подключения не может быть пустым".into());
        }
        if self.base_url.trim().is_empty() {
            return Err("Адрес сервера обязателен".into());
        }
        Ok(())
    }
}

impl AggregateRoot for ErpConnection {
    type Id = ErpConnectionId;
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
        "a007"
    }
    fn collection_name() -> &'static str {
        "erp_connections"
    }
    fn element_name() -> &'static str {
        "Подключение ERP"
    }
    fn list_name() -> &'static str {
        "Подключения ERP"
    }
    fn origin() -> Origin {
        Origin::Erp
    }
}
