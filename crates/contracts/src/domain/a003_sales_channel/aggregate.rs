use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalesChannelId(pub Uuid);

impl SalesChannelId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for SalesChannelId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SalesChannelId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Тип канала продаж
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Marketplace,
    Webshop,
    Pos,
}

impl ChannelKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChannelKind::Marketplace => "Маркетплейс",
            ChannelKind::Webshop => "Интернет-магазин",
            ChannelKind::Pos => "Розничная точка",
        }
    }
}

/// Канал продаж (агрегат)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesChannel {
    #[serde(flatten)]
    pub base: BaseAggregate<SalesChannelId>,

    pub kind: ChannelKind,

    /// Комиссия канала, %
    #[serde(rename = "commissionPct")]
    pub commission_pct: f64,

    /// Канал активен
    pub active: bool,
}

impl SalesChannel {
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название канала не может быть пустым".into());
        }
        if !(0.0..=100.0).contains(&self.commission_pct) {
            return Err("Комиссия должна быть в диапазоне 0..100".into());
        }
        Ok(())
    }
}

impl AggregateRoot for SalesChannel {
    type Id = SalesChannelId;
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
        "a003"
    }
    fn collection_name() -> &'static str {
        "sales_channels"
    }
    fn element_name() -> &'static str {
        "Канал продаж"
    }
    fn list_name() -> &'static str {
        "Каналы продаж"
    }
    fn origin() -> Origin {
        Origin::Manual
    }
}
