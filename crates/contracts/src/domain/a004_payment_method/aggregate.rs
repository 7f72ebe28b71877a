use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentMethodId(pub Uuid);

impl PaymentMethodId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for PaymentMethodId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PaymentMethodId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Способ оплаты (агрегат)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(flatten)]
    pub base: BaseAggregate<PaymentMethodId>,

    /// Платежный провайдер (например, "Stripe", "СБП")
    pub provider: String,

    /// Комиссия за операцию, %
    #[serde(rename = "feePct")]
    pub fee_pct: f64,

    pub active: bool,
}

impl PaymentMethod {
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название способа оплаты не может быть пустым".into());
        }
        if self.provider.trim().is_empty() {
            return Err("Провайдер обязателен".into());
        }
        if !(0.0..=100.0).contains(&self.fee_pct) {
            return Err("Комиссия должна быть в диапазоне 0..100".into());
        }
        Ok(())
    }
}

impl AggregateRoot for PaymentMethod {
    type Id = PaymentMethodId;
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
        "a004"
    }
    fn collection_name() -> &'static str {
        "payment_methods"
    }
    fn element_name() -> &'static str {
        "Способ оплаты"
    }
    fn list_name() -> &'static str {
        "Способы оплаты"
    }
    fn origin() -> Origin {
        Origin::Manual
    }
}
