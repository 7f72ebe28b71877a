use serde::{Deserialize, Serialize};

/// Источник данных для агрегата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Витрина магазина (mock REST)
    Shop,
    /// Внешняя ERP-система
    Erp,
    /// Введено вручную в настройках
    Manual,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Shop => "shop",
            Origin::Erp => "erp",
            Origin::Manual => "manual",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
