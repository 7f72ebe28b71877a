//! DTO сводки для дашборда D100 "Обзор".
//!
//! Ответ `/api/dashboard` — плоский объект с KPI и тремя сериями для
//! графиков. Схема строгая (`deny_unknown_fields`): нетипизированные KPI
//! из mock-источника сюда не просачиваются.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Выручка канала за период
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRevenue {
    pub channel: String,
    pub revenue: f64,
}

/// Точка серии "заказы против выручки" (агрегация по месяцу)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// YYYY-MM
    pub month: String,
    pub orders: u32,
    pub revenue: f64,
}

/// Точка серии маржинальности
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginPoint {
    /// YYYY-MM
    pub month: String,
    #[serde(rename = "marginPct")]
    pub margin_pct: f64,
}

/// Сводка показателей за выбранный период
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardSummary {
    /// Выручка за период
    pub revenue: f64,

    /// Количество заказов
    #[serde(rename = "ordersCount")]
    pub orders_count: u32,

    /// Средняя маржинальность, %
    #[serde(rename = "avgMarginPct")]
    pub avg_margin_pct: f64,

    /// Прибыль за период
    #[serde(rename = "totalProfit")]
    pub total_profit: f64,

    /// Выручка в разрезе каналов
    #[serde(rename = "revenueByChannel")]
    pub revenue_by_channel: Vec<ChannelRevenue>,

    /// Заказы и выручка по месяцам
    #[serde(rename = "ordersVsRevenue")]
    pub orders_vs_revenue: Vec<MonthlyPoint>,

    /// Динамика маржинальности по месяцам
    #[serde(rename = "marginTrend")]
    pub margin_trend: Vec<MarginPoint>,
}

impl DashboardSummary {
    pub fn validate(&self) -> Result<(), String> {
        if !self.revenue.is_finite() || !self.total_profit.is_finite() {
            return Err("KPI должны быть числами".into());
        }
        for entry in &self.revenue_by_channel {
            if entry.channel.trim().is_empty() {
                return Err("Канал без названия".into());
            }
        }
        for point in &self.orders_vs_revenue {
            if point.month.trim().is_empty() {
                return Err("Точка серии без месяца".into());
            }
        }
        for point in &self.margin_trend {
            if point.month.trim().is_empty() {
                return Err("Точка серии без месяца".into());
            }
        }
        Ok(())
    }
}

/// Разобрать и провалидировать ответ `/api/dashboard`
pub fn parse_summary(text: &str) -> anyhow::Result<DashboardSummary> {
    let summary: DashboardSummary =
        serde_json::from_str(text).context("malformed dashboard payload")?;
    summary.validate().map_err(anyhow::Error::msg)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY_OK: &str = r#"{
        "revenue": 125300.5,
        "ordersCount": 318,
        "avgMarginPct": 27.4,
        "totalProfit": 34200.0,
        "revenueByChannel": [
            { "channel": "Маркетплейс", "revenue": 80100.0 },
            { "channel": "Интернет-магазин", "revenue": 45200.5 }
        ],
        "ordersVsRevenue": [
            { "month": "2025-05", "orders": 150, "revenue": 60100.0 },
            { "month": "2025-06", "orders": 168, "revenue": 65200.5 }
        ],
        "marginTrend": [
            { "month": "2025-05", "marginPct": 26.1 },
            { "month": "2025-06", "marginPct": 28.7 }
        ]
    }"#;

    #[test]
    fn summary_roundtrip() {
        let summary = parse_summary(SUMMARY_OK).expect("well-formed payload");
        assert_eq!(summary.orders_count, 318);
        assert_eq!(summary.revenue_by_channel.len(), 2);
        assert_eq!(summary.margin_trend[1].margin_pct, 28.7);
    }

    #[test]
    fn unknown_kpi_field_is_rejected() {
        let text = SUMMARY_OK.replace(
            "\"revenue\": 125300.5,",
            "\"revenue\": 125300.5, \"conversion\": 0.031,",
        );
        assert!(parse_summary(&text).is_err());
    }

    #[test]
    fn missing_series_is_rejected() {
        let text = SUMMARY_OK.replace("\"marginTrend\"", "\"marginTrendX\"");
        assert!(parse_summary(&text).is_err());
    }
}
