use contracts::dashboards::d100_overview::DashboardSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_overview::api::fetch_summary;

/// Состояние сводки дашборда
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn start_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<DashboardSummary, String>) {
        self.loading = false;
        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.error = None;
            }
            Err(err) => {
                self.summary = None;
                self.error = Some(err);
            }
        }
    }
}

/// Стор сводки дашборда
#[derive(Clone, Copy)]
pub struct DashboardStore {
    pub state: RwSignal<DashboardState>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DashboardState::default()),
        }
    }

    /// Загрузить сводку за период (границы — календарные даты YYYY-MM-DD)
    pub fn fetch(&self, date_from: String, date_to: String) {
        let state = self.state;
        state.update(|s| s.start_fetch());
        spawn_local(async move {
            let result = fetch_summary(&date_from, &date_to).await;
            if let Err(err) = &result {
                log::error!("Не удалось загрузить сводку: {err}");
            }
            state.update(|s| s.finish_fetch(result));
        });
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_overview::parse_summary;

    #[test]
    fn fetch_failure_drops_summary_and_clears_loading() {
        let mut state = DashboardState::default();
        state.start_fetch();
        assert!(state.loading);
        state.finish_fetch(Err("HTTP 502".to_string()));
        assert!(!state.loading);
        assert!(state.summary.is_none());
        assert_eq!(state.error.as_deref(), Some("HTTP 502"));
    }

    #[test]
    fn fetch_success_replaces_summary() {
        let text = r#"{
            "revenue": 100.0,
            "ordersCount": 2,
            "avgMarginPct": 20.0,
            "totalProfit": 20.0,
            "revenueByChannel": [],
            "ordersVsRevenue": [],
            "marginTrend": []
        }"#;
        let summary = parse_summary(text).unwrap();
        let mut state = DashboardState::default();
        state.finish_fetch(Ok(summary));
        assert!(state.error.is_none());
        assert_eq!(state.summary.as_ref().unwrap().orders_count, 2);
    }
}
