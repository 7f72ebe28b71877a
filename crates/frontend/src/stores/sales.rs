use contracts::domain::a002_sale::Sale;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_sale::api::fetch_sales;

/// Критерии фильтрации продаж. Живут только как состояние UI,
/// никуда не сохраняются.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalesFilter {
    /// Свободный поиск: имя клиента ИЛИ наименование позиции
    pub query: String,
    /// Подстрока имени компании-клиента
    pub company: String,
    /// Подстрока наименования позиции
    pub product: String,
}

impl SalesFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.company.trim().is_empty()
            && self.product.trim().is_empty()
    }

    /// Количество заполненных критериев (для badge на панели фильтров)
    pub fn active_count(&self) -> usize {
        [&self.query, &self.company, &self.product]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .count()
    }

    /// Продажа проходит фильтр? Все критерии соединяются по AND,
    /// сравнение подстрок case-insensitive.
    pub fn matches(&self, sale: &Sale) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty()
            && !sale.client_name_contains(&query)
            && !sale.any_item_contains(&query)
        {
            return false;
        }

        let company = self.company.trim().to_lowercase();
        if !company.is_empty() && !sale.client_name_contains(&company) {
            return false;
        }

        let product = self.product.trim().to_lowercase();
        if !product.is_empty() && !sale.any_item_contains(&product) {
            return false;
        }

        true
    }
}

/// Состояние коллекции продаж
#[derive(Clone, Debug, Default)]
pub struct SalesState {
    pub items: Vec<Sale>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: SalesFilter,
}

impl SalesState {
    pub fn start_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Завершение загрузки: успех замещает коллекцию целиком и сбрасывает
    /// фильтр, ошибка оставляет коллекцию пустой.
    pub fn finish_fetch(&mut self, result: Result<Vec<Sale>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.filter = SalesFilter::default();
                self.error = None;
            }
            Err(err) => {
                self.items = Vec::new();
                self.error = Some(err);
            }
        }
    }

    /// Сужает коллекцию по критериям. Операция необратима до следующей
    /// загрузки: несовпавшие записи выбрасываются, а не прячутся, поэтому
    /// единственный путь назад — re-fetch (см. `SalesStore::clear_filters`).
    /// Пустые критерии — no-op.
    pub fn apply_filter(&mut self, filter: SalesFilter) {
        if filter.is_empty() {
            return;
        }
        self.items.retain(|sale| filter.matches(sale));
        self.filter = filter;
    }
}

/// Стор продаж: загрузка, сужающая фильтрация, сброс через re-fetch
#[derive(Clone, Copy)]
pub struct SalesStore {
    pub state: RwSignal<SalesState>,
}

impl SalesStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SalesState::default()),
        }
    }

    /// Загрузить коллекцию целиком. Параллельные вызовы не дедуплицируются:
    /// побеждает тот, который завершится последним.
    pub fn fetch(&self) {
        let state = self.state;
        state.update(|s| s.start_fetch());
        spawn_local(async move {
            let result = fetch_sales().await;
            if let Err(err) = &result {
                log::error!("Не удалось загрузить продажи: {err}");
            }
            state.update(|s| s.finish_fetch(result));
        });
    }

    pub fn filter(&self, filter: SalesFilter) {
        self.state.update(|s| s.apply_filter(filter));
    }

    /// Единственный способ вернуть отброшенные фильтром записи
    pub fn clear_filters(&self) {
        self.fetch();
    }

    /// Ослабление критериев (снятие chip'а): восстановление возможно только
    /// через re-fetch, поэтому полная перезагрузка + повторное сужение
    /// по оставшимся критериям.
    pub fn refilter(&self, filter: SalesFilter) {
        let state = self.state;
        state.update(|s| s.start_fetch());
        spawn_local(async move {
            let result = fetch_sales().await;
            if let Err(err) = &result {
                log::error!("Не удалось загрузить продажи: {err}");
            }
            state.update(|s| {
                s.finish_fetch(result);
                s.apply_filter(filter);
            });
        });
    }
}

impl Default for SalesStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_sale::{ClientRef, SaleFinancials, SaleId, SaleLine};
    use contracts::domain::common::BaseAggregate;

    fn sale(code: &str, client: &str, item_names: &[&str]) -> Sale {
        Sale {
            base: BaseAggregate::new(SaleId::new_v4(), code.to_string(), format!("Заказ {code}")),
            client: ClientRef {
                id: format!("c-{code}"),
                name: client.to_string(),
            },
            sale_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            items: item_names
                .iter()
                .map(|name| SaleLine {
                    name: name.to_string(),
                    quantity: 1,
                    unit_cost: 10.0,
                    total_cost: 10.0,
                })
                .collect(),
            financials: SaleFinancials { invoiced: 15.0 },
        }
    }

    fn fixture() -> Vec<Sale> {
        vec![
            sale("001", "Sweet Beans GmbH", &["Café 1kg", "Filtro de papel"]),
            sale("002", "Teehaus Nord", &["Чай зеленый 500г"]),
            sale("003", "Cafeteria Sol", &["Сироп ваниль"]),
        ]
    }

    #[test]
    fn fetch_failure_leaves_empty_collection_and_clears_loading() {
        let mut state = SalesState::default();
        state.start_fetch();
        assert!(state.loading);
        state.finish_fetch(Err("HTTP 500".to_string()));
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn fetch_success_replaces_collection_wholesale() {
        let mut state = SalesState::default();
        state.finish_fetch(Ok(fixture()));
        assert_eq!(state.items.len(), 3);
        state.finish_fetch(Ok(vec![sale("004", "Sweet Beans GmbH", &["Café 1kg"])]));
        assert_eq!(state.items.len(), 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn empty_criteria_is_a_noop() {
        let mut state = SalesState::default();
        state.finish_fetch(Ok(fixture()));
        state.apply_filter(SalesFilter::default());
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn query_matches_client_or_item_name() {
        let mut state = SalesState::default();
        state.finish_fetch(Ok(fixture()));
        // "caf" находит и позицию "Café 1kg", и клиента "Cafeteria Sol"
        state.apply_filter(SalesFilter {
            query: "caf".to_string(),
            ..Default::default()
        });
        let codes: Vec<&str> = state.items.iter().map(|s| s.base.code.as_str()).collect();
        assert_eq!(codes, vec!["001", "003"]);
    }

    #[test]
    fn criteria_conjoin() {
        let mut state = SalesState::default();
        state.finish_fetch(Ok(fixture()));
        state.apply_filter(SalesFilter {
            query: "caf".to_string(),
            company: "sweet".to_string(),
            ..Default::default()
        });
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].base.code, "001");
    }

    #[test]
    fn product_criterion_scans_line_items() {
        let mut state = SalesState::default();
        state.finish_fetch(Ok(fixture()));
        state.apply_filter(SalesFilter {
            product: "чай".to_string(),
            ..Default::default()
        });
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].client.name, "Teehaus Nord");
    }

    #[test]
    fn narrowing_is_monotonic_until_refetch() {
        let mut state = SalesState::default();
        state.finish_fetch(Ok(fixture()));
        state.apply_filter(SalesFilter {
            query: "caf".to_string(),
            ..Default::default()
        });
        assert_eq!(state.items.len(), 2);
        // повторный фильтр сужает уже суженное, отброшенное не возвращается
        state.apply_filter(SalesFilter {
            query: "cafeteria".to_string(),
            ..Default::default()
        });
        assert_eq!(state.items.len(), 1);
        // и только re-fetch восстанавливает полную коллекцию
        state.finish_fetch(Ok(fixture()));
        assert_eq!(state.items.len(), 3);
        assert!(state.filter.is_empty());
    }

    #[test]
    fn refetch_then_filter_recovers_weakened_criteria() {
        let mut state = SalesState::default();
        state.finish_fetch(Ok(fixture()));
        state.apply_filter(SalesFilter {
            query: "caf".to_string(),
            company: "sweet".to_string(),
            ..Default::default()
        });
        assert_eq!(state.items.len(), 1);
        // снятие критерия company: перезагрузка + повторное сужение
        state.finish_fetch(Ok(fixture()));
        state.apply_filter(SalesFilter {
            query: "caf".to_string(),
            ..Default::default()
        });
        assert_eq!(state.items.len(), 2);
    }
}
