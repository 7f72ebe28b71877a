use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use crate::domain::a001_product::api::fetch_products;

/// Поле сортировки каталога
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductSortField {
    Name,
    Sku,
    Stock,
    Margin,
    Profit,
}

/// Состояние каталога товаров.
///
/// `items` — мастер-копия последней загрузки; сортировка никогда её не
/// переставляет, отсортированный список всегда строится заново
/// (`sorted_view`), поэтому пересортировка по другому полю всегда возможна.
#[derive(Clone, Debug)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub sort_field: Option<ProductSortField>,
    pub sort_ascending: bool,
}

impl Default for ProductsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            sort_field: None,
            sort_ascending: true,
        }
    }
}

impl ProductsState {
    pub fn start_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Product>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items = Vec::new();
                self.error = Some(err);
            }
        }
    }

    /// Повторный выбор того же поля переключает направление,
    /// новое поле выбирается по возрастанию.
    pub fn toggle_sort(&mut self, field: ProductSortField) {
        if self.sort_field == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field);
            self.sort_ascending = true;
        }
    }

    /// Производное представление: перестановка мастер-копии
    pub fn sorted_view(&self) -> Vec<Product> {
        let mut view = self.items.clone();
        if let Some(field) = self.sort_field {
            let ascending = self.sort_ascending;
            view.sort_by(|a, b| {
                let cmp = compare_by_field(a, b, field);
                if ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            });
        }
        view
    }
}

fn compare_by_field(a: &Product, b: &Product, field: ProductSortField) -> Ordering {
    match field {
        ProductSortField::Name => a
            .base
            .description
            .to_lowercase()
            .cmp(&b.base.description.to_lowercase()),
        ProductSortField::Sku => a.sku.cmp(&b.sku),
        ProductSortField::Stock => a.stock_level.cmp(&b.stock_level),
        ProductSortField::Margin => a.margin_pct.total_cmp(&b.margin_pct),
        ProductSortField::Profit => a.total_profit.total_cmp(&b.total_profit),
    }
}

/// Стор каталога: загрузка и сортировка
#[derive(Clone, Copy)]
pub struct ProductsStore {
    pub state: RwSignal<ProductsState>,
}

impl ProductsStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ProductsState::default()),
        }
    }

    pub fn fetch(&self) {
        let state = self.state;
        state.update(|s| s.start_fetch());
        spawn_local(async move {
            let result = fetch_products().await;
            if let Err(err) = &result {
                log::error!("Не удалось загрузить каталог: {err}");
            }
            state.update(|s| s.finish_fetch(result));
        });
    }

    pub fn toggle_sort(&self, field: ProductSortField) {
        self.state.update(|s| s.toggle_sort(field));
    }
}

impl Default for ProductsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, sku: &str, stock: i32, margin: f64) -> Product {
        Product::new_for_insert(
            format!("PRD-{sku}"),
            name.to_string(),
            sku.to_string(),
            stock,
            margin,
        )
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("Чай зеленый 500г", "TEA-500", 12, 22.0),
            product("Café 1kg", "CAF-1KG", 42, 31.5),
            product("Сироп ваниль", "SYR-VAN", 3, 18.0),
        ]
    }

    #[test]
    fn fetch_failure_leaves_empty_collection_and_clears_loading() {
        let mut state = ProductsState::default();
        state.start_fetch();
        state.finish_fetch(Err("fetch failed".to_string()));
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert!(state.error.is_some());
    }

    #[test]
    fn toggle_twice_flips_direction_on_same_field() {
        let mut state = ProductsState::default();
        state.toggle_sort(ProductSortField::Margin);
        assert_eq!(state.sort_field, Some(ProductSortField::Margin));
        assert!(state.sort_ascending);
        state.toggle_sort(ProductSortField::Margin);
        assert!(!state.sort_ascending);
    }

    #[test]
    fn switching_field_resets_to_ascending() {
        let mut state = ProductsState::default();
        state.toggle_sort(ProductSortField::Margin);
        state.toggle_sort(ProductSortField::Margin);
        assert!(!state.sort_ascending);
        state.toggle_sort(ProductSortField::Stock);
        assert_eq!(state.sort_field, Some(ProductSortField::Stock));
        assert!(state.sort_ascending);
    }

    #[test]
    fn sorting_is_a_derived_view() {
        let mut state = ProductsState::default();
        state.finish_fetch(Ok(fixture()));
        state.toggle_sort(ProductSortField::Stock);
        let sorted = state.sorted_view();
        let stocks: Vec<i32> = sorted.iter().map(|p| p.stock_level).collect();
        assert_eq!(stocks, vec![3, 12, 42]);
        // мастер-копия не тронута — пересортировка по другому полю работает
        assert_eq!(state.items[0].sku, "TEA-500");
        state.toggle_sort(ProductSortField::Sku);
        let resorted = state.sorted_view();
        assert_eq!(resorted[0].sku, "CAF-1KG");
    }

    #[test]
    fn unset_sort_preserves_fetch_order() {
        let mut state = ProductsState::default();
        state.finish_fetch(Ok(fixture()));
        let view = state.sorted_view();
        assert_eq!(view[0].sku, "TEA-500");
        assert_eq!(view[2].sku, "SYR-VAN");
    }
}
