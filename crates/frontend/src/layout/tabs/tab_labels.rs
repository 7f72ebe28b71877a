//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Для агрегатов заголовок берется из `AggregateRoot::list_name`,
//! для остальных (дашборд, настройки) — хардкод.

use contracts::domain::a001_product::Product;
use contracts::domain::a002_sale::Sale;
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d100_overview" => "Обзор",
        "a001_product" => Product::list_name(),
        "a002_sale" => Sale::list_name(),
        "settings" => "Настройки",
        _ => "Вкладка",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_tabs_use_contract_list_names() {
        assert_eq!(tab_label_for_key("a001_product"), "Каталог товаров");
        assert_eq!(tab_label_for_key("a002_sale"), "Продажи");
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(tab_label_for_key("nope"), "Вкладка");
    }
}
