//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::dashboards::d100_overview::ui::OverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_sale::ui::list::SaleList;
use crate::system::settings::SettingsPage;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a001_product", "settings")
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d100_overview" => view! { <OverviewDashboard /> }.into_any(),
        "a001_product" => view! { <ProductList /> }.into_any(),
        "a002_sale" => view! { <SaleList /> }.into_any(),
        "settings" => view! { <SettingsPage /> }.into_any(),
        unknown => view! {
            <div style="padding: 20px; color: #888;">
                {format!("Неизвестная вкладка: {unknown}")}
            </div>
        }
        .into_any(),
    }
}
