//! Страница настроек с вкладками справочников

use super::tabs::{ChannelsTab, ErpTab, PaymentMethodsTab, SuppliersTab, WarehousesTab};
use contracts::domain::a003_sales_channel::SalesChannel;
use contracts::domain::a004_payment_method::PaymentMethod;
use contracts::domain::a005_supplier::Supplier;
use contracts::domain::a006_warehouse::Warehouse;
use contracts::domain::a007_erp_connection::ErpConnection;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Channels,
    Payments,
    Suppliers,
    Warehouses,
    Erp,
}

impl SettingsTab {
    fn caption(&self) -> &'static str {
        match self {
            SettingsTab::Channels => SalesChannel::list_name(),
            SettingsTab::Payments => PaymentMethod::list_name(),
            SettingsTab::Suppliers => Supplier::list_name(),
            SettingsTab::Warehouses => Warehouse::list_name(),
            SettingsTab::Erp => ErpConnection::list_name(),
        }
    }
}

const ALL_TABS: [SettingsTab; 5] = [
    SettingsTab::Channels,
    SettingsTab::Payments,
    SettingsTab::Suppliers,
    SettingsTab::Warehouses,
    SettingsTab::Erp,
];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(SettingsTab::Channels);

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 120px); overflow: hidden;">
            // Полоса вкладок
            <div style="display: flex; gap: 4px; padding: 10px 10px 0; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0;">
                {ALL_TABS.into_iter().map(|tab| {
                    let is_active = move || active_tab.get() == tab;
                    view! {
                        <button
                            style=move || format!(
                                "padding: 8px 14px; border: 1px solid #ddd; border-bottom: none; border-radius: 6px 6px 0 0; cursor: pointer; font-size: 14px; background: {}; color: {};",
                                if is_active() { "#fff" } else { "#ececec" },
                                if is_active() { "#111" } else { "#555" },
                            )
                            on:click=move |_| set_active_tab.set(tab)
                        >
                            {tab.caption()}
                        </button>
                    }
                }).collect_view()}
            </div>

            // Контент активной вкладки. Каждая вкладка грузит свой
            // справочник самостоятельно при первом показе.
            <div style="flex: 1; overflow-y: auto; background: #fff;">
                {move || match active_tab.get() {
                    SettingsTab::Channels => view! { <ChannelsTab /> }.into_any(),
                    SettingsTab::Payments => view! { <PaymentMethodsTab /> }.into_any(),
                    SettingsTab::Suppliers => view! { <SuppliersTab /> }.into_any(),
                    SettingsTab::Warehouses => view! { <WarehousesTab /> }.into_any(),
                    SettingsTab::Erp => view! { <ErpTab /> }.into_any(),
                }}
            </div>
        </div>
    }
}
