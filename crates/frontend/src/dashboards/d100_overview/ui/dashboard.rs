use crate::shared::components::charts::{BarChart, GroupedBars, LineChart};
use crate::shared::components::date_range_picker::{DateRangePicker, RangeSelection};
use crate::shared::components::kpi_card::KpiCard;
use crate::shared::components::table::number_format::{
    format_money, format_number_int, format_pct,
};
use crate::shared::date_utils::format_month;
use crate::stores::dashboard::DashboardStore;
use chrono::{Datelike, Utc};
use leptos::prelude::*;

/// Дашборд D100 "Обзор": KPI-карточки и графики за выбранный период
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let store = leptos::context::use_context::<DashboardStore>()
        .expect("DashboardStore context not found");

    // По умолчанию — текущий месяц
    let now = Utc::now().date_naive();
    let selection = RwSignal::new(
        RangeSelection::full_month(now.year(), now.month()).unwrap_or_default(),
    );

    // Перезагрузка сводки при каждом полном диапазоне
    Effect::new(move |_| {
        let sel = selection.get();
        let (Some(start), Some(end)) = (sel.start, sel.end) else {
            return;
        };
        store.fetch(
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        );
    });

    let is_loading = move || store.state.with(|s| s.loading);
    let error = move || store.state.with(|s| s.error.clone());
    let summary = move || store.state.with(|s| s.summary.clone());

    view! {
        <div style="padding: 16px; display: flex; flex-direction: column; gap: 16px; overflow-y: auto; height: calc(100vh - 120px);">
            <div style="display: flex; align-items: flex-start; justify-content: space-between; flex-wrap: wrap; gap: 12px;">
                <h2 style="margin: 0; font-size: 18px; color: #111827;">"Обзор продаж"</h2>
                <DateRangePicker selection=selection />
            </div>

            {move || error().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; font-size: 15px;">
                    <strong>"Ошибка: "</strong>
                    {e}
                </div>
            })}

            {move || if is_loading() {
                view! { <div style="text-align: center; padding: 40px; color: #666;">"Загрузка данных..."</div> }.into_any()
            } else if let Some(summary) = summary() {
                let channels: Vec<(String, f64)> = summary
                    .revenue_by_channel
                    .iter()
                    .map(|entry| (entry.channel.clone(), entry.revenue))
                    .collect();
                let orders_revenue: Vec<(String, f64, f64)> = summary
                    .orders_vs_revenue
                    .iter()
                    .map(|point| (format_month(&point.month), point.orders as f64, point.revenue))
                    .collect();
                let margins: Vec<(String, f64)> = summary
                    .margin_trend
                    .iter()
                    .map(|point| (format_month(&point.month), point.margin_pct))
                    .collect();

                view! {
                    // KPI-карточки
                    <div style="display: flex; gap: 12px; flex-wrap: wrap;">
                        <KpiCard
                            title="Выручка"
                            value=format_money(summary.revenue)
                            hint="за период"
                            icon_name="bar-chart"
                        />
                        <KpiCard
                            title="Заказы"
                            value=format_number_int(summary.orders_count as f64)
                            hint="за период"
                            icon_name="shopping-cart"
                        />
                        <KpiCard
                            title="Средняя маржа"
                            value=format_pct(summary.avg_margin_pct)
                            hint="по всем каналам"
                            icon_name="store"
                        />
                        <KpiCard
                            title="Прибыль"
                            value=format_money(summary.total_profit)
                            hint="за период"
                            icon_name="credit-card"
                        />
                    </div>

                    // Графики
                    <div style="display: flex; gap: 12px; flex-wrap: wrap; align-items: stretch;">
                        <BarChart
                            title="Выручка по каналам"
                            data=channels
                        />
                        <GroupedBars
                            title="Заказы и выручка"
                            data=orders_revenue
                            left_legend="Заказы"
                            right_legend="Выручка"
                        />
                        <LineChart
                            title="Динамика маржинальности"
                            data=margins
                            unit="%"
                        />
                    </div>
                }.into_any()
            } else {
                view! {
                    <div style="text-align: center; padding: 40px; color: #888;">
                        "Нет данных за выбранный период"
                    </div>
                }.into_any()
            }}
        </div>
    }
}
