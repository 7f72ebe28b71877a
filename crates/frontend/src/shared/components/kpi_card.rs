use crate::shared::icons::icon;
use leptos::prelude::*;

/// KpiCard - карточка показателя для дашборда
#[component]
pub fn KpiCard(
    /// Название показателя
    #[prop(into)]
    title: String,

    /// Отформатированное значение
    #[prop(into)]
    value: String,

    /// Подпись под значением (единицы, период)
    #[prop(optional, into)]
    hint: String,

    /// Имя иконки из shared::icons
    #[prop(optional, into)]
    icon_name: String,
) -> impl IntoView {
    view! {
        <div class="kpi-card" style="border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; background: #fff; min-width: 180px; flex: 1;">
            <div style="display: flex; align-items: center; justify-content: space-between; color: #6b7280; font-size: 13px;">
                <span>{title}</span>
                {if icon_name.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! { <span style="color: #9ca3af;">{icon(&icon_name)}</span> }.into_any()
                }}
            </div>
            <div style="font-size: 24px; font-weight: 600; margin-top: 6px; color: #111827;">
                {value}
            </div>
            {if hint.is_empty() {
                view! { <></> }.into_any()
            } else {
                view! {
                    <div style="font-size: 12px; color: #9ca3af; margin-top: 2px;">{hint}</div>
                }.into_any()
            }}
        </div>
    }
}
