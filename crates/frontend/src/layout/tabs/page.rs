//! TabPage component - wrapper для отображения контента таба
//!
//! Отвечает за показ/скрытие контента в зависимости от активности таба
//! и вызов registry для получения контента по ключу.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Компонент-обёртка для отдельного таба.
///
/// Рендерит контент таба через `registry::render_tab_content` и управляет
/// видимостью через CSS class в зависимости от того, активен ли таб.
/// Контент создается один раз на открытие таба и живет до закрытия.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
