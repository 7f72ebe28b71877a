//! Вкладка подключений ERP.
//!
//! Чисто презентационная: список подключений без реального сетевого
//! протокола, кнопка подключения отключена.

use crate::system::settings::api::fetch_erp_connections;
use contracts::domain::a007_erp_connection::ErpConnection;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ErpTab() -> impl IntoView {
    let (items, set_items) = signal(Vec::<ErpConnection>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_erp_connections().await {
                Ok(data) => {
                    set_items.set(data);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("Не удалось загрузить подключения ERP: {e}");
                    set_error.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    load();

    view! {
        <div style="padding: 16px;">
            {move || error.get().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin-bottom: 8px; font-size: 15px;">{e}</div>
            })}

            {move || if is_loading.get() {
                view! { <div style="color: #666;">"Загрузка..."</div> }.into_any()
            } else {
                view! {
                    <div style="display: flex; flex-direction: column; gap: 10px;">
                        {items.get().into_iter().map(|connection| view! {
                            <div style="border: 1px solid #e5e7eb; border-radius: 8px; padding: 14px; display: flex; align-items: center; justify-content: space-between;">
                                <div>
                                    <div style="font-weight: 600; color: #111827;">{connection.base.description.clone()}</div>
                                    <div style="font-size: 13px; color: #6b7280; margin-top: 2px;">
                                        {connection.system.display_name()}
                                        " · "
                                        {connection.base_url.clone()}
                                    </div>
                                </div>
                                <div style="display: flex; align-items: center; gap: 10px;">
                                    <span style=move || format!(
                                        "font-size: 13px; color: {};",
                                        if connection.active { "#10b981" } else { "#9ca3af" }
                                    )>
                                        {if connection.active { "Подключено" } else { "Отключено" }}
                                    </span>
                                    // Интеграция презентационная, подключение недоступно
                                    <button class="button button--secondary" disabled=true>
                                        "Подключить"
                                    </button>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
