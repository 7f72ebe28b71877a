use crate::system::settings::api::fetch_channels;
use contracts::domain::a003_sales_channel::SalesChannel;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ChannelsTab() -> impl IntoView {
    let (items, set_items) = signal(Vec::<SalesChannel>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_channels().await {
                Ok(data) => {
                    set_items.set(data);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("Не удалось загрузить каналы продаж: {e}");
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
                    <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                        <thead>
                            <tr style="border-bottom: 2px solid #ddd; text-align: left;">
                                <th style="padding: 8px;">"Название"</th>
                                <th style="padding: 8px;">"Тип"</th>
                                <th style="padding: 8px; text-align: right;">"Комиссия"</th>
                                <th style="padding: 8px; text-align: center;">"Активен"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {items.get().into_iter().map(|channel| view! {
                                <tr style="border-bottom: 1px solid #eee;">
                                    <td style="padding: 8px;">{channel.base.description.clone()}</td>
                                    <td style="padding: 8px;">{channel.kind.display_name()}</td>
                                    <td style="padding: 8px; text-align: right;">{format!("{:.1}%", channel.commission_pct)}</td>
                                    <td style="padding: 8px; text-align: center;">
                                        {if channel.active { "✓" } else { "—" }}
                                    </td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}
