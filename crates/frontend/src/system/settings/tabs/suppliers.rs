use crate::system::settings::api::fetch_suppliers;
use contracts::domain::a005_supplier::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SuppliersTab() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Supplier>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_suppliers().await {
                Ok(data) => {
                    set_items.set(data);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("Не удалось загрузить поставщиков: {e}");
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
                                <th style="padding: 8px;">"E-mail"</th>
                                <th style="padding: 8px;">"Телефон"</th>
                                <th style="padding: 8px; text-align: right;">"Срок поставки, дн."</th>
                            </tr>
                        </thead>
                        <tbody>
                            {items.get().into_iter().map(|supplier| view! {
                                <tr style="border-bottom: 1px solid #eee;">
                                    <td style="padding: 8px;">{supplier.base.description.clone()}</td>
                                    <td style="padding: 8px;">{supplier.contact_email.clone()}</td>
                                    <td style="padding: 8px;">{supplier.phone.clone()}</td>
                                    <td style="padding: 8px; text-align: right;">{supplier.lead_time_days}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}
