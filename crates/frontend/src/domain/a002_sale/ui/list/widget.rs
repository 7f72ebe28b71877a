use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::table::number_format::format_money;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::stores::sales::{SalesFilter, SalesStore};
use leptos::prelude::*;
use std::collections::HashSet;

#[component]
pub fn SaleList() -> impl IntoView {
    let store =
        leptos::context::use_context::<SalesStore>().expect("SalesStore context not found");

    // Загрузка при монтировании, только если данных еще нет
    if store
        .state
        .with_untracked(|s| s.items.is_empty() && !s.loading)
    {
        store.fetch();
    }

    // Поля формы фильтров (до нажатия "Применить" коллекцию не трогают)
    let (query_input, set_query_input) = signal(String::new());
    let (company_input, set_company_input) = signal(String::new());
    let (product_input, set_product_input) = signal(String::new());

    let filter_expanded = RwSignal::new(true);

    // Раскрытые строки (показ позиций продажи)
    let (expanded_ids, set_expanded_ids) = signal(HashSet::<String>::new());

    let is_loading = move || store.state.with(|s| s.loading);
    let error = move || store.state.with(|s| s.error.clone());
    let active_filter = move || store.state.with(|s| s.filter.clone());
    let active_count = Signal::derive(move || active_filter().active_count());

    // Сужающая фильтрация: несовпавшие записи выбрасываются из коллекции
    // до следующей загрузки
    let apply_filters = move || {
        store.filter(SalesFilter {
            query: query_input.get_untracked(),
            company: company_input.get_untracked(),
            product: product_input.get_untracked(),
        });
    };

    // Полный сброс: re-fetch восстанавливает отброшенные записи
    let reset_filters = move || {
        set_query_input.set(String::new());
        set_company_input.set(String::new());
        set_product_input.set(String::new());
        store.clear_filters();
    };

    // Снятие одного критерия: re-fetch + повторное применение остальных
    let drop_criterion = move |which: &'static str| {
        let mut filter = store.state.with_untracked(|s| s.filter.clone());
        match which {
            "query" => {
                filter.query.clear();
                set_query_input.set(String::new());
            }
            "company" => {
                filter.company.clear();
                set_company_input.set(String::new());
            }
            _ => {
                filter.product.clear();
                set_product_input.set(String::new());
            }
        }
        store.refilter(filter);
    };

    let toggle_expanded = move |id: String| {
        set_expanded_ids.update(|ids| {
            if ids.contains(&id) {
                ids.remove(&id);
            } else {
                ids.insert(id);
            }
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 120px); overflow: hidden;">
            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_count
                summary=move || view! {
                    <div style="display: flex; gap: 15px; font-size: 14px; color: #666; align-items: center;">
                        <span>
                            "Показано: "
                            <strong style="color: #333;">{move || store.state.with(|s| s.items.len())}</strong>
                        </span>
                        <button class="button button--secondary" on:click=move |_| store.fetch()>
                            {icon("refresh")}
                            "Обновить"
                        </button>
                    </div>
                }.into_any()
                filter_content=move || view! {
                    <div style="display: flex; gap: 10px; align-items: flex-end; flex-wrap: wrap;">
                        <div>
                            <div style="font-size: 12px; color: #666; margin-bottom: 2px;">"Поиск (клиент или позиция)"</div>
                            <SearchInput
                                on_change=Callback::new(move |val: String| set_query_input.set(val))
                                placeholder="Например: caf"
                            />
                        </div>
                        <div>
                            <div style="font-size: 12px; color: #666; margin-bottom: 2px;">"Компания"</div>
                            <input
                                type="text"
                                style="width: 180px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                                prop:value=move || company_input.get()
                                on:input=move |ev| set_company_input.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <div style="font-size: 12px; color: #666; margin-bottom: 2px;">"Позиция"</div>
                            <input
                                type="text"
                                style="width: 180px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                                prop:value=move || product_input.get()
                                on:input=move |ev| set_product_input.set(event_target_value(&ev))
                            />
                        </div>
                        <button class="button button--primary" on:click=move |_| apply_filters()>
                            {icon("filter")}
                            "Применить"
                        </button>
                        <button class="button button--secondary" on:click=move |_| reset_filters()>
                            "Сбросить"
                        </button>
                    </div>
                }.into_any()
                filter_tags=move || {
                    let filter = active_filter();
                    let mut tags: Vec<AnyView> = Vec::new();
                    if !filter.query.trim().is_empty() {
                        tags.push(view! {
                            <FilterTag
                                label=format!("Поиск: {}", filter.query.trim())
                                on_remove=Callback::new(move |_| drop_criterion("query"))
                            />
                        }.into_any());
                    }
                    if !filter.company.trim().is_empty() {
                        tags.push(view! {
                            <FilterTag
                                label=format!("Компания: {}", filter.company.trim())
                                on_remove=Callback::new(move |_| drop_criterion("company"))
                            />
                        }.into_any());
                    }
                    if !filter.product.trim().is_empty() {
                        tags.push(view! {
                            <FilterTag
                                label=format!("Позиция: {}", filter.product.trim())
                                on_remove=Callback::new(move |_| drop_criterion("product"))
                            />
                        }.into_any());
                    }
                    view! { <div style="display: flex; gap: 6px; margin-top: 8px; flex-wrap: wrap;">{tags}</div> }.into_any()
                }
            />

            {move || error().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin: 8px; font-size: 15px; flex-shrink: 0;">{e}</div>
            })}

            {move || if is_loading() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">"Загрузка..."</div> }.into_any()
            } else {
                let items = store.state.with(|s| s.items.clone());
                let query = store.state.with(|s| s.filter.query.trim().to_string());
                view! {
                    <div style="flex: 1; overflow-y: auto; overflow-x: hidden;">
                        <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                            <thead style="position: sticky; top: 0; background: #f9f9f9; z-index: 10;">
                                <tr style="border-bottom: 2px solid #ddd;">
                                    <th style="padding: 10px 8px; text-align: left; width: 120px;">"Код"</th>
                                    <th style="padding: 10px 8px; text-align: left; width: 110px;">"Дата"</th>
                                    <th style="padding: 10px 8px; text-align: left;">"Клиент"</th>
                                    <th style="padding: 10px 8px; text-align: right; width: 90px;">"Позиций"</th>
                                    <th style="padding: 10px 8px; text-align: right; width: 90px;">"Кол-во"</th>
                                    <th style="padding: 10px 8px; text-align: right; width: 130px;">"Себестоимость"</th>
                                    <th style="padding: 10px 8px; text-align: right; width: 130px;">"Счет"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    if items.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="7" style="text-align: center; padding: 20px; color: #888;">
                                                    "Нет данных. Нажмите 'Обновить' или сбросьте фильтры."
                                                </td>
                                            </tr>
                                        }.into_any()
                                    } else {
                                        items.into_iter().enumerate().map(|(idx, sale)| {
                                            let bg_color = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                                            let sale_id = sale.to_string_id();
                                            let sale_id_for_check = sale_id.clone();
                                            let is_expanded = move || expanded_ids.get().contains(&sale_id_for_check);
                                            let query_for_row = query.clone();
                                            let lines = sale.items.clone();
                                            view! {
                                                <tr
                                                    style=format!("background: {}; border-bottom: 1px solid #eee; cursor: pointer;", bg_color)
                                                    on:click=move |_| toggle_expanded(sale_id.clone())
                                                >
                                                    <td style="padding: 8px;">{sale.base.code.clone()}</td>
                                                    <td style="padding: 8px;">{format_date(&sale.sale_date.to_string())}</td>
                                                    <td style="padding: 8px;">
                                                        {highlight_matches(&sale.client.name, &query_for_row)}
                                                    </td>
                                                    <td style="padding: 8px; text-align: right;">{sale.items.len()}</td>
                                                    <td style="padding: 8px; text-align: right;">{sale.total_quantity()}</td>
                                                    <td style="padding: 8px; text-align: right;">{format_money(sale.total_cost())}</td>
                                                    <td style="padding: 8px; text-align: right;">{format_money(sale.financials.invoiced)}</td>
                                                </tr>
                                                {move || if is_expanded() {
                                                    view! {
                                                        <tr style="background: #fcfcfd;">
                                                            <td colspan="7" style="padding: 4px 24px 10px;">
                                                                <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                                                                    <thead>
                                                                        <tr style="color: #888; border-bottom: 1px solid #eee;">
                                                                            <th style="padding: 4px 8px; text-align: left;">"Позиция"</th>
                                                                            <th style="padding: 4px 8px; text-align: right; width: 80px;">"Кол-во"</th>
                                                                            <th style="padding: 4px 8px; text-align: right; width: 110px;">"Цена закупки"</th>
                                                                            <th style="padding: 4px 8px; text-align: right; width: 110px;">"Сумма"</th>
                                                                        </tr>
                                                                    </thead>
                                                                    <tbody>
                                                                        {lines.iter().map(|line| view! {
                                                                            <tr>
                                                                                <td style="padding: 4px 8px;">{line.name.clone()}</td>
                                                                                <td style="padding: 4px 8px; text-align: right;">{line.quantity}</td>
                                                                                <td style="padding: 4px 8px; text-align: right;">{format_money(line.unit_cost)}</td>
                                                                                <td style="padding: 4px 8px; text-align: right;">{format_money(line.total_cost)}</td>
                                                                            </tr>
                                                                        }).collect_view()}
                                                                    </tbody>
                                                                </table>
                                                            </td>
                                                        </tr>
                                                    }.into_any()
                                                } else {
                                                    view! { <></> }.into_any()
                                                }}
                                            }
                                        }).collect_view().into_any()
                                    }
                                }
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
