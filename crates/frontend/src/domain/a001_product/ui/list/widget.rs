use crate::shared::components::charts::Sparkline;
use crate::shared::components::table::number_format::{format_money, format_pct};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use crate::stores::products::{ProductSortField, ProductsStore};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

#[component]
pub fn ProductList() -> impl IntoView {
    let store = leptos::context::use_context::<ProductsStore>()
        .expect("ProductsStore context not found");

    // Локальный быстрый фильтр — производное представление, коллекцию
    // в сторе не трогает (в отличие от фильтра продаж)
    let (filter_text, set_filter_text) = signal(String::new());

    // Загрузка при монтировании, только если данных еще нет
    if store
        .state
        .with_untracked(|s| s.items.is_empty() && !s.loading)
    {
        store.fetch();
    }

    let is_loading = move || store.state.with(|s| s.loading);
    let error = move || store.state.with(|s| s.error.clone());

    // Отсортированное и отфильтрованное представление мастер-копии
    let visible_items = move || {
        let filter = filter_text.get().to_lowercase();
        let sorted = store.state.with(|s| s.sorted_view());
        if filter.is_empty() {
            return sorted;
        }
        sorted
            .into_iter()
            .filter(|item: &Product| {
                item.base.description.to_lowercase().contains(&filter)
                    || item.sku.to_lowercase().contains(&filter)
            })
            .collect()
    };

    let sort_header = move |field: ProductSortField, label: &'static str| {
        let indicator = move || {
            store.state.with(|s| {
                get_sort_indicator(s.sort_field == Some(field), s.sort_ascending)
            })
        };
        view! {
            <th
                style="padding: 10px 8px; text-align: left; cursor: pointer; user-select: none;"
                on:click=move |_| store.toggle_sort(field)
            >
                {label}
                {indicator}
            </th>
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 120px); overflow: hidden;">
            // Toolbar
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center;">
                <SearchInput
                    on_change=Callback::new(move |val: String| set_filter_text.set(val))
                    placeholder="Поиск по наименованию или артикулу..."
                />
                <button class="button button--secondary" on:click=move |_| store.fetch()>
                    {icon("refresh")}
                    "Обновить"
                </button>

                <div style="margin-left: auto; font-size: 14px; color: #666;">
                    "Всего: "
                    <strong style="color: #333;">{move || visible_items().len()}</strong>
                </div>
            </div>

            {move || error().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin: 8px; font-size: 15px; flex-shrink: 0;">{e}</div>
            })}

            {move || if is_loading() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">"Загрузка..."</div> }.into_any()
            } else {
                let items = visible_items();
                view! {
                    <div style="flex: 1; overflow-y: auto; overflow-x: hidden;">
                        <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                            <thead style="position: sticky; top: 0; background: #f9f9f9; z-index: 10;">
                                <tr style="border-bottom: 2px solid #ddd;">
                                    {sort_header(ProductSortField::Name, "Наименование ")}
                                    {sort_header(ProductSortField::Sku, "Артикул ")}
                                    {sort_header(ProductSortField::Stock, "Остаток ")}
                                    {sort_header(ProductSortField::Margin, "Маржа ")}
                                    {sort_header(ProductSortField::Profit, "Прибыль ")}
                                    <th style="padding: 10px 8px; text-align: left;">"Продажи"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    if items.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="6" style="text-align: center; padding: 20px; color: #888;">
                                                    {if store.state.with_untracked(|s| s.items.is_empty()) {
                                                        "Нет данных. Нажмите 'Обновить'."
                                                    } else {
                                                        "По фильтру ничего не найдено"
                                                    }}
                                                </td>
                                            </tr>
                                        }.into_any()
                                    } else {
                                        items.into_iter().enumerate().map(|(idx, item)| {
                                            let bg_color = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                                            let low_stock = item.stock_level < 5;
                                            view! {
                                                <tr style=format!("background: {}; border-bottom: 1px solid #eee;", bg_color)>
                                                    <td style="padding: 8px;" title=item.base.description.clone()>{item.base.description.clone()}</td>
                                                    <td style="padding: 8px;">{item.sku.clone()}</td>
                                                    <td style=move || if low_stock {
                                                        "padding: 8px; color: #c33; font-weight: 600;"
                                                    } else {
                                                        "padding: 8px;"
                                                    }>
                                                        {item.stock_level}
                                                    </td>
                                                    <td style="padding: 8px;">{format_pct(item.margin_pct)}</td>
                                                    <td style="padding: 8px;">{format_money(item.total_profit)}</td>
                                                    <td style="padding: 8px;">
                                                        <Sparkline values=item.sales_history.clone() />
                                                    </td>
                                                </tr>
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
