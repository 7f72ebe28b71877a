//! Sidebar component with grouped menu items

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "analytics",
            label: "Аналитика",
            items: vec![("d100_overview", tab_label_for_key("d100_overview"), "bar-chart")],
        },
        MenuGroup {
            id: "references",
            label: "Справочники",
            items: vec![("a001_product", tab_label_for_key("a001_product"), "package")],
        },
        MenuGroup {
            id: "documents",
            label: "Документы",
            items: vec![("a002_sale", tab_label_for_key("a002_sale"), "shopping-cart")],
        },
        MenuGroup {
            id: "system",
            label: "Система",
            items: vec![("settings", tab_label_for_key("settings"), "settings")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="sidebar-group" data-group-id=group.id>
                        <div class="sidebar-group__label">{group.label}</div>
                        {group.items.into_iter().map(|(key, label, icon_name)| {
                            let is_active = move || {
                                tabs_store.active.get().as_deref() == Some(key)
                            };
                            view! {
                                <button
                                    class="sidebar-item"
                                    class:sidebar-item--active=is_active
                                    on:click=move |_| tabs_store.open_tab(key, label)
                                >
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
