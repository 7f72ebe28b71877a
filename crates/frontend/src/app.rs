use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::stores::{DashboardStore, ProductsStore, SalesStore};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Глобальный контекст вкладок и сторы данных создаются корнем
    // приложения и раздаются вниз через context.
    provide_context(AppGlobalContext::new());
    provide_context(ProductsStore::new());
    provide_context(SalesStore::new());
    provide_context(DashboardStore::new());

    view! {
        <AppShell />
    }
}
