//! Контейнеры состояния, владеющие загруженными коллекциями.
//!
//! Каждый стор — `Copy`-структура из сигналов, создается корнем приложения
//! и раздается через Leptos context (никаких модульных синглтонов).
//! Чистые переходы состояния отделены от сигналов и покрыты тестами.

pub mod dashboard;
pub mod products;
pub mod sales;

pub use dashboard::DashboardStore;
pub use products::ProductsStore;
pub use sales::SalesStore;
