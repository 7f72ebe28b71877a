//! Вкладки страницы настроек
//!
//! Каждая вкладка — отдельный файл со своей загрузкой и таблицей.

mod channels;
mod erp;
mod payment_methods;
mod suppliers;
mod warehouses;

pub use channels::ChannelsTab;
pub use erp::ErpTab;
pub use payment_methods::PaymentMethodsTab;
pub use suppliers::SuppliersTab;
pub use warehouses::WarehousesTab;
