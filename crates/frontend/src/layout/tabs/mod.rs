//! Tab management module
//!
//! Содержит:
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг tab.key → View (единственный источник правды)
//! - `strip` - полоса заголовков открытых табов
//! - `tab_labels` - единственный источник правды для заголовков табов

pub mod page;
pub mod registry;
pub mod strip;
pub mod tab_labels;

pub use page::TabPage;
pub use strip::TabStrip;
pub use tab_labels::tab_label_for_key;
