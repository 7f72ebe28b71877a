pub mod charts;
pub mod date_range_picker;
pub mod filter_panel;
pub mod kpi_card;
pub mod table;

pub use date_range_picker::{DateRangePicker, RangeSelection};
pub use filter_panel::{FilterPanel, FilterTag};
pub use kpi_card::KpiCard;
