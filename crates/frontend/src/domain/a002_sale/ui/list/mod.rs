pub mod widget;

pub use widget::SaleList;
