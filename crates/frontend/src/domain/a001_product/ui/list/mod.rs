pub mod widget;

pub use widget::ProductList;
