//! Декларативные SVG-графики для дашборда.
//!
//! Каждый компонент — чистая функция от props, без собственного состояния:
//! стор отдает серию, график её рисует.

pub mod bars;
pub mod line;
pub mod sparkline;

pub use bars::{BarChart, GroupedBars};
pub use line::LineChart;
pub use sparkline::Sparkline;
