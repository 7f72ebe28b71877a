pub mod dto;

pub use dto::{parse_summary, ChannelRevenue, DashboardSummary, MarginPoint, MonthlyPoint};
