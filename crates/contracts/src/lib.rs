pub mod api;
pub mod dashboards;
pub mod domain;
