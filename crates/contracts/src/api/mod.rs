pub mod envelope;

pub use envelope::{parse_products, parse_sales, ProductsResponse, SalesResponse};
