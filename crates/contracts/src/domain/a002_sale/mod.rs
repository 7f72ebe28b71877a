pub mod aggregate;

pub use aggregate::{ClientRef, Sale, SaleFinancials, SaleId, SaleLine};
