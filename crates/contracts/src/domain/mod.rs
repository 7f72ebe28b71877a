pub mod common;

pub mod a001_product;
pub mod a002_sale;
pub mod a003_sales_channel;
pub mod a004_payment_method;
pub mod a005_supplier;
pub mod a006_warehouse;
pub mod a007_erp_connection;
