pub mod aggregate;

pub use aggregate::{ErpConnection, ErpConnectionId, ErpSystem};
