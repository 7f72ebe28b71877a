pub mod aggregate;

pub use aggregate::{ChannelKind, SalesChannel, SalesChannelId};
