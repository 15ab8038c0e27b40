//! Abstract interfaces used by the client.

mod transport;

pub use transport::{Method, Transport};
