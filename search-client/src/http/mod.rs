//! HTTP transport implementation over reqwest.

mod transport;

pub use transport::HttpTransport;
