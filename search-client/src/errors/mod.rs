//! Error types for the search client.

mod client_error;

pub use client_error::Error;
