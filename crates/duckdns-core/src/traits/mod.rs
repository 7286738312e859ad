//! Core traits for the DuckDNS client
//!
//! - [`UpdateTransport`]: Send one update GET and return the response body

pub mod transport;

pub use transport::UpdateTransport;
