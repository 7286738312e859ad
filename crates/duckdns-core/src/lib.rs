// # duckdns-core
//
// Core library for the DuckDNS update client.
//
// ## Architecture Overview
//
// One invocation performs exactly one resolution pass and one update pass:
// - **RequestSource**: A layer of configuration (arguments, environment, file)
// - **Resolver**: Applies sources in precedence order until the request is valid
// - **UpdateTransport**: Trait for the "send GET, read body" capability
// - **UpdateExecutor**: Updates every resolved name, stopping at the first failure
//
// ## Design Principles
//
// 1. **First value wins**: A lower-precedence source never overwrites a field
// 2. **Pure layering**: Sources take a partial request and return a new one
// 3. **No hidden exits**: Every failure is a typed `Error` for the caller to map
// 4. **Library-First**: The binary is a thin layer over this crate

pub mod config;
pub mod error;
pub mod executor;
pub mod resolver;
pub mod traits;

// Re-export core types for convenience
pub use config::UpdateRequest;
pub use error::{Error, Result, UpdateFailure};
pub use executor::UpdateExecutor;
pub use resolver::{Arguments, ConfigFile, Environment, RequestSource, Resolver};
pub use traits::UpdateTransport;
