//! A2A protocol server for the dairy math extraction agent.
//!
//! Serves the Agent Card at the well-known discovery paths and answers
//! JSON-RPC extraction requests at the root endpoint. The extraction
//! backend is pluggable via the [`Extractor`] trait; a schema-valid
//! placeholder implementation ships for controller smoke tests.

pub mod a2a;
pub mod agent;
pub mod config;
pub mod error;
pub mod rest;

pub use agent::{Extractor, PlaceholderExtractor, UnconfiguredExtractor};
pub use config::{SecurityConfig, ServerConfig};
pub use error::ServerError;
pub use rest::create_app;
