//! Infrastructure layer: web server and DI container
//!
//! This layer serves the form over HTTP and wires up services.

pub mod di;
pub mod error;
pub mod web;

pub use error::{InfraError, InfraResult};
