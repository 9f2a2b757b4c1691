//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic on behalf of the web form and the CLI.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
