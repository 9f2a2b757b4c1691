//! tempconv: convert temperatures between Fahrenheit and Celsius.
//!
//! The core is [`domain::TemperatureConverter`], a small value object that
//! holds an optional temperature and exposes two pure conversions. The web
//! form ([`infrastructure::web`]) and the CLI ([`cli`]) are thin shells that
//! build one converter per request and display the result or the
//! invalid-input indication.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{Direction, DomainError, RawValue, Scale, TemperatureConverter};
