//! Domain layer: the temperature value object and its input model
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod converter;
pub mod error;
pub mod scale;
pub mod value;

pub use converter::{celsius_to_fahrenheit, fahrenheit_to_celsius, TemperatureConverter};
pub use error::{DomainError, DomainResult};
pub use scale::{Direction, Scale};
pub use value::RawValue;
