//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services are concrete structs, not traits.

mod conversion;

pub use conversion::{Conversion, ConversionRequest, ConversionService, INVALID_RESULT_TEXT};
