//! Conversion service
//!
//! Turns one user request (raw temperature + direction) into a `Conversion`
//! the presentation layers can display.

use std::fmt;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Direction, DomainResult, RawValue, TemperatureConverter};

/// Text shown in place of a result when the temperature was not a number.
pub const INVALID_RESULT_TEXT: &str = "invalid input";

/// A single conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub input: RawValue,
    pub direction: Direction,
}

impl ConversionRequest {
    pub fn new(input: impl Into<RawValue>, direction: Direction) -> Self {
        Self {
            input: input.into(),
            direction,
        }
    }

    /// Build a request from submitted form fields.
    ///
    /// A missing temperature field becomes `RawValue::Null` and converts to
    /// invalid input. A missing or unknown direction is rejected.
    pub fn from_form(temp: Option<&str>, direction: Option<&str>) -> ApplicationResult<Self> {
        let direction = direction
            .ok_or_else(|| ApplicationError::InvalidRequest("no conversion selected".into()))?
            .parse::<Direction>()
            .map_err(|e| ApplicationError::InvalidRequest(e.to_string()))?;
        Ok(Self::new(temp, direction))
    }
}

/// Outcome of a conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: RawValue,
    pub direction: Direction,
    pub result: DomainResult<f64>,
}

impl Conversion {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    /// The converted temperature, with invalid input lifted to an application error.
    pub fn value(&self) -> ApplicationResult<f64> {
        self.result.map_err(ApplicationError::from)
    }

    /// Heading text: `<input>°<from> ⇔ <result>°<to>`.
    pub fn summary(&self) -> String {
        let result = match self.result {
            Ok(value) => format!("{}°{}", value, self.direction.to_scale().symbol()),
            Err(_) => INVALID_RESULT_TEXT.to_string(),
        };
        format!(
            "{}°{} ⇔ {}",
            self.input,
            self.direction.from_scale().symbol(),
            result
        )
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Service for converting temperatures.
///
/// Every call builds its own `TemperatureConverter`, so a single service can
/// be shared across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ConversionService;

impl ConversionService {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self), fields(direction = ?request.direction))]
    pub fn convert(&self, request: &ConversionRequest) -> Conversion {
        let converter = TemperatureConverter::with_value(request.input.clone());
        let result = converter.convert(request.direction);
        match result {
            Ok(value) => debug!("converted {} -> {}", request.input, value),
            Err(ref e) => debug!("rejected {:?}: {}", request.input, e),
        }
        Conversion {
            input: request.input.clone(),
            direction: request.direction,
            result,
        }
    }
}
