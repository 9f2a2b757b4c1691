//! Temperature converter value object

use crate::domain::{Direction, DomainError, DomainResult, RawValue};

/// `(t − 32) × 5/9`, unrounded.
pub fn fahrenheit_to_celsius(temperature: f64) -> f64 {
    (temperature - 32.0) * (5.0 / 9.0)
}

/// `(t × 9/5) + 32`, unrounded.
pub fn celsius_to_fahrenheit(temperature: f64) -> f64 {
    (temperature * (9.0 / 5.0)) + 32.0
}

/// Holds an optional temperature and converts it between Celsius and Fahrenheit.
///
/// Construction keeps only numeric input; `set_temperature` stores anything.
/// Either way the held value is checked again on every conversion, so a
/// non-numeric value can never produce a result: it yields
/// [`DomainError::InvalidInput`] instead.
///
/// No physical range is enforced; values below absolute zero convert normally.
/// A result that overflows `f64` is reported as invalid input, never as `inf`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureConverter {
    temperature: Option<RawValue>,
}

impl TemperatureConverter {
    /// Create a converter without a temperature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter from an initial value.
    ///
    /// Non-numeric input is discarded and leaves the converter empty.
    pub fn with_value(value: impl Into<RawValue>) -> Self {
        let value = value.into();
        let temperature = if !value.is_null() && value.is_numeric() {
            Some(value)
        } else {
            None
        };
        Self { temperature }
    }

    /// Replace the held value. No validation happens here.
    pub fn set_temperature(&mut self, value: impl Into<RawValue>) {
        self.temperature = Some(value.into());
    }

    /// The held temperature, if it is present and numeric.
    pub fn temperature(&self) -> Option<f64> {
        self.temperature.as_ref().and_then(RawValue::as_number)
    }

    pub fn is_valid(&self) -> bool {
        self.temperature().is_some()
    }

    /// Read the held value as Fahrenheit and convert it to Celsius.
    pub fn convert_to_celsius(&self) -> DomainResult<f64> {
        self.read().map(fahrenheit_to_celsius).and_then(finite)
    }

    /// Read the held value as Celsius and convert it to Fahrenheit.
    pub fn convert_to_fahrenheit(&self) -> DomainResult<f64> {
        self.read().map(celsius_to_fahrenheit).and_then(finite)
    }

    /// Run whichever conversion matches `direction`.
    pub fn convert(&self, direction: Direction) -> DomainResult<f64> {
        match direction {
            Direction::ToFahrenheit => self.convert_to_fahrenheit(),
            Direction::ToCelsius => self.convert_to_celsius(),
        }
    }

    fn read(&self) -> DomainResult<f64> {
        self.temperature().ok_or(DomainError::InvalidInput)
    }
}

fn finite(value: f64) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::InvalidInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn given_empty_converter_when_converting_then_invalid_input() {
        let converter = TemperatureConverter::new();

        assert_eq!(converter.convert_to_celsius(), Err(DomainError::InvalidInput));
        assert_eq!(converter.convert_to_fahrenheit(), Err(DomainError::InvalidInput));
        assert!(!converter.is_valid());
    }

    #[test]
    fn given_integer_when_converting_then_applies_formulas() {
        let converter = TemperatureConverter::with_value(3);

        assert_abs_diff_eq!(converter.convert_to_celsius().unwrap(), -16.111_111_111, epsilon = 1e-9);
        assert_abs_diff_eq!(converter.convert_to_fahrenheit().unwrap(), 37.4, epsilon = 1e-9);
    }

    #[test]
    fn given_setter_after_invalid_construction_when_converting_then_recovers() {
        let mut converter = TemperatureConverter::with_value("LOL");
        assert!(!converter.is_valid());

        converter.set_temperature(25);

        assert_eq!(converter.temperature(), Some(25.0));
        assert_abs_diff_eq!(converter.convert(Direction::ToFahrenheit).unwrap(), 77.0, epsilon = 1e-9);
    }

    #[test]
    fn given_null_when_constructing_then_stays_empty() {
        let converter = TemperatureConverter::with_value(RawValue::Null);
        assert_eq!(converter, TemperatureConverter::new());
    }
}
