//! Temperature scales and conversion directions

use std::fmt;
use std::str::FromStr;

/// A temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

impl Scale {
    /// Unit symbol shown after the degree sign.
    pub fn symbol(self) -> char {
        match self {
            Scale::Celsius => 'C',
            Scale::Fahrenheit => 'F',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which way a conversion goes.
///
/// The web form encodes this as a radio value: `1` converts Celsius to
/// Fahrenheit, `2` converts Fahrenheit to Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToFahrenheit,
    ToCelsius,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::ToFahrenheit, Direction::ToCelsius];

    pub fn from_scale(self) -> Scale {
        match self {
            Direction::ToFahrenheit => Scale::Celsius,
            Direction::ToCelsius => Scale::Fahrenheit,
        }
    }

    pub fn to_scale(self) -> Scale {
        match self {
            Direction::ToFahrenheit => Scale::Fahrenheit,
            Direction::ToCelsius => Scale::Celsius,
        }
    }

    /// Radio button value used by the form.
    pub fn form_value(self) -> &'static str {
        match self {
            Direction::ToFahrenheit => "1",
            Direction::ToCelsius => "2",
        }
    }

    /// Label shown next to the radio button, e.g. "Celsius to Fahrenheit".
    pub fn label(self) -> String {
        format!("{} to {}", self.from_scale(), self.to_scale())
    }
}

/// Error for a direction selector that is neither a form value nor a known name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown conversion direction: '{}'", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "f" | "fahrenheit" | "to-fahrenheit" | "ctof" => Ok(Direction::ToFahrenheit),
            "2" | "c" | "celsius" | "to-celsius" | "ftoc" => Ok(Direction::ToCelsius),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
