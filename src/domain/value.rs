//! Untyped input values
//!
//! Temperatures arrive from the outside world as loosely typed data: form
//! fields, command line arguments, or whatever a caller hands to the setter.
//! `RawValue` keeps that value as-is and answers one question about it:
//! can it be read as a number?

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Decimal numeric string: optional surrounding whitespace, sign, digits with an
/// optional fraction (or a bare `.5`), optional exponent.
static NUMERIC_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .expect("numeric text pattern is valid")
});

/// A value of unknown type, as handed over by a caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<RawValue>),
}

impl RawValue {
    /// Interpret the value as a finite number.
    ///
    /// Integers, finite floats and decimal numeric strings (`"3"`, `" -1.5e2"`)
    /// are numeric. Null, booleans, lists, non-finite floats and any other text
    /// are not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Int(i) => Some(*i as f64),
            RawValue::Float(f) if f.is_finite() => Some(*f),
            RawValue::Text(s) => parse_numeric_text(s),
            RawValue::Float(_) | RawValue::Null | RawValue::Bool(_) | RawValue::List(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

fn parse_numeric_text(s: &str) -> Option<f64> {
    if !NUMERIC_TEXT.is_match(s) {
        return None;
    }
    s.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B')
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => Ok(()),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Int(i) => write!(f, "{}", i),
            RawValue::Float(x) => write!(f, "{}", x),
            RawValue::Text(s) => f.write_str(s),
            RawValue::List(items) => write!(f, "[{} items]", items.len()),
        }
    }
}

macro_rules! raw_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for RawValue {
            fn from(v: $t) -> Self {
                RawValue::Int(i64::from(v))
            }
        })*
    };
}

raw_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for RawValue {
    fn from(v: f32) -> Self {
        RawValue::Float(f64::from(v))
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(v: Vec<T>) -> Self {
        RawValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(RawValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", 3.0)]
    #[case("-40", -40.0)]
    #[case("+12", 12.0)]
    #[case("98.6", 98.6)]
    #[case(".5", 0.5)]
    #[case("5.", 5.0)]
    #[case("1e3", 1000.0)]
    #[case("-2.5E-1", -0.25)]
    #[case("5.e2", 500.0)]
    #[case("  7", 7.0)]
    #[case("7  ", 7.0)]
    #[case("\t\n12\n", 12.0)]
    fn given_numeric_text_when_reading_number_then_parses(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(RawValue::from(text).as_number(), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("LOL")]
    #[case("3 degrees")]
    #[case("0x1A")]
    #[case("0b101")]
    #[case("inf")]
    #[case("NaN")]
    #[case(".")]
    #[case("-")]
    #[case("1e")]
    #[case("1,5")]
    #[case("1e400")]
    fn given_non_numeric_text_when_reading_number_then_none(#[case] text: &str) {
        assert_eq!(RawValue::from(text).as_number(), None);
    }

    #[test]
    fn given_non_scalar_values_when_reading_number_then_none() {
        assert!(!RawValue::Null.is_numeric());
        assert!(!RawValue::Bool(true).is_numeric());
        assert!(!RawValue::from(Vec::<i64>::new()).is_numeric());
        assert!(!RawValue::from(vec![3]).is_numeric());
        assert!(!RawValue::Float(f64::NAN).is_numeric());
        assert!(!RawValue::Float(f64::INFINITY).is_numeric());
    }

    #[test]
    fn given_integers_and_floats_when_reading_number_then_some() {
        assert_eq!(RawValue::from(3).as_number(), Some(3.0));
        assert_eq!(RawValue::from(-459_i64).as_number(), Some(-459.0));
        assert_eq!(RawValue::from(36.6).as_number(), Some(36.6));
    }

    #[test]
    fn given_option_when_converting_then_none_is_null() {
        assert!(RawValue::from(None::<&str>).is_null());
        assert_eq!(RawValue::from(Some("3")), RawValue::Text("3".into()));
    }
}
