//! Input validation for the project form.
//!
//! A [`Validatable`] pairs a value with an optional set of [`Constraints`].
//! Constraints that do not apply to the value's kind are ignored: length
//! bounds only look at text, numeric bounds only look at numbers.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A value submitted for validation
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    /// Converts raw field text to a number like a browser's unary plus:
    /// blank text is `0`, `0x`/`0o`/`0b` prefixes select a radix,
    /// `Infinity` is spelled out, and anything else unparseable is NaN.
    pub fn coerce_number(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Number(0.0);
        }
        Self::Number(parse_number_literal(trimmed).unwrap_or(f64::NAN))
    }

    /// Text form used by the `required` check
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

fn parse_number_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        // Unsigned digits only, as in the browser
        let digits = &text[2..];
        if digits.starts_with('+') {
            return None;
        }
        return u128::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        let sign = if text.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }
    // Rust also accepts "inf" and "nan", which the browser does not
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok()
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Optional constraints applied to a value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Constraints {
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// A value together with the constraints it must satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub constraints: Constraints,
}

impl Validatable {
    pub fn new(value: impl Into<Value>, constraints: Constraints) -> Self {
        Self {
            value: value.into(),
            constraints,
        }
    }
}

/// Returns true iff every applicable constraint holds
///
/// `required` compares the trimmed text form of the value, so a number is
/// never missing (`0` renders as `"0"`). Text length is counted in UTF-16
/// code units, matching browser string length. NaN fails any numeric bound.
pub fn validate(input: &Validatable) -> bool {
    let c = &input.constraints;

    if c.required && input.value.as_text().trim().is_empty() {
        return false;
    }

    match &input.value {
        Value::Text(text) => {
            let len = text.encode_utf16().count();
            if c.min_length.is_some_and(|min| len < min) {
                return false;
            }
            if c.max_length.is_some_and(|max| len > max) {
                return false;
            }
        }
        Value::Number(n) => {
            if c.min.is_some_and(|min| n.is_nan() || *n < min) {
                return false;
            }
            if c.max.is_some_and(|max| n.is_nan() || *n > max) {
                return false;
            }
        }
    }

    true
}
