use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a single form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// A single violated rule, as reported by [`Validatable::violations`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::MinLength(n) => write!(f, "must be at least {} characters", n),
            Self::MaxLength(n) => write!(f, "must be at most {} characters", n),
            Self::Min(n) => write!(f, "must be at least {}", n),
            Self::Max(n) => write!(f, "must be at most {}", n),
        }
    }
}

/// A field value together with the constraints it must satisfy
///
/// Length constraints only apply to text values and numeric bounds only
/// apply to numbers; a constraint that does not apply is satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validatable {
    pub value: FieldValue,
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

impl Validatable {
    /// Creates an unconstrained validatable for the given value
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
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

    /// Lists every applicable constraint the value breaks, in declaration order
    pub fn violations(&self) -> Vec<Constraint> {
        let mut violated = Vec::new();

        if self.required && self.value.to_string().trim().is_empty() {
            violated.push(Constraint::Required);
        }

        match &self.value {
            FieldValue::Text(text) => {
                let len = text.chars().count();
                if let Some(min_length) = self.min_length {
                    if len < min_length {
                        violated.push(Constraint::MinLength(min_length));
                    }
                }
                if let Some(max_length) = self.max_length {
                    if len > max_length {
                        violated.push(Constraint::MaxLength(max_length));
                    }
                }
            }
            FieldValue::Number(n) => {
                // NaN compares false against both bounds, so it never passes them
                if let Some(min) = self.min {
                    if !(*n >= min) {
                        violated.push(Constraint::Min(min));
                    }
                }
                if let Some(max) = self.max {
                    if !(*n <= max) {
                        violated.push(Constraint::Max(max));
                    }
                }
            }
        }

        violated
    }

    /// Returns true when every applicable constraint holds
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

/// Human-readable list of violations, e.g. for log lines
pub fn describe_violations(violations: &[Constraint]) -> String {
    violations
        .iter()
        .map(Constraint::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks a value against its constraints
pub fn validate(input: &Validatable) -> bool {
    input.is_valid()
}
