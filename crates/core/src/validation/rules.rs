//! Schema and violation types consumed by the evaluator.

use serde::{Deserialize, Serialize};

/// Expected JSON type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Any JSON number (integer or fractional).
    Number,
    /// A JSON number without a fractional part that fits in an `i64`.
    Integer,
}

impl FieldKind {
    pub fn matches(self, value: &serde_json::Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Integer => value.is_i64(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Number => "a number",
            FieldKind::Integer => "an integer",
        }
    }
}

/// A single constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Present, not `null`, not an empty string.
    Required,
    /// String length in characters, inclusive on both ends.
    Length { min: usize, max: usize },
    /// Strictly greater than zero.
    Positive,
    /// Greater than or equal to the bound.
    Min(f64),
    /// Less than or equal to the bound.
    Max(f64),
}

impl Constraint {
    /// Stable identifier reported in [`FieldViolation::rule`].
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::Length { .. } => "length",
            Constraint::Positive => "positive",
            Constraint::Min(_) => "min",
            Constraint::Max(_) => "max",
        }
    }
}

/// A constraint paired with the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub constraint: Constraint,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(constraint: Constraint, message: &'static str) -> Self {
        Self {
            constraint,
            message,
        }
    }
}

/// Declarative description of one payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// JSON key of the field.
    pub field: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
}

impl FieldSchema {
    /// The `Required` rule of this field, if any.
    pub fn required_rule(&self) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|r| r.constraint == Constraint::Required)
    }

    pub(crate) fn type_message(&self) -> String {
        format!("{} must be {}", self.field, self.kind.describe())
    }
}

/// Whether absent fields are an error (create) or left untouched (update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}
