//! Schema evaluator: pure logic, no database access.

use serde_json::{Map, Value};

use super::rules::{Constraint, FieldSchema, FieldViolation, Mode, Rule};

/// Evaluate `payload` against `schema`, returning every violation in schema order.
///
/// In [`Mode::Update`] fields missing from the payload are skipped, so a
/// partial body only has its provided fields checked.
pub fn validate(schema: &[FieldSchema], payload: &Map<String, Value>, mode: Mode) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    for field in schema {
        let value = payload.get(field.field);
        if value.is_none() && mode == Mode::Update {
            continue;
        }
        evaluate_field(field, value, &mut violations);
    }

    violations
}

fn evaluate_field(field: &FieldSchema, value: Option<&Value>, out: &mut Vec<FieldViolation>) {
    let value = match value {
        None | Some(Value::Null) => {
            if let Some(rule) = field.required_rule() {
                out.push(violation(field, rule));
            }
            return;
        }
        Some(Value::String(s)) if s.is_empty() && field.required_rule().is_some() => {
            if let Some(rule) = field.required_rule() {
                out.push(violation(field, rule));
            }
            return;
        }
        Some(v) => v,
    };

    // A mistyped value makes the remaining rules meaningless.
    if !field.kind.matches(value) {
        out.push(FieldViolation {
            field: field.field.to_string(),
            rule: "type".to_string(),
            message: field.type_message(),
        });
        return;
    }

    for rule in field.rules {
        if is_violated(&rule.constraint, value) {
            out.push(violation(field, rule));
        }
    }
}

fn is_violated(constraint: &Constraint, value: &Value) -> bool {
    match *constraint {
        Constraint::Required => false,
        Constraint::Length { min, max } => value
            .as_str()
            .map(|s| {
                let len = s.chars().count();
                len < min || len > max
            })
            .unwrap_or(false),
        Constraint::Positive => value.as_f64().map(|n| n <= 0.0).unwrap_or(false),
        Constraint::Min(min) => value.as_f64().map(|n| n < min).unwrap_or(false),
        Constraint::Max(max) => value.as_f64().map(|n| n > max).unwrap_or(false),
    }
}

fn violation(field: &FieldSchema, rule: &Rule) -> FieldViolation {
    FieldViolation {
        field: field.field.to_string(),
        rule: rule.constraint.name().to_string(),
        message: rule.message.to_string(),
    }
}
