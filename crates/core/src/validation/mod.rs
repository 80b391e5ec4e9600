//! Field validation engine.
//!
//! Entities describe their payload shape as a static list of
//! [`FieldSchema`]s; [`validate`] interprets that list against a JSON object
//! and reports every broken constraint. Pure logic, no database access.

pub mod evaluator;
pub mod rules;

pub use evaluator::validate;
pub use rules::{Constraint, FieldKind, FieldSchema, FieldViolation, Mode, Rule};
