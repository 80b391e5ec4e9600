//! HTTP handlers, one module per resource.

pub mod category;
pub mod product;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use inventario_core::error::CoreError;
use inventario_core::validation::{validate, FieldSchema, Mode};

use crate::error::{AppError, AppResult};

/// Run `schema` over a raw JSON body, failing with every violation found.
fn ensure_valid(schema: &[FieldSchema], payload: &Map<String, Value>, mode: Mode) -> AppResult<()> {
    let violations = validate(schema, payload, mode);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::InvalidFields(violations)))
    }
}

/// Convert an already validated JSON body into a typed DTO.
fn from_payload<T: DeserializeOwned>(payload: Map<String, Value>) -> AppResult<T> {
    serde_json::from_value(Value::Object(payload))
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}
