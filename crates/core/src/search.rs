//! Product search modes (`GET /produtos/buscar?tipo=&valor=`).

use crate::error::CoreError;
use crate::types::DbId;

/// A parsed product search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSearch {
    /// `tipo=id`: a single product by primary key.
    ById(DbId),
    /// `tipo=nome`: products whose name matches exactly.
    ByName(String),
    /// `tipo=categoria`: products whose category name matches exactly.
    ByCategoryName(String),
}

impl ProductSearch {
    /// Parse the `tipo` / `valor` pair.
    ///
    /// Both values are expected to be present and non-empty; checking that is
    /// left to the caller.
    pub fn parse(mode: &str, value: &str) -> Result<Self, CoreError> {
        match mode {
            "id" => value
                .trim()
                .parse::<DbId>()
                .map(Self::ById)
                .map_err(|_| CoreError::Validation(format!("'{value}' is not a valid product id"))),
            "nome" => Ok(Self::ByName(value.to_string())),
            "categoria" => Ok(Self::ByCategoryName(value.to_string())),
            other => Err(CoreError::InvalidSearchMode(other.to_string())),
        }
    }
}
