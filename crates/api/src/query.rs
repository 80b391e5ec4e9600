//! Query parameter types for API handlers.

use serde::Deserialize;

/// `GET /categorias/buscar/nome?nome=`
#[derive(Debug, Deserialize)]
pub struct CategoryNameParams {
    pub nome: Option<String>,
}

/// `GET /produtos/buscar?tipo=&valor=`
#[derive(Debug, Deserialize)]
pub struct ProductSearchParams {
    pub tipo: Option<String>,
    pub valor: Option<String>,
}

/// Treat an empty query value the same as an absent one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
