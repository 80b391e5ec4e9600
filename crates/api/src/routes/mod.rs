pub mod category;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categorias                      list, create
/// /categorias/{id}                 get, update, delete
/// /categorias/buscar/nome?nome=    exact name lookup
///
/// /produtos                        list, create
/// /produtos/{id}                   get, update, delete
/// /produtos/buscar?tipo=&valor=    search by id, nome or categoria
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categorias", category::router())
        .nest("/produtos", product::router())
}
