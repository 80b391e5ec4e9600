//! Handlers for the `/produtos` resource.
//!
//! Every product response embeds its resolved `categoria`. Writes that carry
//! a `categoriaId` check that the category exists before touching the row.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};
use inventario_core::error::CoreError;
use inventario_core::schema::PRODUCT_SCHEMA;
use inventario_core::search::ProductSearch;
use inventario_core::types::DbId;
use inventario_core::validation::Mode;
use inventario_db::models::product::{CreateProduct, Product, UpdateProduct};
use inventario_db::repositories::ProductRepo;
use inventario_db::DbPool;

use super::category::find_category;
use super::{ensure_valid, from_payload};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::{non_empty, ProductSearchParams};
use crate::state::AppState;

const CATEGORY_ID_FIELD: &str = "categoriaId";

async fn find_product(pool: &DbPool, id: DbId) -> AppResult<Product> {
    ProductRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
}

/// The `categoriaId` of a raw body when it is a well-formed integer.
///
/// Anything else is left for schema validation to report.
fn requested_category(payload: &Map<String, Value>) -> Option<DbId> {
    payload.get(CATEGORY_ID_FIELD).and_then(Value::as_i64)
}

/// POST /produtos
pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<Product>)> {
    if let Some(category_id) = requested_category(&payload) {
        find_category(&state.pool, category_id).await?;
    }

    ensure_valid(PRODUCT_SCHEMA, &payload, Mode::Create)?;
    let input: CreateProduct = from_payload(payload)?;

    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(
        product_id = product.id,
        category_id = product.category_id,
        name = %product.name,
        "Product created",
    );

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /produtos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /produtos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = find_product(&state.pool, id).await?;
    Ok(Json(product))
}

/// PUT /produtos/{id}
///
/// A new `categoriaId` is resolved first; if it does not exist the product is
/// left untouched. Other omitted fields keep their current values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<Json<Product>> {
    let existing = find_product(&state.pool, id).await?;

    if let Some(category_id) = requested_category(&payload) {
        find_category(&state.pool, category_id).await?;
    }

    ensure_valid(PRODUCT_SCHEMA, &payload, Mode::Update)?;
    let input: UpdateProduct = from_payload(payload)?;

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    tracing::info!(
        product_id = id,
        from_category = existing.category_id,
        to_category = product.category_id,
        "Product updated",
    );

    Ok(Json(product))
}

/// DELETE /produtos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(product_id = id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}

/// GET /produtos/buscar?tipo=&valor=
///
/// `tipo=id` answers with a single product; `nome` and `categoria` answer
/// with a (possibly empty) list.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<ProductSearchParams>,
) -> AppResult<Response> {
    let (Some(mode), Some(value)) = (non_empty(params.tipo), non_empty(params.valor)) else {
        return Err(AppError::BadRequest(
            "Query parameters \"tipo\" and \"valor\" are required".into(),
        ));
    };

    let response = match ProductSearch::parse(&mode, &value)? {
        ProductSearch::ById(id) => Json(find_product(&state.pool, id).await?).into_response(),
        ProductSearch::ByName(name) => {
            Json(ProductRepo::find_by_name(&state.pool, &name).await?).into_response()
        }
        ProductSearch::ByCategoryName(name) => {
            Json(ProductRepo::find_by_category_name(&state.pool, &name).await?).into_response()
        }
    };

    Ok(response)
}
