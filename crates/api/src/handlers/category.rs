//! Handlers for the `/categorias` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use inventario_core::error::CoreError;
use inventario_core::schema::CATEGORY_SCHEMA;
use inventario_core::types::DbId;
use inventario_core::validation::Mode;
use inventario_db::models::category::{Category, CreateCategory, UpdateCategory};
use inventario_db::repositories::{CategoryRepo, ProductRepo};
use inventario_db::DbPool;

use super::{ensure_valid, from_payload};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::{non_empty, CategoryNameParams};
use crate::state::AppState;

/// Load a category or fail with 404. Shared with the product handlers.
pub(crate) async fn find_category(pool: &DbPool, id: DbId) -> AppResult<Category> {
    CategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
}

/// POST /categorias
pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<Category>)> {
    ensure_valid(CATEGORY_SCHEMA, &payload, Mode::Create)?;
    let input: CreateCategory = from_payload(payload)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categorias
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /categorias/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = find_category(&state.pool, id).await?;
    Ok(Json(category))
}

/// PUT /categorias/{id}
///
/// Fields omitted from the body keep their current values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<Json<Category>> {
    find_category(&state.pool, id).await?;

    ensure_valid(CATEGORY_SCHEMA, &payload, Mode::Update)?;
    let input: UpdateCategory = from_payload(payload)?;

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /categorias/{id}
///
/// Refused with 400 while any product still references the category.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let category = find_category(&state.pool, id).await?;

    let dependents = ProductRepo::list_ids_by_category(&state.pool, id).await?;
    if !dependents.is_empty() {
        tracing::warn!(
            category_id = id,
            product_count = dependents.len(),
            "Refusing to delete category with linked products",
        );
        return Err(AppError::Core(CoreError::DeleteRestricted {
            entity: "Category",
            dependents: "produtos",
            ids: dependents,
        }));
    }

    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(category_id = id, name = %category.name, "Category deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}

/// GET /categorias/buscar/nome?nome=
///
/// Exact, case-sensitive name match.
pub async fn find_by_name(
    State(state): State<AppState>,
    Query(params): Query<CategoryNameParams>,
) -> AppResult<Json<Vec<Category>>> {
    let name = non_empty(params.nome)
        .ok_or_else(|| AppError::BadRequest("Query parameter \"nome\" is required".into()))?;

    let categories = CategoryRepo::find_by_name(&state.pool, &name).await?;
    Ok(Json(categories))
}
