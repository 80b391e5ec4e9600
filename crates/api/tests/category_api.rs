//! HTTP-level integration tests for the `/categorias` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, post_json, post_raw, put_json, violated_fields};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/categorias",
        serde_json::json!({"nome": "Livros", "descricao": "Categoria de livros variados"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["nome"], "Livros");
    assert_eq!(json["descricao"], "Categoria de livros variados");
    assert!(json["dataCriacao"].is_string());
    assert!(json["dataAtualizacao"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_lists_violated_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/categorias",
        serde_json::json!({"nome": "L", "descricao": "curta"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(violated_fields(&json), vec!["descricao", "nome"]);

    // Nothing persisted.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/categorias").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_missing_description(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/categorias", serde_json::json!({"nome": "Livros"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(violated_fields(&json), vec!["descricao"]);
    assert_eq!(json["errors"][0]["rule"], "required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_object_body_is_a_json_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/categorias", serde_json::json!(["nope"])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());

    let app = common::build_test_app(pool);
    let response = post_raw(app, "/categorias", "{\"nome\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_round_trip_get_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/categorias",
            serde_json::json!({"nome": "Livros", "descricao": "Categoria de livros variados"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/categorias/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["nome"], "Livros");
    assert_eq!(json["descricao"], "Categoria de livros variados");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categorias/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_categories_in_insertion_order(pool: PgPool) {
    let first = common::create_category(&pool, "Alimentos").await;
    let second = common::create_category(&pool, "Bebidas").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/categorias").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_category_merges_fields(pool: PgPool) {
    let id = common::create_category(&pool, "Original").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/categorias/{id}"),
        serde_json::json!({"nome": "Renomeada"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["nome"], "Renomeada");
    assert_eq!(json["descricao"], "Categoria Original para testes");
    assert!(json["dataAtualizacao"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_category_rejects_invalid_field(pool: PgPool) {
    let id = common::create_category(&pool, "Original").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/categorias/{id}"),
        serde_json::json!({"descricao": "curta"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(violated_fields(&body_json(response).await), vec!["descricao"]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/categorias/{id}")).await).await;
    assert_eq!(json["descricao"], "Categoria Original para testes");
    assert!(json["dataAtualizacao"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/categorias/999999",
        serde_json::json!({"nome": "Qualquer"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_empty_category_returns_204(pool: PgPool) {
    let id = common::create_category(&pool, "Temporaria").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/categorias/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/categorias/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_category_with_products_is_refused(pool: PgPool) {
    let category_id = common::create_category(&pool, "Eletrônicos").await;
    let first = common::create_product(&pool, category_id, "Notebook").await;
    let second = common::create_product(&pool, category_id, "Celular").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/categorias/{category_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "DELETE_RESTRICTED");
    assert_eq!(json["produtos"], serde_json::json!([first["id"], second["id"]]));

    // Category and products are untouched.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/categorias/{category_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let products = body_json(get(app, "/produtos").await).await;
    assert_eq!(products.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/categorias/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Find by name
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_find_by_name_is_exact(pool: PgPool) {
    let livros = common::create_category(&pool, "Livros").await;
    common::create_category(&pool, "Livros Usados").await;
    common::create_category(&pool, "livros").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/categorias/buscar/nome?nome=Livros").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], livros);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_find_by_name_without_match_returns_empty_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categorias/buscar/nome?nome=Inexistente").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_find_by_name_requires_parameter(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/categorias/buscar/nome").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get(app, "/categorias/buscar/nome?nome=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
