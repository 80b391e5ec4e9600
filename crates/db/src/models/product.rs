//! Product entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use inventario_core::types::{DbId, Timestamp};

use crate::models::category::Category;

/// A product with its owning category resolved.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco")]
    pub price: Decimal,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "categoriaId")]
    pub category_id: DbId,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "dataCriacao")]
    pub created_at: Timestamp,
    #[serde(rename = "dataAtualizacao")]
    pub updated_at: Option<Timestamp>,
}

/// Flat result of `products JOIN categories`; category columns are prefixed.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub category_name: String,
    pub category_description: String,
    pub category_created_at: Timestamp,
    pub category_updated_at: Option<Timestamp>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            quantity: row.quantity,
            category_id: row.category_id,
            category: Category {
                id: row.category_id,
                name: row.category_name,
                description: row.category_description,
                created_at: row.category_created_at,
                updated_at: row.category_updated_at,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco")]
    pub price: Decimal,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "categoriaId")]
    pub category_id: DbId,
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<Decimal>,
    #[serde(rename = "quantidade")]
    pub quantity: Option<i32>,
    #[serde(rename = "categoriaId")]
    pub category_id: Option<DbId>,
}
