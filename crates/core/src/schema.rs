//! Payload schemas for categories and products.
//!
//! Field names are the JSON keys accepted by the HTTP API.

use crate::validation::{Constraint, FieldKind, FieldSchema, Rule};

pub const CATEGORY_NAME_LEN: (usize, usize) = (2, 50);
pub const CATEGORY_DESCRIPTION_LEN: (usize, usize) = (10, 255);
pub const PRODUCT_NAME_LEN: (usize, usize) = (2, 100);
pub const PRODUCT_DESCRIPTION_LEN: (usize, usize) = (10, 500);
pub const PRODUCT_MIN_PRICE: f64 = 0.01;
/// Largest value a `NUMERIC(10,2)` column holds.
pub const PRODUCT_MAX_PRICE: f64 = 99_999_999.99;
pub const PRODUCT_MIN_QUANTITY: f64 = 1.0;
/// Quantities are stored as `INTEGER`.
pub const PRODUCT_MAX_QUANTITY: f64 = i32::MAX as f64;

/// Number of fractional digits stored for product prices.
pub const PRICE_SCALE: u32 = 2;

pub const CATEGORY_SCHEMA: &[FieldSchema] = &[
    FieldSchema {
        field: "nome",
        kind: FieldKind::String,
        rules: &[
            Rule::new(Constraint::Required, "Category name is required"),
            Rule::new(
                Constraint::Length {
                    min: CATEGORY_NAME_LEN.0,
                    max: CATEGORY_NAME_LEN.1,
                },
                "Category name must be between 2 and 50 characters",
            ),
        ],
    },
    FieldSchema {
        field: "descricao",
        kind: FieldKind::String,
        rules: &[
            Rule::new(Constraint::Required, "Category description is required"),
            Rule::new(
                Constraint::Length {
                    min: CATEGORY_DESCRIPTION_LEN.0,
                    max: CATEGORY_DESCRIPTION_LEN.1,
                },
                "Category description must be between 10 and 255 characters",
            ),
        ],
    },
];

pub const PRODUCT_SCHEMA: &[FieldSchema] = &[
    FieldSchema {
        field: "nome",
        kind: FieldKind::String,
        rules: &[
            Rule::new(Constraint::Required, "Product name is required"),
            Rule::new(
                Constraint::Length {
                    min: PRODUCT_NAME_LEN.0,
                    max: PRODUCT_NAME_LEN.1,
                },
                "Product name must be between 2 and 100 characters",
            ),
        ],
    },
    FieldSchema {
        field: "descricao",
        kind: FieldKind::String,
        rules: &[
            Rule::new(Constraint::Required, "Product description is required"),
            Rule::new(
                Constraint::Length {
                    min: PRODUCT_DESCRIPTION_LEN.0,
                    max: PRODUCT_DESCRIPTION_LEN.1,
                },
                "Product description must be between 10 and 500 characters",
            ),
        ],
    },
    FieldSchema {
        field: "preco",
        kind: FieldKind::Number,
        rules: &[
            Rule::new(Constraint::Required, "Price is required"),
            Rule::new(Constraint::Positive, "Price must be positive"),
            Rule::new(Constraint::Min(PRODUCT_MIN_PRICE), "Minimum price is 0.01"),
            Rule::new(
                Constraint::Max(PRODUCT_MAX_PRICE),
                "Maximum price is 99999999.99",
            ),
        ],
    },
    FieldSchema {
        field: "quantidade",
        kind: FieldKind::Integer,
        rules: &[
            Rule::new(Constraint::Required, "Quantity is required"),
            Rule::new(Constraint::Positive, "Quantity must be positive"),
            Rule::new(Constraint::Min(PRODUCT_MIN_QUANTITY), "Minimum quantity is 1"),
            Rule::new(
                Constraint::Max(PRODUCT_MAX_QUANTITY),
                "Maximum quantity is 2147483647",
            ),
        ],
    },
    FieldSchema {
        field: "categoriaId",
        kind: FieldKind::Integer,
        rules: &[Rule::new(Constraint::Required, "Category id is required")],
    },
];
