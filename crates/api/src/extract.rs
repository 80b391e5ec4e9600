//! Request extractors whose rejections are rendered as [`AppError`]s.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections become JSON 400 responses instead of axum's
/// plain-text 4xx bodies.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
