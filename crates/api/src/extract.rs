//! Request extractors whose rejections use the API error envelope.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies. These
//! wrappers route the rejection through [`AppError`] so a malformed body or
//! path segment answers `400 { "error", "code": "VALIDATION_ERROR" }`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
///
/// ```ignore
/// async fn create(AppJson(input): AppJson<CreateProject>) -> AppResult<...>
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
