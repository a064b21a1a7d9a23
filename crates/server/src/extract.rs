use axum::extract::FromRequest;

use crate::errors::JsonApiError;

/// `axum::Json` whose rejections render through `JsonApiError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct Json<T>(pub T);
