//! Extractors whose rejections go through [`ApiError`].

use super::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body extractor answering decode failures with the generic 400 body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor answering malformed parameters with the generic 400 body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
