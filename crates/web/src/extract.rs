//! Request extractors whose rejections go through [`WebError`], so malformed
//! bodies, path segments and query strings answer with the usual JSON error
//! body instead of axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::WebError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(WebError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(WebError))]
pub struct ApiQuery<T>(pub T);
