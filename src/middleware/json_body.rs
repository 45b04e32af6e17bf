use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::error::DeskError;

/// `Json<T>` whose rejections use the service's `{"error": ...}` body.
///
/// Syntax errors, wrong types and a missing `content-type` all become 400;
/// an oversized body keeps its 413.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = DeskError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(map_rejection(rejection)),
        }
    }
}

fn map_rejection(rejection: JsonRejection) -> DeskError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return DeskError::BodyTooLarge;
    }
    DeskError::MalformedBody(rejection.body_text())
}
