//! Numeric path identifier extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ApiError;

/// A record identifier taken from the `:id` path segment.
///
/// Anything that is not a whole decimal number, including trailing garbage
/// such as `12abc`, is rejected with 400 "Invalid ID format".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i64);

impl EntityId {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        raw.parse::<i64>()
            .map(EntityId)
            .map_err(|_| ApiError::validation("Invalid ID format"))
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        EntityId::parse(&raw)
    }
}
